//! The interactive five-step flow.

use anyhow::Result;
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use sheetgenie::preview::preview;
use sheetgenie::{ColumnEditor, ColumnType, SheetClient, WizardController, WizardStep};

use crate::print_banner;
use crate::view::ConsoleView;

pub async fn run(backend_url: &str) -> Result<()> {
    let term = Term::stdout();
    term.clear_screen()?;

    print_banner();
    println!("{}", style("  SheetGenie Setup Wizard").cyan().bold());
    println!(
        "  {}",
        style("Verify a sheet, generate its columns and sample data, push both").dim()
    );
    println!("  {} {}", style("Backend:").dim(), backend_url);
    println!();

    let mut wizard = WizardController::new(SheetClient::new(backend_url), ConsoleView::new());

    // Step 1: verify the sheet
    print_step(WizardStep::VerifySheet);
    loop {
        let sheet_id: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("  Sheet ID")
            .allow_empty(true)
            .interact_text()?;

        if wizard.verify_sheet(&sheet_id).await {
            break;
        }
    }

    // Steps 2-3: generate columns, edit them, push them. "Regenerate"
    // rewinds to the purpose prompt without losing anything.
    'columns: loop {
        println!();
        print_step(WizardStep::DescribePurpose);
        loop {
            let purpose: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("  What is this sheet for?")
                .allow_empty(true)
                .interact_text()?;

            if wizard.generate_columns(&purpose).await {
                break;
            }
        }

        println!();
        print_step(WizardStep::EditColumns);
        let mut editor = ColumnEditor::from_columns(wizard.session().columns());

        loop {
            println!("{}", editor.render());
            println!();

            let actions = [
                "Edit a column",
                "Add empty column",
                "Delete a column",
                "Push columns to sheet",
                "Regenerate columns",
            ];
            let action = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("  Columns")
                .items(&actions)
                .default(3)
                .interact()?;

            match action {
                0 => edit_column(&mut editor)?,
                1 => editor.add_empty(),
                2 => delete_column(&mut editor)?,
                3 => {
                    if wizard.push_columns(&editor).await {
                        break 'columns;
                    }
                }
                _ => {
                    wizard.regenerate_columns();
                    continue 'columns;
                }
            }
        }
    }

    // Steps 4-5: generate data, preview it, push it.
    'data: loop {
        println!();
        print_step(WizardStep::DescribeData);
        loop {
            let prompt: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("  Describe the data to generate")
                .allow_empty(true)
                .interact_text()?;

            if wizard.generate_data(&prompt).await {
                break;
            }
        }

        println!();
        print_step(WizardStep::PreviewData);
        if let Some(preview) = preview(wizard.session().data()) {
            println!("{}", preview.table);
            println!(
                "  {} {}",
                style("Total rows generated:").dim(),
                style(preview.total_rows).bold()
            );
            println!();
        }

        let actions = ["Push data to sheet", "Regenerate data"];
        loop {
            let action = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("  Data")
                .items(&actions)
                .default(0)
                .interact()?;

            match action {
                0 => {
                    if wizard.push_data().await {
                        break 'data;
                    }
                    // Failed push: stay here so the user can retry.
                }
                _ => {
                    wizard.regenerate_data();
                    continue 'data;
                }
            }
        }
    }

    println!();
    println!(
        "  {} Sheet is set up. Open it to see the new columns and rows.",
        style("✓").green().bold()
    );
    println!();

    Ok(())
}

fn print_step(step: WizardStep) {
    println!(
        "  {}",
        style(format!(
            "Step {}/{}: {}",
            step.number(),
            WizardStep::total(),
            step.title()
        ))
        .bold()
    );
}

fn edit_column(editor: &mut ColumnEditor) -> Result<()> {
    let Some(index) = pick_row(editor, "  Which column?")? else {
        return Ok(());
    };
    let Some(current) = editor.row(index).cloned() else {
        return Ok(());
    };

    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("  Title")
        .default(current.title.clone())
        .allow_empty(true)
        .interact_text()?;

    let type_labels: Vec<&str> = ColumnType::ALL.iter().map(|t| t.as_str()).collect();
    let current_type = ColumnType::ALL
        .iter()
        .position(|t| *t == current.column_type)
        .unwrap_or(0);
    let selected = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("  Type")
        .items(&type_labels)
        .default(current_type)
        .interact()?;

    editor.set_title(index, title);
    editor.set_type(index, ColumnType::ALL[selected]);
    Ok(())
}

fn delete_column(editor: &mut ColumnEditor) -> Result<()> {
    if let Some(index) = pick_row(editor, "  Delete which column?")? {
        editor.remove(index);
    }
    Ok(())
}

fn pick_row(editor: &ColumnEditor, prompt: &str) -> Result<Option<usize>> {
    if editor.is_empty() {
        println!("  {}", style("No columns yet").yellow());
        return Ok(None);
    }

    let labels: Vec<String> = (0..editor.len())
        .filter_map(|i| editor.row(i))
        .map(|row| {
            let title = if row.title.is_empty() {
                "(untitled)"
            } else {
                row.title.as_str()
            };
            format!("{} [{}]", title, row.column_type)
        })
        .collect();

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Some(index))
}
