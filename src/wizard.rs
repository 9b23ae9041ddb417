//! Wizard actions and the view binding.
//!
//! Every button of the original wizard is one named action here, invoked
//! with the current session state. Output goes through [`WizardView`],
//! a slot-per-operation binding, so the whole flow can be driven and
//! inspected in tests without a terminal.

use tracing::info;

use crate::client::SheetClient;
use crate::editor::ColumnEditor;
use crate::error::GenieError;
use crate::session::WizardSession;

/// The five remote operations. Each doubles as the name of the result
/// slot and busy indicator the view keeps for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Verify,
    GenerateColumns,
    PushColumns,
    GenerateData,
    PushData,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Verify => "verify",
            Self::GenerateColumns => "generate columns",
            Self::PushColumns => "push columns",
            Self::GenerateData => "generate data",
            Self::PushData => "push data",
        }
    }
}

/// Output surface of the wizard: one result slot and one busy indicator
/// per operation.
pub trait WizardView {
    /// Clear any previously shown message in the operation's result slot.
    fn clear_result(&mut self, op: Operation);

    /// Show or hide the operation's busy indicator.
    fn busy(&mut self, op: Operation, on: bool);

    fn show_success(&mut self, op: Operation, message: &str);

    fn show_error(&mut self, op: Operation, message: &str);
}

/// Drives the five wizard actions against the backend, holding the
/// session state and reporting through the view.
pub struct WizardController<V> {
    client: SheetClient,
    session: WizardSession,
    view: V,
}

impl<V: WizardView> WizardController<V> {
    pub fn new(client: SheetClient, view: V) -> Self {
        Self {
            client,
            session: WizardSession::new(),
            view,
        }
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Step 1: verify the sheet id. Advances to step 2 on success and
    /// returns whether it did.
    pub async fn verify_sheet(&mut self, input: &str) -> bool {
        let sheet_id = input.trim().to_string();
        if let Err(err) = non_empty(&sheet_id, "Please enter a Sheet ID") {
            self.view.show_error(Operation::Verify, &error_text(&err));
            return false;
        }

        self.view.clear_result(Operation::Verify);
        self.view.busy(Operation::Verify, true);
        let result = self.client.verify_sheet(&sheet_id).await;
        self.view.busy(Operation::Verify, false);

        match result {
            Ok(name) => {
                info!(%sheet_id, sheet_name = %name, "sheet verified");
                self.view
                    .show_success(Operation::Verify, &format!("✅ Sheet verified: \"{name}\""));
                self.session.sheet_verified(sheet_id, name);
                true
            }
            Err(err) => {
                self.view.show_error(Operation::Verify, &error_text(&err));
                false
            }
        }
    }

    /// Step 2: generate columns from the sheet purpose. Advances to the
    /// column editor on success.
    pub async fn generate_columns(&mut self, purpose: &str) -> bool {
        let purpose = purpose.trim();
        let guarded = non_empty(purpose, "Please enter a sheet purpose")
            .and_then(|_| self.require_sheet_id().map(|_| ()));
        if let Err(err) = guarded {
            self.view
                .show_error(Operation::GenerateColumns, &error_text(&err));
            return false;
        }

        self.view.clear_result(Operation::GenerateColumns);
        self.view.busy(Operation::GenerateColumns, true);
        let result = self.client.generate_columns(purpose).await;
        self.view.busy(Operation::GenerateColumns, false);

        match result {
            Ok(columns) => {
                info!(count = columns.len(), "columns generated");
                self.session.columns_generated(columns);
                true
            }
            Err(err) => {
                self.view
                    .show_error(Operation::GenerateColumns, &error_text(&err));
                false
            }
        }
    }

    /// Step 3: push the edited columns. The column list is re-read from
    /// the editor's current rows first; that read-back is the only path
    /// by which manual edits reach the payload. Advances to the data
    /// prompt on success.
    pub async fn push_columns(&mut self, editor: &ColumnEditor) -> bool {
        self.session.set_columns(editor.columns());

        let guarded = if self.session.columns().is_empty() {
            Err(GenieError::guard("No columns to push"))
        } else {
            self.require_sheet_id().map(|_| ())
        };
        if let Err(err) = guarded {
            self.view
                .show_error(Operation::PushColumns, &error_text(&err));
            return false;
        }

        self.view.clear_result(Operation::PushColumns);
        self.view.busy(Operation::PushColumns, true);
        let sheet_id = self.session.sheet_id().unwrap_or_default().to_string();
        let result = self
            .client
            .push_columns(&sheet_id, self.session.columns())
            .await;
        self.view.busy(Operation::PushColumns, false);

        match result {
            Ok(message) => {
                info!(%sheet_id, "columns pushed");
                self.view
                    .show_success(Operation::PushColumns, &format!("✅ {message}"));
                self.session.advance();
                true
            }
            Err(err) => {
                self.view
                    .show_error(Operation::PushColumns, &error_text(&err));
                false
            }
        }
    }

    /// Step 4: generate sample rows from the data prompt. Advances to
    /// the preview on success.
    pub async fn generate_data(&mut self, prompt: &str) -> bool {
        let prompt = prompt.trim();
        let guarded = non_empty(prompt, "Please enter a data description")
            .and_then(|_| self.require_sheet_id().map(|_| ()))
            .and_then(|_| {
                if self.session.columns().is_empty() {
                    Err(GenieError::guard("Generate and push columns first"))
                } else {
                    Ok(())
                }
            });
        if let Err(err) = guarded {
            self.view
                .show_error(Operation::GenerateData, &error_text(&err));
            return false;
        }

        self.view.clear_result(Operation::GenerateData);
        self.view.busy(Operation::GenerateData, true);
        let sheet_id = self.session.sheet_id().unwrap_or_default().to_string();
        let result = self
            .client
            .generate_data(&sheet_id, self.session.columns(), prompt)
            .await;
        self.view.busy(Operation::GenerateData, false);

        match result {
            Ok(data) => {
                info!(rows = data.len(), "data generated");
                self.session.data_generated(data);
                true
            }
            Err(err) => {
                self.view
                    .show_error(Operation::GenerateData, &error_text(&err));
                false
            }
        }
    }

    /// Step 5: push the generated rows to the sheet.
    pub async fn push_data(&mut self) -> bool {
        let guarded = if self.session.data().is_empty() {
            Err(GenieError::guard("No data to push"))
        } else {
            self.require_sheet_id().map(|_| ())
        };
        if let Err(err) = guarded {
            self.view.show_error(Operation::PushData, &error_text(&err));
            return false;
        }

        self.view.clear_result(Operation::PushData);
        self.view.busy(Operation::PushData, true);
        let sheet_id = self.session.sheet_id().unwrap_or_default().to_string();
        let result = self.client.push_data(&sheet_id, self.session.data()).await;
        self.view.busy(Operation::PushData, false);

        match result {
            Ok(message) => {
                info!(%sheet_id, "data pushed");
                self.view
                    .show_success(Operation::PushData, &format!("✅ {message}"));
                true
            }
            Err(err) => {
                self.view.show_error(Operation::PushData, &error_text(&err));
                false
            }
        }
    }

    /// Rewind to the purpose prompt to regenerate columns; in-memory
    /// state is kept.
    pub fn regenerate_columns(&mut self) {
        self.session.regenerate_columns();
    }

    /// Rewind to the data prompt to regenerate rows; in-memory state is
    /// kept.
    pub fn regenerate_data(&mut self) {
        self.session.regenerate_data();
    }

    fn require_sheet_id(&self) -> Result<&str, GenieError> {
        self.session
            .sheet_id()
            .ok_or_else(|| GenieError::guard("Verify a sheet first"))
    }
}

fn non_empty(value: &str, message: &str) -> Result<(), GenieError> {
    if value.trim().is_empty() {
        Err(GenieError::guard(message))
    } else {
        Ok(())
    }
}

/// User-facing text for a failed operation. Guard failures show their
/// message as-is; anything that came back from an issued request is
/// prefixed the way the original UI did it.
fn error_text(err: &GenieError) -> String {
    match err {
        GenieError::Guard(msg) => msg.clone(),
        other => format!("❌ Error: {other}"),
    }
}
