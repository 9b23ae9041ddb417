//! `genie` - interactive SheetGenie wizard for the terminal.

mod flow;
mod view;

use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "genie", about = "SheetGenie - AI-assisted sheet setup wizard")]
struct Cli {
    /// SheetGenie backend base URL
    #[arg(
        long,
        env = "GENIE_BACKEND_URL",
        default_value = "http://localhost:5000"
    )]
    backend_url: String,
}

pub fn print_banner() {
    println!(
        "{}",
        style(
            r#"
   ██████╗ ███████╗███╗   ██╗██╗███████╗
  ██╔════╝ ██╔════╝████╗  ██║██║██╔════╝
  ██║  ███╗█████╗  ██╔██╗ ██║██║█████╗
  ██║   ██║██╔══╝  ██║╚██╗██║██║██╔══╝
  ╚██████╔╝███████╗██║ ╚████║██║███████╗
   ╚═════╝ ╚══════╝╚═╝  ╚═══╝╚═╝╚══════╝
"#
        )
        .cyan()
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never corrupt the prompts.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    flow::run(&cli.backend_url).await
}
