//! SheetGenie - AI-assisted sheet setup wizard
//!
//! Drives a five-step workflow against the SheetGenie backend:
//! verify a sheet, generate column definitions from a natural-language
//! purpose, edit and push the columns, generate sample row data from a
//! prompt, preview and push the rows.
//!
//! All sheet access and AI generation happens in the backend; this crate
//! owns the wizard state machine, the JSON client, and the table
//! rendering. The interactive terminal front-end lives in the `genie`
//! binary.

/// Column definitions and the fixed type-tag enumeration
pub mod column;

/// Editable column-table model
pub mod editor;

/// Error types
pub mod error;

/// Row-data preview rendering
pub mod preview;

/// HTTP client for the SheetGenie backend
pub mod client;

/// Wizard steps and session state
pub mod session;

/// Wizard actions and the view binding
pub mod wizard;

pub use client::SheetClient;
pub use column::{Column, ColumnType};
pub use editor::ColumnEditor;
pub use error::GenieError;
pub use session::{WizardSession, WizardStep};
pub use wizard::{Operation, WizardController, WizardView};

/// A generated data record: one value per column title, in column order.
pub type Row = serde_json::Map<String, serde_json::Value>;
