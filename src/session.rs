//! Wizard steps and session state.

use crate::column::Column;
use crate::Row;

/// The five wizard steps, in order. Transitions are linear and forward;
/// the only way back is the one-step regenerate rewind on steps 3 and 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    VerifySheet,
    DescribePurpose,
    EditColumns,
    DescribeData,
    PreviewData,
}

impl WizardStep {
    pub fn title(&self) -> &'static str {
        match self {
            Self::VerifySheet => "Verify Sheet",
            Self::DescribePurpose => "Sheet Purpose",
            Self::EditColumns => "Edit Columns",
            Self::DescribeData => "Describe Data",
            Self::PreviewData => "Preview & Push",
        }
    }

    pub fn number(&self) -> usize {
        match self {
            Self::VerifySheet => 1,
            Self::DescribePurpose => 2,
            Self::EditColumns => 3,
            Self::DescribeData => 4,
            Self::PreviewData => 5,
        }
    }

    pub fn total() -> usize {
        5
    }

    fn next(&self) -> WizardStep {
        match self {
            Self::VerifySheet => Self::DescribePurpose,
            Self::DescribePurpose => Self::EditColumns,
            Self::EditColumns => Self::DescribeData,
            Self::DescribeData => Self::PreviewData,
            // Terminal step, no further automatic transition.
            Self::PreviewData => Self::PreviewData,
        }
    }
}

/// One wizard run's worth of state.
///
/// Lives for the duration of the process; values are set once per step
/// and read by later steps. The column list here can lag behind the
/// editor until the read-back pass right before a push.
#[derive(Debug)]
pub struct WizardSession {
    step: WizardStep,
    sheet_id: Option<String>,
    sheet_name: Option<String>,
    columns: Vec<Column>,
    data: Vec<Row>,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    pub fn new() -> Self {
        Self {
            step: WizardStep::VerifySheet,
            sheet_id: None,
            sheet_name: None,
            columns: Vec::new(),
            data: Vec::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn sheet_id(&self) -> Option<&str> {
        self.sheet_id.as_deref()
    }

    pub fn sheet_name(&self) -> Option<&str> {
        self.sheet_name.as_deref()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn data(&self) -> &[Row] {
        &self.data
    }

    /// Advance one step; saturates at the terminal step.
    pub fn advance(&mut self) {
        self.step = self.step.next();
    }

    /// Record a successful verification and move to step 2.
    pub fn sheet_verified(&mut self, sheet_id: String, sheet_name: String) {
        self.sheet_id = Some(sheet_id);
        self.sheet_name = Some(sheet_name);
        self.advance();
    }

    /// Store generated columns and move to the editing step.
    pub fn columns_generated(&mut self, columns: Vec<Column>) {
        self.columns = columns;
        self.advance();
    }

    /// Replace the column list with the editor's read-back result.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    /// Store generated rows and move to the preview step.
    pub fn data_generated(&mut self, data: Vec<Row>) {
        self.data = data;
        self.advance();
    }

    /// Rewind from column editing to the purpose prompt. Keeps the
    /// current columns in memory; only the visible step changes.
    pub fn regenerate_columns(&mut self) {
        if self.step == WizardStep::EditColumns {
            self.step = WizardStep::DescribePurpose;
        }
    }

    /// Rewind from the data preview to the data prompt. Keeps the
    /// current rows in memory.
    pub fn regenerate_data(&mut self) {
        if self.step == WizardStep::PreviewData {
            self.step = WizardStep::DescribeData;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnType;

    #[test]
    fn test_starts_at_step_one() {
        let session = WizardSession::new();
        assert_eq!(session.step(), WizardStep::VerifySheet);
        assert_eq!(session.step().number(), 1);
    }

    #[test]
    fn test_advance_is_linear_and_saturates() {
        let mut session = WizardSession::new();
        for expected in 1..=5 {
            assert_eq!(session.step().number(), expected);
            session.advance();
        }
        assert_eq!(session.step(), WizardStep::PreviewData);
    }

    #[test]
    fn test_sheet_verified_stores_id_and_advances() {
        let mut session = WizardSession::new();
        session.sheet_verified("42".into(), "Project Plan".into());

        assert_eq!(session.step(), WizardStep::DescribePurpose);
        assert_eq!(session.sheet_id(), Some("42"));
        assert_eq!(session.sheet_name(), Some("Project Plan"));
    }

    #[test]
    fn test_regenerate_columns_rewinds_one_step_keeping_state() {
        let mut session = WizardSession::new();
        session.sheet_verified("42".into(), "X".into());
        session.columns_generated(vec![Column::new("Task", ColumnType::TextNumber)]);
        assert_eq!(session.step(), WizardStep::EditColumns);

        session.regenerate_columns();

        assert_eq!(session.step(), WizardStep::DescribePurpose);
        assert_eq!(session.columns().len(), 1);
        assert_eq!(session.sheet_id(), Some("42"));
    }

    #[test]
    fn test_regenerate_rewinds_only_from_its_own_step() {
        let mut session = WizardSession::new();
        session.regenerate_columns();
        session.regenerate_data();
        assert_eq!(session.step(), WizardStep::VerifySheet);
    }

    #[test]
    fn test_regenerate_data_rewinds_to_data_prompt() {
        let mut session = WizardSession::new();
        session.sheet_verified("42".into(), "X".into());
        session.columns_generated(vec![Column::new("Task", ColumnType::TextNumber)]);
        session.advance();
        session.data_generated(vec![Row::new()]);
        assert_eq!(session.step(), WizardStep::PreviewData);

        session.regenerate_data();

        assert_eq!(session.step(), WizardStep::DescribeData);
        assert_eq!(session.data().len(), 1);
    }
}
