use super::{Assignment, FieldColumn, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,

    /// Written columns with their values. Empty means `DEFAULT VALUES`.
    pub values: Vec<Assignment>,

    pub on_conflict: Option<OnConflict>,

    pub returning: Vec<FieldColumn>,
}

/// `ON CONFLICT (<target>) DO ...`
#[derive(Debug, Clone, PartialEq)]
pub struct OnConflict {
    pub target: Vec<String>,
    pub action: ConflictAction,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConflictAction {
    Nothing,
    Update(Vec<Assignment>),
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
