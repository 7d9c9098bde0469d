use super::{FieldColumn, Filter, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: String,

    /// Selected columns, each hydrating one field.
    pub columns: Vec<FieldColumn>,

    pub filter: Filter,
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
