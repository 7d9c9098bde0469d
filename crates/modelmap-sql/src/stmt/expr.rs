/// Right-hand side of an assignment or comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expr {
    /// Bind the current value of the field at this ordinal.
    Field(usize),

    /// The store's clock.
    Now,
}

/// `column = expr`, in a SET list or an INSERT column/value pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub expr: Expr,
}

/// A column read back from the store into the field at `field`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldColumn {
    pub column: String,
    pub field: usize,
}

impl Assignment {
    pub fn field(column: impl Into<String>, field: usize) -> Assignment {
        Assignment {
            column: column.into(),
            expr: Expr::Field(field),
        }
    }

    pub fn now(column: impl Into<String>) -> Assignment {
        Assignment {
            column: column.into(),
            expr: Expr::Now,
        }
    }
}

impl FieldColumn {
    pub fn new(column: impl Into<String>, field: usize) -> FieldColumn {
        FieldColumn {
            column: column.into(),
            field,
        }
    }
}
