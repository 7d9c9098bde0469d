use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `column = expr`
    Eq { column: String, expr: Expr },

    /// `column IS NULL`
    IsNull { column: String },
}

/// A conjunction of conditions. An empty filter matches every row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub conditions: Vec<Condition>,
}

impl Condition {
    pub fn eq_field(column: impl Into<String>, field: usize) -> Condition {
        Condition::Eq {
            column: column.into(),
            expr: Expr::Field(field),
        }
    }

    pub fn is_null(column: impl Into<String>) -> Condition {
        Condition::IsNull {
            column: column.into(),
        }
    }
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }
}

impl FromIterator<Condition> for Filter {
    fn from_iter<T: IntoIterator<Item = Condition>>(iter: T) -> Self {
        Filter {
            conditions: iter.into_iter().collect(),
        }
    }
}
