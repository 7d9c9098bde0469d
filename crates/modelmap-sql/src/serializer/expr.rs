use super::{And, Comma, Formatter, Ident, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::Expr {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match *self {
            stmt::Expr::Field(field) => {
                let placeholder = f.params.push(field);
                fmt!(f, placeholder);
            }
            stmt::Expr::Now => fmt!(f, "NOW()"),
        }
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let expr = &self.expr;
        fmt!(f, Ident(&self.column) " = " expr);
    }
}

impl ToSql for &stmt::FieldColumn {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, Ident(&self.column));
    }
}

impl ToSql for &stmt::Condition {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            stmt::Condition::Eq { column, expr } => fmt!(f, Ident(column) " = " expr),
            stmt::Condition::IsNull { column } => fmt!(f, Ident(column) " IS NULL"),
        }
    }
}

impl ToSql for &stmt::Filter {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        if self.is_empty() {
            return;
        }

        fmt!(f, " WHERE (" And(&self.conditions) ")");
    }
}

/// ` RETURNING a, b`, or nothing when the list is empty.
pub(super) struct Returning<'a>(pub(super) &'a [stmt::FieldColumn]);

impl ToSql for Returning<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        if self.0.is_empty() {
            return;
        }

        fmt!(f, " RETURNING " Comma(self.0));
    }
}
