use super::{expr::Returning, Comma, Formatter, Ident, Params, ToSql};

use crate::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let columns = Comma(&self.columns);
        let table = Ident(&self.table);
        let filter = &self.filter;

        fmt!(f, "SELECT " columns " FROM " table filter);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = Ident(&self.table);

        fmt!(f, "INSERT INTO " table);

        if self.values.is_empty() {
            fmt!(f, " DEFAULT VALUES");
        } else {
            let columns = Comma(self.values.iter().map(|value| Ident(&value.column)));
            let values = Comma(self.values.iter().map(|value| &value.expr));

            fmt!(f, " (" columns ") VALUES (" values ")");
        }

        let on_conflict = self.on_conflict.as_ref();
        let returning = Returning(&self.returning);

        fmt!(f, on_conflict returning);
    }
}

impl ToSql for &stmt::OnConflict {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let target = Comma(self.target.iter().map(Ident));

        fmt!(f, " ON CONFLICT (" target ")");

        match &self.action {
            stmt::ConflictAction::Nothing => fmt!(f, " DO NOTHING"),
            stmt::ConflictAction::Update(assignments) => {
                let assignments = Comma(assignments);
                fmt!(f, " DO UPDATE SET " assignments);
            }
        }
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = Ident(&self.table);
        let assignments = Comma(&self.assignments);
        let filter = &self.filter;
        let returning = Returning(&self.returning);

        fmt!(f, "UPDATE " table " SET " assignments filter returning);
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = Ident(&self.table);
        let filter = &self.filter;

        fmt!(f, "DELETE FROM " table filter);
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let if_not_exists = if self.if_not_exists {
            "IF NOT EXISTS "
        } else {
            ""
        };
        let table = Ident(&self.name);

        fmt!(f, "CREATE TABLE " if_not_exists table " (");

        for (index, column) in self.columns.iter().enumerate() {
            fmt!(f, "\n    " column);
            if index < self.columns.len() - 1 {
                fmt!(f, ",");
            }
        }

        if !self.primary_key.is_empty() {
            let primary_key = Comma(self.primary_key.iter().map(Ident));
            fmt!(f, ",\n    PRIMARY KEY (" primary_key ")");
        }

        fmt!(f, "\n)");
    }
}
