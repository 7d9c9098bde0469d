use super::{Formatter, Ident, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let name = Ident(&self.name);
        let ty = &self.ty;

        fmt!(f, name " " ty);

        if self.not_null {
            fmt!(f, " NOT NULL");
        }

        if self.primary_key {
            fmt!(f, " PRIMARY KEY");
        }

        if self.unique {
            fmt!(f, " UNIQUE");
        }

        if let Some(default) = &self.default {
            fmt!(f, " DEFAULT " default);
        }
    }
}

impl ToSql for &stmt::ColumnType {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        use stmt::ColumnType::*;

        if f.serializer.is_sqlite() {
            // Timestamps are stored as microseconds since the Unix epoch and
            // arrays as JSON text. `INTEGER PRIMARY KEY` aliases the rowid.
            let ty = match self {
                Serial | BigSerial | SmallInt | Integer | BigInt | Timestamp => "INTEGER",
                Boolean => "BOOLEAN",
                Double => "REAL",
                Text | Uuid | Array(_) => "TEXT",
            };
            fmt!(f, ty);
            return;
        }

        match self {
            Serial => fmt!(f, "SERIAL"),
            BigSerial => fmt!(f, "BIGSERIAL"),
            Boolean => fmt!(f, "BOOLEAN"),
            SmallInt => fmt!(f, "SMALLINT"),
            Integer => fmt!(f, "INTEGER"),
            BigInt => fmt!(f, "BIGINT"),
            Double => fmt!(f, "DOUBLE PRECISION"),
            Text => fmt!(f, "TEXT"),
            Uuid => fmt!(f, "UUID"),
            Timestamp => fmt!(f, "TIMESTAMP WITH TIME ZONE"),
            Array(item) => {
                let item = &**item;
                fmt!(f, item "[]");
            }
        }
    }
}

impl ToSql for &stmt::ColumnDefault {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            stmt::ColumnDefault::Now if f.serializer.is_sqlite() => fmt!(
                f,
                "(CAST((julianday('now') - 2440587.5) * 86400000000 AS INTEGER))"
            ),
            stmt::ColumnDefault::Now => fmt!(f, "NOW()"),
        }
    }
}
