use modelmap_core::{
    err,
    stmt::{Type, Value},
    Record, Result,
};
use modelmap_sql::{self as sql, Serializer};

use std::sync::Arc;

/// A compiled statement: SQL text plus the field ordinals bound to each
/// placeholder and receiving each returned column.
///
/// Plans never hold values. They are shared between callers and bound to a
/// record instance with [`Statement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    table: &'static str,
    sql: String,
    params: Vec<usize>,
    returning: Vec<usize>,
}

impl Plan {
    pub fn new(serializer: &Serializer, table: &'static str, stmt: &sql::Statement) -> Plan {
        let mut params = vec![];
        let sql = serializer.serialize(stmt, &mut params);
        let returning = stmt.returning().iter().map(|column| column.field).collect();

        Plan {
            table,
            sql,
            params,
            returning,
        }
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Field ordinal bound to each placeholder, in placeholder order.
    pub fn params(&self) -> &[usize] {
        &self.params
    }

    /// Field ordinal receiving each returned column, in column order.
    pub fn returning(&self) -> &[usize] {
        &self.returning
    }
}

/// A plan bound to one record instance.
///
/// Parameters are read from the record when the statement runs, so a
/// plan compiled for one instance replays against any other instance of
/// the same type.
pub struct Statement<'r> {
    plan: Arc<Plan>,
    record: &'r mut dyn Record,
}

impl<'r> Statement<'r> {
    pub fn new(plan: Arc<Plan>, record: &'r mut dyn Record) -> Statement<'r> {
        Statement { plan, record }
    }

    pub fn plan(&self) -> &Arc<Plan> {
        &self.plan
    }

    pub fn table(&self) -> &'static str {
        self.plan.table
    }

    pub fn sql(&self) -> &str {
        &self.plan.sql
    }

    pub fn param_positions(&self) -> &[usize] {
        &self.plan.params
    }

    pub fn returning_positions(&self) -> &[usize] {
        &self.plan.returning
    }

    /// Current value of every bound field, in placeholder order.
    pub fn params(&self) -> Vec<Value> {
        self.plan
            .params
            .iter()
            .map(|&ordinal| {
                self.record
                    .field(ordinal)
                    .map_or(Value::Null, |field| field.to_value())
            })
            .collect()
    }

    /// Expected type of every returned column.
    pub fn returning_types(&self) -> Vec<Type> {
        self.plan
            .returning
            .iter()
            .map(|&ordinal| {
                self.record
                    .field(ordinal)
                    .map_or(Type::String, |field| field.ty())
            })
            .collect()
    }

    /// Writes a returned row into the record, column `i` into the field at
    /// `returning_positions()[i]`.
    ///
    /// The row is applied all or nothing: if any column fails to load, the
    /// fields already written are restored and the record is unchanged.
    pub fn scan(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.plan.returning.len() {
            return Err(err!(
                "expected {} returned columns, got {}; table={}",
                self.plan.returning.len(),
                row.len(),
                self.plan.table
            ));
        }

        let mut previous = Vec::with_capacity(row.len());

        for (&ordinal, value) in self.plan.returning.iter().zip(row) {
            let Some(field) = self.record.field_mut(ordinal) else {
                continue;
            };

            let saved = field.to_value();

            if let Err(err) = field.load(value) {
                self.restore(previous);
                return Err(err);
            }

            previous.push((ordinal, saved));
        }

        Ok(())
    }

    fn restore(&mut self, previous: Vec<(usize, Value)>) {
        for (ordinal, value) in previous.into_iter().rev() {
            if let Some(field) = self.record.field_mut(ordinal) {
                // A field always accepts the value it produced.
                let _ = field.load(value);
            }
        }
    }

    pub fn record(&self) -> &dyn Record {
        &*self.record
    }
}

impl core::fmt::Debug for Statement<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Statement")
            .field("sql", &self.plan.sql)
            .field("params", &self.params())
            .field("returning", &self.plan.returning)
            .finish()
    }
}
