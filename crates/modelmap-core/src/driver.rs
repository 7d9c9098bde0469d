use crate::{
    stmt::{Type, Value},
    Result,
};

/// SQL dialect spoken by a store. Decides placeholder syntax and DDL types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// `$1, $2, ...` placeholders
    Postgresql,

    /// `?` placeholders
    Sqlite,
}

/// A connection to a relational store.
///
/// This is all the mapper needs from a store client: run a parameterized
/// statement and hand back either the first returned row or the number of
/// affected rows. Pooling, statement caching, and transactions are the
/// client's business.
pub trait Connection: Send {
    fn flavor(&self) -> Flavor;

    /// Runs a statement that returns rows and yields the first one, if any.
    ///
    /// `ret` holds the expected type of each returned column so stores
    /// without native types can decode values.
    fn query_row(&mut self, sql: &str, params: &[Value], ret: &[Type])
        -> Result<Option<Vec<Value>>>;

    /// Runs a statement that returns no rows and yields the affected row
    /// count.
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64>;
}

impl<C: Connection + ?Sized> Connection for Box<C> {
    fn flavor(&self) -> Flavor {
        (**self).flavor()
    }

    fn query_row(
        &mut self,
        sql: &str,
        params: &[Value],
        ret: &[Type],
    ) -> Result<Option<Vec<Value>>> {
        (**self).query_row(sql, params, ret)
    }

    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64> {
        (**self).execute(sql, params)
    }
}

impl<C: Connection + ?Sized> Connection for &mut C {
    fn flavor(&self) -> Flavor {
        (**self).flavor()
    }

    fn query_row(
        &mut self,
        sql: &str,
        params: &[Value],
        ret: &[Type],
    ) -> Result<Option<Vec<Value>>> {
        (**self).query_row(sql, params, ret)
    }

    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64> {
        (**self).execute(sql, params)
    }
}
