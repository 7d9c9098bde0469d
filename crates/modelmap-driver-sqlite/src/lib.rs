mod value;
pub(crate) use value::Value;

use modelmap_core::{
    driver::{Connection, Flavor},
    stmt::{self, Type},
    Error, Result,
};
use rusqlite::{functions::FunctionFlags, Connection as RusqliteConnection};
use std::{
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};
use url::Url;

/// A SQLite connection.
///
/// SQLite has no `NOW()`, so one is registered on open. It returns
/// microseconds since the Unix epoch, the encoding used for timestamps.
#[derive(Debug)]
pub struct Sqlite {
    connection: RusqliteConnection,
}

impl Sqlite {
    /// Connects using a `sqlite:` URL. `sqlite::memory:` opens an in-memory
    /// database; any other path opens that file.
    pub fn connect(url: &str) -> Result<Sqlite> {
        let parsed = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(url, err.to_string()))?;

        if parsed.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(url, "expected a `sqlite` scheme"));
        }

        if parsed.path() == ":memory:" {
            Sqlite::in_memory()
        } else {
            Sqlite::open(parsed.path())
        }
    }

    pub fn in_memory() -> Result<Sqlite> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::driver)?;
        Sqlite::new(connection)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Sqlite> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver)?;
        Sqlite::new(connection)
    }

    fn new(connection: RusqliteConnection) -> Result<Sqlite> {
        connection
            .create_scalar_function("now", 0, FunctionFlags::SQLITE_UTF8, |_| {
                now_micros().map_err(|err| rusqlite::Error::UserFunctionError(err.into()))
            })
            .map_err(Error::driver)?;

        Ok(Sqlite { connection })
    }

    /// Runs SQL without parameters, e.g. DDL.
    pub fn execute_batch(&mut self, sql: &str) -> Result<()> {
        self.connection.execute_batch(sql).map_err(Error::driver)
    }
}

impl Connection for Sqlite {
    fn flavor(&self) -> Flavor {
        Flavor::Sqlite
    }

    fn query_row(
        &mut self,
        sql: &str,
        params: &[stmt::Value],
        ret: &[Type],
    ) -> Result<Option<Vec<stmt::Value>>> {
        let mut stmt = self.connection.prepare_cached(sql).map_err(Error::driver)?;
        let params = params.iter().cloned().map(Value::from).collect::<Vec<_>>();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver)?;

        let Some(row) = rows.next().map_err(Error::driver)? else {
            return Ok(None);
        };

        let mut items = Vec::with_capacity(ret.len());

        for (index, ty) in ret.iter().enumerate() {
            items.push(Value::from_sql(row, index, ty)?.into_inner());
        }

        Ok(Some(items))
    }

    fn execute(&mut self, sql: &str, params: &[stmt::Value]) -> Result<u64> {
        let mut stmt = self.connection.prepare_cached(sql).map_err(Error::driver)?;
        let params = params.iter().cloned().map(Value::from).collect::<Vec<_>>();

        let count = stmt
            .execute(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver)?;

        tracing::trace!(count, "sqlite execute");
        Ok(count as u64)
    }
}

fn now_micros() -> std::result::Result<i64, std::num::TryFromIntError> {
    value::micros_since_epoch(SystemTime::now())
}
