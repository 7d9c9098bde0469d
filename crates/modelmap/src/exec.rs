use crate::engine::Statement;

use modelmap_core::{Connection, Error, Result};
use tracing::{trace, warn};

/// Runs a bound statement.
///
/// Statements with returning columns run as a single-row query whose row is
/// scanned back into the record; a missing row is a record-not-found error.
/// Every other statement runs as a plain mutation. Store failures, including
/// a returned row that cannot be scanned into the record, surface as driver
/// errors.
pub fn run(conn: &mut dyn Connection, mut stmt: Statement<'_>) -> Result<()> {
    let params = stmt.params();
    trace!(sql = stmt.sql(), params = params.len(), "run statement");

    if stmt.returning_positions().is_empty() {
        let count = conn
            .execute(stmt.sql(), &params)
            .map_err(|err| store_error(&stmt, err))?;

        trace!(table = stmt.table(), count, "statement executed");
        return Ok(());
    }

    let ret = stmt.returning_types();

    match conn.query_row(stmt.sql(), &params, &ret) {
        Ok(Some(row)) => stmt.scan(row).map_err(|err| store_error(&stmt, err)),
        Ok(None) => Err(Error::record_not_found(format!("table={}", stmt.table()))),
        Err(err) => Err(store_error(&stmt, err)),
    }
}

fn store_error(stmt: &Statement<'_>, err: Error) -> Error {
    warn!(table = stmt.table(), sql = stmt.sql(), error = %err, "statement failed");

    if err.is_driver() {
        err
    } else {
        Error::driver(err)
    }
}
