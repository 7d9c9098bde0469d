use super::key;

use modelmap_core::Meta;
use modelmap_sql::stmt::{self, Condition, FieldColumn, Select};

/// `SELECT` every mapped column of the row identified by the record's keys.
///
/// Soft-deleted rows are excluded. Without a present key the filter only
/// holds the soft-delete condition, and the first row wins.
pub(super) fn build(meta: &Meta<'_>) -> Option<stmt::Statement> {
    if meta.is_empty() {
        return None;
    }

    let keys = key::key_fields(meta);
    let mut filter = key::key_filter(&keys);

    let columns = meta
        .fields()
        .iter()
        .map(|field| FieldColumn::new(field.column(), field.ordinal))
        .collect();

    for field in meta.fields() {
        if field.tag.deleted_at {
            filter.push(Condition::is_null(field.column()));
        }
    }

    Some(
        Select {
            table: meta.table().to_string(),
            columns,
            filter,
        }
        .into(),
    )
}
