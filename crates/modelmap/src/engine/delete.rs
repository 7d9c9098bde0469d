use super::key;

use modelmap_core::Meta;
use modelmap_sql::stmt::{self, Assignment, Delete, FieldColumn, Update};

/// Deletes the row identified by the record's keys.
///
/// Records with a deleted-at column are soft deleted: their updated-at and
/// deleted-at columns are set to the store's clock and read back. Returns
/// `None` when no key field holds a value.
pub(super) fn build(meta: &Meta<'_>) -> Option<stmt::Statement> {
    let keys = key::key_fields(meta);

    if keys.is_empty() {
        return None;
    }

    let filter = key::key_filter(&keys);

    if !meta.is_soft_delete() {
        return Some(
            Delete {
                table: meta.table().to_string(),
                filter,
            }
            .into(),
        );
    }

    let mut assignments = vec![];
    let mut returning = vec![];

    for field in meta.fields() {
        if field.tag.updated_at || field.tag.deleted_at {
            assignments.push(Assignment::now(field.column()));
            returning.push(FieldColumn::new(field.column(), field.ordinal));
        }
    }

    Some(
        Update {
            table: meta.table().to_string(),
            assignments,
            filter,
            returning,
        }
        .into(),
    )
}
