use super::{key, Subset};

use modelmap_core::Meta;
use modelmap_sql::stmt::{self, Assignment, FieldColumn, Update};

/// Updates the row identified by the record's keys.
///
/// Key fields form the `WHERE` clause. Primary-key fields are never
/// assigned. Timestamps and sequence fields are read back, with updated-at
/// also set to the store's clock. Every other field in `subset` is
/// assigned. Returns `None` when nothing would be assigned.
pub(super) fn build(meta: &Meta<'_>, subset: &Subset) -> Option<stmt::Statement> {
    let keys = key::key_fields(meta);
    let filter = key::key_filter(&keys);

    let mut assignments = vec![];
    let mut returning = vec![];

    for field in meta.fields() {
        if key::contains(&keys, field.ordinal) || field.tag.primary_key {
            continue;
        }

        let tag = &field.tag;

        if tag.created_at || tag.deleted_at {
            returning.push(FieldColumn::new(field.column(), field.ordinal));
        } else if tag.updated_at {
            assignments.push(Assignment::now(field.column()));
            returning.push(FieldColumn::new(field.column(), field.ordinal));
        } else if tag.sequence {
            returning.push(FieldColumn::new(field.column(), field.ordinal));
        } else if subset.contains(field.ordinal) {
            assignments.push(Assignment::field(field.column(), field.ordinal));
        }
    }

    if assignments.is_empty() {
        return None;
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
