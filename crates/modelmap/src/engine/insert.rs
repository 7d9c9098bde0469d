use super::Subset;

use modelmap_core::schema::{FieldMeta, Meta};
use modelmap_sql::stmt::{self, Assignment, ConflictAction, FieldColumn, Insert, OnConflict};

/// Inserts the record.
///
/// Key fields holding a caller-assigned value become the conflict target,
/// turning the insert into an upsert of the fields in `subset`. Returns
/// `None` when there is nothing to write and nothing to read back.
pub(super) fn build(meta: &Meta<'_>, subset: &Subset) -> Option<stmt::Statement> {
    let target: Vec<_> = if meta.has_primary_key() {
        meta.fields()
            .iter()
            .filter(|field| field.tag.primary_key && field.is_present() && !field.tag.sequence)
            .collect()
    } else {
        meta.fields()
            .iter()
            .find(|field| field.tag.unique && field.is_present() && !field.tag.sequence)
            .into_iter()
            .collect()
    };

    build_with_target(meta, subset, &target, false)
}

/// Builds an insert that resolves conflicts on `target`.
///
/// Key fields are written when present or caller-assigned and read back
/// when store-assigned and absent. Timestamps and other sequence fields are
/// read back. With `refresh_updated_at`, the updated-at column is also set
/// to the store's clock on conflict. Plain fields in `subset` are written
/// and, outside the target, overwritten on conflict.
pub(super) fn build_with_target(
    meta: &Meta<'_>,
    subset: &Subset,
    target: &[&FieldMeta<'_>],
    refresh_updated_at: bool,
) -> Option<stmt::Statement> {
    if meta.is_empty() {
        return None;
    }

    let has_primary_key = meta.has_primary_key();
    let upsert = !target.is_empty();

    let mut values = vec![];
    let mut set = vec![];
    let mut returning = vec![];

    for field in meta.fields() {
        let tag = &field.tag;
        let is_key = if has_primary_key {
            tag.primary_key
        } else {
            tag.unique
        };

        if is_key {
            if field.is_present() || !tag.sequence {
                values.push(Assignment::field(field.column(), field.ordinal));
            } else {
                returning.push(FieldColumn::new(field.column(), field.ordinal));
            }
        } else if tag.created_at || tag.deleted_at {
            returning.push(FieldColumn::new(field.column(), field.ordinal));
        } else if tag.updated_at {
            returning.push(FieldColumn::new(field.column(), field.ordinal));

            if upsert && refresh_updated_at {
                set.push(Assignment::now(field.column()));
            }
        } else if tag.sequence {
            returning.push(FieldColumn::new(field.column(), field.ordinal));
        } else if subset.contains(field.ordinal) {
            values.push(Assignment::field(field.column(), field.ordinal));

            if upsert && !target.iter().any(|key| key.ordinal == field.ordinal) {
                set.push(Assignment::field(field.column(), field.ordinal));
            }
        }
    }

    if values.is_empty() && returning.is_empty() {
        return None;
    }

    let on_conflict = upsert.then(|| OnConflict {
        target: target.iter().map(|key| key.column().to_string()).collect(),
        action: if set.is_empty() {
            ConflictAction::Nothing
        } else {
            ConflictAction::Update(set)
        },
    });

    Some(
        Insert {
            table: meta.table().to_string(),
            values,
            on_conflict,
            returning,
        }
        .into(),
    )
}
