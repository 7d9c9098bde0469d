use super::{insert, Subset};

use modelmap_core::Meta;
use modelmap_sql::stmt;

/// Upserts the record on its controlling key: every primary-key field or,
/// without a primary key, the first unique field.
///
/// The key is the conflict target whether or not it currently holds a
/// value. Every other plain column is overwritten on conflict and the
/// updated-at column is refreshed.
pub(super) fn build_upsert(meta: &Meta<'_>) -> Option<stmt::Statement> {
    let target: Vec<_> = if meta.has_primary_key() {
        meta.fields()
            .iter()
            .filter(|field| field.tag.primary_key)
            .collect()
    } else {
        meta.fields()
            .iter()
            .find(|field| field.tag.unique)
            .into_iter()
            .collect()
    };

    insert::build_with_target(meta, &Subset::Full, &target, true)
}
