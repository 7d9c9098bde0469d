use modelmap_core::schema::{FieldMeta, Meta};
use modelmap_sql::stmt::{Condition, Filter};

/// Fields identifying the record's row: every primary-key field holding a
/// value or, when none does, the first unique field holding a value.
pub(super) fn key_fields<'a, 'r>(meta: &'a Meta<'r>) -> Vec<&'a FieldMeta<'r>> {
    let primary: Vec<_> = meta
        .fields()
        .iter()
        .filter(|field| field.tag.primary_key && field.is_present())
        .collect();

    if !primary.is_empty() {
        return primary;
    }

    meta.fields()
        .iter()
        .find(|field| field.tag.unique && field.is_present())
        .into_iter()
        .collect()
}

/// `column = ?` for every key field.
pub(super) fn key_filter(keys: &[&FieldMeta<'_>]) -> Filter {
    keys.iter()
        .map(|field| Condition::eq_field(field.column(), field.ordinal))
        .collect()
}

pub(super) fn contains(keys: &[&FieldMeta<'_>], ordinal: usize) -> bool {
    keys.iter().any(|key| key.ordinal == ordinal)
}
