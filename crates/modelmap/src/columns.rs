use modelmap_core::{stmt::Value, FieldId, FieldTag, Meta, Record};

/// Column names of `fields`, in the order given. An empty list yields every
/// column of the record.
///
/// Unmapped fields are skipped.
pub fn columns_of<R: Record + ?Sized>(record: &R, fields: &[FieldId]) -> Vec<&'static str> {
    if fields.is_empty() {
        return record.columns().to_vec();
    }

    let tags = record.tags();

    fields
        .iter()
        .filter_map(|field| tags.get(field.ordinal()))
        .map(|&src| FieldTag::parse(src))
        .filter(|tag| tag.is_mapped())
        .map(|tag| tag.column)
        .collect()
}

/// Current values of the named columns, in field declaration order. An
/// empty list yields the value of every mapped field.
pub fn values_of<R: Record>(record: &R, columns: &[&str]) -> Vec<Value> {
    Meta::extract(record)
        .fields()
        .iter()
        .filter(|field| columns.is_empty() || columns.contains(&field.column()))
        .map(|field| field.value.to_value())
        .collect()
}
