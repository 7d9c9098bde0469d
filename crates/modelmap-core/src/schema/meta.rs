use super::FieldTag;
use crate::{stmt::FieldValue, Record};

/// Per-call view of a record: its table and every mapped field, in
/// declaration order.
///
/// Built once per statement that misses the plan cache and dropped as soon
/// as the statement text exists.
pub struct Meta<'r> {
    table: &'static str,
    fields: Vec<FieldMeta<'r>>,
}

/// One mapped field of a [`Meta`].
pub struct FieldMeta<'r> {
    /// Declaration ordinal of the field within its record type.
    pub ordinal: usize,

    pub tag: FieldTag<'static>,

    /// Handle used to read the field's current value.
    pub value: &'r dyn FieldValue,

    pub is_nil: bool,
    pub is_zero: bool,
    pub is_array: bool,
}

impl<'r> Meta<'r> {
    /// Walks the record's fields once, parsing each tag and capturing a
    /// handle to every mapped field.
    ///
    /// A field is skipped when its tag is empty, has no column, is flagged
    /// `ign`, or when the record exposes no handle for it.
    pub fn extract(record: &'r dyn Record) -> Meta<'r> {
        let tags = record.tags();
        let mut fields = Vec::with_capacity(tags.len());

        for (ordinal, &src) in tags.iter().enumerate() {
            let tag = FieldTag::parse(src);

            if !tag.is_mapped() {
                continue;
            }

            let Some(value) = record.field(ordinal) else {
                continue;
            };

            fields.push(FieldMeta {
                ordinal,
                tag,
                value,
                is_nil: value.is_nil(),
                is_zero: value.is_zero(),
                is_array: value.is_array(),
            });
        }

        Meta {
            table: record.table(),
            fields,
        }
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn fields(&self) -> &[FieldMeta<'r>] {
        &self.fields
    }

    /// Returns `true` if the record has no mapped fields. Nothing can be
    /// derived from such a record.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, ordinal: usize) -> Option<&FieldMeta<'r>> {
        self.fields.iter().find(|field| field.ordinal == ordinal)
    }

    pub fn has_primary_key(&self) -> bool {
        self.fields.iter().any(|field| field.tag.primary_key)
    }

    pub fn has_unique(&self) -> bool {
        self.fields.iter().any(|field| field.tag.unique)
    }

    /// Returns `true` if the record declares a deleted-at column.
    pub fn is_soft_delete(&self) -> bool {
        self.fields.iter().any(|field| field.tag.deleted_at)
    }
}

impl FieldMeta<'_> {
    pub fn column(&self) -> &'static str {
        self.tag.column
    }

    /// Returns `true` if the field currently holds a value.
    pub fn is_present(&self) -> bool {
        !self.is_nil
    }
}

impl core::fmt::Debug for FieldMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldMeta")
            .field("ordinal", &self.ordinal)
            .field("tag", &self.tag)
            .field("value", &self.value.to_value())
            .field("is_nil", &self.is_nil)
            .field("is_zero", &self.is_zero)
            .field("is_array", &self.is_array)
            .finish()
    }
}

impl core::fmt::Debug for Meta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Meta")
            .field("table", &self.table)
            .field("fields", &self.fields)
            .finish()
    }
}
