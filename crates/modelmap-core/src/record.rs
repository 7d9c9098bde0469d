use crate::stmt::FieldValue;

/// Identifies one field of a record type by its declaration ordinal.
///
/// Explicit field subsets are lists of `FieldId`s, so a subset names fields
/// by identity rather than by their current values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(pub usize);

impl FieldId {
    pub const fn ordinal(self) -> usize {
        self.0
    }
}

/// A type that maps onto one table.
///
/// Usually implemented with `#[derive(Record)]`. The table name and column
/// list are authoritative; per-field tags refine what each column means.
pub trait Record: 'static {
    /// Table the record is stored in.
    fn table(&self) -> &'static str;

    /// Names of the mapped columns, in field declaration order.
    fn columns(&self) -> &'static [&'static str];

    /// Tag string of every declared field, mapped or not, in declaration
    /// order. Index `i` describes the field at ordinal `i`.
    fn tags(&self) -> &'static [&'static str];

    /// Returns a handle to the field at `ordinal`, or `None` for unmapped
    /// fields.
    fn field(&self, ordinal: usize) -> Option<&dyn FieldValue>;

    fn field_mut(&mut self, ordinal: usize) -> Option<&mut dyn FieldValue>;
}
