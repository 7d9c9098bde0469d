/// The storage type of a field, as far as the store needs to know it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// 64-bit float
    F64,

    /// String type
    String,

    /// 128-bit universally unique identifier
    Uuid,

    /// Point in time with microsecond precision
    Timestamp,

    /// A list of a single type
    Array(Box<Type>),
}

impl Type {
    pub fn array(item: Type) -> Type {
        Type::Array(Box::new(item))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Type::Array(_))
    }
}
