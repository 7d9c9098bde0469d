#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub ty: ColumnType,
    pub not_null: bool,

    /// Inline `PRIMARY KEY`. Composite keys go on [`CreateTable`] instead.
    ///
    /// [`CreateTable`]: super::CreateTable
    pub primary_key: bool,

    pub unique: bool,
    pub default: Option<ColumnDefault>,
}

/// Column types understood by both flavors. Each flavor picks its own
/// spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    /// Auto-incrementing 32-bit integer
    Serial,

    /// Auto-incrementing 64-bit integer
    BigSerial,

    Boolean,
    SmallInt,
    Integer,
    BigInt,
    Double,
    Text,
    Uuid,
    Timestamp,
    Array(Box<ColumnType>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnDefault {
    /// Current time of the store
    Now,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, ty: ColumnType) -> ColumnDef {
        ColumnDef {
            name: name.into(),
            ty,
            not_null: false,
            primary_key: false,
            unique: false,
            default: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn default_now(mut self) -> Self {
        self.default = Some(ColumnDefault::Now);
        self
    }
}

impl ColumnType {
    pub fn array(item: ColumnType) -> ColumnType {
        ColumnType::Array(Box::new(item))
    }
}
