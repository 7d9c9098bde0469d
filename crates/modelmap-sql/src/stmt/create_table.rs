use super::{ColumnDef, ColumnType, Statement};

/// `CREATE TABLE` with the column layouts mapped records expect.
///
/// ```
/// use modelmap_sql::stmt::{ColumnDef, ColumnType, CreateTable};
///
/// let books = CreateTable::serial_soft("books")
///     .column(ColumnDef::new("title", ColumnType::Text).not_null());
/// assert_eq!(books.columns.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    pub name: String,
    pub if_not_exists: bool,
    pub columns: Vec<ColumnDef>,

    /// Table-level composite primary key. Empty when no column carries
    /// more than an inline key.
    pub primary_key: Vec<String>,
}

impl CreateTable {
    pub fn new(name: impl Into<String>) -> CreateTable {
        CreateTable {
            name: name.into(),
            if_not_exists: false,
            columns: vec![],
            primary_key: vec![],
        }
    }

    /// Serial `id` key and created/updated timestamps.
    pub fn serial(name: impl Into<String>) -> CreateTable {
        CreateTable::new(name).serial_primary_key().timestamps()
    }

    pub fn big_serial(name: impl Into<String>) -> CreateTable {
        CreateTable::new(name).big_serial_primary_key().timestamps()
    }

    /// Like [`CreateTable::serial`], plus a `deleted_at` column.
    pub fn serial_soft(name: impl Into<String>) -> CreateTable {
        CreateTable::serial(name).soft_delete()
    }

    pub fn big_serial_soft(name: impl Into<String>) -> CreateTable {
        CreateTable::big_serial(name).soft_delete()
    }

    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    pub fn column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    pub fn primary_key<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_key = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn serial_primary_key(self) -> Self {
        self.column(
            ColumnDef::new("id", ColumnType::Serial)
                .not_null()
                .primary_key(),
        )
    }

    pub fn big_serial_primary_key(self) -> Self {
        self.column(
            ColumnDef::new("id", ColumnType::BigSerial)
                .not_null()
                .primary_key(),
        )
    }

    pub fn timestamps(self) -> Self {
        self.column(
            ColumnDef::new("created_at", ColumnType::Timestamp)
                .not_null()
                .default_now(),
        )
        .column(ColumnDef::new("updated_at", ColumnType::Timestamp))
    }

    pub fn soft_delete(self) -> Self {
        self.column(ColumnDef::new("deleted_at", ColumnType::Timestamp))
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
