mod column_def;
pub use column_def::{ColumnDef, ColumnDefault, ColumnType};

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod expr;
pub use expr::{Assignment, Expr, FieldColumn};

mod filter;
pub use filter::{Condition, Filter};

mod insert;
pub use insert::{ConflictAction, Insert, OnConflict};

mod select;
pub use select::Select;

mod update;
pub use update::Update;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    CreateTable(CreateTable),
    Delete(Delete),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// Columns whose values the statement hands back, bound to the fields
    /// that receive them. For a select, this is the projection.
    pub fn returning(&self) -> &[FieldColumn] {
        match self {
            Statement::Insert(insert) => &insert.returning,
            Statement::Select(select) => &select.columns,
            Statement::Update(update) => &update.returning,
            Statement::CreateTable(_) | Statement::Delete(_) => &[],
        }
    }
}
