pub mod driver;
pub use driver::{Connection, Flavor};

mod error;
pub use error::{Error, IntoError};

pub mod record;
pub use record::{FieldId, Record};

pub mod schema;
pub use schema::{FieldTag, Meta};

pub mod stmt;

/// A Result type alias that uses modelmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
