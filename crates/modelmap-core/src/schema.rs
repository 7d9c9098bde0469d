mod meta;
pub use meta::{FieldMeta, Meta};

mod tag;
pub use tag::FieldTag;
