use super::{Formatter, ToSql};

use modelmap_core::Flavor;

/// Collects the field ordinals bound to placeholders.
pub trait Params {
    fn push(&mut self, field: usize) -> Placeholder;
}

/// 1-based position of a bound parameter.
pub struct Placeholder(pub usize);

impl Params for Vec<usize> {
    fn push(&mut self, field: usize) -> Placeholder {
        Vec::push(self, field);
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match f.serializer.flavor {
            Flavor::Postgresql => {
                f.dst.push('$');
                f.dst.push_str(&self.0.to_string());
            }
            Flavor::Sqlite => f.dst.push('?'),
        }
    }
}
