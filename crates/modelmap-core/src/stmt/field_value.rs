use super::{Primitive, Type, Value};
use crate::{Error, Result};

use std::time::SystemTime;

/// Live handle to a record field's storage.
///
/// Statement parameters are read through `to_value` when a statement is
/// run, and returned columns are written back through `load`.
pub trait FieldValue {
    fn ty(&self) -> Type;

    fn to_value(&self) -> Value;

    fn load(&mut self, value: Value) -> Result<()>;

    /// Returns `true` if the storage is null-capable and holds no value.
    fn is_nil(&self) -> bool {
        false
    }

    /// Returns `true` if the storage holds its type's zero value.
    fn is_zero(&self) -> bool;

    fn is_array(&self) -> bool {
        false
    }
}

fn load_array<T: Primitive>(value: Value) -> Result<Option<Vec<T>>> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => items
            .into_iter()
            .map(T::load)
            .collect::<Result<Vec<_>>>()
            .map(Some),
        value => Err(Error::type_conversion(value, "array")),
    }
}

fn array_value<T: Primitive>(items: &[T]) -> Value {
    Value::Array(items.iter().map(Primitive::to_value).collect())
}

macro_rules! impl_field_value {
    ( $( $ty:ty ),* ) => {
        $(
            impl FieldValue for $ty {
                fn ty(&self) -> Type {
                    <$ty as Primitive>::TYPE
                }

                fn to_value(&self) -> Value {
                    Primitive::to_value(self)
                }

                fn load(&mut self, value: Value) -> Result<()> {
                    *self = <$ty as Primitive>::load(value)?;
                    Ok(())
                }

                fn is_zero(&self) -> bool {
                    Primitive::is_zero(self)
                }
            }

            impl FieldValue for Option<$ty> {
                fn ty(&self) -> Type {
                    <$ty as Primitive>::TYPE
                }

                fn to_value(&self) -> Value {
                    self.as_ref().map_or(Value::Null, Primitive::to_value)
                }

                fn load(&mut self, value: Value) -> Result<()> {
                    *self = match value {
                        Value::Null => None,
                        value => Some(<$ty as Primitive>::load(value)?),
                    };
                    Ok(())
                }

                fn is_nil(&self) -> bool {
                    self.is_none()
                }

                fn is_zero(&self) -> bool {
                    self.is_none()
                }
            }

            impl FieldValue for Vec<$ty> {
                fn ty(&self) -> Type {
                    Type::array(<$ty as Primitive>::TYPE)
                }

                fn to_value(&self) -> Value {
                    array_value(self)
                }

                fn load(&mut self, value: Value) -> Result<()> {
                    *self = load_array(value)?.unwrap_or_default();
                    Ok(())
                }

                fn is_zero(&self) -> bool {
                    self.is_empty()
                }

                fn is_array(&self) -> bool {
                    true
                }
            }

            impl FieldValue for Option<Vec<$ty>> {
                fn ty(&self) -> Type {
                    Type::array(<$ty as Primitive>::TYPE)
                }

                fn to_value(&self) -> Value {
                    self.as_deref().map_or(Value::Null, array_value)
                }

                fn load(&mut self, value: Value) -> Result<()> {
                    *self = load_array(value)?;
                    Ok(())
                }

                fn is_nil(&self) -> bool {
                    self.is_none()
                }

                fn is_zero(&self) -> bool {
                    self.is_none()
                }

                fn is_array(&self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_field_value!(bool, i16, i32, i64, f64, String, uuid::Uuid, SystemTime);
