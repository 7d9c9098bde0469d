use super::{Type, Value};
use crate::{Error, Result};

use std::time::{SystemTime, UNIX_EPOCH};

/// A scalar Rust type that maps onto a single column value.
pub trait Primitive: Sized {
    const TYPE: Type;

    fn load(value: Value) -> Result<Self>;

    fn to_value(&self) -> Value;

    /// Returns `true` if the value is the type's zero value.
    fn is_zero(&self) -> bool;
}

macro_rules! impl_integer {
    ( $( $ty:ident => $variant:ident ),* ) => {
        $(
            impl Primitive for $ty {
                const TYPE: Type = Type::$variant;

                fn load(value: Value) -> Result<Self> {
                    let converted = match &value {
                        Value::I16(v) => $ty::try_from(*v).ok(),
                        Value::I32(v) => $ty::try_from(*v).ok(),
                        Value::I64(v) => $ty::try_from(*v).ok(),
                        _ => None,
                    };

                    converted.ok_or_else(|| Error::type_conversion(value, stringify!($ty)))
                }

                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_integer! {
    i16 => I16,
    i32 => I32,
    i64 => I64
}

impl Primitive for bool {
    const TYPE: Type = Type::Bool;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            Value::I64(v) => Ok(v != 0),
            value => Err(Error::type_conversion(value, "bool")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn is_zero(&self) -> bool {
        !*self
    }
}

impl Primitive for f64 {
    const TYPE: Type = Type::F64;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::I32(v) => Ok(v.into()),
            Value::I64(v) => Ok(v as f64),
            value => Err(Error::type_conversion(value, "f64")),
        }
    }

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl Primitive for String {
    const TYPE: Type = Type::String;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            value => Err(Error::type_conversion(value, "String")),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Primitive for uuid::Uuid {
    const TYPE: Type = Type::Uuid;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(v) => Ok(v),
            Value::String(v) => Ok(v.parse()?),
            value => Err(Error::type_conversion(value, "Uuid")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Uuid(*self)
    }

    fn is_zero(&self) -> bool {
        self.is_nil()
    }
}

impl Primitive for SystemTime {
    const TYPE: Type = Type::Timestamp;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Timestamp(v) => Ok(v),
            value => Err(Error::type_conversion(value, "SystemTime")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }

    fn is_zero(&self) -> bool {
        *self == UNIX_EPOCH
    }
}
