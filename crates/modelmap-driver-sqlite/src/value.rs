use modelmap_core::{
    err,
    stmt::{Type, Value as CoreValue},
    Error, Result,
};
use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A core value crossing the SQLite boundary.
///
/// SQLite has no timestamp, uuid, or array types: timestamps are stored as
/// microseconds since the Unix epoch, uuids as text, and arrays as JSON
/// text.
#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Reads column `index` of `row`, decoding it as `ty`.
    pub fn from_sql(row: &Row<'_>, index: usize, ty: &Type) -> Result<Self> {
        let value: SqlValue = row.get(index).map_err(Error::driver)?;

        let core_value = match value {
            SqlValue::Null => CoreValue::Null,
            SqlValue::Integer(value) => match ty {
                Type::Bool => CoreValue::Bool(value != 0),
                Type::I16 => CoreValue::I16(i16::try_from(value)?),
                Type::I32 => CoreValue::I32(i32::try_from(value)?),
                Type::Timestamp => CoreValue::Timestamp(from_micros(value)),
                Type::F64 => CoreValue::F64(value as f64),
                _ => CoreValue::I64(value),
            },
            SqlValue::Real(value) => CoreValue::F64(value),
            SqlValue::Text(value) => match ty {
                Type::Uuid => CoreValue::Uuid(value.parse()?),
                Type::Array(_) => {
                    let json: serde_json::Value =
                        serde_json::from_str(&value).map_err(Error::driver)?;
                    from_json(json, ty)?
                }
                _ => CoreValue::String(value),
            },
            SqlValue::Blob(_) => return Err(err!("unsupported blob column; index={index}")),
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match &self.0 {
            CoreValue::Bool(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            CoreValue::I16(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            CoreValue::I32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            CoreValue::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            CoreValue::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            CoreValue::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            CoreValue::Uuid(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(v.to_string()))),
            CoreValue::Timestamp(v) => {
                let micros = micros_since_epoch(*v)
                    .map_err(|err| rusqlite::Error::ToSqlConversionFailure(err.into()))?;
                Ok(ToSqlOutput::Owned(SqlValue::Integer(micros)))
            }
            CoreValue::Array(items) => {
                let json = serde_json::Value::Array(items.iter().map(to_json).collect());
                Ok(ToSqlOutput::Owned(SqlValue::Text(json.to_string())))
            }
            CoreValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}

pub(crate) fn micros_since_epoch(
    at: SystemTime,
) -> std::result::Result<i64, std::num::TryFromIntError> {
    match at.duration_since(UNIX_EPOCH) {
        Ok(since) => i64::try_from(since.as_micros()),
        Err(before) => i64::try_from(before.duration().as_micros()).map(|micros| -micros),
    }
}

fn from_micros(micros: i64) -> SystemTime {
    let offset = Duration::from_micros(micros.unsigned_abs());

    if micros >= 0 {
        UNIX_EPOCH + offset
    } else {
        UNIX_EPOCH - offset
    }
}

fn to_json(value: &CoreValue) -> serde_json::Value {
    use serde_json::Value as Json;

    match value {
        CoreValue::Bool(v) => Json::Bool(*v),
        CoreValue::I16(v) => Json::from(*v),
        CoreValue::I32(v) => Json::from(*v),
        CoreValue::I64(v) => Json::from(*v),
        CoreValue::F64(v) => Json::from(*v),
        CoreValue::String(v) => Json::String(v.clone()),
        CoreValue::Uuid(v) => Json::String(v.to_string()),
        CoreValue::Timestamp(v) => micros_since_epoch(*v).map_or(Json::Null, Json::from),
        CoreValue::Array(items) => Json::Array(items.iter().map(to_json).collect()),
        CoreValue::Null => Json::Null,
    }
}

fn from_json(json: serde_json::Value, ty: &Type) -> Result<CoreValue> {
    use serde_json::Value as Json;

    let value = match (json, ty) {
        (Json::Null, _) => CoreValue::Null,
        (Json::Bool(v), Type::Bool) => CoreValue::Bool(v),
        (Json::Number(v), Type::I16 | Type::I32 | Type::I64 | Type::Timestamp) => {
            let Some(v) = v.as_i64() else {
                let v = v.as_f64().unwrap_or_default();
                return Err(Error::type_conversion(CoreValue::F64(v), type_name(ty)));
            };

            match ty {
                Type::I16 => CoreValue::I16(i16::try_from(v)?),
                Type::I32 => CoreValue::I32(i32::try_from(v)?),
                Type::Timestamp => CoreValue::Timestamp(from_micros(v)),
                _ => CoreValue::I64(v),
            }
        }
        (Json::Number(v), Type::F64) => CoreValue::F64(v.as_f64().unwrap_or_default()),
        (Json::String(v), Type::Uuid) => CoreValue::Uuid(v.parse()?),
        (Json::String(v), Type::String) => CoreValue::String(v),
        (Json::Array(items), Type::Array(item)) => CoreValue::Array(
            items
                .into_iter()
                .map(|json| from_json(json, item))
                .collect::<Result<_>>()?,
        ),
        (json, _) => {
            return Err(Error::type_conversion(
                CoreValue::String(json.to_string()),
                type_name(ty),
            ))
        }
    };

    Ok(value)
}

fn type_name(ty: &Type) -> &'static str {
    match ty {
        Type::Bool => "Bool",
        Type::I16 => "I16",
        Type::I32 => "I32",
        Type::I64 => "I64",
        Type::F64 => "F64",
        Type::String => "String",
        Type::Uuid => "Uuid",
        Type::Timestamp => "Timestamp",
        Type::Array(_) => "Array",
    }
}
