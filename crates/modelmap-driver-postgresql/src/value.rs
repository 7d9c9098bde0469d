use modelmap_core::{
    err,
    stmt::{self, Value as CoreValue},
    Error, Result,
};
use postgres::{
    types::{private::BytesMut, to_sql_checked, FromSqlOwned, IsNull, Kind, ToSql, Type},
    Row,
};
type BoxError = Box<dyn std::error::Error + Sync + Send>;

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
    pub fn from_row(row: &Row, index: usize, ty: &stmt::Type) -> Result<Self> {
        let value = match ty {
            stmt::Type::Bool => get(row, index, CoreValue::Bool)?,
            stmt::Type::I16 | stmt::Type::I32 | stmt::Type::I64 => {
                match get_int(row, index)? {
                    Some(v) => Some(match ty {
                        stmt::Type::I16 => CoreValue::I16(i16::try_from(v)?),
                        stmt::Type::I32 => CoreValue::I32(i32::try_from(v)?),
                        _ => CoreValue::I64(v),
                    }),
                    None => None,
                }
            }
            stmt::Type::F64 => get(row, index, CoreValue::F64)?,
            stmt::Type::String => get(row, index, CoreValue::String)?,
            stmt::Type::Uuid => get(row, index, CoreValue::Uuid)?,
            stmt::Type::Timestamp => get(row, index, CoreValue::Timestamp)?,
            stmt::Type::Array(item) => match **item {
                stmt::Type::Bool => get_array(row, index, CoreValue::Bool)?,
                stmt::Type::I16 => get_array(row, index, CoreValue::I16)?,
                stmt::Type::I32 => get_array(row, index, CoreValue::I32)?,
                stmt::Type::I64 => get_array(row, index, CoreValue::I64)?,
                stmt::Type::F64 => get_array(row, index, CoreValue::F64)?,
                stmt::Type::String => get_array(row, index, CoreValue::String)?,
                stmt::Type::Uuid => get_array(row, index, CoreValue::Uuid)?,
                stmt::Type::Timestamp => get_array(row, index, CoreValue::Timestamp)?,
                stmt::Type::Array(_) => {
                    return Err(err!("nested arrays are not supported; index={index}"))
                }
            },
        };

        Ok(Value(value.unwrap_or(CoreValue::Null)))
    }
}

fn get<T: FromSqlOwned>(
    row: &Row,
    index: usize,
    f: impl FnOnce(T) -> CoreValue,
) -> Result<Option<CoreValue>> {
    let value: Option<T> = row.try_get(index).map_err(Error::driver)?;
    Ok(value.map(f))
}

fn get_array<T: FromSqlOwned>(
    row: &Row,
    index: usize,
    f: impl Fn(T) -> CoreValue,
) -> Result<Option<CoreValue>> {
    let value: Option<Vec<T>> = row.try_get(index).map_err(Error::driver)?;
    Ok(value.map(|items| CoreValue::Array(items.into_iter().map(f).collect())))
}

/// Integer columns are read at their declared width, so a `SERIAL` key can
/// hydrate an `i64` field.
fn get_int(row: &Row, index: usize) -> Result<Option<i64>> {
    let column_ty = row.columns()[index].type_();

    let value = if *column_ty == Type::INT2 {
        row.try_get::<_, Option<i16>>(index)
            .map(|v| v.map(i64::from))
    } else if *column_ty == Type::INT4 {
        row.try_get::<_, Option<i32>>(index)
            .map(|v| v.map(i64::from))
    } else {
        row.try_get::<_, Option<i64>>(index)
    };

    value.map_err(Error::driver)
}

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> std::result::Result<IsNull, BoxError>
    where
        Self: Sized,
    {
        match &self.0 {
            CoreValue::Bool(value) => value.to_sql(ty, out),
            CoreValue::I16(value) => to_sql_int(i64::from(*value), ty, out),
            CoreValue::I32(value) => to_sql_int(i64::from(*value), ty, out),
            CoreValue::I64(value) => to_sql_int(*value, ty, out),
            CoreValue::F64(value) => {
                if *ty == Type::FLOAT4 {
                    (*value as f32).to_sql(ty, out)
                } else {
                    value.to_sql(ty, out)
                }
            }
            CoreValue::String(value) => value.to_sql(ty, out),
            CoreValue::Uuid(value) => {
                if *ty == Type::UUID {
                    value.to_sql(ty, out)
                } else {
                    value.to_string().to_sql(ty, out)
                }
            }
            CoreValue::Timestamp(value) => value.to_sql(ty, out),
            CoreValue::Array(items) => {
                let items: Vec<Value> = items.iter().cloned().map(Value).collect();
                items.to_sql(ty, out)
            }
            CoreValue::Null => Ok(IsNull::Yes),
        }
    }

    fn accepts(ty: &Type) -> bool {
        if let Kind::Array(member) = ty.kind() {
            return Self::accepts(member);
        }

        [
            Type::BOOL,
            Type::INT2,
            Type::INT4,
            Type::INT8,
            Type::FLOAT4,
            Type::FLOAT8,
            Type::TEXT,
            Type::VARCHAR,
            Type::UUID,
            Type::TIMESTAMP,
            Type::TIMESTAMPTZ,
        ]
        .contains(ty)
    }

    to_sql_checked!();
}

/// Binds an integer at the width of the target column.
fn to_sql_int(value: i64, ty: &Type, out: &mut BytesMut) -> std::result::Result<IsNull, BoxError> {
    if *ty == Type::INT2 {
        i16::try_from(value)?.to_sql(ty, out)
    } else if *ty == Type::INT4 {
        i32::try_from(value)?.to_sql(ty, out)
    } else {
        value.to_sql(ty, out)
    }
}
