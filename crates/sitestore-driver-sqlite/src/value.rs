use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};
use sitestore_core::{
    stmt::{self, Value as CoreValue},
    Error, Result,
};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a SQLite value within a row to a core value of type `ty`.
    ///
    /// SQLite is dynamically typed, so flags come back as integers and dates
    /// as text; the declared column type decides the decoding.
    pub fn from_sql(row: &Row<'_>, index: usize, ty: stmt::Type) -> Result<Self> {
        let value: SqlValue = row.get(index).map_err(Error::driver)?;

        let core_value = match value {
            SqlValue::Null => CoreValue::Null,
            SqlValue::Integer(value) => match ty {
                stmt::Type::Bool => CoreValue::Bool(value != 0),
                stmt::Type::String => CoreValue::String(value.to_string()),
                _ => CoreValue::I64(value),
            },
            SqlValue::Real(value) => match ty {
                stmt::Type::String => CoreValue::String(value.to_string()),
                _ => CoreValue::I64(value as i64),
            },
            SqlValue::Text(value) => match ty {
                stmt::Type::Date => CoreValue::Date(value.parse().map_err(Error::driver)?),
                stmt::Type::Timestamp => {
                    CoreValue::Timestamp(value.parse().map_err(Error::driver)?)
                }
                stmt::Type::I64 => match value.trim().parse() {
                    Ok(value) => CoreValue::I64(value),
                    Err(_) => return Err(Error::type_conversion(CoreValue::String(value), "i64")),
                },
                stmt::Type::Bool => CoreValue::Bool(!matches!(value.as_str(), "" | "0")),
                stmt::Type::String => CoreValue::String(value),
            },
            SqlValue::Blob(value) => {
                CoreValue::String(String::from_utf8_lossy(&value).into_owned())
            }
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match &self.0 {
            CoreValue::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            CoreValue::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            CoreValue::Date(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(v.to_string()))),
            CoreValue::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            CoreValue::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            CoreValue::Timestamp(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(v.to_string()))),
            CoreValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
