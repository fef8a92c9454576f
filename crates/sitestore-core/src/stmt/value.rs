use jiff::{civil::Date, Timestamp};

/// A typed column value.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Calendar date
    Date(Date),

    /// Signed 64-bit integer
    I64(i64),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),

    /// Instant in time
    Timestamp(Timestamp),
}

impl Value {
    /// Name of the variant, used in error messages.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "Bool",
            Value::Date(_) => "Date",
            Value::I64(_) => "I64",
            Value::Null => "Null",
            Value::String(_) => "String",
            Value::Timestamp(_) => "Timestamp",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Lenient integer reading used by the display-side rules: integers are
    /// returned as-is, flags as 0/1, strings holding exactly a decimal
    /// integer are parsed, and anything else (including null, padded or
    /// unparsable strings) yields -1.
    pub fn to_int(&self) -> i64 {
        match self {
            Value::I64(v) => *v,
            Value::Bool(v) => *v as i64,
            Value::String(v) => v.parse().unwrap_or(-1),
            _ => -1,
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Value {
        Value::Bool(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Value {
        Value::I64(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Value {
        Value::I64(src as i64)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Value {
        Value::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Value {
        Value::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Value {
        Value::String(src.to_string())
    }
}

impl From<Date> for Value {
    fn from(src: Date) -> Value {
        Value::Date(src)
    }
}

impl From<Timestamp> for Value {
    fn from(src: Timestamp) -> Value {
        Value::Timestamp(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Value {
        match src {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}
