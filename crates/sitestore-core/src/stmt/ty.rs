/// Storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// Boolean flag, stored as an integer
    Bool,

    /// Calendar date, stored as `YYYY-MM-DD` text
    Date,

    /// Signed 64-bit integer
    I64,

    /// String type
    String,

    /// Instant in time, stored as RFC 3339 text
    Timestamp,
}

impl Type {
    pub fn is_string(&self) -> bool {
        matches!(self, Type::String)
    }
}
