use super::{Statement, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Table to insert into
    pub table: String,

    /// Column names, in binding order
    pub columns: Vec<String>,

    /// Values, one per column
    pub values: Vec<Value>,

    /// When set, the generated value of this column is returned.
    pub returning: Option<String>,
}

impl Insert {
    /// Builds an insert from `(column, value)` pairs, preserving their order.
    pub fn new<I, C>(table: impl Into<String>, columns: I) -> Insert
    where
        I: IntoIterator<Item = (C, Value)>,
        C: Into<String>,
    {
        let (columns, values) = columns
            .into_iter()
            .map(|(column, value)| (column.into(), value))
            .unzip();

        Insert {
            table: table.into(),
            columns,
            values,
            returning: None,
        }
    }

    pub fn returning(mut self, column: impl Into<String>) -> Insert {
        self.returning = Some(column.into());
        self
    }
}

impl From<Insert> for Statement {
    fn from(src: Insert) -> Self {
        Self::Insert(src)
    }
}
