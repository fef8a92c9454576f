use super::Operation;

use crate::stmt;

#[derive(Debug, Clone)]
pub struct QuerySql {
    /// The statement to execute
    pub stmt: stmt::Statement,

    /// Column types of the returned rows, in column order. `None` when the
    /// statement only reports a row count.
    pub ret: Option<Vec<stmt::Type>>,
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Self::QuerySql(value)
    }
}
