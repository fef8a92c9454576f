mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

pub use sitestore_core::stmt::*;

#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    Delete(Delete),
    Insert(Insert),
    Query(Select),
    Update(Update),
}

impl Statement {
    /// Returns the number of columns each returned row carries, if the
    /// statement returns rows.
    pub fn returning_len(&self) -> Option<usize> {
        match self {
            Statement::Insert(insert) => insert.returning.as_ref().map(|_| 1),
            Statement::Query(select) => Some(select.columns.len()),
            _ => None,
        }
    }
}

impl From<sitestore_core::stmt::Statement> for Statement {
    fn from(value: sitestore_core::stmt::Statement) -> Self {
        match value {
            sitestore_core::stmt::Statement::Delete(stmt) => Statement::Delete(stmt),
            sitestore_core::stmt::Statement::Insert(stmt) => Statement::Insert(stmt),
            sitestore_core::stmt::Statement::Query(stmt) => Statement::Query(stmt),
            sitestore_core::stmt::Statement::Update(stmt) => Statement::Update(stmt),
        }
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Statement::CreateTable(value)
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Query(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}
