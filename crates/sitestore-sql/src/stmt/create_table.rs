use super::{ColumnDef, Statement};

use sitestore_core::schema::{TableDef, PRIMARY_KEY};

/// `CREATE TABLE IF NOT EXISTS`, with the implicit auto-incrementing key
/// followed by one column per storage field.
#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Name of the auto-incrementing primary key column
    pub primary_key: String,

    /// Column definitions, in model order
    pub columns: Vec<ColumnDef>,
}

impl Statement {
    pub fn create_table(table: &TableDef) -> Statement {
        CreateTable {
            name: table.name().to_string(),
            primary_key: PRIMARY_KEY.to_string(),
            columns: table
                .model()
                .storage_fields()
                .filter_map(ColumnDef::from_field)
                .collect(),
        }
        .into()
    }
}
