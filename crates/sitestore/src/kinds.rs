//! The three record kinds served by the engine: tools, the content items
//! placed from them, and URL mappings. Each is the generic engine bound to
//! one table; the facades only add the rules specific to the kind.

pub mod content;
pub use content::Contents;

pub mod mapping;
pub use mapping::Mappings;

pub mod tool;
pub use tool::Tools;

use crate::Db;

use sitestore_core::{
    schema::{FieldModel, TableDef},
    Result,
};

/// Table definitions of every record kind, built from the default models.
pub fn default_tables() -> Result<Vec<TableDef>> {
    Ok(vec![tool::table_def()?, content::table_def()?, mapping::table_def()?])
}

fn table_def(name: &str, model: &[&str]) -> Result<TableDef> {
    TableDef::new(name, FieldModel::parse(model)?)
}

impl Db {
    pub fn tools(&self) -> Tools<'_> {
        Tools { db: self }
    }

    pub fn contents(&self) -> Contents<'_> {
        Contents { db: self }
    }

    pub fn mappings(&self) -> Mappings<'_> {
        Mappings { db: self }
    }
}

/// CRUD entry points shared by every facade, bound to the kind's table.
macro_rules! crud_facade {
    ($facade:ident) => {
        impl $facade<'_> {
            pub async fn insert(
                &self,
                cx: &$crate::TenantContext,
                input: &$crate::Input,
            ) -> sitestore_core::Result<i64> {
                self.db.insert(TABLE, cx, input).await
            }

            pub async fn get(
                &self,
                cx: &$crate::TenantContext,
                key: i64,
            ) -> sitestore_core::Result<Option<sitestore_core::stmt::Record>> {
                self.db.get(TABLE, cx, key).await
            }

            pub async fn update(
                &self,
                cx: &$crate::TenantContext,
                key: i64,
                input: &$crate::Input,
            ) -> sitestore_core::Result<u64> {
                self.db.update(TABLE, cx, key, input).await
            }

            pub async fn delete(
                &self,
                cx: &$crate::TenantContext,
                key: i64,
            ) -> sitestore_core::Result<u64> {
                self.db.delete(TABLE, cx, key).await
            }

            pub async fn list(
                &self,
                cx: &$crate::TenantContext,
                query: &$crate::ListQuery,
            ) -> sitestore_core::Result<Vec<sitestore_core::stmt::Record>> {
                self.db.list(TABLE, cx, query).await
            }
        }
    };
}

use crud_facade;
