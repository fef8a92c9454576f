use super::{Db, Shared};
use crate::engine::ADMIN_SITE;

use indexmap::IndexMap;
use sitestore_core::{driver::Driver, schema::TableDef, Error, Result};
use tokio::sync::Mutex;

use std::sync::Arc;

#[derive(Debug)]
pub struct Builder {
    /// Tables to register, in registration order
    tables: Vec<TableDef>,

    /// Reserved admin tenant
    admin_site: String,

    /// Create missing tables when the handle is built
    auto_ddl: bool,

    /// Wrap the ownership check and the write in one transaction
    transactional_ownership_check: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            tables: vec![],
            admin_site: ADMIN_SITE.to_string(),
            auto_ddl: false,
            transactional_ownership_check: true,
        }
    }
}

impl Builder {
    pub fn register(&mut self, table: TableDef) -> &mut Self {
        self.tables.push(table);
        self
    }

    pub fn register_all(&mut self, tables: impl IntoIterator<Item = TableDef>) -> &mut Self {
        self.tables.extend(tables);
        self
    }

    /// Set the tenant whose maintainers administer every tenant.
    pub fn admin_site(&mut self, site: impl Into<String>) -> &mut Self {
        self.admin_site = site.into();
        self
    }

    /// Create every registered table that does not exist yet when building.
    pub fn auto_ddl(&mut self, enabled: bool) -> &mut Self {
        self.auto_ddl = enabled;
        self
    }

    /// When disabled, the ownership check of a scoped update or delete and
    /// the write itself run as separate statements outside a transaction, and
    /// a concurrent writer may change the row between the two.
    pub fn transactional_ownership_check(&mut self, enabled: bool) -> &mut Self {
        self.transactional_ownership_check = enabled;
        self
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let mut tables = IndexMap::with_capacity(self.tables.len());

        for table in &self.tables {
            if tables
                .insert(table.name().to_string(), table.clone())
                .is_some()
            {
                return Err(Error::invalid_model(format!(
                    "table `{}` is registered more than once",
                    table.name()
                )));
            }
        }

        let mut connection = driver.connect().await.map_err(|err| {
            tracing::error!(url = %driver.url(), error = %err, "failed to connect");
            err
        })?;

        if self.auto_ddl {
            for table in tables.values() {
                connection.push_table(table).await?;
            }
        }

        for table in tables.values() {
            tracing::info!(
                table = table.name(),
                columns = table.model().select_columns().len(),
                "registered table"
            );
        }

        Ok(Db {
            shared: Arc::new(Shared {
                tables,
                admin_site: self.admin_site.clone(),
                transactional_ownership_check: self.transactional_ownership_check,
                driver: Box::new(driver),
                connection: Mutex::new(connection),
            }),
        })
    }
}
