mod builder;
pub use builder::Builder;

mod connect;

use crate::engine::{SiteAuthority, TenantContext};

use indexmap::IndexMap;
use sitestore_core::{
    driver::{Connection, Driver},
    schema::TableDef,
    Error, Result,
};
use tokio::sync::Mutex;

use std::{fmt, sync::Arc};

/// Shared state between all `Db` clones.
pub(crate) struct Shared {
    /// Registered tables, by name
    pub(crate) tables: IndexMap<String, TableDef>,

    /// Tenant whose maintainers are administrators
    pub(crate) admin_site: String,

    /// Run the read-then-write ownership check inside a store transaction
    pub(crate) transactional_ownership_check: bool,

    /// Kept for diagnostics
    pub(crate) driver: Box<dyn Driver>,

    /// The store connection. Held exclusively for the duration of a call.
    pub(crate) connection: Mutex<Box<dyn Connection>>,
}

/// A database handle: the generic CRUD engine bound to a store and a set of
/// registered tables. Cloning is cheap and shares the connection.
#[derive(Clone)]
pub struct Db {
    pub(crate) shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Looks up a registered table.
    pub fn table(&self, name: &str) -> Result<&TableDef> {
        self.shared
            .tables
            .get(name)
            .ok_or_else(|| Error::contract_violation(format!("unknown table; table={name}")))
    }

    /// Registered tables, in registration order.
    pub fn tables(&self) -> impl Iterator<Item = &TableDef> + '_ {
        self.shared.tables.values()
    }

    pub fn admin_site(&self) -> &str {
        &self.shared.admin_site
    }

    /// Builds a caller context against this handle's admin tenant.
    pub fn context(&self, tenant: impl Into<String>, can_update: bool) -> TenantContext {
        TenantContext::with_admin_site(tenant, can_update, &self.shared.admin_site)
    }

    /// Resolves the caller context through the hosting application.
    pub fn resolve_context(&self, authority: &dyn SiteAuthority) -> TenantContext {
        TenantContext::resolve(authority, &self.shared.admin_site)
    }
}

impl fmt::Debug for Db {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Db")
            .field("url", &self.shared.driver.url())
            .field("tables", &self.shared.tables.keys().collect::<Vec<_>>())
            .field("admin_site", &self.shared.admin_site)
            .finish()
    }
}
