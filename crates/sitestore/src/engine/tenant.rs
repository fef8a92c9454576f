use sitestore_core::schema::Role;

/// Reserved tenant whose maintainers administer every tenant.
pub const ADMIN_SITE: &str = "!admin";

/// Resolves the current tenant and the caller's rights, supplied by the
/// hosting application (session, placement, ...).
pub trait SiteAuthority {
    /// Site the request is running in.
    fn current_site(&self) -> String;

    /// Returns `true` if the caller holds update rights in `site`.
    fn can_update(&self, site: &str) -> bool;
}

/// Who is calling, and from which tenant. Built once per request and never
/// mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    tenant: String,
    is_admin: bool,
    is_maintain: bool,
}

impl TenantContext {
    /// Builds a context for a caller in `tenant`.
    ///
    /// `can_update` is whether the caller holds update rights there. The
    /// caller is an admin only when `tenant` is [`ADMIN_SITE`].
    pub fn new(tenant: impl Into<String>, can_update: bool) -> TenantContext {
        TenantContext::with_admin_site(tenant, can_update, ADMIN_SITE)
    }

    /// Same as [`TenantContext::new`] with a non-default admin tenant.
    pub fn with_admin_site(
        tenant: impl Into<String>,
        can_update: bool,
        admin_site: &str,
    ) -> TenantContext {
        let tenant = tenant.into();
        TenantContext {
            is_admin: can_update && tenant == admin_site,
            is_maintain: can_update,
            tenant,
        }
    }

    /// Resolves the context through the hosting application's authority.
    pub fn resolve(authority: &dyn SiteAuthority, admin_site: &str) -> TenantContext {
        let tenant = authority.current_site();
        let can_update = authority.can_update(&tenant);
        TenantContext::with_admin_site(tenant, can_update, admin_site)
    }

    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn is_maintain(&self) -> bool {
        self.is_maintain
    }

    /// Highest field-visibility role the caller holds.
    pub fn role(&self) -> Role {
        if self.is_admin {
            Role::Admin
        } else if self.is_maintain {
            Role::Maintain
        } else {
            Role::Guest
        }
    }
}
