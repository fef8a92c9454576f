use super::TenantContext;

use sitestore_core::{
    schema::{FieldModel, TENANT_COLUMN},
    stmt::{Expr, Value},
};

/// An operation the engine is asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Insert,
    Read,
    Update,
    Delete,
}

/// Outcome of [`authorize`].
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// The caller may not perform the action at all.
    Deny(String),

    /// The caller may act on any row.
    AllowUnscoped,

    /// The caller may act only on rows matching the predicate.
    AllowScoped(TenantPredicate),
}

/// Row-level restriction layered onto a statement for a tenant-scoped caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantPredicate {
    action: Action,
    tenant: String,
}

impl Action {
    pub fn is_write(self) -> bool {
        !matches!(self, Action::Read)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Insert => "insert",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl Decision {
    pub fn is_deny(&self) -> bool {
        matches!(self, Decision::Deny(_))
    }
}

impl TenantPredicate {
    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    /// Filter a statement must carry: reads also see rows without a tenant,
    /// writes only the caller's own rows.
    pub fn filter(&self) -> Expr {
        self.filter_for(self.action)
    }

    /// Filter for `action`, under the same tenant.
    pub fn filter_for(&self, action: Action) -> Expr {
        let own = Expr::eq(TENANT_COLUMN, self.tenant.as_str());

        if action.is_write() {
            own
        } else {
            Expr::Or(vec![own, Expr::is_null(TENANT_COLUMN)])
        }
    }

    /// Tenant column assignment forced onto every scoped insert and update.
    pub fn stamp(&self) -> (&'static str, Value) {
        (TENANT_COLUMN, Value::from(self.tenant.as_str()))
    }
}

/// Decides whether `cx` may perform `action` on a table described by `model`,
/// and under which tenant restriction.
pub fn authorize(action: Action, model: &FieldModel, cx: &TenantContext) -> Decision {
    if action.is_write() && !cx.is_maintain() {
        return Decision::Deny(format!(
            "{} requires update rights in site `{}`",
            action.as_str(),
            cx.tenant()
        ));
    }

    if cx.is_admin() {
        return Decision::AllowUnscoped;
    }

    if model.has_tenant_column() {
        return Decision::AllowScoped(TenantPredicate {
            action,
            tenant: cx.tenant().to_string(),
        });
    }

    Decision::Deny(format!(
        "{} of rows without a `{TENANT_COLUMN}` column is reserved to administrators",
        action.as_str()
    ))
}
