mod crud;
pub use crud::ListQuery;

mod form;
pub use form::{extract, ExtractMode, Input};

mod scope;
pub use scope::{authorize, Action, Decision, TenantPredicate};

mod tenant;
pub use tenant::{SiteAuthority, TenantContext, ADMIN_SITE};
