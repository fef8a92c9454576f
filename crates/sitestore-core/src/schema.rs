mod field;
pub use field::{FieldDescriptor, FieldType};

mod model;
pub use model::FieldModel;

mod role;
pub use role::Role;

mod table;
pub use table::TableDef;

/// Implicit primary key present on every table.
pub const PRIMARY_KEY: &str = "id";

/// Reserved column that scopes a row to a tenant (site).
pub const TENANT_COLUMN: &str = "SITE_ID";

/// Returns `true` if `name` is usable as a bare SQL identifier:
/// `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
