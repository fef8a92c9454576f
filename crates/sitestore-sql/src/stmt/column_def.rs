use sitestore_core::{schema::FieldDescriptor, stmt::Type};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// Name of the column
    pub name: String,

    /// Storage type
    pub ty: Type,

    /// Upper bound on the character length of string columns
    pub max_length: Option<usize>,
}

impl ColumnDef {
    /// Column for a storage field. Returns `None` for display-only fields.
    pub fn from_field(field: &FieldDescriptor) -> Option<ColumnDef> {
        Some(ColumnDef {
            name: field.name().to_string(),
            ty: field.storage_ty()?,
            max_length: field.max_length(),
        })
    }
}
