use super::{FieldDescriptor, Role, PRIMARY_KEY, TENANT_COLUMN};
use crate::{
    stmt::{Record, Type},
    Error, Result,
};

use std::{collections::HashSet, fmt};

/// Runtime schema of a table: an ordered list of field descriptors.
///
/// The order drives display and is also the binding/decoding order of every
/// statement built from the model. Parse once and share (`Arc<FieldModel>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldModel {
    fields: Vec<FieldDescriptor>,
}

impl FieldModel {
    /// Parses one descriptor per item.
    pub fn parse<I>(descriptors: I) -> Result<FieldModel>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let fields = descriptors
            .into_iter()
            .map(|src| FieldDescriptor::parse(src.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        FieldModel::from_fields(fields)
    }

    /// Builds a model from already parsed descriptors, checking that names are
    /// unique.
    pub fn from_fields(fields: Vec<FieldDescriptor>) -> Result<FieldModel> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name()) {
                return Err(Error::invalid_model(format!(
                    "field `{}` is declared more than once",
                    field.name()
                )));
            }
        }

        Ok(FieldModel { fields })
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Descriptors backed by a column, in model order.
    pub fn storage_fields(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.fields.iter().filter(|field| field.is_storage())
    }

    /// Columns read by every SELECT: the primary key followed by each storage
    /// column in model order.
    pub fn select_columns(&self) -> Vec<&str> {
        std::iter::once(PRIMARY_KEY)
            .chain(self.storage_fields().map(FieldDescriptor::name))
            .collect()
    }

    /// Storage types aligned with [`FieldModel::select_columns`].
    pub fn select_types(&self) -> Vec<Type> {
        std::iter::once(Type::I64)
            .chain(self.storage_fields().filter_map(FieldDescriptor::storage_ty))
            .collect()
    }

    /// Returns `true` if `column` is the primary key or a storage column.
    pub fn has_column(&self, column: &str) -> bool {
        column == PRIMARY_KEY || self.storage_fields().any(|field| field.name() == column)
    }

    /// Returns `true` if rows of this model are scoped to a tenant.
    pub fn has_tenant_column(&self) -> bool {
        self.field(TENANT_COLUMN)
            .is_some_and(FieldDescriptor::is_storage)
    }

    /// Removes descriptors the caller's role is not entitled to see or edit.
    pub fn project(&self, role: Role) -> FieldModel {
        FieldModel {
            fields: self
                .fields
                .iter()
                .filter(|field| field.is_visible_to(role))
                .cloned()
                .collect(),
        }
    }

    /// Removes each descriptor `x` for which `row` carries `allowx = 0`.
    ///
    /// A controlling row (for example a tool) uses this to switch off fields
    /// of the rows it governs.
    pub fn filter_by_row(&self, row: &Record) -> FieldModel {
        FieldModel {
            fields: self
                .fields
                .iter()
                .filter(|field| {
                    let allow = format!("allow{}", field.name());
                    !row.contains(&allow) || row.get_int(&allow) != 0
                })
                .cloned()
                .collect(),
        }
    }
}

impl fmt::Display for FieldModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, field) in self.fields.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            fmt::Display::fmt(field, f)?;
        }
        Ok(())
    }
}
