use super::{is_identifier, FieldModel};
use crate::{Error, Result};

use std::sync::Arc;

/// A table the engine may operate on, paired with the model describing it.
#[derive(Debug, Clone)]
pub struct TableDef {
    name: String,
    model: Arc<FieldModel>,
}

impl TableDef {
    pub fn new(name: impl Into<String>, model: impl Into<Arc<FieldModel>>) -> Result<TableDef> {
        let name = name.into();
        let model = model.into();

        if !is_identifier(&name) {
            return Err(Error::invalid_model(format!(
                "`{name}` is not a valid table name"
            )));
        }

        if model.storage_fields().next().is_none() {
            return Err(Error::invalid_model(format!(
                "table `{name}` has no storage columns"
            )));
        }

        Ok(TableDef { name, model })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &Arc<FieldModel> {
        &self.model
    }
}
