use super::crud_facade;
use crate::{Db, TenantContext};

use sitestore_core::{
    schema::{FieldModel, TableDef},
    Error, Result,
};

pub const TABLE: &str = "lti_mapping";

/// Mappings carry no tenant column, so only administrators reach them.
pub const MODEL: &[&str] = &[
    "matchurl:url label=bl_matchurl required=true maxlength=255",
    "launch:url label=bl_launch required=true maxlength=255",
    "note:textarea label=bl_note maxlength=1024",
    "created_at:autodate",
    "updated_at:autodate",
];

pub fn table_def() -> Result<TableDef> {
    super::table_def(TABLE, MODEL)
}

pub fn mapping_model(model: &FieldModel, cx: &TenantContext) -> Result<FieldModel> {
    if cx.is_admin() {
        Ok(model.clone())
    } else {
        Err(Error::permission("mappings are reserved to administrators"))
    }
}

/// URL mapping records.
#[derive(Debug, Clone, Copy)]
pub struct Mappings<'a> {
    pub(crate) db: &'a Db,
}

crud_facade!(Mappings);

impl Mappings<'_> {
    pub fn model(&self, cx: &TenantContext) -> Result<FieldModel> {
        mapping_model(self.db.table(TABLE)?.model(), cx)
    }
}
