use super::crud_facade;
use crate::{Db, TenantContext};

use sitestore_core::{
    schema::{FieldModel, Role, TableDef},
    Error, Result,
};

pub const TABLE: &str = "lti_tools";

/// Placeholder stored as key and secret until a maintainer completes the
/// tool.
pub const SECRET_INCOMPLETE: &str = "-----";

pub const MODEL: &[&str] = &[
    "SITE_ID:text label=bl_site_id maxlength=99 role=admin",
    "title:text label=bl_title required=true maxlength=255",
    "description:textarea label=bl_description maxlength=4096",
    "status:radio label=bl_status choices=enable,disable",
    "visible:radio label=bl_visible choices=visible,stealth role=admin",
    "launch:url label=bl_launch required=true maxlength=1024",
    "consumerkey:text label=bl_consumerkey required=true maxlength=255",
    "secret:text label=bl_secret required=true maxlength=255",
    "frame_header:header label=bl_frame_header",
    "frameheight:integer label=bl_frameheight",
    "allowframeheight:radio label=bl_allowframeheight choices=off,on",
    "debug:radio label=bl_debug choices=off,on,content",
    "newpage:radio label=bl_newpage choices=off,on,content",
    "sendname:checkbox label=bl_sendname",
    "sendemailaddr:checkbox label=bl_sendemailaddr",
    "custom:textarea label=bl_custom maxlength=1024",
    "created_at:autodate",
    "updated_at:autodate",
];

pub fn table_def() -> Result<TableDef> {
    super::table_def(TABLE, MODEL)
}

/// Form definition of a tool for the caller: the full model for admins,
/// without admin-only fields for maintainers, nothing for anyone else.
pub fn tool_model(model: &FieldModel, cx: &TenantContext) -> Result<FieldModel> {
    if cx.is_admin() {
        Ok(model.clone())
    } else if cx.is_maintain() {
        Ok(model.project(Role::Maintain))
    } else {
        Err(Error::permission("tool definitions require update rights"))
    }
}

/// Tool records.
#[derive(Debug, Clone, Copy)]
pub struct Tools<'a> {
    pub(crate) db: &'a Db,
}

crud_facade!(Tools);

impl Tools<'_> {
    pub fn model(&self, cx: &TenantContext) -> Result<FieldModel> {
        tool_model(self.db.table(TABLE)?.model(), cx)
    }
}
