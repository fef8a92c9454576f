use super::{crud_facade, tool};
use crate::{extract, Db, ExtractMode, Input, TenantContext};

use sitestore_core::{
    schema::{FieldModel, TableDef, TENANT_COLUMN},
    stmt::Record,
    Error, FieldError, Result,
};

pub const TABLE: &str = "lti_content";

/// Launch paths are `{LAUNCH_PREFIX}{site}/content:{id}`.
pub const LAUNCH_PREFIX: &str = "/access/basiclti/site/";

/// Frame height used when neither the tool nor the content sets one.
pub const DEFAULT_FRAME_HEIGHT: i64 = 1200;

pub const MODEL: &[&str] = &[
    "SITE_ID:text label=bl_site_id maxlength=99 role=admin",
    "tool_id:integer label=bl_tool_id required=true",
    "title:text label=bl_title required=true maxlength=255",
    "frameheight:integer label=bl_frameheight",
    "debug:radio label=bl_debug choices=off,on",
    "newpage:radio label=bl_newpage choices=off,on",
    "custom:textarea label=bl_custom maxlength=1024",
    "launch_url:url label=bl_launch_url maxlength=1024",
    "placement:hidden maxlength=256",
    "created_at:autodate",
    "updated_at:autodate",
];

pub fn table_def() -> Result<TableDef> {
    super::table_def(TABLE, MODEL)
}

/// Form definition of a content item placed from `tool`: fields the tool
/// switches off are removed, and non-admins lose admin-only fields.
pub fn content_model(model: &FieldModel, cx: &TenantContext, tool: &Record) -> FieldModel {
    let model = model.filter_by_row(tool);

    if cx.is_admin() {
        model
    } else {
        model.project(cx.role())
    }
}

/// Adjusts `content` for display using the settings of the `tool` it was
/// placed from.
///
/// The frame height is the tool's, unless the tool allows overriding it and
/// the content sets one; [`DEFAULT_FRAME_HEIGHT`] when neither is set.
/// `debug` and `newpage` follow [`correct_property`].
pub fn derive_content(content: &mut Record, tool: &Record) {
    let height_override = tool.get_int("allowframeheight");
    let tool_height = tool.get_int("frameheight");
    let content_height = content.get_int("frameheight");

    let mut frame_height = DEFAULT_FRAME_HEIGHT;
    if tool_height > 0 {
        frame_height = tool_height;
    }
    if height_override == 1 && content_height > 0 {
        frame_height = content_height;
    }
    content.insert("frameheight", frame_height);

    for property in ["debug", "newpage"] {
        if let Some(value) = correct_property(property, content, tool) {
            content.insert(property, value);
        }
    }
}

/// Value the tool forces onto `property` of the content, if any.
///
/// Returns `None` when either side does not carry the property, when the tool
/// asserts no control (no `allow<property>` and no value of its own), or when
/// the tool's own value already agrees with its control code.
pub fn correct_property(property: &str, content: &Record, tool: &Record) -> Option<i64> {
    let tool_prop = tool.get_int(property);
    let content_prop = content.get_int(property);
    if tool_prop == -1 || content_prop == -1 {
        return None;
    }

    let allow_prop = tool.get_int(&format!("allow{property}"));
    let allow_code = if allow_prop >= 0 {
        allow_prop
    } else if tool_prop >= 0 {
        tool_prop
    } else {
        -1
    };

    match allow_code {
        0 if tool_prop != 0 => Some(0),
        1 if tool_prop != 1 => Some(1),
        _ => None,
    }
}

/// Launch path of a stored content item, `None` without a key or a site.
pub fn content_launch(content: &Record) -> Option<String> {
    let key = content.get_int("id");
    let site = content.get_str(TENANT_COLUMN)?;

    if key < 0 {
        return None;
    }

    Some(format!("{LAUNCH_PREFIX}{site}/content:{key}"))
}

/// Content item records.
#[derive(Debug, Clone, Copy)]
pub struct Contents<'a> {
    pub(crate) db: &'a Db,
}

crud_facade!(Contents);

impl Contents<'_> {
    /// Form definition for content placed from the tool `tool_id`.
    pub async fn model(&self, cx: &TenantContext, tool_id: i64) -> Result<FieldModel> {
        if !cx.is_maintain() {
            return Err(Error::permission("content definitions require update rights"));
        }

        let model = self.db.table(TABLE)?.model();
        let tool = self.find_tool(cx, tool_id).await?;

        Ok(content_model(model, cx, &tool))
    }

    /// Creates the content item (when `content_id` is `None`) or updates it,
    /// completing the tool first if its key and secret are still the
    /// [`tool::SECRET_INCOMPLETE`] placeholder. Returns the content key.
    pub async fn insert_tool_content(
        &self,
        cx: &TenantContext,
        content_id: Option<i64>,
        tool_id: i64,
        input: &Input,
    ) -> Result<i64> {
        if !cx.is_maintain() {
            return Err(Error::permission("placing a tool requires update rights"));
        }

        let Some(content_id) = content_id else {
            return self.insert(cx, input).await;
        };

        let tool = self.find_tool(cx, tool_id).await?;

        let incomplete = |column: &str| tool.get_str(column) == Some(tool::SECRET_INCOMPLETE);
        if incomplete("secret") && incomplete("consumerkey") {
            let mut errors = vec![];
            let mut credentials = Input::new();

            for column in ["consumerkey", "secret"] {
                match input.get(column).map(str::trim).filter(|v| !v.is_empty()) {
                    Some(value) => {
                        credentials.insert(column, value);
                    }
                    None => {
                        errors.push(FieldError::new(column, "is required to complete the tool"))
                    }
                }
            }

            if !errors.is_empty() {
                return Err(Error::validation(errors));
            }

            // The content update must not fail after the tool is written
            self.check_update(cx, content_id, input).await?;
            self.db.tools().update(cx, tool_id, &credentials).await?;
        }

        self.update(cx, content_id, input).await?;
        Ok(content_id)
    }

    /// Runs the ownership and input checks of [`Contents::update`] without
    /// writing anything.
    async fn check_update(&self, cx: &TenantContext, content_id: i64, input: &Input) -> Result<()> {
        let model = self.db.table(TABLE)?.model();

        let content = self.get(cx, content_id).await?.ok_or_else(|| {
            Error::record_not_found(format!("table={TABLE}; key={content_id}"))
        })?;

        if !cx.is_admin() && content.get_str(TENANT_COLUMN) != Some(cx.tenant()) {
            return Err(Error::permission(format!(
                "row belongs to another tenant; table={TABLE}; key={content_id}"
            )));
        }

        extract(input, model, cx.role(), ExtractMode::Update)?;
        Ok(())
    }

    async fn find_tool(&self, cx: &TenantContext, tool_id: i64) -> Result<Record> {
        self.db
            .tools()
            .get(cx, tool_id)
            .await?
            .ok_or_else(|| {
                Error::record_not_found(format!("table={}; key={tool_id}", tool::TABLE))
            })
    }
}
