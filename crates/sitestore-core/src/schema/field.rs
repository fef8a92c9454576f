use super::{is_identifier, Role, PRIMARY_KEY};
use crate::{stmt::Type, Error, Result};

use indexmap::IndexMap;
use std::fmt;

/// One column of a field model, parsed from `name:type attr=value ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Column identifier
    name: String,

    /// Declared type
    ty: FieldType,

    /// Modifiers in declaration order. Unknown attributes are kept verbatim.
    attributes: IndexMap<String, String>,

    /// Parsed `role` attribute
    role: Option<Role>,

    /// Parsed `maxlength` attribute
    max_length: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Single-line string
    Text,

    /// Multi-line string; whitespace is preserved
    TextArea,

    /// String holding a URL
    Url,

    /// String not shown to the user
    Hidden,

    /// Signed integer
    Integer,

    /// One of the `choices`, stored as the zero-based choice index
    Radio,

    /// Boolean flag
    Checkbox,

    /// Calendar date, `YYYY-MM-DD`
    Date,

    /// Timestamp maintained by the engine, never read from input
    AutoDate,

    /// Display-only section heading without a column
    Header,
}

impl FieldType {
    fn parse(src: &str) -> Result<FieldType> {
        Ok(match src {
            "text" => FieldType::Text,
            "textarea" => FieldType::TextArea,
            "url" => FieldType::Url,
            "hidden" => FieldType::Hidden,
            "integer" => FieldType::Integer,
            "radio" => FieldType::Radio,
            "checkbox" => FieldType::Checkbox,
            "date" => FieldType::Date,
            "autodate" => FieldType::AutoDate,
            "header" => FieldType::Header,
            _ => return Err(Error::invalid_model(format!("unknown field type `{src}`"))),
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::TextArea => "textarea",
            FieldType::Url => "url",
            FieldType::Hidden => "hidden",
            FieldType::Integer => "integer",
            FieldType::Radio => "radio",
            FieldType::Checkbox => "checkbox",
            FieldType::Date => "date",
            FieldType::AutoDate => "autodate",
            FieldType::Header => "header",
        }
    }

    /// Storage type of the column, `None` for display-only fields.
    pub fn storage_ty(self) -> Option<Type> {
        match self {
            FieldType::Text | FieldType::TextArea | FieldType::Url | FieldType::Hidden => {
                Some(Type::String)
            }
            FieldType::Integer | FieldType::Radio => Some(Type::I64),
            FieldType::Checkbox => Some(Type::Bool),
            FieldType::Date => Some(Type::Date),
            FieldType::AutoDate => Some(Type::Timestamp),
            FieldType::Header => None,
        }
    }
}

impl FieldDescriptor {
    /// Parses a single descriptor.
    ///
    /// Attributes may be separated by whitespace or by `:`; an attribute
    /// without `=` is a flag set to `true`.
    pub fn parse(src: &str) -> Result<FieldDescriptor> {
        let src = src.trim();
        let Some((name, rest)) = src.split_once(':') else {
            return Err(Error::invalid_model(format!(
                "descriptor `{src}` is missing a type"
            )));
        };

        let mut tokens = rest
            .split(|ch: char| ch == ':' || ch.is_whitespace())
            .filter(|token| !token.is_empty());

        let Some(ty) = tokens.next() else {
            return Err(Error::invalid_model(format!(
                "descriptor `{src}` is missing a type"
            )));
        };

        let mut attributes = IndexMap::new();
        for token in tokens {
            let (key, value) = token.split_once('=').unwrap_or((token, "true"));
            if key.is_empty() {
                return Err(Error::invalid_model(format!(
                    "field `{name}` has an attribute without a name"
                )));
            }
            attributes.insert(key.to_string(), value.to_string());
        }

        FieldDescriptor::new(name, FieldType::parse(ty)?, attributes)
    }

    /// Builds a descriptor, checking the name and the typed attributes.
    pub fn new(
        name: impl Into<String>,
        ty: FieldType,
        attributes: IndexMap<String, String>,
    ) -> Result<FieldDescriptor> {
        let name = name.into();

        if !is_identifier(&name) {
            return Err(Error::invalid_model(format!(
                "`{name}` is not a valid column name"
            )));
        }

        if name == PRIMARY_KEY {
            return Err(Error::invalid_model(format!(
                "`{PRIMARY_KEY}` is the implicit primary key and cannot be declared"
            )));
        }

        let role = attributes.get("role").map(|s| Role::parse(s)).transpose()?;

        let max_length = match attributes.get("maxlength") {
            Some(value) => Some(value.parse::<usize>().map_err(|_| {
                Error::invalid_model(format!("field `{name}` has invalid maxlength `{value}`"))
            })?),
            None => None,
        };

        if ty == FieldType::Radio && !attributes.contains_key("choices") {
            return Err(Error::invalid_model(format!(
                "radio field `{name}` must declare choices"
            )));
        }

        Ok(FieldDescriptor {
            name,
            ty,
            attributes,
            role,
            max_length,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> FieldType {
        self.ty
    }

    /// Storage type, `None` for display-only fields.
    pub fn storage_ty(&self) -> Option<Type> {
        self.ty.storage_ty()
    }

    pub fn is_storage(&self) -> bool {
        self.storage_ty().is_some()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_required(&self) -> bool {
        self.attribute("required") == Some("true")
    }

    pub fn default_value(&self) -> Option<&str> {
        self.attribute("default")
    }

    /// Role a caller needs to see or write this field.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Choices of a radio field, in index order.
    pub fn choices(&self) -> Vec<&str> {
        self.attribute("choices")
            .map(|choices| choices.split(',').collect())
            .unwrap_or_default()
    }

    /// Label key for the UI layer; defaults to the field name.
    pub fn label(&self) -> &str {
        self.attribute("label").unwrap_or(&self.name)
    }

    /// Returns `true` if a caller with `role` may see or write this field.
    pub fn is_visible_to(&self, role: Role) -> bool {
        self.role.map_or(true, |required| role.satisfies(required))
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.ty.as_str())?;
        for (key, value) in &self.attributes {
            write!(f, " {key}={value}")?;
        }
        Ok(())
    }
}
