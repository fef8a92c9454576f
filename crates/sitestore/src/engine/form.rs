use indexmap::IndexMap;
use jiff::{civil::Date, Timestamp};
use sitestore_core::{
    schema::{FieldDescriptor, FieldModel, FieldType, Role},
    stmt::{Record, Value},
    Error, FieldError, Result,
};

/// Column created once and never re-stamped on update.
const CREATED_AT: &str = "created_at";

/// Untyped request input: a flat, string-keyed map as posted by a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    values: IndexMap<String, String>,
}

/// Which write the input is being extracted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode {
    /// Every required field must be present; defaults apply.
    Insert,

    /// Partial update: absent fields are left untouched.
    Update,
}

impl Input {
    pub fn new() -> Input {
        Input::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Input {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Input {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Input {
        Input {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Converts `input` into typed column values using `model` as the schema.
///
/// Fields the caller's `role` may not write are skipped even when present.
/// Every failing field is reported; on any failure nothing is returned.
pub fn extract(input: &Input, model: &FieldModel, role: Role, mode: ExtractMode) -> Result<Record> {
    let mut record = Record::new();
    let mut errors = vec![];

    for field in model.storage_fields() {
        if !field.is_visible_to(role) || field.ty() == FieldType::AutoDate {
            continue;
        }

        let raw = match input.get(field.name()).and_then(|raw| present(field, raw)) {
            Some(raw) => raw,
            None => {
                let missing = match mode {
                    ExtractMode::Insert => match field.default_value() {
                        Some(default) => {
                            match coerce(field, default) {
                                Ok(value) => {
                                    record.insert(field.name(), value);
                                }
                                Err(message) => errors.push(FieldError::new(field.name(), message)),
                            }
                            continue;
                        }
                        None => field.is_required(),
                    },
                    ExtractMode::Update => field.is_required() && input.contains(field.name()),
                };

                if missing {
                    errors.push(FieldError::new(field.name(), "is required"));
                }
                continue;
            }
        };

        match coerce(field, raw) {
            Ok(value) => {
                record.insert(field.name(), value);
            }
            Err(message) => errors.push(FieldError::new(field.name(), message)),
        }
    }

    if errors.is_empty() {
        Ok(record)
    } else {
        Err(Error::validation(errors))
    }
}

/// Sets every `autodate` column the write should touch to `now`.
pub(crate) fn stamp_autodates(
    model: &FieldModel,
    record: &mut Record,
    mode: ExtractMode,
    now: Timestamp,
) {
    for field in model.storage_fields() {
        if field.ty() != FieldType::AutoDate {
            continue;
        }

        if mode == ExtractMode::Update && field.name() == CREATED_AT {
            continue;
        }

        record.insert(field.name(), now);
    }
}

/// Returns the raw value unless it is blank. Only textarea keeps surrounding
/// whitespace.
fn present<'a>(field: &FieldDescriptor, raw: &'a str) -> Option<&'a str> {
    if raw.trim().is_empty() {
        None
    } else if field.ty() == FieldType::TextArea {
        Some(raw)
    } else {
        Some(raw.trim())
    }
}

fn coerce(field: &FieldDescriptor, raw: &str) -> core::result::Result<Value, String> {
    match field.ty() {
        FieldType::Text | FieldType::TextArea | FieldType::Url | FieldType::Hidden => {
            if let Some(max) = field.max_length() {
                if raw.chars().count() > max {
                    return Err(format!("must be at most {max} characters"));
                }
            }
            Ok(Value::from(raw))
        }
        FieldType::Integer => raw
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| "must be an integer".to_string()),
        FieldType::Radio => {
            let choices = field.choices();

            if let Ok(index) = raw.parse::<usize>() {
                if index < choices.len() {
                    return Ok(Value::I64(index as i64));
                }
            }

            match choices.iter().position(|choice| *choice == raw) {
                Some(index) => Ok(Value::I64(index as i64)),
                None => Err(format!("must be one of {}", choices.join(", "))),
            }
        }
        FieldType::Checkbox => match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "on" | "yes" => Ok(Value::Bool(true)),
            "0" | "false" | "off" | "no" => Ok(Value::Bool(false)),
            _ => Err("must be a checkbox value".to_string()),
        },
        FieldType::Date => raw
            .parse::<Date>()
            .map(Value::from)
            .map_err(|_| "must be a date (YYYY-MM-DD)".to_string()),
        // Never read from input
        FieldType::AutoDate | FieldType::Header => Ok(Value::Null),
    }
}
