//! JSON -> schema tree conversion

use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde_json::{Map, Value};
use thiserror::Error;

use super::{SchemaKind, SchemaNode, SchemaType, StateSchema, Validation};

/// Errors raised while reading a schema document.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Schema document has no 'definition'")]
    MissingDefinition,

    #[error("Schema at '{at}' must be a JSON object")]
    NotAnObject { at: String },

    #[error("Schema at '{at}' has no 'type'")]
    MissingType { at: String },

    #[error("Schema at '{at}' has unknown type '{name}'")]
    UnknownType { at: String, name: String },

    #[error("Array schema at '{at}' has no 'items'")]
    MissingItems { at: String },

    #[error("Schema at '{at}' has a 'const' that is not a valid {expected}")]
    InvalidConstant { at: String, expected: SchemaType },

    #[error("Schema at '{at}' has an invalid 'validation' block")]
    InvalidValidation { at: String },
}

impl StateSchema {
    /// Reads a `{"definition": ...}` document.
    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    pub fn from_json_value(value: Value) -> Result<Self, SchemaError> {
        let Value::Object(mut document) = value else {
            return Err(SchemaError::NotAnObject {
                at: "document".to_string(),
            });
        };

        let definition = document
            .remove("definition")
            .ok_or(SchemaError::MissingDefinition)?;
        let root = json_to_node(definition, "definition")?;
        log::debug!("loaded {} schema", root.schema_type());

        Ok(StateSchema::new(root))
    }
}

/// Convert one JSON schema node; `at` locates it for error messages.
pub fn json_to_node(value: Value, at: &str) -> Result<SchemaNode, SchemaError> {
    let Value::Object(mut fields) = value else {
        return Err(SchemaError::NotAnObject { at: at.to_string() });
    };

    let name = match fields.remove("type") {
        Some(Value::String(name)) => name,
        _ => return Err(SchemaError::MissingType { at: at.to_string() }),
    };
    let schema_type = SchemaType::from_name(&name).ok_or_else(|| SchemaError::UnknownType {
        at: at.to_string(),
        name: name.clone(),
    })?;

    let validation = read_validation(&mut fields, at)?;

    let kind = match schema_type {
        SchemaType::Object => {
            let mut properties = Vec::new();
            match fields.remove("properties") {
                None | Some(Value::Null) => {}
                Some(Value::Object(entries)) => {
                    for (key, child) in entries {
                        let child_at = format!("{at}.{key}");
                        properties.push((key, json_to_node(child, &child_at)?));
                    }
                }
                Some(_) => {
                    return Err(SchemaError::NotAnObject {
                        at: format!("{at}.properties"),
                    });
                }
            }
            SchemaKind::Object { properties }
        }
        SchemaType::Array => {
            let items = fields
                .remove("items")
                .ok_or_else(|| SchemaError::MissingItems { at: at.to_string() })?;
            SchemaKind::Array {
                items: Box::new(json_to_node(items, &format!("{at}[]"))?),
            }
        }
        SchemaType::Integer => SchemaKind::Integer {
            constant: read_constant(&mut fields, at, schema_type, Value::as_i64)?,
        },
        SchemaType::Number => SchemaKind::Number {
            constant: read_constant(&mut fields, at, schema_type, |v| {
                v.as_i64()
                    .and_then(Decimal::from_i64)
                    .or_else(|| v.as_f64().and_then(Decimal::from_f64))
            })?,
        },
        SchemaType::Boolean => SchemaKind::Boolean {
            constant: read_constant(&mut fields, at, schema_type, Value::as_bool)?,
        },
        SchemaType::String => SchemaKind::String {
            constant: read_constant(&mut fields, at, schema_type, |v| {
                v.as_str().map(str::to_string)
            })?,
        },
    };

    let mut node = SchemaNode::new(kind);
    node.validation = validation;
    Ok(node)
}

fn read_validation(
    fields: &mut Map<String, Value>,
    at: &str,
) -> Result<Option<Validation>, SchemaError> {
    match fields.remove("validation") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(block)) => match block.get("required") {
            None => Ok(Some(Validation::default())),
            Some(Value::Bool(required)) => Ok(Some(Validation {
                required: *required,
            })),
            Some(_) => Err(SchemaError::InvalidValidation { at: at.to_string() }),
        },
        Some(_) => Err(SchemaError::InvalidValidation { at: at.to_string() }),
    }
}

fn read_constant<T>(
    fields: &mut Map<String, Value>,
    at: &str,
    expected: SchemaType,
    convert: impl Fn(&Value) -> Option<T>,
) -> Result<Option<T>, SchemaError> {
    match fields.remove("const") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => convert(&value)
            .map(Some)
            .ok_or_else(|| SchemaError::InvalidConstant {
                at: at.to_string(),
                expected,
            }),
    }
}
