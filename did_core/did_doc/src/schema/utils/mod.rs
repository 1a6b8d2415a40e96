use serde_json::{Map, Value};

use crate::error::DidDocumentError;

pub(crate) fn required_str<'a>(
    fields: &'a Map<String, Value>,
    field: &'static str,
    context: &str,
) -> Result<&'a str, DidDocumentError> {
    fields
        .get(field)
        .ok_or_else(|| DidDocumentError::MissingField {
            field,
            context: context.to_string(),
        })?
        .as_str()
        .ok_or_else(|| DidDocumentError::InvalidField {
            field,
            reason: "expected a string".to_string(),
        })
}

pub(crate) fn optional_array<'a>(
    fields: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a [Value], DidDocumentError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(values)) => Ok(values),
        Some(other) => Err(DidDocumentError::InvalidField {
            field,
            reason: format!("expected an array, got {other}"),
        }),
    }
}
