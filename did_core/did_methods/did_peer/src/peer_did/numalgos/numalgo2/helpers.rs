use base64::Engine;
use did_doc::schema::{
    did_doc::DidDocument,
    service::Service,
    verification_method::{VerificationMaterialFormat, VerificationPurpose},
};
use serde_json::{Map, Value};

use crate::{
    error::DidPeerError,
    helpers::URL_SAFE_LENIENT,
    peer_did::{
        numalgos::{
            numalgo2::{purpose::ElementPurpose, service_abbreviation::expand_service},
            verification_method::verification_method_from_element,
        },
        parse::numalgo_body,
    },
};

pub(crate) fn diddoc_from_peerdid2_elements(
    did: &str,
    encoding: VerificationMaterialFormat,
) -> Result<DidDocument, DidPeerError> {
    let mut builder = DidDocument::builder(did.to_string());
    let mut service_index: usize = 0;

    // the body starts with a separator, so the first split is empty
    for element in numalgo_body(did)?.split('.').skip(1) {
        let mut chars = element.chars();
        let purpose: ElementPurpose = chars
            .next()
            .ok_or_else(|| {
                DidPeerError::DidValidationError(format!(
                    "No purpose code following element separator in '{did}'"
                ))
            })?
            .try_into()?;
        let purposeless_element = chars.as_str();
        log::debug!("Decoding {purpose} element {purposeless_element}");

        builder = match purpose {
            ElementPurpose::Encryption => builder.add_key_agreement(
                verification_method_from_element(
                    purposeless_element,
                    did,
                    VerificationPurpose::Agreement,
                    encoding,
                )?,
            ),
            ElementPurpose::Verification => builder.add_authentication(
                verification_method_from_element(
                    purposeless_element,
                    did,
                    VerificationPurpose::Authentication,
                    encoding,
                )?,
            ),
            ElementPurpose::Service => {
                for service in services_from_element(purposeless_element)? {
                    let service = assign_service_id(service, did, service_index);
                    builder = builder.add_service(Service::from_value(service));
                    service_index += 1;
                }
                builder
            }
        };
    }

    Ok(builder.build())
}

/// A service element holds either a single service or an array of them.
fn services_from_element(element: &str) -> Result<Vec<Value>, DidPeerError> {
    let decoded = URL_SAFE_LENIENT.decode(element)?;
    let services = match serde_json::from_slice(&decoded)? {
        Value::Array(services) => services,
        service => vec![service],
    };
    Ok(services.into_iter().map(expand_service).collect())
}

pub(crate) fn generated_service_id(service_type: &str, index: usize) -> String {
    format!("#{}-{index}", service_type.to_lowercase())
}

/// Type name used for generated ids: the type itself, the first name of a type list, or
/// `service` when neither is a string.
fn id_type_name(fields: &Map<String, Value>) -> &str {
    match fields.get("type") {
        Some(Value::String(service_type)) => service_type.as_str(),
        Some(Value::Array(types)) => types.first().and_then(Value::as_str).unwrap_or("service"),
        _ => "service",
    }
}

/// Makes the id of a decoded service absolute. Services without an id are named after their
/// type and position in the document.
fn assign_service_id(service: Value, did: &str, index: usize) -> Value {
    let Value::Object(mut fields) = service else {
        return service;
    };
    let id = match fields.get("id") {
        Some(Value::String(id)) if id.starts_with('#') => Some(format!("{did}{id}")),
        None => Some(format!(
            "{did}{}",
            generated_service_id(id_type_name(&fields), index)
        )),
        _ => None,
    };
    if let Some(id) = id {
        fields.insert("id".to_string(), Value::String(id));
    }
    Value::Object(fields)
}

/// Reverses `assign_service_id`: generated ids are dropped, ids within `did` become
/// relative again.
pub(crate) fn relativize_service_id(service: Value, did: &str, index: usize) -> Value {
    let Value::Object(mut fields) = service else {
        return service;
    };
    let Some(fragment) = fields
        .get("id")
        .and_then(Value::as_str)
        .and_then(|id| id.strip_prefix(did))
        .filter(|fragment| fragment.starts_with('#'))
        .map(ToString::to_string)
    else {
        return Value::Object(fields);
    };
    if fragment == generated_service_id(id_type_name(&fields), index) {
        fields.remove("id");
    } else {
        fields.insert("id".to_string(), Value::String(fragment));
    }
    Value::Object(fields)
}
