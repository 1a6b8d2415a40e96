use did_doc::schema::service::DIDCOMM_MESSAGING;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::DidPeerError;

const DIDCOMM_MESSAGING_ABBREVIATED: &str = "dm";

// (abbreviated, expanded)
const SERVICE_KEYS: [(&str, &str); 4] = [
    ("t", "type"),
    ("s", "serviceEndpoint"),
    ("r", "routingKeys"),
    ("a", "accept"),
];

const ENDPOINT_KEYS: [(&str, &str); 2] = [("r", "routingKeys"), ("a", "accept")];

#[derive(Serialize, Debug)]
struct ServiceAbbreviatedDidPeer2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Value>,
    #[serde(rename = "t", skip_serializing_if = "Option::is_none")]
    service_type: Option<Value>,
    #[serde(rename = "s", skip_serializing_if = "Option::is_none")]
    service_endpoint: Option<EndpointAbbreviatedDidPeer2>,
    #[serde(rename = "r", skip_serializing_if = "Option::is_none")]
    routing_keys: Option<Value>,
    #[serde(rename = "a", skip_serializing_if = "Option::is_none")]
    accept: Option<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
enum EndpointAbbreviatedDidPeer2 {
    Object(ServiceEndpointAbbreviatedDidPeer2),
    Uri(Value),
}

#[derive(Serialize, Debug)]
struct ServiceEndpointAbbreviatedDidPeer2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    uri: Option<Value>,
    #[serde(rename = "a", skip_serializing_if = "Option::is_none")]
    accept: Option<Value>,
    #[serde(rename = "r", skip_serializing_if = "Option::is_none")]
    routing_keys: Option<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Restores the full member names of a service decoded from an `S` element. Anything that is
/// not a JSON object is returned untouched.
pub(crate) fn expand_service(service: Value) -> Value {
    let Value::Object(fields) = service else {
        return service;
    };
    let mut fields = rename_keys(fields, &SERVICE_KEYS, false);
    if let Some(service_type) = fields.get_mut("type") {
        *service_type = expand_type(service_type.take());
    }
    if let Some(Value::Object(endpoint)) = fields.get_mut("serviceEndpoint") {
        *endpoint = rename_keys(std::mem::take(endpoint), &ENDPOINT_KEYS, false);
    }
    Value::Object(fields)
}

/// Serializes a service in its condensed form, members ordered `id, t, s, r, a`.
pub(crate) fn abbreviate_service(service: Value) -> Result<Vec<u8>, DidPeerError> {
    let Value::Object(fields) = service else {
        return Ok(serde_json::to_vec(&service)?);
    };
    // a literal `t` or `s` member next to its long form is kept as is
    let literal_type = has_both(&fields, "t", "type");
    let literal_endpoint = has_both(&fields, "s", "serviceEndpoint");
    let mut extra = rename_keys(fields, &SERVICE_KEYS, true);
    let abbreviated = ServiceAbbreviatedDidPeer2 {
        id: extra.remove("id"),
        service_type: extra
            .remove("t")
            .map(|service_type| match literal_type {
                true => service_type,
                false => abbreviate_type(service_type),
            }),
        service_endpoint: extra.remove("s").map(|endpoint| match literal_endpoint {
            true => EndpointAbbreviatedDidPeer2::Uri(endpoint),
            false => abbreviate_endpoint(endpoint),
        }),
        routing_keys: extra.remove("r"),
        accept: extra.remove("a"),
        extra,
    };
    Ok(serde_json::to_vec(&abbreviated)?)
}

fn abbreviate_endpoint(endpoint: Value) -> EndpointAbbreviatedDidPeer2 {
    let Value::Object(fields) = endpoint else {
        return EndpointAbbreviatedDidPeer2::Uri(endpoint);
    };
    let mut extra = rename_keys(fields, &ENDPOINT_KEYS, true);
    EndpointAbbreviatedDidPeer2::Object(ServiceEndpointAbbreviatedDidPeer2 {
        uri: extra.remove("uri"),
        accept: extra.remove("a"),
        routing_keys: extra.remove("r"),
        extra,
    })
}

/// Renames members between their short and long names. A member whose target name is already
/// taken keeps its own name, so no value is overwritten.
fn rename_keys(
    fields: Map<String, Value>,
    renames: &[(&str, &str)],
    abbreviate: bool,
) -> Map<String, Value> {
    let applicable: Vec<(&str, &str)> = renames
        .iter()
        .map(|&(short, long)| if abbreviate { (long, short) } else { (short, long) })
        .filter(|(from, to)| fields.contains_key(*from) && !fields.contains_key(*to))
        .collect();
    fields
        .into_iter()
        .map(|(key, value)| {
            let renamed = applicable
                .iter()
                .find(|(from, _)| key == *from)
                .map(|(_, to)| (*to).to_string());
            (renamed.unwrap_or(key), value)
        })
        .collect()
}

fn has_both(fields: &Map<String, Value>, short: &str, long: &str) -> bool {
    fields.contains_key(short) && fields.contains_key(long)
}

fn expand_type(service_type: Value) -> Value {
    map_type_names(service_type, DIDCOMM_MESSAGING_ABBREVIATED, DIDCOMM_MESSAGING)
}

fn abbreviate_type(service_type: Value) -> Value {
    map_type_names(service_type, DIDCOMM_MESSAGING, DIDCOMM_MESSAGING_ABBREVIATED)
}

fn map_type_names(service_type: Value, from: &str, to: &str) -> Value {
    match service_type {
        Value::String(name) if name == from => Value::String(to.to_string()),
        Value::Array(names) => Value::Array(
            names
                .into_iter()
                .map(|name| map_type_names(name, from, to))
                .collect(),
        ),
        other => other,
    }
}
