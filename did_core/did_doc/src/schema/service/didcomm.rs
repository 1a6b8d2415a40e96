use std::collections::HashMap;

use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use serde_json::Value;
use typed_builder::TypedBuilder;

use super::DIDCOMM_MESSAGING;

/// Either a plain URI or the DIDComm v2 endpoint object.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ServiceEndpoint {
    Uri(String),
    Object(ServiceEndpointObject),
}

impl ServiceEndpoint {
    pub fn uri(&self) -> &str {
        match self {
            ServiceEndpoint::Uri(uri) => uri,
            ServiceEndpoint::Object(object) => object.uri(),
        }
    }
}

impl From<String> for ServiceEndpoint {
    fn from(uri: String) -> Self {
        ServiceEndpoint::Uri(uri)
    }
}

impl From<&str> for ServiceEndpoint {
    fn from(uri: &str) -> Self {
        ServiceEndpoint::Uri(uri.to_string())
    }
}

impl From<ServiceEndpointObject> for ServiceEndpoint {
    fn from(object: ServiceEndpointObject) -> Self {
        ServiceEndpoint::Object(object)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, TypedBuilder)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceEndpointObject {
    #[builder(setter(into))]
    uri: String,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    accept: Vec<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    routing_keys: Vec<String>,
}

impl ServiceEndpointObject {
    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn accept(&self) -> &[String] {
        &self.accept
    }

    pub fn routing_keys(&self) -> &[String] {
        &self.routing_keys
    }
}

/// `DIDCommMessaging` service. The `type` member is implied by the struct and never stored.
#[derive(Deserialize, Clone, Debug, PartialEq, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct DidCommService {
    #[builder(default, setter(into, strip_option))]
    id: Option<String>,
    #[builder(setter(into))]
    service_endpoint: ServiceEndpoint,
    #[builder(default, setter(strip_option))]
    routing_keys: Option<Vec<String>>,
    #[builder(default, setter(strip_option))]
    accept: Option<Vec<String>>,
    #[builder(default)]
    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

impl DidCommService {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn service_endpoint(&self) -> &ServiceEndpoint {
        &self.service_endpoint
    }

    pub fn routing_keys(&self) -> &[String] {
        self.routing_keys.as_deref().unwrap_or_default()
    }

    pub fn accept(&self) -> &[String] {
        self.accept.as_deref().unwrap_or_default()
    }

    pub fn extra(&self) -> &HashMap<String, Value> {
        &self.extra
    }

    pub fn extra_field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

impl Serialize for DidCommService {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        if let Some(id) = &self.id {
            map.serialize_entry("id", id)?;
        }
        map.serialize_entry("type", DIDCOMM_MESSAGING)?;
        map.serialize_entry("serviceEndpoint", &self.service_endpoint)?;
        if let Some(routing_keys) = &self.routing_keys {
            map.serialize_entry("routingKeys", routing_keys)?;
        }
        if let Some(accept) = &self.accept {
            map.serialize_entry("accept", accept)?;
        }
        for (key, value) in self.extra.iter().filter(|(key, _)| key.as_str() != "type") {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
