mod didcomm;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub use self::didcomm::{DidCommService, ServiceEndpoint, ServiceEndpointObject};

pub const DIDCOMM_MESSAGING: &str = "DIDCommMessaging";

/// A service entry. Entries that are not well formed `DIDCommMessaging` services are kept
/// verbatim instead of being rejected.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Service {
    DidCommMessaging(DidCommService),
    Other(Value),
}

impl Service {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut fields)
                if fields.get("type").and_then(Value::as_str) == Some(DIDCOMM_MESSAGING) =>
            {
                let original = fields.clone();
                fields.remove("type");
                match serde_json::from_value::<DidCommService>(Value::Object(fields)) {
                    Ok(service) => Service::DidCommMessaging(service),
                    Err(err) => {
                        log::debug!(
                            "Keeping malformed {DIDCOMM_MESSAGING} service as opaque value: {err}"
                        );
                        Service::Other(Value::Object(original))
                    }
                }
            }
            other => Service::Other(other),
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Service::DidCommMessaging(service) => service.id(),
            Service::Other(value) => value.get("id").and_then(Value::as_str),
        }
    }

    pub fn service_type(&self) -> Option<&str> {
        match self {
            Service::DidCommMessaging(_) => Some(DIDCOMM_MESSAGING),
            Service::Other(value) => value.get("type").and_then(Value::as_str),
        }
    }
}

impl From<DidCommService> for Service {
    fn from(service: DidCommService) -> Self {
        Service::DidCommMessaging(service)
    }
}

impl<'de> Deserialize<'de> for Service {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}
