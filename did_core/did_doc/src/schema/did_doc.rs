use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{
    service::Service,
    utils::{optional_array, required_str},
    verification_method::{VerificationMethod, VerificationPurpose},
};
use crate::error::DidDocumentError;

/// DID document of a peer DID. Verification methods are embedded in the relationship they
/// are published under; the order of every list is significant.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DidDocument {
    id: String,
    authentication: Vec<VerificationMethod>,
    key_agreement: Vec<VerificationMethod>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    service: Vec<Service>,
}

impl DidDocument {
    pub fn builder(id: String) -> DidDocumentBuilder {
        DidDocumentBuilder::new(id)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn authentication(&self) -> &[VerificationMethod] {
        self.authentication.as_ref()
    }

    pub fn key_agreement(&self) -> &[VerificationMethod] {
        self.key_agreement.as_ref()
    }

    pub fn service(&self) -> &[Service] {
        self.service.as_ref()
    }

    pub fn verification_methods(&self) -> impl Iterator<Item = &VerificationMethod> {
        self.authentication.iter().chain(self.key_agreement.iter())
    }

    /// Looks a verification method up by its absolute id or by `#fragment`.
    pub fn dereference_key(&self, reference: &str) -> Option<&VerificationMethod> {
        self.verification_methods().find(|vm| {
            vm.id() == reference
                || reference
                    .strip_prefix('#')
                    .and_then(|fragment| {
                        vm.id()
                            .strip_prefix(self.id.as_str())
                            .and_then(|rest| rest.strip_prefix('#'))
                            .map(|vm_fragment| vm_fragment == fragment)
                    })
                    .unwrap_or(false)
        })
    }

    /// Parses a document from its JSON form. Methods are classified by the list they appear
    /// in, which is how `JsonWebKey2020` methods get their purpose.
    pub fn from_value(value: &Value) -> Result<Self, DidDocumentError> {
        let fields = value
            .as_object()
            .ok_or_else(|| DidDocumentError::InvalidField {
                field: "document",
                reason: format!("expected a JSON object, got {value}"),
            })?;
        let id = required_str(fields, "id", "DID document")?;
        let mut builder = DidDocument::builder(id.to_string());
        for method in optional_array(fields, "authentication")? {
            builder = builder.add_authentication(VerificationMethod::from_value(
                method,
                Some(VerificationPurpose::Authentication),
            )?);
        }
        for method in optional_array(fields, "keyAgreement")? {
            builder = builder.add_key_agreement(VerificationMethod::from_value(
                method,
                Some(VerificationPurpose::Agreement),
            )?);
        }
        for service in optional_array(fields, "service")? {
            builder = builder.add_service(Service::from_value(service.clone()));
        }
        Ok(builder.build())
    }

    pub fn from_json(json: &str) -> Result<Self, DidDocumentError> {
        Self::from_value(&serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, DidDocumentError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<'de> Deserialize<'de> for DidDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Default)]
pub struct DidDocumentBuilder {
    id: String,
    authentication: Vec<VerificationMethod>,
    key_agreement: Vec<VerificationMethod>,
    service: Vec<Service>,
}

impl DidDocumentBuilder {
    pub fn new(id: String) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn add_authentication(mut self, method: VerificationMethod) -> Self {
        self.authentication.push(method);
        self
    }

    pub fn add_key_agreement(mut self, method: VerificationMethod) -> Self {
        self.key_agreement.push(method);
        self
    }

    pub fn add_service(mut self, service: Service) -> Self {
        self.service.push(service);
        self
    }

    pub fn build(self) -> DidDocument {
        DidDocument {
            id: self.id,
            authentication: self.authentication,
            key_agreement: self.key_agreement,
            service: self.service,
        }
    }
}
