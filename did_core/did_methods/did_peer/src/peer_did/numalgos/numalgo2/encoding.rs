use base64::Engine;
use did_doc::schema::verification_method::{VerificationMaterial, VerificationPurpose};
use serde_json::Value;

use crate::{
    error::DidPeerError,
    helpers::URL_SAFE_LENIENT,
    peer_did::numalgos::{
        numalgo2::{purpose::ElementPurpose, service_abbreviation::abbreviate_service},
        verification_method::key_from_material,
    },
};

pub(crate) fn append_encoded_key_segments(
    mut did: String,
    authentication: &[VerificationMaterial],
    agreement: &[VerificationMaterial],
) -> Result<String, DidPeerError> {
    for material in authentication {
        did = append_encoded_key_segment(
            did,
            material,
            VerificationPurpose::Authentication,
            ElementPurpose::Verification,
        )?;
    }
    for material in agreement {
        did = append_encoded_key_segment(
            did,
            material,
            VerificationPurpose::Agreement,
            ElementPurpose::Encryption,
        )?;
    }
    Ok(did)
}

/// Appends one `S` element per service, each the condensed service JSON in unpadded base64url.
pub(crate) fn append_encoded_service_segments(
    mut did: String,
    services: impl IntoIterator<Item = Value>,
) -> Result<String, DidPeerError> {
    for service in services {
        let encoded = URL_SAFE_LENIENT.encode(abbreviate_service(service)?);
        did.push_str(&format!(".{}{encoded}", ElementPurpose::Service));
    }
    Ok(did)
}

fn append_encoded_key_segment(
    mut did: String,
    material: &VerificationMaterial,
    purpose: VerificationPurpose,
    element_purpose: ElementPurpose,
) -> Result<String, DidPeerError> {
    let key = key_from_material(material, purpose)?;
    did.push_str(&format!(".{element_purpose}{}", key.fingerprint()));
    Ok(did)
}
