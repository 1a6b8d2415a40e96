use did_doc::schema::{service::Service, verification_method::VerificationMaterial};

use crate::{
    error::DidPeerError,
    peer_did::{
        generic::AnyPeerDid,
        numalgos::{kind::NumalgoKind, numalgo0::Numalgo0, numalgo2::Numalgo2},
        PeerDid,
    },
};

/// Builds a peer DID of the requested numalgo. Numalgo 0 takes exactly one authentication
/// material and nothing else.
pub fn generate_peer_did(
    numalgo: char,
    authentication: &[VerificationMaterial],
    key_agreement: &[VerificationMaterial],
    services: &[Service],
) -> Result<AnyPeerDid, DidPeerError> {
    let peer_did: AnyPeerDid = match NumalgoKind::try_from(numalgo)? {
        NumalgoKind::InceptionKeyWithoutDoc(_) => {
            let [inception_key] = authentication else {
                return Err(DidPeerError::InvalidInceptionMaterial(format!(
                    "numalgo 0 requires exactly one authentication key, got {}",
                    authentication.len()
                )));
            };
            if !key_agreement.is_empty() || !services.is_empty() {
                return Err(DidPeerError::InvalidInceptionMaterial(
                    "numalgo 0 can not encode key agreement keys or services".to_string(),
                ));
            }
            PeerDid::<Numalgo0>::from_inception_key(inception_key)?.into()
        }
        NumalgoKind::MultipleInceptionKeys(_) => {
            PeerDid::<Numalgo2>::from_materials(authentication, key_agreement, services)?.into()
        }
    };
    log::debug!("Generated peer did {peer_did}");
    Ok(peer_did)
}
