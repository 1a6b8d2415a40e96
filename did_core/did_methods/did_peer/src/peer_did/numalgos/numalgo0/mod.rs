use did_doc::schema::{
    did_doc::DidDocument,
    verification_method::{VerificationMaterial, VerificationMaterialFormat, VerificationPurpose},
};

use crate::{
    error::DidPeerError,
    peer_did::{
        numalgos::{
            verification_method::{key_from_material, verification_method_from_element},
            Numalgo, ResolvableNumalgo,
        },
        parse::{numalgo_body, PEER_DID_PREFIX},
        FromDidDoc, PeerDid,
    },
};

/// Inception key without doc: the DID is the multibase encoded Ed25519 key itself.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Numalgo0;

impl Numalgo for Numalgo0 {
    const NUMALGO_CHAR: char = '0';
}

impl ResolvableNumalgo for Numalgo0 {
    fn resolve(
        &self,
        peer_did: &PeerDid<Self>,
        encoding: VerificationMaterialFormat,
    ) -> Result<DidDocument, DidPeerError> {
        diddoc_from_inception_key(peer_did.did(), encoding)
    }
}

fn diddoc_from_inception_key(
    did: &str,
    encoding: VerificationMaterialFormat,
) -> Result<DidDocument, DidPeerError> {
    let encoded_key = numalgo_body(did)?;
    log::debug!("Resolving numalgo 0 inception key {encoded_key}");
    // the inception key is published for authentication only
    let authentication = verification_method_from_element(
        encoded_key,
        did,
        VerificationPurpose::Authentication,
        encoding,
    )?;
    Ok(DidDocument::builder(did.to_string())
        .add_authentication(authentication)
        .build())
}

impl PeerDid<Numalgo0> {
    pub fn from_inception_key(
        material: &VerificationMaterial,
    ) -> Result<PeerDid<Numalgo0>, DidPeerError> {
        let key = key_from_material(material, VerificationPurpose::Authentication)?;
        PeerDid::<Numalgo0>::parse(format!(
            "{PEER_DID_PREFIX}{}{}",
            Numalgo0::NUMALGO_CHAR,
            key.fingerprint()
        ))
    }
}

impl FromDidDoc for Numalgo0 {
    fn from_did_doc(did_document: &DidDocument) -> Result<PeerDid<Numalgo0>, DidPeerError> {
        if !did_document.key_agreement().is_empty() || !did_document.service().is_empty() {
            return Err(DidPeerError::InvalidInceptionMaterial(
                "numalgo 0 document can not carry key agreement keys or services".to_string(),
            ));
        }
        match did_document.authentication() {
            [inception_key] => PeerDid::<Numalgo0>::from_inception_key(inception_key.material()),
            methods => Err(DidPeerError::InvalidInceptionMaterial(format!(
                "numalgo 0 requires exactly one authentication key, got {}",
                methods.len()
            ))),
        }
    }
}
