use did_doc::schema::{
    did_doc::DidDocument,
    service::Service,
    verification_method::{VerificationMaterial, VerificationMaterialFormat, VerificationMethod},
};
use encoding::{append_encoded_key_segments, append_encoded_service_segments};
use helpers::{diddoc_from_peerdid2_elements, relativize_service_id};
use serde_json::Value;

use crate::{
    error::DidPeerError,
    peer_did::{
        numalgos::{Numalgo, ResolvableNumalgo},
        parse::PEER_DID_PREFIX,
        FromDidDoc, PeerDid,
    },
};

mod encoding;
mod helpers;
mod purpose;
mod service_abbreviation;

/// Multiple inception keys: every key and service of the document is encoded in the DID.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Numalgo2;

impl Numalgo for Numalgo2 {
    const NUMALGO_CHAR: char = '2';
}

impl ResolvableNumalgo for Numalgo2 {
    fn resolve(
        &self,
        peer_did: &PeerDid<Self>,
        encoding: VerificationMaterialFormat,
    ) -> Result<DidDocument, DidPeerError> {
        diddoc_from_peerdid2_elements(peer_did.did(), encoding)
    }
}

impl PeerDid<Numalgo2> {
    /// Encodes authentication keys as `V` elements, then agreement keys as `E` elements, then
    /// each service as its own `S` element.
    pub fn from_materials(
        authentication: &[VerificationMaterial],
        agreement: &[VerificationMaterial],
        services: &[Service],
    ) -> Result<PeerDid<Numalgo2>, DidPeerError> {
        let services = services
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        Self::encode(authentication, agreement, services)
    }

    fn encode(
        authentication: &[VerificationMaterial],
        agreement: &[VerificationMaterial],
        services: Vec<Value>,
    ) -> Result<PeerDid<Numalgo2>, DidPeerError> {
        let mut did = format!("{PEER_DID_PREFIX}{}", Numalgo2::NUMALGO_CHAR);
        did = append_encoded_key_segments(did, authentication, agreement)?;
        did = append_encoded_service_segments(did, services)?;
        PeerDid::<Numalgo2>::parse(did)
    }
}

impl FromDidDoc for Numalgo2 {
    fn from_did_doc(did_document: &DidDocument) -> Result<PeerDid<Numalgo2>, DidPeerError> {
        let materials = |methods: &[VerificationMethod]| {
            methods
                .iter()
                .map(|method| method.material().clone())
                .collect::<Vec<_>>()
        };
        let services = did_document
            .service()
            .iter()
            .enumerate()
            .map(|(index, service)| {
                serde_json::to_value(service)
                    .map(|service| relativize_service_id(service, did_document.id(), index))
            })
            .collect::<Result<Vec<_>, _>>()?;
        PeerDid::<Numalgo2>::encode(
            &materials(did_document.authentication()),
            &materials(did_document.key_agreement()),
            services,
        )
    }
}
