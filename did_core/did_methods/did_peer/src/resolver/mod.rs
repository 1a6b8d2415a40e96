use did_doc::schema::did_doc::DidDocument;

use crate::{
    error::DidPeerError, peer_did::generic::AnyPeerDid,
    resolver::options::PeerDidResolutionOptions,
};

pub mod options;

/// Resolves `did:peer:0` and `did:peer:2` identifiers. Everything needed is in the DID itself,
/// so resolution never leaves the process.
#[derive(Default, Debug, Clone, Copy)]
pub struct PeerDidResolver;

impl PeerDidResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(
        &self,
        did: &str,
        options: &PeerDidResolutionOptions,
    ) -> Result<DidDocument, DidPeerError> {
        log::info!(
            "PeerDidResolver::resolve >> resolving {did} with {} keys",
            options.encoding()
        );
        let did_doc = AnyPeerDid::parse(did)?.resolve(options.encoding())?;
        log::info!(
            "PeerDidResolver::resolve >> resolved {} authentication keys, {} agreement keys \
             and {} services",
            did_doc.authentication().len(),
            did_doc.key_agreement().len(),
            did_doc.service().len()
        );
        Ok(did_doc)
    }
}
