pub mod generate;
pub mod generic;
pub mod numalgos;
mod parse;
mod validate;

use std::fmt::Display;

use did_doc::schema::{did_doc::DidDocument, verification_method::VerificationMaterialFormat};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use self::parse::parse_numalgo;
use crate::{
    error::DidPeerError,
    peer_did::numalgos::{Numalgo, ResolvableNumalgo},
};

/// A syntactically valid peer DID of numalgo `N`.
#[derive(Clone, Debug, PartialEq)]
pub struct PeerDid<N: Numalgo> {
    did: String,
    numalgo: N,
}

impl<N: Numalgo> PeerDid<N> {
    pub fn parse<T: Into<String>>(did: T) -> Result<PeerDid<N>, DidPeerError> {
        N::parse(did)
    }

    pub fn did(&self) -> &str {
        &self.did
    }

    pub fn numalgo(&self) -> &N {
        &self.numalgo
    }

    pub(crate) fn from_validated(did: String, numalgo: N) -> Self {
        Self { did, numalgo }
    }
}

impl<N: ResolvableNumalgo> PeerDid<N> {
    pub fn to_did_doc(
        &self,
        encoding: VerificationMaterialFormat,
    ) -> Result<DidDocument, DidPeerError> {
        self.numalgo.resolve(self, encoding)
    }
}

pub trait FromDidDoc: Numalgo {
    fn from_did_doc(did_document: &DidDocument) -> Result<PeerDid<Self>, DidPeerError>;
}

impl<N: FromDidDoc> PeerDid<N> {
    pub fn from_did_doc(did_document: &DidDocument) -> Result<PeerDid<N>, DidPeerError> {
        N::from_did_doc(did_document)
    }
}

impl<N: Numalgo> Display for PeerDid<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.did)
    }
}

impl<N: Numalgo> Serialize for PeerDid<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.did)
    }
}

impl<'de, N: Numalgo> Deserialize<'de> for PeerDid<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let did = String::deserialize(deserializer)?;
        Self::parse(did).map_err(serde::de::Error::custom)
    }
}
