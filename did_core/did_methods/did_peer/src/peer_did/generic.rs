use std::fmt::Display;

use did_doc::schema::{did_doc::DidDocument, verification_method::VerificationMaterialFormat};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::PeerDid;
use crate::{
    error::DidPeerError,
    peer_did::{
        numalgos::{kind::NumalgoKind, numalgo0::Numalgo0, numalgo2::Numalgo2},
        parse::parse_numalgo,
        validate::validate,
    },
};

/// A peer DID of any supported numalgo, chosen at runtime from its numalgo character.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyPeerDid {
    Numalgo0(PeerDid<Numalgo0>),
    Numalgo2(PeerDid<Numalgo2>),
}

impl AnyPeerDid {
    pub fn parse<T: Into<String>>(did: T) -> Result<AnyPeerDid, DidPeerError> {
        let did: String = did.into();
        log::info!("AnyPeerDid::parse >> {did}");
        let numalgo = parse_numalgo(&did)?;
        log::info!("AnyPeerDid::parse >> numalgo {numalgo}");
        validate(&did)?;
        let parsed = match numalgo {
            NumalgoKind::InceptionKeyWithoutDoc(numalgo0) => {
                AnyPeerDid::Numalgo0(PeerDid::from_validated(did, numalgo0))
            }
            NumalgoKind::MultipleInceptionKeys(numalgo2) => {
                AnyPeerDid::Numalgo2(PeerDid::from_validated(did, numalgo2))
            }
        };
        Ok(parsed)
    }

    pub fn numalgo(&self) -> NumalgoKind {
        match self {
            AnyPeerDid::Numalgo0(peer_did) => {
                NumalgoKind::InceptionKeyWithoutDoc(*peer_did.numalgo())
            }
            AnyPeerDid::Numalgo2(peer_did) => {
                NumalgoKind::MultipleInceptionKeys(*peer_did.numalgo())
            }
        }
    }

    pub fn did(&self) -> &str {
        match self {
            AnyPeerDid::Numalgo0(peer_did) => peer_did.did(),
            AnyPeerDid::Numalgo2(peer_did) => peer_did.did(),
        }
    }

    pub fn resolve(
        &self,
        encoding: VerificationMaterialFormat,
    ) -> Result<DidDocument, DidPeerError> {
        match self {
            AnyPeerDid::Numalgo0(peer_did) => peer_did.to_did_doc(encoding),
            AnyPeerDid::Numalgo2(peer_did) => peer_did.to_did_doc(encoding),
        }
    }
}

impl From<PeerDid<Numalgo0>> for AnyPeerDid {
    fn from(peer_did: PeerDid<Numalgo0>) -> Self {
        AnyPeerDid::Numalgo0(peer_did)
    }
}

impl From<PeerDid<Numalgo2>> for AnyPeerDid {
    fn from(peer_did: PeerDid<Numalgo2>) -> Self {
        AnyPeerDid::Numalgo2(peer_did)
    }
}

impl Display for AnyPeerDid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.did())
    }
}

impl Serialize for AnyPeerDid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.did())
    }
}

impl<'de> Deserialize<'de> for AnyPeerDid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let did = String::deserialize(deserializer)?;
        Self::parse(did).map_err(serde::de::Error::custom)
    }
}
