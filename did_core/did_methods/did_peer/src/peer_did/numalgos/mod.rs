pub mod kind;
pub mod numalgo0;
pub mod numalgo2;
pub(crate) mod verification_method;

use did_doc::schema::{did_doc::DidDocument, verification_method::VerificationMaterialFormat};

use crate::{
    error::DidPeerError,
    peer_did::{parse::parse_numalgo_char, validate::validate, PeerDid},
};

pub trait Numalgo: Sized + Default {
    const NUMALGO_CHAR: char;

    fn parse<T: Into<String>>(did: T) -> Result<PeerDid<Self>, DidPeerError> {
        let did: String = did.into();
        let numalgo_char = parse_numalgo_char(&did)?;
        if numalgo_char != Self::NUMALGO_CHAR {
            return Err(DidPeerError::InvalidNumalgoCharacter(numalgo_char));
        }
        validate(&did)?;
        Ok(PeerDid::from_validated(did, Self::default()))
    }
}

pub trait ResolvableNumalgo: Numalgo {
    fn resolve(
        &self,
        peer_did: &PeerDid<Self>,
        encoding: VerificationMaterialFormat,
    ) -> Result<DidDocument, DidPeerError>;
}
