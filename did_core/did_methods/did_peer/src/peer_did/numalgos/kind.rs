use std::fmt::Display;

use crate::{
    error::DidPeerError,
    peer_did::numalgos::{numalgo0::Numalgo0, numalgo2::Numalgo2, Numalgo},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumalgoKind {
    InceptionKeyWithoutDoc(Numalgo0),
    MultipleInceptionKeys(Numalgo2),
}

impl NumalgoKind {
    pub fn to_char(&self) -> char {
        match self {
            NumalgoKind::InceptionKeyWithoutDoc(_) => Numalgo0::NUMALGO_CHAR,
            NumalgoKind::MultipleInceptionKeys(_) => Numalgo2::NUMALGO_CHAR,
        }
    }
}

impl Display for NumalgoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for NumalgoKind {
    type Error = DidPeerError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            Numalgo0::NUMALGO_CHAR => Ok(NumalgoKind::InceptionKeyWithoutDoc(Numalgo0)),
            Numalgo2::NUMALGO_CHAR => Ok(NumalgoKind::MultipleInceptionKeys(Numalgo2)),
            // genesis doc, short form and long form variants are not handled
            '1' | '3' | '4' => Err(DidPeerError::UnsupportedNumalgo(value)),
            c => Err(DidPeerError::InvalidNumalgoCharacter(c)),
        }
    }
}
