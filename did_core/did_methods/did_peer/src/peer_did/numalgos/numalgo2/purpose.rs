use std::fmt::Display;

use crate::error::DidPeerError;

/// Purpose code leading every element of a `did:peer:2` identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ElementPurpose {
    Encryption,
    Verification,
    Service,
}

impl TryFrom<char> for ElementPurpose {
    type Error = DidPeerError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'E' => Ok(ElementPurpose::Encryption),
            'V' => Ok(ElementPurpose::Verification),
            'S' => Ok(ElementPurpose::Service),
            c => Err(DidPeerError::UnsupportedPurpose(c)),
        }
    }
}

impl From<ElementPurpose> for char {
    fn from(purpose: ElementPurpose) -> Self {
        match purpose {
            ElementPurpose::Encryption => 'E',
            ElementPurpose::Verification => 'V',
            ElementPurpose::Service => 'S',
        }
    }
}

impl Display for ElementPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}
