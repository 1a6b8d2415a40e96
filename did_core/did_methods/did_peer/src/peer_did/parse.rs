use super::numalgos::kind::NumalgoKind;
use crate::error::DidPeerError;

pub(crate) const PEER_DID_PREFIX: &str = "did:peer:";

pub(crate) fn parse_numalgo_char(did: &str) -> Result<char, DidPeerError> {
    did.strip_prefix(PEER_DID_PREFIX)
        .ok_or_else(|| {
            DidPeerError::DidValidationError(format!("Invalid did: {did} is not a peer did"))
        })?
        .chars()
        .next()
        .ok_or_else(|| {
            DidPeerError::DidValidationError(format!(
                "Invalid did: unable to read numalgo character in did {did}"
            ))
        })
}

/// Everything after the numalgo character, `z6Mk...` for numalgo 0 and `.Ez6LS...` for
/// numalgo 2.
pub(crate) fn numalgo_body(did: &str) -> Result<&str, DidPeerError> {
    let numalgo_char = parse_numalgo_char(did)?;
    Ok(&did[PEER_DID_PREFIX.len() + numalgo_char.len_utf8()..])
}

pub fn parse_numalgo(did: &str) -> Result<NumalgoKind, DidPeerError> {
    parse_numalgo_char(did)?.try_into()
}
