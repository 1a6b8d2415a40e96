use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::DidPeerError;

static GROUP_NUMALGO_0: &str = r"(0[^.\s]+)";
static GROUP_NUMALGO_2: &str = r"(2(\.[^.\s]+)*)";

pub static PEER_DID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^did:peer:({GROUP_NUMALGO_0}|{GROUP_NUMALGO_2})$"
    ))
    .unwrap()
});

pub fn validate(did: &str) -> Result<(), DidPeerError> {
    if PEER_DID_REGEX.is_match(did) {
        Ok(())
    } else {
        Err(DidPeerError::DidValidationError(format!(
            "Invalid did: {did} because it's not matching peer did regex {}",
            *PEER_DID_REGEX
        )))
    }
}
