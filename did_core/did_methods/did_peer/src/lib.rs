pub mod error;
mod helpers;
pub mod peer_did;
pub mod resolver;
