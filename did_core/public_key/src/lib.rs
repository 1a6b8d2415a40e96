mod error;
mod key;
mod key_type;

pub use error::{PublicKeyError, VarintDecodingError};
pub use key::Key;
pub use key_type::KeyType;
