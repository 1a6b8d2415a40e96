pub mod did_doc;
pub mod service;
pub mod types;
pub(crate) mod utils;
pub mod verification_method;
