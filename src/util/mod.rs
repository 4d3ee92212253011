// Utilities around the RSA core: session configuration and block serialization

pub mod config;
pub mod serialize;

pub use config::RsaConfig;
pub use serialize::{blocks_from_hex, blocks_to_decimal, blocks_to_hex};
