//! Textbook RSA: Miller-Rabin key generation, modular arithmetic and a
//! base-256 block codec for turning text into encryptable integers.
//!
//! This is a teaching engine. It has no standard padding scheme and no
//! side-channel hardening.

pub mod rsa;
pub mod util;

pub use rsa::{RsaError, RsaKeyPair, RsaPrivateKey, RsaPublicKey};
pub use util::RsaConfig;
