// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod codec;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;
pub mod primality;

pub use bigint::{
    all_coprime, extended_gcd, gcd, modular_exponentiation, modular_inverse, random_in_range,
    RsaBigInt,
};
pub use codec::{
    blocks_to_values, max_block_size, padding_len, text_to_block_values, values_to_blocks,
    values_to_text,
};
pub use decrypt::{decrypt, decrypt_blocks};
pub use encrypt::{encrypt, encrypt_blocks};
pub use error::{Result, RsaError};
pub use keygen::{find_probable_prime, generate_key_pair, RsaKeyPair, RsaPrivateKey, RsaPublicKey};
pub use primality::{extract_twos, is_probable_prime};
