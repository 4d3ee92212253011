// RSA Decryption Implementation
// block^d mod n -> base-256 digits -> text

use super::bigint::RsaBigInt;
use super::codec::{blocks_to_values, check_block_size, values_to_text};
use super::encrypt::apply_exponent;
use super::error::Result;
use log::trace;

/// Decrypt ciphertext blocks with the private key (n, d), leaving them packed
pub fn decrypt_blocks(
    cipher_blocks: &[RsaBigInt],
    n: &RsaBigInt,
    d: &RsaBigInt,
) -> Result<Vec<RsaBigInt>> {
    apply_exponent(cipher_blocks, d, n)
}

/// Decrypt ciphertext blocks to a string
///
/// Any filler appended during encryption is returned as trailing text.
pub fn decrypt(
    cipher_blocks: &[RsaBigInt],
    n: &RsaBigInt,
    d: &RsaBigInt,
    block_size: usize,
) -> Result<String> {
    check_block_size(n, block_size)?;

    let blocks = decrypt_blocks(cipher_blocks, n, d)?;
    trace!("decrypted {} blocks of {} values", blocks.len(), block_size);

    let values = blocks_to_values(&blocks, block_size)?;
    values_to_text(&values)
}
