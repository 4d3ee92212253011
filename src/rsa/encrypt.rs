// RSA Encryption Implementation
// Text -> block values -> base-256 blocks -> block^e mod n

use super::bigint::{modular_exponentiation, RsaBigInt};
use super::codec::{check_block_size, text_to_block_values, values_to_blocks};
use super::error::{Result, RsaError};
use log::trace;
use num_traits::Signed;
use rand::Rng;

/// Raise every block to `exponent` mod `modulus`.
/// Blocks must already lie in [0, modulus).
pub(crate) fn apply_exponent(
    blocks: &[RsaBigInt],
    exponent: &RsaBigInt,
    modulus: &RsaBigInt,
) -> Result<Vec<RsaBigInt>> {
    blocks
        .iter()
        .enumerate()
        .map(|(index, block)| {
            if block.is_negative() || block >= modulus {
                return Err(RsaError::BlockOverflow { index });
            }
            modular_exponentiation(block, exponent, modulus)
        })
        .collect()
}

/// Encrypt already-packed plaintext blocks with the public key (n, e)
pub fn encrypt_blocks(
    blocks: &[RsaBigInt],
    n: &RsaBigInt,
    e: &RsaBigInt,
) -> Result<Vec<RsaBigInt>> {
    apply_exponent(blocks, e, n)
}

/// Encrypt a string with the public key (n, e)
///
/// Produces ceil(chars / block_size) ciphertext blocks. `block_size` must
/// satisfy 256^block_size < n so that no block can reach the modulus.
pub fn encrypt<R: Rng + ?Sized>(
    message: &str,
    n: &RsaBigInt,
    e: &RsaBigInt,
    block_size: usize,
    rng: &mut R,
) -> Result<Vec<RsaBigInt>> {
    check_block_size(n, block_size)?;

    let values = text_to_block_values(message);
    let blocks = values_to_blocks(&values, block_size, rng)?;
    trace!("encrypting {} blocks of {} values", blocks.len(), block_size);

    encrypt_blocks(&blocks, n, e)
}
