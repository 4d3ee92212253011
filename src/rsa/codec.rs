// Block Codec
// Packs character values into big-endian base-256 blocks and back
//
// Short final blocks are filled with random printable characters. The
// filler is not marked, so decoding returns it as part of the text.

use super::bigint::RsaBigInt;
use super::error::{Result, RsaError};
use log::trace;
use num_bigint::Sign;
use num_traits::Signed;
use rand::Rng;
use std::ops::RangeInclusive;

/// Filler values appended to a short final block (printable ASCII)
pub const PADDING_RANGE: RangeInclusive<u32> = 32..=126;

/// Number of filler values needed to round `len` up to a whole block
pub fn padding_len(len: usize, block_size: usize) -> usize {
    match len % block_size {
        0 => 0,
        rem => block_size - rem,
    }
}

/// Largest block size whose blocks always fit below `modulus`,
/// i.e. the largest k with 256^k < modulus
pub fn max_block_size(modulus: &RsaBigInt) -> usize {
    if !modulus.is_positive() {
        return 0;
    }
    let largest_block = modulus - 1u8;
    (largest_block.bits().saturating_sub(1) / 8) as usize
}

/// Reject block sizes that are zero or would let a block reach the modulus
pub fn check_block_size(modulus: &RsaBigInt, block_size: usize) -> Result<()> {
    if block_size == 0 {
        return Err(RsaError::InvalidBlockSize);
    }
    let max = max_block_size(modulus);
    if block_size > max {
        return Err(RsaError::BlockSizeTooLarge { block_size, max });
    }
    Ok(())
}

/// One value per character: its code point
pub fn text_to_block_values(text: &str) -> Vec<u32> {
    text.chars().map(u32::from).collect()
}

/// Characters back from their code points
pub fn values_to_text(values: &[u32]) -> Result<String> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            char::from_u32(value).ok_or(RsaError::InvalidCodePoint { index, value })
        })
        .collect()
}

/// Pack values into blocks of `block_size` base-256 digits, most
/// significant first. Each value must fit in one byte.
pub fn values_to_blocks<R: Rng + ?Sized>(
    values: &[u32],
    block_size: usize,
    rng: &mut R,
) -> Result<Vec<RsaBigInt>> {
    if block_size == 0 {
        return Err(RsaError::InvalidBlockSize);
    }

    let mut digits = values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            u8::try_from(value).map_err(|_| RsaError::InvalidCodePoint { index, value })
        })
        .collect::<Result<Vec<u8>>>()?;

    let filler = padding_len(digits.len(), block_size);
    if filler > 0 {
        trace!("padding {} values with {} filler bytes", digits.len(), filler);
    }
    for _ in 0..filler {
        digits.push(rng.gen_range(PADDING_RANGE) as u8);
    }

    Ok(digits
        .chunks(block_size)
        .map(|chunk| RsaBigInt::from_bytes_be(Sign::Plus, chunk))
        .collect())
}

/// Unpack each block into exactly `block_size` base-256 digits
pub fn blocks_to_values(blocks: &[RsaBigInt], block_size: usize) -> Result<Vec<u32>> {
    if block_size == 0 {
        return Err(RsaError::InvalidBlockSize);
    }

    let mut values = Vec::with_capacity(blocks.len() * block_size);
    for (index, block) in blocks.iter().enumerate() {
        let (sign, bytes) = block.to_bytes_be();
        if sign == Sign::Minus || bytes.len() > block_size {
            return Err(RsaError::BlockTooWide { index, block_size });
        }
        values.extend(std::iter::repeat(0).take(block_size - bytes.len()));
        values.extend(bytes.into_iter().map(u32::from));
    }

    Ok(values)
}
