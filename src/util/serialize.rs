// Ciphertext Serialization
// Renders blocks as decimal or big-endian hex strings for display and transport

use crate::rsa::error::Result;
use crate::rsa::RsaBigInt;
use num_bigint::Sign;

/// Format blocks as a bracketed, comma-separated list of decimals
pub fn blocks_to_decimal(blocks: &[RsaBigInt]) -> String {
    let items: Vec<String> = blocks.iter().map(|b| b.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Hex-encode each block's big-endian magnitude
pub fn blocks_to_hex(blocks: &[RsaBigInt]) -> Vec<String> {
    blocks
        .iter()
        .map(|b| hex::encode(b.magnitude().to_bytes_be()))
        .collect()
}

/// Parse hex-encoded big-endian blocks
pub fn blocks_from_hex<S: AsRef<str>>(encoded: &[S]) -> Result<Vec<RsaBigInt>> {
    encoded
        .iter()
        .map(|s| -> Result<RsaBigInt> {
            let bytes = hex::decode(s.as_ref())?;
            Ok(RsaBigInt::from_bytes_be(Sign::Plus, &bytes))
        })
        .collect()
}
