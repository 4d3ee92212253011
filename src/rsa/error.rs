// RSA Error Types
// Every failure the engine can report to its caller

use super::bigint::RsaBigInt;
use thiserror::Error;

/// Result type for RSA operations
pub type Result<T> = std::result::Result<T, RsaError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RsaError {
    #[error("no probable prime found in {attempts} candidates starting at {start}")]
    PrimeSearchExhausted { start: RsaBigInt, attempts: u64 },

    #[error("key generation failed: {source}")]
    KeyGenerationFailed {
        #[source]
        source: Box<RsaError>,
    },

    #[error("could not find a second prime distinct from the first after {attempts} attempts")]
    IndistinctPrimes { attempts: u32 },

    #[error("{value} has no inverse modulo {modulus}")]
    NoModularInverse { value: RsaBigInt, modulus: RsaBigInt },

    #[error("block {index} is not below the modulus")]
    BlockOverflow { index: usize },

    #[error("block {index} does not fit in {block_size} base-256 digits")]
    BlockTooWide { index: usize, block_size: usize },

    #[error("block size {block_size} is too large for the modulus (max {max})")]
    BlockSizeTooLarge { block_size: usize, max: usize },

    #[error("block size must be at least 1")]
    InvalidBlockSize,

    #[error("value {value} at position {index} is not a valid character code")]
    InvalidCodePoint { index: usize, value: u32 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid hex block: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

impl RsaError {
    pub(crate) fn key_generation(source: RsaError) -> Self {
        RsaError::KeyGenerationFailed {
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_generation_wraps_source() {
        let cause = RsaError::PrimeSearchExhausted {
            start: RsaBigInt::from(90u8),
            attempts: 48,
        };
        let err = RsaError::key_generation(cause.clone());

        assert_eq!(
            err.to_string(),
            "key generation failed: no probable prime found in 48 candidates starting at 90"
        );
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), cause.to_string());
    }

    #[test]
    fn test_hex_error_conversion() {
        let err: RsaError = hex::decode("zz").unwrap_err().into();
        assert!(matches!(err, RsaError::InvalidHex(_)));
    }
}
