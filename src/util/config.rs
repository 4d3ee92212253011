// Session Configuration
// Parameters for one key-generation and encryption session

use crate::rsa::codec::check_block_size;
use crate::rsa::error::{Result, RsaError};
use crate::rsa::keygen::{generate_key_pair, RsaKeyPair};
use crate::rsa::RsaBigInt;
use rand::Rng;

/// Prime search range, Miller-Rabin rounds and block size
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaConfig {
    pub low: RsaBigInt,
    pub high: RsaBigInt,
    pub rounds: u32,
    pub block_size: usize,
}

impl Default for RsaConfig {
    fn default() -> Self {
        Self {
            low: num_traits::pow(RsaBigInt::from(10u8), 100),
            high: num_traits::pow(RsaBigInt::from(10u8), 101),
            rounds: 50,
            block_size: 15,
        }
    }
}

impl RsaConfig {
    pub fn with_range(mut self, low: RsaBigInt, high: RsaBigInt) -> Self {
        self.low = low;
        self.high = high;
        self
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.low < RsaBigInt::from(2u8) {
            return Err(RsaError::InvalidArgument(format!(
                "prime search range must start at 2 or above, got {}",
                self.low
            )));
        }
        if self.low > self.high {
            return Err(RsaError::InvalidArgument(format!(
                "empty prime search range [{}, {}]",
                self.low, self.high
            )));
        }
        if self.rounds == 0 {
            return Err(RsaError::InvalidArgument(
                "Miller-Rabin needs at least one round".to_string(),
            ));
        }
        if self.block_size == 0 {
            return Err(RsaError::InvalidBlockSize);
        }
        Ok(())
    }

    /// Generate a key pair and confirm the configured block size fits it
    pub fn generate_key_pair<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RsaKeyPair> {
        self.validate()?;
        let keypair = generate_key_pair(&self.low, &self.high, self.rounds, rng)?;
        check_block_size(&keypair.public_key.n, self.block_size)?;
        Ok(keypair)
    }
}
