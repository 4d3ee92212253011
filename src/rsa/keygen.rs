// RSA Key Generation
// Searches a range for two probable primes and derives an RSA key pair

use super::bigint::{gcd, modular_inverse, random_in_range, RsaBigInt};
use super::decrypt::decrypt;
use super::encrypt::encrypt;
use super::error::{Result, RsaError};
use super::primality::is_probable_prime;
use log::{debug, warn};
use num_traits::{One, ToPrimitive};
use rand::Rng;
use std::fmt;

/// Attempts at drawing a second prime before giving up on p != q
pub const MAX_DISTINCT_PRIME_ATTEMPTS: u32 = 64;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub n: RsaBigInt, // Modulus
    pub e: RsaBigInt, // Public exponent
}

/// RSA Private Key
#[derive(Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub n: RsaBigInt, // Modulus (same as public)
    pub d: RsaBigInt, // Private exponent
    pub p: RsaBigInt, // First prime factor
    pub q: RsaBigInt, // Second prime factor
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
}

impl RsaPublicKey {
    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Encrypt a message using this public key
    pub fn encrypt<R: Rng + ?Sized>(
        &self,
        message: &str,
        block_size: usize,
        rng: &mut R,
    ) -> Result<Vec<RsaBigInt>> {
        encrypt(message, &self.n, &self.e, block_size, rng)
    }
}

impl RsaPrivateKey {
    /// Euler's totient (p-1)(q-1)
    pub fn phi(&self) -> RsaBigInt {
        (&self.p - 1u8) * (&self.q - 1u8)
    }

    /// Decrypt ciphertext blocks using this private key
    pub fn decrypt(&self, cipher_blocks: &[RsaBigInt], block_size: usize) -> Result<String> {
        decrypt(cipher_blocks, &self.n, &self.d, block_size)
    }
}

impl fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("n", &self.n)
            .field("d", &"<redacted>")
            .field("p", &"<redacted>")
            .field("q", &"<redacted>")
            .finish()
    }
}

impl RsaKeyPair {
    /// Get the bit length of the key
    pub fn bit_length(&self) -> u64 {
        self.public_key.bit_length()
    }

    /// The (n, e, d) triple
    pub fn triple(&self) -> (&RsaBigInt, &RsaBigInt, &RsaBigInt) {
        (&self.public_key.n, &self.public_key.e, &self.private_key.d)
    }
}

/// Natural logarithm of a positive big integer, accurate to f64 precision
fn ln(x: &RsaBigInt) -> f64 {
    let shift = x.bits().saturating_sub(f64::MANTISSA_DIGITS as u64);
    let top = (x >> shift).to_f64().unwrap_or(f64::MAX);
    top.ln() + shift as f64 * std::f64::consts::LN_2
}

/// Candidates scanned from `start` before the search gives up.
/// Scales with ln(start), the expected gap between primes near start.
pub fn search_budget(start: &RsaBigInt) -> u64 {
    (10.0 * ln(start) + 3.0).max(0.0) as u64
}

/// Test start, start+1, ... for at most `budget` candidates
fn scan_for_prime<R: Rng + ?Sized>(
    start: &RsaBigInt,
    rounds: u32,
    budget: u64,
    rng: &mut R,
) -> Result<RsaBigInt> {
    let mut candidate = start.clone();
    for attempt in 1..=budget {
        if is_probable_prime(&candidate, rounds, rng)? {
            debug!("probable prime found after {} candidates", attempt);
            return Ok(candidate);
        }
        candidate += 1u8;
    }

    warn!("prime search from {} exhausted after {} candidates", start, budget);
    Err(RsaError::PrimeSearchExhausted {
        start: start.clone(),
        attempts: budget,
    })
}

/// Find a probable prime starting from a random point in [low, high].
/// The result may lie slightly above `high`, since the scan moves upward.
pub fn find_probable_prime<R: Rng + ?Sized>(
    low: &RsaBigInt,
    high: &RsaBigInt,
    rounds: u32,
    rng: &mut R,
) -> Result<RsaBigInt> {
    if low < &RsaBigInt::from(2u8) {
        return Err(RsaError::InvalidArgument(format!(
            "prime search range must start at 2 or above, got {}",
            low
        )));
    }

    let start = random_in_range(rng, low, high)?;
    let budget = search_budget(&start);
    scan_for_prime(&start, rounds, budget, rng)
}

fn find_key_prime<R: Rng + ?Sized>(
    low: &RsaBigInt,
    high: &RsaBigInt,
    rounds: u32,
    rng: &mut R,
) -> Result<RsaBigInt> {
    find_probable_prime(low, high, rounds, rng).map_err(|err| match err {
        RsaError::PrimeSearchExhausted { .. } => RsaError::key_generation(err),
        other => other,
    })
}

/// Generate an RSA key pair from two distinct probable primes in [low, high]
///
/// The public exponent is drawn uniformly from [1, φ] until it is coprime
/// to φ = (p-1)(q-1); d is its inverse modulo φ.
pub fn generate_key_pair<R: Rng + ?Sized>(
    low: &RsaBigInt,
    high: &RsaBigInt,
    rounds: u32,
    rng: &mut R,
) -> Result<RsaKeyPair> {
    let p = find_key_prime(low, high, rounds, rng)?;

    let mut q = None;
    for _ in 0..MAX_DISTINCT_PRIME_ATTEMPTS {
        let candidate = find_key_prime(low, high, rounds, rng)?;
        if candidate != p {
            q = Some(candidate);
            break;
        }
    }
    let q = q.ok_or_else(|| {
        RsaError::key_generation(RsaError::IndistinctPrimes {
            attempts: MAX_DISTINCT_PRIME_ATTEMPTS,
        })
    })?;

    let n = &p * &q;
    let phi = (&p - 1u8) * (&q - 1u8);

    let one = RsaBigInt::one();
    let mut draws = 0u32;
    let e = loop {
        draws += 1;
        let e = random_in_range(rng, &one, &phi)?;
        if gcd(&e, &phi).is_one() {
            break e;
        }
    };
    debug!("public exponent accepted after {} draws", draws);

    let d = modular_inverse(&e, &phi)?;
    debug!("generated {}-bit modulus", n.bits());

    Ok(RsaKeyPair {
        public_key: RsaPublicKey {
            n: n.clone(),
            e,
        },
        private_key: RsaPrivateKey { n, d, p, q },
    })
}
