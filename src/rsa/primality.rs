// Miller-Rabin Primality Test

use super::bigint::{modular_exponentiation, random_in_range, RsaBigInt};
use super::error::{Result, RsaError};
use num_integer::Integer;
use num_traits::{One, Signed};
use rand::Rng;

/// Split a positive integer m into (s, d) with m = 2^s * d and d odd
pub fn extract_twos(m: &RsaBigInt) -> Result<(u64, RsaBigInt)> {
    if !m.is_positive() {
        return Err(RsaError::InvalidArgument(format!(
            "cannot extract powers of two from {}",
            m
        )));
    }
    let s = m.trailing_zeros().unwrap_or(0);
    Ok((s, m >> s))
}

/// Miller-Rabin primality test
///
/// `Ok(false)` means n is definitely composite. `Ok(true)` means n survived
/// `rounds` random witnesses, leaving an error probability of at most
/// 4^(-rounds). Witnesses are drawn from `rng`, so repeated calls on a
/// composite may disagree; calls on a prime never do.
pub fn is_probable_prime<R: Rng + ?Sized>(
    n: &RsaBigInt,
    rounds: u32,
    rng: &mut R,
) -> Result<bool> {
    if rounds == 0 {
        return Err(RsaError::InvalidArgument(
            "Miller-Rabin needs at least one round".to_string(),
        ));
    }

    let two = RsaBigInt::from(2u8);
    if n < &two {
        return Ok(false);
    }
    if n == &two || n == &RsaBigInt::from(3u8) {
        return Ok(true);
    }
    if n.is_even() {
        return Ok(false);
    }

    let n_minus_one: RsaBigInt = n - 1u8;
    let n_minus_two: RsaBigInt = n - 2u8;
    let (s, d) = extract_twos(&n_minus_one)?;

    for _ in 0..rounds {
        let a = random_in_range(rng, &two, &n_minus_two)?;
        if witnesses_composite(&a, &d, s, n, &n_minus_one)? {
            return Ok(false);
        }
    }

    Ok(true)
}

/// True if witness `a` proves n composite
fn witnesses_composite(
    a: &RsaBigInt,
    d: &RsaBigInt,
    s: u64,
    n: &RsaBigInt,
    n_minus_one: &RsaBigInt,
) -> Result<bool> {
    let mut x = modular_exponentiation(a, d, n)?;
    if x.is_one() || &x == n_minus_one {
        return Ok(false);
    }

    for _ in 1..s {
        x = (&x * &x) % n;
        if &x == n_minus_one {
            return Ok(false);
        }
        // a nontrivial square root of 1 exists
        if x.is_one() {
            return Ok(true);
        }
    }

    Ok(true)
}
