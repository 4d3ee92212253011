// RSA Big Integer Operations
// Exact integer arithmetic on top of num-bigint for RSA-specific operations

use super::error::{Result, RsaError};
use num_bigint::{BigInt, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use rand::Rng;

/// RSA Big Integer type alias
pub type RsaBigInt = BigInt;

/// Greatest common divisor of |a| and |b|, by the Euclidean algorithm.
/// `gcd(0, 0)` is 0.
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    let mut a = a.abs();
    let mut b = b.abs();
    if a < b {
        std::mem::swap(&mut a, &mut b);
    }
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// True when every pair of values has a gcd of 1
pub fn all_coprime(values: &[RsaBigInt]) -> bool {
    values.iter().enumerate().all(|(i, a)| {
        values[i + 1..].iter().all(|b| gcd(a, b).is_one())
    })
}

/// Extended Euclidean Algorithm
/// Returns (g, x, y) such that g = x*a + y*b.
///
/// Quotients use floor division, so for non-negative input g is gcd(a, b);
/// with a negative argument g may carry the divisor's sign.
pub fn extended_gcd(a: &RsaBigInt, b: &RsaBigInt) -> (RsaBigInt, RsaBigInt, RsaBigInt) {
    // (old_r, old_x, old_y) and (r, x, y) both satisfy r = x*a + y*b
    let (mut old_r, mut r) = (b.clone(), a.clone());
    let (mut old_x, mut x) = (RsaBigInt::zero(), RsaBigInt::one());
    let (mut old_y, mut y) = (RsaBigInt::one(), RsaBigInt::zero());

    while !r.is_zero() {
        let q = old_r.div_floor(&r);

        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);

        let next_x = &old_x - &q * &x;
        old_x = std::mem::replace(&mut x, next_x);

        let next_y = &old_y - &q * &y;
        old_y = std::mem::replace(&mut y, next_y);
    }

    (old_r, old_x, old_y)
}

/// Compute modular inverse: a^(-1) mod m, as a value in [0, m)
pub fn modular_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Result<RsaBigInt> {
    if !m.is_positive() {
        return Err(RsaError::InvalidArgument(format!(
            "modulus must be positive, got {}",
            m
        )));
    }
    if !all_coprime(&[a.clone(), m.clone()]) {
        return Err(RsaError::NoModularInverse {
            value: a.clone(),
            modulus: m.clone(),
        });
    }

    // extended_gcd only yields g = +1 for a non-negative first argument
    let reduced = a.mod_floor(m);
    let (_, x, _) = extended_gcd(&reduced, m);
    Ok(x.mod_floor(m))
}

/// Modular exponentiation: base^exponent mod modulus
/// Square-and-multiply over the exponent bits, least significant first.
pub fn modular_exponentiation(
    base: &RsaBigInt,
    exponent: &RsaBigInt,
    modulus: &RsaBigInt,
) -> Result<RsaBigInt> {
    if exponent.is_negative() {
        return Err(RsaError::InvalidArgument(format!(
            "exponent must be non-negative, got {}",
            exponent
        )));
    }
    if !modulus.is_positive() {
        return Err(RsaError::InvalidArgument(format!(
            "modulus must be positive, got {}",
            modulus
        )));
    }
    if modulus.is_one() {
        return Ok(RsaBigInt::zero());
    }

    let mut result = RsaBigInt::one();
    let mut square = base.mod_floor(modulus);
    let mut exp = exponent.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &square) % modulus;
        }
        exp >>= 1;
        if !exp.is_zero() {
            square = (&square * &square) % modulus;
        }
    }

    Ok(result)
}

/// Uniform random integer in [low, high], both ends inclusive
pub fn random_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    low: &RsaBigInt,
    high: &RsaBigInt,
) -> Result<RsaBigInt> {
    if low > high {
        return Err(RsaError::InvalidArgument(format!(
            "empty range [{}, {}]",
            low, high
        )));
    }
    Ok(rng.gen_bigint_range(low, &(high + 1u8)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn int(n: i64) -> RsaBigInt {
        RsaBigInt::from(n)
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(&int(48), &int(18)), int(6));
        assert_eq!(gcd(&int(18), &int(48)), int(6));
        assert_eq!(gcd(&int(-48), &int(18)), int(6));
        assert_eq!(gcd(&int(17), &int(0)), int(17));
        assert_eq!(gcd(&int(0), &int(0)), int(0));
    }

    #[test]
    fn test_all_coprime() {
        assert!(all_coprime(&[int(3), int(4), int(5)]));
        assert!(!all_coprime(&[int(3), int(4), int(9)]));
        assert!(all_coprime(&[int(7)]));
        assert!(all_coprime(&[]));
    }

    #[test]
    fn test_extended_gcd() {
        // -2*3 + 1*7 = 1
        assert_eq!(extended_gcd(&int(3), &int(7)), (int(1), int(-2), int(1)));
        assert_eq!(extended_gcd(&int(0), &int(9)), (int(9), int(0), int(1)));

        for a in 0..60 {
            for b in 0..60 {
                let (g, x, y) = extended_gcd(&int(a), &int(b));
                assert_eq!(g, gcd(&int(a), &int(b)), "gcd({}, {})", a, b);
                assert_eq!(&x * int(a) + &y * int(b), g, "bezout({}, {})", a, b);
            }
        }
    }

    #[test]
    fn test_extended_gcd_large() {
        let a: RsaBigInt = "170141183460469231731687303715884105727".parse().unwrap();
        let b: RsaBigInt = "618970019642690137449562111".parse().unwrap();
        let (g, x, y) = extended_gcd(&a, &b);
        assert!(g.is_one());
        assert_eq!(x * &a + y * &b, g);
    }

    #[test]
    fn test_modular_inverse() {
        // 3 * 5 = 15 ≡ 1 mod 7, so inverse of 3 mod 7 is 5
        let inv = modular_inverse(&int(3), &int(7)).unwrap();
        assert_eq!(inv, int(5));

        for m in 2..50i64 {
            for a in 1..m {
                if gcd(&int(a), &int(m)).is_one() {
                    let inv = modular_inverse(&int(a), &int(m)).unwrap();
                    assert!(inv >= int(0) && inv < int(m));
                    assert_eq!((inv * int(a)) % int(m), int(1));
                }
            }
        }
    }

    #[test]
    fn test_modular_inverse_negative_input() {
        assert_eq!(modular_inverse(&int(-3), &int(7)).unwrap(), int(2));

        for m in 2..40i64 {
            for a in -3 * m..0 {
                if gcd(&int(a), &int(m)).is_one() {
                    let inv = modular_inverse(&int(a), &int(m)).unwrap();
                    assert!(inv >= int(0) && inv < int(m));
                    assert_eq!((inv * int(a)).mod_floor(&int(m)), int(1), "{} mod {}", a, m);
                }
            }
        }
    }

    #[test]
    fn test_modular_inverse_not_coprime() {
        let err = modular_inverse(&int(6), &int(9)).unwrap_err();
        assert_eq!(
            err,
            RsaError::NoModularInverse {
                value: int(6),
                modulus: int(9)
            }
        );
        assert!(modular_inverse(&int(3), &int(0)).is_err());
    }

    #[test]
    fn test_modular_exponentiation() {
        // 3^5 mod 7 = 243 mod 7 = 5
        assert_eq!(modular_exponentiation(&int(3), &int(5), &int(7)).unwrap(), int(5));
        assert_eq!(modular_exponentiation(&int(4), &int(13), &int(497)).unwrap(), int(445));
        assert_eq!(modular_exponentiation(&int(-2), &int(3), &int(5)).unwrap(), int(2));
    }

    #[test]
    fn test_modular_exponentiation_edge_cases() {
        assert_eq!(modular_exponentiation(&int(5), &int(0), &int(7)).unwrap(), int(1));
        assert_eq!(modular_exponentiation(&int(5), &int(0), &int(1)).unwrap(), int(0));
        assert_eq!(modular_exponentiation(&int(5), &int(9), &int(1)).unwrap(), int(0));
        assert_eq!(modular_exponentiation(&int(0), &int(0), &int(7)).unwrap(), int(1));
        assert!(modular_exponentiation(&int(5), &int(-1), &int(7)).is_err());
        assert!(modular_exponentiation(&int(5), &int(2), &int(0)).is_err());
    }

    #[test]
    fn test_modular_exponentiation_matches_modpow() {
        let mut rng = StdRng::seed_from_u64(7);
        let modulus: RsaBigInt = "1000000000000000000000000000057".parse().unwrap();
        for _ in 0..20 {
            let base = rng.gen_bigint_range(&int(0), &modulus);
            let exp = rng.gen_bigint_range(&int(0), &modulus);
            assert_eq!(
                modular_exponentiation(&base, &exp, &modulus).unwrap(),
                base.modpow(&exp, &modulus)
            );
        }
    }

    #[test]
    fn test_fermat_little_theorem() {
        for p in [2i64, 3, 5, 7, 11, 13, 97, 7919] {
            for a in (1..p).step_by(((p / 16) as usize).max(1)) {
                let r = modular_exponentiation(&int(a), &int(p - 1), &int(p)).unwrap();
                assert_eq!(r, int(1), "{}^({}-1) mod {}", a, p, p);
            }
        }
    }

    #[test]
    fn test_random_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let x = random_in_range(&mut rng, &int(3), &int(6)).unwrap();
            assert!(x >= int(3) && x <= int(6));
        }
        assert_eq!(random_in_range(&mut rng, &int(4), &int(4)).unwrap(), int(4));
        assert!(random_in_range(&mut rng, &int(5), &int(4)).is_err());
    }
}
