use log::debug;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed};
use rand::{CryptoRng, RngCore};

use super::lcm::gcd;

/// Draws random candidates until one coprime to `modulus` is found.
///
/// Each attempt fills a buffer of `ceil(bits(modulus) / 8)` bytes from
/// `rng`, interprets it as a signed little-endian big integer and reduces
/// it via `abs(candidate mod (modulus - 1)) + 1` into `[1, modulus)`.
/// Returns `None` once `max_attempts` draws have all failed the
/// coprimality test.
///
/// `rng` must be a cryptographically secure source in production; the
/// `CryptoRng` bound keeps deterministic generators out except where a
/// test deliberately injects a seeded one. `modulus` must be >= 2.
pub fn sample_coprime_exponent<R>(
    rng: &mut R,
    modulus: &BigUint,
    max_attempts: usize,
) -> Option<BigUint>
where
    R: CryptoRng + RngCore + ?Sized,
{
    let bits = modulus.bits();
    let mut buffer = vec![0u8; ((bits + 7) / 8) as usize];
    let bound = BigInt::from(modulus - 1u8);

    for attempt in 0..max_attempts {
        rng.fill_bytes(&mut buffer);

        let candidate = BigInt::from_signed_bytes_le(&buffer);
        let candidate = ((candidate % &bound).abs() + 1u8)
            .to_biguint()
            .expect("candidate is positive here");

        if gcd(candidate.clone(), modulus.clone()).is_one() {
            debug!("found coprime exponent after {} draw(s)", attempt + 1);
            return Some(candidate);
        }
    }

    None
}
