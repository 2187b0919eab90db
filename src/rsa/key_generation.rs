use std::fmt::{self, Display};

use log::debug;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use thiserror::Error;

use super::exponent::sample_coprime_exponent;
use super::lcm::lcm;
use super::modular_arithmetic::mod_inverse;
use super::primality::is_prime;
use super::{PrivateKey, PublicKey};

/// Practically unbounded; the search loop terminates long before this on
/// any modulus a human would type in.
const MAX_EXPONENT_ATTEMPTS: usize = i32::MAX as usize;

/// Names the offending input of an [`KeyGenError::InvalidInput`] rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    P,
    Q,
}

impl Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::P => write!(f, "p"),
            Self::Q => write!(f, "q"),
        }
    }
}

/// Every way a run can be rejected. Each validation step maps to exactly
/// one variant and a rejection is terminal, so a failed run never leaves
/// partial key material behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyGenError {
    #[error("invalid or non-prime {0}")]
    InvalidInput(Factor),
    #[error("p and q must differ")]
    EqualFactors,
    #[error("p and q must have equal bit length")]
    BitLengthMismatch,
    #[error("p and q must differ in decimal length")]
    DigitLengthGuardTriggered,
    #[error("no suitable public exponent found")]
    ExponentSearchExhausted,
}

/// A generated key pair. The public key is `(n, e)`, the private key is
/// `(n, d)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub n: BigUint,
    pub e: BigUint,
    pub d: BigUint,
}

impl KeyPair {
    pub fn public_key(&self) -> PublicKey {
        PublicKey::new(self.n.clone(), self.e.clone())
    }

    pub fn private_key(&self) -> PrivateKey {
        PrivateKey::new(self.n.clone(), self.d.clone())
    }
}

/// Generates an RSA key pair from the two caller-supplied primes.
///
/// The run is a single linear pass: validate `p`, validate `q`, check the
/// pair against each other, then compute `n = p*q`,
/// `λ = lcm(p - 1, q - 1)`, a random `e` coprime to λ and finally
/// `d = e⁻¹ mod λ`. The first failed check returns its [`KeyGenError`]
/// variant and nothing is retried.
pub fn generate_key<R>(p: &BigUint, q: &BigUint, rng: &mut R) -> Result<KeyPair, KeyGenError>
where
    R: CryptoRng + RngCore + ?Sized,
{
    if !is_prime(p) {
        return Err(KeyGenError::InvalidInput(Factor::P));
    }
    if !is_prime(q) {
        return Err(KeyGenError::InvalidInput(Factor::Q));
    }
    if p == q {
        return Err(KeyGenError::EqualFactors);
    }
    if p.bits() != q.bits() {
        return Err(KeyGenError::BitLengthMismatch);
    }

    // |diff| < 1 holds exactly when the decimal lengths are equal, so this
    // rejects most equal-bit-length pairs. TODO: confirm whether `< 1` or
    // a `> 1` spread was the intended comparison.
    let dec_len_p = p.to_string().len() as i64;
    let dec_len_q = q.to_string().len() as i64;
    if (dec_len_p - dec_len_q).abs() < 1 {
        return Err(KeyGenError::DigitLengthGuardTriggered);
    }

    let n = p * q;
    let lambda = lcm(p - 1u8, q - 1u8);
    debug!("n has {} bits, lambda has {} bits", n.bits(), lambda.bits());

    let e = sample_coprime_exponent(rng, &lambda, MAX_EXPONENT_ATTEMPTS)
        .ok_or(KeyGenError::ExponentSearchExhausted)?;
    let d = mod_inverse(&e, &lambda);

    Ok(KeyPair { n, e, d })
}
