use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};

/// Computes the multiplicative inverse of `a` modulo `m`, i.e. the `x` in
/// `[0, m)` with `a * x ≡ 1 (mod m)`, using the extended Euclidean
/// algorithm with rolling Bézout coefficients.
///
/// `a` and `m` must be coprime; the exponent sampler guarantees that for
/// every pair this module is called with. `m == 1` is degenerate but
/// valid: every residue is congruent to 0 mod 1.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> BigUint {
    if m.is_one() {
        return BigUint::zero();
    }

    let m0 = BigInt::from(m.clone());
    let mut a = BigInt::from(a.clone());
    let mut m = BigInt::from(m.clone());

    let mut x0 = BigInt::zero();
    let mut x1 = BigInt::one();

    while a > BigInt::one() {
        let quotient = &a / &m;

        let temp = m.clone();
        m = &a % &m;
        a = temp;

        let temp = x0.clone();
        x0 = x1 - &quotient * &temp;
        x1 = temp;
    }

    if x1.is_negative() {
        x1 += m0;
    }

    x1.to_biguint().expect("coefficient is non-negative here")
}
