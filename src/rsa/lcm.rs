use num_bigint::BigUint;
use num_traits::Zero;

/// Computes the least common multiple of `a` and `b`.
/// At least one of the two must be non-zero.
pub fn lcm(a: BigUint, b: BigUint) -> BigUint {
    let product = &a * &b;
    let gcd = gcd(a, b);

    product / gcd
}

/// Computes the greatest common divisor of `a` and `b` with the
/// iterative Euclidean algorithm. `gcd(a, 0) == a`.
pub fn gcd(mut a: BigUint, mut b: BigUint) -> BigUint {
    while !b.is_zero() {
        let temp = b.clone();
        b = a % &b;
        a = temp;
    }

    a
}
