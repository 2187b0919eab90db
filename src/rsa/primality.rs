use num_bigint::BigUint;
use num_integer::{Integer, Roots};
use num_traits::Zero;

/// Checks if the given `number` is prime by exact trial division.
///
/// Every odd integer from 3 up to `floor(sqrt(number))` is tried as a
/// divisor, so the answer is never wrong, but the cost is O(√number).
/// That is fine for the small, interactively entered primes this tool
/// works with; there is deliberately no Miller-Rabin shortcut here.
pub fn is_prime(number: &BigUint) -> bool {
    if number < &BigUint::from(2u8) {
        return false;
    }
    if number <= &BigUint::from(3u8) {
        return true; // 2 and 3
    }
    if number.is_even() {
        return false;
    }

    let limit = number.sqrt();
    let mut divisor = BigUint::from(3u8);

    while divisor <= limit {
        if (number % &divisor).is_zero() {
            return false;
        }
        divisor += 2u8;
    }

    true
}
