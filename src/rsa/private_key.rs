use num_bigint::BigUint;
use std::fmt::{Debug, Display};

#[derive(Debug, Clone)]
pub struct PrivateKey {
    pub n: BigUint,
    pub d: BigUint,
}

impl PrivateKey {
    pub fn new(n: BigUint, d: BigUint) -> Self {
        Self { n, d }
    }
}

impl Display for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.n, self.d)
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.d == other.d
    }
}

impl Eq for PrivateKey {}
