pub use rsa::{generate_key, Factor, KeyGenError, KeyPair};

pub mod rsa;
