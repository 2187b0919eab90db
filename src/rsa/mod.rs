pub use key_generation::{generate_key, Factor, KeyGenError, KeyPair};
pub use private_key::PrivateKey;
pub use public_key::PublicKey;

mod exponent;
pub mod key_generation;
mod lcm;
mod modular_arithmetic;
mod primality;
mod private_key;
mod public_key;
