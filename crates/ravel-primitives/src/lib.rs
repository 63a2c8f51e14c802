//! # ravel-primitives
//!
//! Primitive types shared by the Ravel ABI codec crates.
//!
//! Provides the 20-byte [`Address`] and 32-byte [`H256`] types with hex
//! parsing/formatting, and re-exports [`U256`] for 256-bit arithmetic.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod hash;

pub use address::{Address, AddressError};
pub use hash::{H256, HashError};

// Re-export primitive-types for U256
pub use primitive_types::U256;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u256_arithmetic() {
        let a = U256::from(100u64);
        let b = U256::from(200u64);
        assert_eq!(a + b, U256::from(300u64));
    }

    #[test]
    fn test_u256_big_endian_roundtrip() {
        let value = U256::from(0xdeadbeefu64);
        let mut buf = [0u8; 32];
        value.to_big_endian(&mut buf);
        assert_eq!(U256::from_big_endian(&buf), value);
    }
}
