//! Keccak-256 hashing

use ravel_primitives::H256;
use sha3::{Digest, Keccak256};

/// Compute Keccak-256 hash of the input data
pub fn keccak256(data: &[u8]) -> H256 {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    H256::from_bytes(result.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Ethereum official test vectors ====================

    #[test]
    fn test_keccak256_empty() {
        let hash = keccak256(&[]);
        assert_eq!(
            hash.to_hex(),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_keccak256_hello() {
        let hash = keccak256(b"hello");
        assert_eq!(
            hash.to_hex(),
            "0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        );
    }

    #[test]
    fn test_keccak256_quick_brown_fox() {
        let hash = keccak256(b"The quick brown fox jumps over the lazy dog");
        assert_eq!(
            hash.to_hex(),
            "0x4d741b6f1eb29cb2a9b9911c82f56fa8d73b04959d3d9d222895df6c0b28aa15"
        );
    }

    // ==================== Determinism ====================

    #[test]
    fn test_keccak256_deterministic() {
        let data = b"determinism check";
        assert_eq!(keccak256(data), keccak256(data));
        assert_ne!(keccak256(b"a"), keccak256(b"b"));
    }

    // ==================== Selector derivation vectors ====================

    #[test]
    fn test_keccak256_erc20_transfer_signature() {
        // First 4 bytes of keccak256("transfer(address,uint256)") = 0xa9059cbb
        let hash = keccak256(b"transfer(address,uint256)");
        assert_eq!(&hash.as_bytes()[..4], &[0xa9, 0x05, 0x9c, 0xbb]);
    }

    #[test]
    fn test_keccak256_erc20_balance_of_signature() {
        // First 4 bytes of keccak256("balanceOf(address)") = 0x70a08231
        let hash = keccak256(b"balanceOf(address)");
        assert_eq!(&hash.as_bytes()[..4], &[0x70, 0xa0, 0x82, 0x31]);
    }

    // ==================== Block boundary inputs ====================

    #[test]
    fn test_keccak256_rate_boundary() {
        // 136 bytes is the keccak256 rate; 137 spans two blocks
        assert_eq!(keccak256(&[0xab; 136]).as_bytes().len(), 32);
        assert_eq!(keccak256(&[0xab; 137]).as_bytes().len(), 32);
    }

    #[test]
    fn test_keccak256_hex_input() {
        let data = hex::decode("deadbeef").unwrap();
        let hash = keccak256(&data);
        assert_eq!(
            hash.to_hex(),
            "0xd4fd4e189132273036449fc9e11198c739161b4c0116a9a2dccdfa1c492006f1"
        );
    }
}
