//! # ravel-abi
//!
//! Encoding and decoding of Solidity ABI call payloads.
//!
//! A call payload is the 4-byte function selector followed by the
//! encoded parameter list: one 32-byte head slot per parameter (data for
//! static types, a byte offset for dynamic ones) and then the tail region
//! holding the dynamic payloads. The same head/tail split applies
//! recursively inside arrays and tuples.
//!
//! The codec is pure and synchronous: no I/O, no shared state, safe to
//! call concurrently.
//!
//! # Example
//!
//! ```rust
//! use ravel_abi::{Function, Token};
//! use ravel_primitives::{Address, U256};
//!
//! let transfer = Function::parse("transfer(address,uint256)")?;
//! assert_eq!(transfer.selector(), [0xa9, 0x05, 0x9c, 0xbb]);
//!
//! let to = Address::from_hex("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d")?;
//! let data = transfer.encode_call_hex(&[
//!     Token::Address(to),
//!     Token::Uint(U256::from(1000u64)),
//! ])?;
//! assert!(data.starts_with("0xa9059cbb"));
//!
//! // Return data decodes symmetrically
//! let balance = ravel_abi::decode(
//!     &[ravel_abi::ParamType::Uint(256)],
//!     &[0u8; 32],
//! )?;
//! assert_eq!(balance, vec![Token::Uint(U256::zero())]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod contract;
mod decode;
mod encode;
mod error;
mod function;
mod param_type;
mod parser;
mod token;

pub use contract::{Contract, FunctionDef, erc20};
pub use decode::decode;
pub use encode::encode;
pub use error::AbiError;
pub use function::Function;
pub use param_type::ParamType;
pub use parser::parse_type;
pub use token::{I256, Token};
