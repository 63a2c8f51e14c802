//! ABI value tokens

use std::fmt;

use ravel_primitives::{Address, U256};

use crate::ParamType;

/// A typed ABI value, mirroring the [`ParamType`] variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Address (20 bytes)
    Address(Address),
    /// Unsigned integer
    Uint(U256),
    /// Signed integer
    Int(I256),
    /// Boolean
    Bool(bool),
    /// Dynamic byte sequence
    Bytes(Vec<u8>),
    /// Fixed-size byte sequence
    FixedBytes(Vec<u8>),
    /// UTF-8 string
    String(String),
    /// Dynamic-length array
    Array(Vec<Token>),
    /// Fixed-length array
    FixedArray(Vec<Token>),
    /// Tuple (struct)
    Tuple(Vec<Token>),
}

/// Signed 256-bit integer in sign-magnitude form
///
/// Zero is always represented as non-negative, so values compare equal
/// after an encode/decode round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct I256 {
    /// Absolute value
    pub abs: U256,
    /// Sign (true if negative)
    pub negative: bool,
}

impl I256 {
    /// Create a new I256, normalizing negative zero
    pub fn new(abs: U256, negative: bool) -> Self {
        Self {
            abs,
            negative: negative && !abs.is_zero(),
        }
    }

    /// Create from a native i128
    pub fn from_i128(value: i128) -> Self {
        if value < 0 {
            Self {
                abs: U256::from(value.unsigned_abs()),
                negative: true,
            }
        } else {
            Self {
                abs: U256::from(value as u128),
                negative: false,
            }
        }
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.abs.is_zero()
    }
}

impl fmt::Display for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.abs)
        } else {
            write!(f, "{}", self.abs)
        }
    }
}

impl From<i128> for I256 {
    fn from(value: i128) -> Self {
        I256::from_i128(value)
    }
}

impl Token {
    /// Create a uint token from any native unsigned integer
    pub fn uint(value: impl Into<U256>) -> Self {
        Token::Uint(value.into())
    }

    /// Create an int token from a native signed integer
    pub fn int(value: impl Into<I256>) -> Self {
        Token::Int(value.into())
    }

    /// Create a string token
    pub fn string(s: impl Into<String>) -> Self {
        Token::String(s.into())
    }

    /// Short name of the value kind, for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Address(_) => "address",
            Token::Uint(_) => "uint",
            Token::Int(_) => "int",
            Token::Bool(_) => "bool",
            Token::Bytes(_) => "bytes",
            Token::FixedBytes(_) => "fixed bytes",
            Token::String(_) => "string",
            Token::Array(_) => "array",
            Token::FixedArray(_) => "fixed array",
            Token::Tuple(_) => "tuple",
        }
    }

    /// Check that this value's shape matches a declared type
    ///
    /// Integer tokens are accepted against both signed and unsigned
    /// declarations here; sign and width are enforced by the encoder,
    /// which reports `ValueOutOfRange` rather than a shape error.
    pub fn type_check(&self, ty: &ParamType) -> bool {
        match (self, ty) {
            (Token::Address(_), ParamType::Address) => true,
            (Token::Uint(_) | Token::Int(_), ParamType::Uint(_) | ParamType::Int(_)) => true,
            (Token::Bool(_), ParamType::Bool) => true,
            (Token::Bytes(_), ParamType::Bytes) => true,
            (Token::FixedBytes(data), ParamType::FixedBytes(size)) => data.len() == *size,
            (Token::String(_), ParamType::String) => true,
            (Token::Array(items), ParamType::Array(inner)) => {
                items.iter().all(|item| item.type_check(inner))
            }
            (Token::FixedArray(items), ParamType::FixedArray(inner, len)) => {
                items.len() == *len && items.iter().all(|item| item.type_check(inner))
            }
            (Token::Tuple(items), ParamType::Tuple(fields)) => {
                items.len() == fields.len()
                    && items
                        .iter()
                        .zip(fields.iter())
                        .all(|(item, field)| item.type_check(field))
            }
            _ => false,
        }
    }
}
