//! ABI parameter type descriptors

use std::fmt;

use crate::AbiError;

/// Solidity ABI parameter type
///
/// The `Display` implementation renders the canonical textual form used
/// for signature hashing (`uint256`, `bytes32`, `uint256[]`,
/// `(uint256,bool)`), so selectors agree with other ABI tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    /// Address (20 bytes)
    Address,
    /// Unsigned integer with bit width (8, 16, ..., 256)
    Uint(usize),
    /// Signed integer with bit width
    Int(usize),
    /// Boolean
    Bool,
    /// Dynamic byte sequence
    Bytes,
    /// Fixed-size byte sequence (1-32 bytes)
    FixedBytes(usize),
    /// UTF-8 string
    String,
    /// Dynamic-length array
    Array(Box<ParamType>),
    /// Fixed-length array
    FixedArray(Box<ParamType>, usize),
    /// Tuple (struct)
    Tuple(Vec<ParamType>),
}

impl ParamType {
    /// Check if this type is dynamic (encoded by offset into the tail)
    pub fn is_dynamic(&self) -> bool {
        match self {
            ParamType::Bytes | ParamType::String | ParamType::Array(_) => true,
            ParamType::FixedArray(inner, _) => inner.is_dynamic(),
            ParamType::Tuple(fields) => fields.iter().any(|t| t.is_dynamic()),
            _ => false,
        }
    }

    /// Number of bytes this type occupies in the head region
    ///
    /// Dynamic types always occupy a single 32-byte offset slot; static
    /// compound types occupy the sum of their element slots.
    pub fn head_length(&self) -> usize {
        match self {
            ParamType::FixedArray(inner, len) if !self.is_dynamic() => {
                inner.head_length() * len
            }
            ParamType::Tuple(fields) if !self.is_dynamic() => {
                fields.iter().map(ParamType::head_length).sum()
            }
            _ => 32,
        }
    }

    /// Check that the descriptor is well formed
    ///
    /// Integer widths must be multiples of 8 in `8..=256`, fixed byte
    /// sizes in `1..=32`, fixed arrays non-empty, tuples non-empty, and
    /// the in-place footprint of any static compound bounded, so
    /// `head_length` on a validated type never overflows.
    pub fn validate(&self) -> Result<(), AbiError> {
        match self {
            ParamType::Uint(bits) | ParamType::Int(bits) => {
                if *bits == 0 || *bits > 256 || bits % 8 != 0 {
                    return Err(AbiError::InvalidDescriptor(format!(
                        "invalid integer width {} in `{}`",
                        bits, self
                    )));
                }
            }
            ParamType::FixedBytes(size) => {
                if *size == 0 || *size > 32 {
                    return Err(AbiError::InvalidDescriptor(format!(
                        "invalid fixed bytes size {}",
                        size
                    )));
                }
            }
            ParamType::Array(inner) => inner.validate()?,
            ParamType::FixedArray(inner, len) => {
                if *len == 0 {
                    return Err(AbiError::InvalidDescriptor(format!(
                        "zero-length fixed array `{}`",
                        self
                    )));
                }
                inner.validate()?;
                if !self.is_dynamic() {
                    check_static_size(inner.head_length().checked_mul(*len), self)?;
                }
            }
            ParamType::Tuple(fields) => {
                if fields.is_empty() {
                    return Err(AbiError::InvalidDescriptor("empty tuple".to_string()));
                }
                for field in fields {
                    field.validate()?;
                }
                if !self.is_dynamic() {
                    let size = fields
                        .iter()
                        .try_fold(0usize, |acc, f| acc.checked_add(f.head_length()));
                    check_static_size(size, self)?;
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// Largest in-place footprint a single static value may declare (2 GiB).
/// Calldata cannot approach this; anything past it is a malformed
/// descriptor, not data.
const MAX_STATIC_SIZE: usize = 1 << 31;

fn check_static_size(size: Option<usize>, ty: &ParamType) -> Result<(), AbiError> {
    match size {
        Some(size) if size <= MAX_STATIC_SIZE => Ok(()),
        _ => Err(AbiError::InvalidDescriptor(format!(
            "static size of `{}` exceeds {} bytes",
            ty, MAX_STATIC_SIZE
        ))),
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Address => write!(f, "address"),
            ParamType::Uint(bits) => write!(f, "uint{}", bits),
            ParamType::Int(bits) => write!(f, "int{}", bits),
            ParamType::Bool => write!(f, "bool"),
            ParamType::Bytes => write!(f, "bytes"),
            ParamType::FixedBytes(size) => write!(f, "bytes{}", size),
            ParamType::String => write!(f, "string"),
            ParamType::Array(inner) => write!(f, "{}[]", inner),
            ParamType::FixedArray(inner, len) => write!(f, "{}[{}]", inner, len),
            ParamType::Tuple(fields) => {
                write!(f, "(")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", field)?;
                }
                write!(f, ")")
            }
        }
    }
}
