//! ABI encoding
//!
//! Implements the head/tail layout of the Solidity ABI: static values are
//! encoded in place as 32-byte words, dynamic values occupy an offset
//! slot in the head and put their payload in the tail. The same split is
//! applied recursively inside arrays and tuples.

use ravel_primitives::U256;

use crate::{AbiError, I256, ParamType, Token};

/// Encode a parameter list according to the Solidity ABI
///
/// Validates descriptors, value shapes, and numeric ranges before any
/// bytes are produced. The result length is always a multiple of 32.
pub fn encode(types: &[ParamType], tokens: &[Token]) -> Result<Vec<u8>, AbiError> {
    if types.len() != tokens.len() {
        return Err(AbiError::ArityMismatch {
            expected: types.len(),
            got: tokens.len(),
        });
    }
    for ty in types {
        ty.validate()?;
    }
    encode_params(types, tokens)
}

/// Encode one head+tail region
///
/// Offsets in the head are relative to the start of this region, which
/// makes the function directly reusable for the inside of dynamic arrays
/// and tuples.
fn encode_params(types: &[ParamType], tokens: &[Token]) -> Result<Vec<u8>, AbiError> {
    let head_size: usize = types.iter().map(ParamType::head_length).sum();

    let mut head = Vec::with_capacity(head_size);
    let mut tail = Vec::new();

    for (ty, token) in types.iter().zip(tokens.iter()) {
        if !token.type_check(ty) {
            return Err(AbiError::TypeMismatch {
                expected: ty.to_string(),
                got: token.kind().to_string(),
            });
        }
        if ty.is_dynamic() {
            head.extend_from_slice(&encode_word(U256::from(head_size + tail.len())));
            tail.extend(encode_token(ty, token)?);
        } else {
            head.extend(encode_token(ty, token)?);
        }
    }

    head.extend(tail);
    Ok(head)
}

fn encode_token(ty: &ParamType, token: &Token) -> Result<Vec<u8>, AbiError> {
    match (ty, token) {
        (ParamType::Address, Token::Address(addr)) => {
            let mut word = [0u8; 32];
            word[12..32].copy_from_slice(addr.as_bytes());
            Ok(word.to_vec())
        }
        (ParamType::Uint(bits), Token::Uint(value)) => encode_uint(*bits, value),
        (ParamType::Uint(bits), Token::Int(value)) => {
            if value.negative {
                return Err(AbiError::ValueOutOfRange {
                    ty: format!("uint{}", bits),
                    value: value.to_string(),
                });
            }
            encode_uint(*bits, &value.abs)
        }
        (ParamType::Int(bits), Token::Int(value)) => encode_int(*bits, value),
        (ParamType::Int(bits), Token::Uint(value)) => {
            encode_int(*bits, &I256::new(*value, false))
        }
        (ParamType::Bool, Token::Bool(value)) => {
            let mut word = [0u8; 32];
            word[31] = *value as u8;
            Ok(word.to_vec())
        }
        (ParamType::FixedBytes(_), Token::FixedBytes(data)) => {
            // Length equality already checked by type_check; left-aligned
            let mut word = [0u8; 32];
            word[..data.len()].copy_from_slice(data);
            Ok(word.to_vec())
        }
        (ParamType::Bytes, Token::Bytes(data)) => Ok(encode_bytes(data)),
        (ParamType::String, Token::String(s)) => Ok(encode_bytes(s.as_bytes())),
        (ParamType::Array(inner), Token::Array(items)) => {
            let mut out = encode_word(U256::from(items.len())).to_vec();
            let types = vec![(**inner).clone(); items.len()];
            out.extend(encode_params(&types, items)?);
            Ok(out)
        }
        (ParamType::FixedArray(inner, _), Token::FixedArray(items)) => {
            let types = vec![(**inner).clone(); items.len()];
            encode_params(&types, items)
        }
        (ParamType::Tuple(fields), Token::Tuple(items)) => encode_params(fields, items),
        _ => Err(AbiError::TypeMismatch {
            expected: ty.to_string(),
            got: token.kind().to_string(),
        }),
    }
}

fn encode_uint(bits: usize, value: &U256) -> Result<Vec<u8>, AbiError> {
    if bits < 256 && !(*value >> bits).is_zero() {
        return Err(AbiError::ValueOutOfRange {
            ty: format!("uint{}", bits),
            value: value.to_string(),
        });
    }
    Ok(encode_word(*value).to_vec())
}

fn encode_int(bits: usize, value: &I256) -> Result<Vec<u8>, AbiError> {
    // Representable range is -2^(bits-1) ..= 2^(bits-1) - 1
    let limit = U256::one() << (bits - 1);
    let in_range = if value.negative {
        value.abs <= limit
    } else {
        value.abs < limit
    };
    if !in_range {
        return Err(AbiError::ValueOutOfRange {
            ty: format!("int{}", bits),
            value: value.to_string(),
        });
    }

    let word = if value.negative {
        // Two's complement over 256 bits
        (!value.abs).overflowing_add(U256::one()).0
    } else {
        value.abs
    };
    Ok(encode_word(word).to_vec())
}

/// Encode a U256 as a 32-byte big-endian word
pub(crate) fn encode_word(value: U256) -> [u8; 32] {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    word
}

/// Length-prefixed, zero-padded encoding for bytes and strings
fn encode_bytes(data: &[u8]) -> Vec<u8> {
    let mut out = encode_word(U256::from(data.len())).to_vec();
    let padded_len = data.len().div_ceil(32) * 32;
    let mut padded = vec![0u8; padded_len];
    padded[..data.len()].copy_from_slice(data);
    out.extend(padded);
    out
}
