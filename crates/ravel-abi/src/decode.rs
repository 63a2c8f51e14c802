//! ABI decoding
//!
//! The exact inverse of [`crate::encode`]. Offsets inside a dynamic
//! array or tuple are relative to the start of that value's own data
//! region, so decoding recurses with a narrowed frame the same way
//! encoding recurses with a fresh head/tail region.

use ravel_primitives::{Address, U256};

use crate::{AbiError, I256, ParamType, Token};

/// Decode a parameter list from ABI-encoded data
///
/// `data` must start at the head region of the parameter list (for call
/// payloads, after the 4-byte selector). Bytes past the described region
/// are ignored.
pub fn decode(types: &[ParamType], data: &[u8]) -> Result<Vec<Token>, AbiError> {
    for ty in types {
        ty.validate()?;
    }
    decode_params(types, data)
}

fn decode_params(types: &[ParamType], frame: &[u8]) -> Result<Vec<Token>, AbiError> {
    let mut tokens = Vec::with_capacity(types.len());
    let mut offset = 0usize;

    for ty in types {
        let token = if ty.is_dynamic() {
            let at = read_usize(frame, offset, "offset")?;
            decode_dynamic(ty, frame, at)?
        } else {
            decode_static(ty, frame, offset)?
        };
        tokens.push(token);
        offset += ty.head_length();
    }

    Ok(tokens)
}

/// Decode a static value in place at `offset`
fn decode_static(ty: &ParamType, frame: &[u8], offset: usize) -> Result<Token, AbiError> {
    match ty {
        ParamType::Address => {
            let word = read_word(frame, offset)?;
            let mut bytes = [0u8; 20];
            bytes.copy_from_slice(&word[12..32]);
            Ok(Token::Address(Address::from_bytes(bytes)))
        }
        ParamType::Uint(_) => {
            let word = read_word(frame, offset)?;
            Ok(Token::Uint(U256::from_big_endian(word)))
        }
        ParamType::Int(_) => {
            let word = read_word(frame, offset)?;
            let raw = U256::from_big_endian(word);
            // Sign bit set means two's complement of the magnitude
            let token = if word[0] & 0x80 != 0 {
                let abs = (!raw).overflowing_add(U256::one()).0;
                Token::Int(I256::new(abs, true))
            } else {
                Token::Int(I256::new(raw, false))
            };
            Ok(token)
        }
        ParamType::Bool => {
            let word = read_word(frame, offset)?;
            Ok(Token::Bool(word[31] != 0))
        }
        ParamType::FixedBytes(size) => {
            let word = read_word(frame, offset)?;
            Ok(Token::FixedBytes(word[..*size].to_vec()))
        }
        ParamType::FixedArray(inner, len) => {
            let mut items = Vec::with_capacity(*len);
            let stride = inner.head_length();
            for i in 0..*len {
                items.push(decode_static(inner, frame, offset + i * stride)?);
            }
            Ok(Token::FixedArray(items))
        }
        ParamType::Tuple(fields) => {
            let mut items = Vec::with_capacity(fields.len());
            let mut field_offset = offset;
            for field in fields {
                items.push(decode_static(field, frame, field_offset)?);
                field_offset += field.head_length();
            }
            Ok(Token::Tuple(items))
        }
        ParamType::Bytes | ParamType::String | ParamType::Array(_) => Err(
            AbiError::InvalidData(format!("dynamic type {} in static position", ty)),
        ),
    }
}

/// Decode a dynamic value whose data region starts at `at` within `frame`
fn decode_dynamic(ty: &ParamType, frame: &[u8], at: usize) -> Result<Token, AbiError> {
    match ty {
        ParamType::Bytes => Ok(Token::Bytes(read_length_prefixed(frame, at)?)),
        ParamType::String => {
            let bytes = read_length_prefixed(frame, at)?;
            let s = String::from_utf8(bytes)
                .map_err(|e| AbiError::InvalidData(format!("invalid utf-8 string: {}", e)))?;
            Ok(Token::String(s))
        }
        ParamType::Array(inner) => {
            let len = read_usize(frame, at, "array length")?;
            let region = subframe(frame, at + 32)?;
            check_capacity(inner, len, region)?;
            let types = vec![(**inner).clone(); len];
            Ok(Token::Array(decode_params(&types, region)?))
        }
        ParamType::FixedArray(inner, len) => {
            let region = subframe(frame, at)?;
            check_capacity(inner, *len, region)?;
            let types = vec![(**inner).clone(); *len];
            Ok(Token::FixedArray(decode_params(&types, region)?))
        }
        ParamType::Tuple(fields) => {
            let region = subframe(frame, at)?;
            Ok(Token::Tuple(decode_params(fields, region)?))
        }
        _ => Err(AbiError::InvalidData(format!(
            "static type {} in dynamic position",
            ty
        ))),
    }
}

/// Read the 32-byte word at `offset`
fn read_word(frame: &[u8], offset: usize) -> Result<&[u8], AbiError> {
    let end = offset
        .checked_add(32)
        .ok_or_else(|| AbiError::InvalidData("offset overflow".to_string()))?;
    frame.get(offset..end).ok_or_else(|| {
        AbiError::InvalidData(format!(
            "out of bounds read at {}..{} (frame is {} bytes)",
            offset,
            end,
            frame.len()
        ))
    })
}

/// Read a word and narrow it to usize, rejecting values that cannot
/// address the frame
fn read_usize(frame: &[u8], offset: usize, what: &str) -> Result<usize, AbiError> {
    let value = U256::from_big_endian(read_word(frame, offset)?);
    if value > U256::from(u64::MAX) {
        return Err(AbiError::InvalidData(format!("{} too large: {}", what, value)));
    }
    usize::try_from(value.as_u64())
        .map_err(|_| AbiError::InvalidData(format!("{} too large: {}", what, value)))
}

/// Read a length word followed by that many raw bytes
fn read_length_prefixed(frame: &[u8], at: usize) -> Result<Vec<u8>, AbiError> {
    let len = read_usize(frame, at, "length")?;
    let start = at + 32;
    let end = start
        .checked_add(len)
        .ok_or_else(|| AbiError::InvalidData("length overflow".to_string()))?;
    let bytes = frame.get(start..end).ok_or_else(|| {
        AbiError::InvalidData(format!(
            "length {} exceeds remaining {} bytes",
            len,
            frame.len().saturating_sub(start)
        ))
    })?;
    Ok(bytes.to_vec())
}

fn subframe(frame: &[u8], at: usize) -> Result<&[u8], AbiError> {
    frame.get(at..).ok_or_else(|| {
        AbiError::InvalidData(format!(
            "offset {} exceeds frame of {} bytes",
            at,
            frame.len()
        ))
    })
}

/// Reject element counts that cannot possibly fit the remaining data,
/// before allocating for them
fn check_capacity(inner: &ParamType, len: usize, region: &[u8]) -> Result<(), AbiError> {
    let need = inner
        .head_length()
        .checked_mul(len)
        .ok_or_else(|| AbiError::InvalidData(format!("array length too large: {}", len)))?;
    if need > region.len() {
        return Err(AbiError::InvalidData(format!(
            "array of {} elements needs {} bytes, {} remain",
            len,
            need,
            region.len()
        )));
    }
    Ok(())
}
