//! Canonical type-string parsing
//!
//! Turns textual type names (`"uint256[3]"`, `"(address,bytes)[]"`) into
//! [`ParamType`] descriptors. Kept separate from the codec so the
//! encode/decode core stays free of string handling.

use crate::{AbiError, ParamType};

/// Parse a canonical ABI type string into a [`ParamType`]
///
/// The short aliases `uint` and `int` are accepted and normalized to
/// their explicit 256-bit forms.
pub fn parse_type(s: &str) -> Result<ParamType, AbiError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(AbiError::InvalidDescriptor("empty type string".to_string()));
    }
    let ty = parse_inner(s)?;
    ty.validate()?;
    Ok(ty)
}

fn parse_inner(s: &str) -> Result<ParamType, AbiError> {
    // Trailing array suffix binds last: `uint8[2][]` is a dynamic array
    // of `uint8[2]`.
    if let Some(stripped) = s.strip_suffix(']') {
        let open = stripped.rfind('[').ok_or_else(|| {
            AbiError::InvalidDescriptor(format!("unbalanced brackets in `{}`", s))
        })?;
        let (elem, len) = (&stripped[..open], &stripped[open + 1..]);
        let inner = Box::new(parse_inner(elem)?);
        return if len.is_empty() {
            Ok(ParamType::Array(inner))
        } else {
            let len: usize = len.parse().map_err(|_| {
                AbiError::InvalidDescriptor(format!("invalid array length `{}`", len))
            })?;
            Ok(ParamType::FixedArray(inner, len))
        };
    }

    if let Some(body) = s.strip_prefix('(') {
        let body = body.strip_suffix(')').ok_or_else(|| {
            AbiError::InvalidDescriptor(format!("unbalanced parentheses in `{}`", s))
        })?;
        let fields = split_top_level(body)?
            .into_iter()
            .map(parse_inner)
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(ParamType::Tuple(fields));
    }

    parse_scalar(s)
}

fn parse_scalar(s: &str) -> Result<ParamType, AbiError> {
    match s {
        "address" => return Ok(ParamType::Address),
        "bool" => return Ok(ParamType::Bool),
        "string" => return Ok(ParamType::String),
        "bytes" => return Ok(ParamType::Bytes),
        "uint" => return Ok(ParamType::Uint(256)),
        "int" => return Ok(ParamType::Int(256)),
        _ => {}
    }

    if let Some(rest) = s.strip_prefix("uint") {
        let bits = parse_number(rest, s)?;
        return Ok(ParamType::Uint(bits));
    }
    if let Some(rest) = s.strip_prefix("int") {
        let bits = parse_number(rest, s)?;
        return Ok(ParamType::Int(bits));
    }
    if let Some(rest) = s.strip_prefix("bytes") {
        let size = parse_number(rest, s)?;
        return Ok(ParamType::FixedBytes(size));
    }

    Err(AbiError::InvalidDescriptor(format!("unknown type `{}`", s)))
}

fn parse_number(digits: &str, full: &str) -> Result<usize, AbiError> {
    digits
        .parse()
        .map_err(|_| AbiError::InvalidDescriptor(format!("unknown type `{}`", full)))
}

/// Split a comma-separated list at bracket depth zero
///
/// `"uint256,(bool,bytes),address[2]"` splits into three parts; commas
/// inside parentheses or brackets are left alone.
pub(crate) fn split_top_level(s: &str) -> Result<Vec<&str>, AbiError> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    AbiError::InvalidDescriptor(format!("unbalanced `{}`", s))
                })?;
            }
            ',' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(AbiError::InvalidDescriptor(format!("unbalanced `{}`", s)));
    }
    parts.push(&s[start..]);
    Ok(parts)
}
