//! Function descriptors, selectors, and call assembly

use std::fmt;

use ravel_crypto::keccak256;
use ravel_primitives::H256;

use crate::{AbiError, ParamType, Token, decode, encode, parser};

/// A contract function descriptor: name plus ordered input types
///
/// Input order is significant; it defines both the canonical signature
/// and the positional mapping to supplied values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    name: String,
    inputs: Vec<ParamType>,
}

impl Function {
    /// Create a function descriptor, validating the name and input types
    pub fn new(name: impl Into<String>, inputs: Vec<ParamType>) -> Result<Self, AbiError> {
        let name = name.into();
        let valid_name = !name.is_empty()
            && !name.starts_with(|c: char| c.is_ascii_digit())
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_name {
            return Err(AbiError::InvalidDescriptor(format!(
                "invalid function name `{}`",
                name
            )));
        }
        for input in &inputs {
            input.validate()?;
        }
        Ok(Self { name, inputs })
    }

    /// Parse a descriptor from a signature string like
    /// `"transfer(address,uint256)"`
    ///
    /// Short integer aliases are normalized, so `"f(uint,bool)"` and
    /// `"f(uint256,bool)"` describe the same function.
    pub fn parse(signature: &str) -> Result<Self, AbiError> {
        let signature = signature.trim();
        let open = signature.find('(').ok_or_else(|| {
            AbiError::InvalidDescriptor(format!("missing parameter list in `{}`", signature))
        })?;
        let body = signature[open + 1..].strip_suffix(')').ok_or_else(|| {
            AbiError::InvalidDescriptor(format!("unbalanced parentheses in `{}`", signature))
        })?;
        let inputs = parser::split_top_level(body)?
            .into_iter()
            .map(parser::parse_type)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&signature[..open], inputs)
    }

    /// Function name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared input types
    pub fn inputs(&self) -> &[ParamType] {
        &self.inputs
    }

    /// Canonical signature string: `name(type1,type2,...)`
    pub fn signature(&self) -> String {
        let types: Vec<String> = self.inputs.iter().map(ToString::to_string).collect();
        format!("{}({})", self.name, types.join(","))
    }

    /// 4-byte selector: the first 4 bytes of keccak256 of the signature
    pub fn selector(&self) -> [u8; 4] {
        let hash = keccak256(self.signature().as_bytes());
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&hash.as_bytes()[..4]);
        selector
    }

    /// Full 32-byte keccak256 of the signature, as used for log topics
    pub fn topic_hash(&self) -> H256 {
        keccak256(self.signature().as_bytes())
    }

    /// Encode a call payload: selector followed by the encoded inputs
    pub fn encode_call(&self, values: &[Token]) -> Result<Vec<u8>, AbiError> {
        if values.len() != self.inputs.len() {
            return Err(AbiError::ArityMismatch {
                expected: self.inputs.len(),
                got: values.len(),
            });
        }
        let mut payload = self.selector().to_vec();
        payload.extend(encode(&self.inputs, values)?);
        Ok(payload)
    }

    /// Encode a call payload as a `0x`-prefixed lowercase hex string
    pub fn encode_call_hex(&self, values: &[Token]) -> Result<String, AbiError> {
        Ok(format!("0x{}", hex::encode(self.encode_call(values)?)))
    }

    /// Decode a call payload back into input values
    ///
    /// Verifies the selector prefix before decoding.
    pub fn decode_call(&self, data: &[u8]) -> Result<Vec<Token>, AbiError> {
        if data.len() < 4 {
            return Err(AbiError::InvalidData(
                "payload shorter than a selector".to_string(),
            ));
        }
        let selector = self.selector();
        if data[..4] != selector {
            return Err(AbiError::InvalidData(format!(
                "selector mismatch: expected 0x{}, got 0x{}",
                hex::encode(selector),
                hex::encode(&data[..4])
            )));
        }
        decode(&self.inputs, &data[4..])
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signature())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_canonical_form() {
        let func = Function::parse("transfer(address,uint256)").unwrap();
        assert_eq!(func.signature(), "transfer(address,uint256)");
        assert_eq!(func.name(), "transfer");
        assert_eq!(func.inputs().len(), 2);
    }

    #[test]
    fn test_signature_normalizes_aliases() {
        // uint ≡ uint256 must hash identically
        let short = Function::parse("valid(uint,bool)").unwrap();
        let explicit = Function::parse("valid(uint256,bool)").unwrap();
        assert_eq!(short.signature(), "valid(uint256,bool)");
        assert_eq!(short.selector(), explicit.selector());
    }

    #[test]
    fn test_selector_known_vectors() {
        assert_eq!(
            Function::parse("transfer(address,uint256)").unwrap().selector(),
            [0xa9, 0x05, 0x9c, 0xbb]
        );
        assert_eq!(
            Function::parse("balanceOf(address)").unwrap().selector(),
            [0x70, 0xa0, 0x82, 0x31]
        );
        assert_eq!(
            Function::parse("approve(address,uint256)").unwrap().selector(),
            [0x09, 0x5e, 0xa7, 0xb3]
        );
    }

    #[test]
    fn test_selector_deterministic() {
        let func = Function::parse("foo(uint256,bool)").unwrap();
        assert_eq!(func.selector(), func.selector());
    }

    #[test]
    fn test_topic_hash_extends_selector() {
        let func = Function::parse("Transfer(address,address,uint256)").unwrap();
        let topic = func.topic_hash();
        assert_eq!(&topic.as_bytes()[..4], &func.selector());
        assert_eq!(
            topic.to_hex(),
            "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
        );
    }

    #[test]
    fn test_parse_no_params() {
        let func = Function::parse("totalSupply()").unwrap();
        assert_eq!(func.signature(), "totalSupply()");
        assert!(func.inputs().is_empty());
    }

    #[test]
    fn test_parse_tuple_params() {
        let func = Function::parse("submit((uint256,bool),address)").unwrap();
        assert_eq!(func.signature(), "submit((uint256,bool),address)");
        assert_eq!(func.inputs().len(), 2);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Function::parse("noparens").is_err());
        assert!(Function::parse("f(uint256").is_err());
        assert!(Function::parse("(uint256)").is_err());
        assert!(Function::parse("9f(uint256)").is_err());
        assert!(Function::parse("f(widget)").is_err());
    }

    #[test]
    fn test_encode_call_static_only_length() {
        // Static-only payload is exactly 4 + 32 * parameter count bytes
        let func = Function::parse("transfer(address,uint256)").unwrap();
        let data = func
            .encode_call(&[
                Token::Address(ravel_primitives::Address::ZERO),
                Token::uint(1000u64),
            ])
            .unwrap();
        assert_eq!(data.len(), 68);
        assert_eq!(&data[..4], &func.selector());
    }

    #[test]
    fn test_encode_call_arity_checked() {
        let func = Function::parse("transfer(address,uint256)").unwrap();
        let err = func
            .encode_call(&[Token::Address(ravel_primitives::Address::ZERO)])
            .unwrap_err();
        assert_eq!(err, AbiError::ArityMismatch { expected: 2, got: 1 });

        let err = func.encode_call(&[]).unwrap_err();
        assert_eq!(err, AbiError::ArityMismatch { expected: 2, got: 0 });
    }

    #[test]
    fn test_decode_call_roundtrip() {
        let func = Function::parse("submit(uint256,string)").unwrap();
        let values = vec![Token::uint(99u64), Token::string("payload")];
        let data = func.encode_call(&values).unwrap();
        assert_eq!(func.decode_call(&data).unwrap(), values);
    }

    #[test]
    fn test_decode_call_rejects_wrong_selector() {
        let transfer = Function::parse("transfer(address,uint256)").unwrap();
        let approve = Function::parse("approve(address,uint256)").unwrap();
        let data = transfer
            .encode_call(&[
                Token::Address(ravel_primitives::Address::ZERO),
                Token::uint(1u64),
            ])
            .unwrap();
        let err = approve.decode_call(&data).unwrap_err();
        assert!(matches!(err, AbiError::InvalidData(_)));
        assert!(approve.decode_call(&data[..2]).is_err());
    }
}
