//! Contract interaction helpers
//!
//! A thin registry that maps function names to descriptors so calls can
//! be encoded and return data decoded by name.

use ravel_primitives::Address;

use crate::{AbiError, Function, ParamType, Token, decode};

/// Function definition: the callable descriptor plus its return types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// Input descriptor (name, parameter types, selector)
    pub function: Function,
    /// Output parameter types
    pub outputs: Vec<ParamType>,
}

impl FunctionDef {
    /// Create a function definition from a signature string
    pub fn parse(signature: &str, outputs: Vec<ParamType>) -> Result<Self, AbiError> {
        for output in &outputs {
            output.validate()?;
        }
        Ok(Self {
            function: Function::parse(signature)?,
            outputs,
        })
    }
}

/// Contract helper for encoding/decoding function calls by name
#[derive(Debug, Clone)]
pub struct Contract {
    address: Address,
    functions: Vec<FunctionDef>,
}

impl Contract {
    /// Create a new contract helper
    pub fn new(address: Address) -> Self {
        Self {
            address,
            functions: Vec::new(),
        }
    }

    /// Get the contract address
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Add a function with builder pattern
    pub fn with_function(mut self, function: FunctionDef) -> Self {
        self.functions.push(function);
        self
    }

    /// Get a function by name
    pub fn function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.iter().find(|f| f.function.name() == name)
    }

    /// Encode a call to the named function
    pub fn encode_call(&self, name: &str, values: &[Token]) -> Result<Vec<u8>, AbiError> {
        let def = self
            .function(name)
            .ok_or_else(|| AbiError::UnknownFunction(name.to_string()))?;
        def.function.encode_call(values)
    }

    /// Decode return data of the named function
    pub fn decode_output(&self, name: &str, data: &[u8]) -> Result<Vec<Token>, AbiError> {
        let def = self
            .function(name)
            .ok_or_else(|| AbiError::UnknownFunction(name.to_string()))?;
        decode(&def.outputs, data)
    }
}

/// Create an ERC20 contract helper
pub fn erc20(address: Address) -> Contract {
    let defs = [
        ("name()", vec![ParamType::String]),
        ("symbol()", vec![ParamType::String]),
        ("decimals()", vec![ParamType::Uint(8)]),
        ("totalSupply()", vec![ParamType::Uint(256)]),
        ("balanceOf(address)", vec![ParamType::Uint(256)]),
        ("transfer(address,uint256)", vec![ParamType::Bool]),
        ("approve(address,uint256)", vec![ParamType::Bool]),
        ("allowance(address,address)", vec![ParamType::Uint(256)]),
        ("transferFrom(address,address,uint256)", vec![ParamType::Bool]),
    ];

    let mut contract = Contract::new(address);
    for (signature, outputs) in defs {
        let def = FunctionDef::parse(signature, outputs).expect("valid erc20 signature");
        contract = contract.with_function(def);
    }
    contract
}

#[cfg(test)]
mod tests {
    use super::*;
    use ravel_primitives::U256;

    #[test]
    fn test_encode_transfer_by_name() {
        let token = Address::from_hex("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48").unwrap();
        let to = Address::from_hex("0x1234567890123456789012345678901234567890").unwrap();
        let contract = erc20(token);

        let data = contract
            .encode_call("transfer", &[Token::Address(to), Token::uint(1000u64)])
            .unwrap();
        assert_eq!(&data[..4], &[0xa9, 0x05, 0x9c, 0xbb]);
        assert_eq!(data.len(), 68);
    }

    #[test]
    fn test_decode_balance_output() {
        let contract = erc20(Address::ZERO);
        let mut data = [0u8; 32];
        data[31] = 100;

        let tokens = contract.decode_output("balanceOf", &data).unwrap();
        assert_eq!(tokens, vec![Token::Uint(U256::from(100))]);
    }

    #[test]
    fn test_unknown_function() {
        let contract = erc20(Address::ZERO);
        assert_eq!(
            contract.encode_call("mint", &[]),
            Err(AbiError::UnknownFunction("mint".to_string()))
        );
    }

    #[test]
    fn test_wrong_arg_count_surfaces_arity_error() {
        let contract = erc20(Address::ZERO);
        let err = contract
            .encode_call("transfer", &[Token::Address(Address::ZERO)])
            .unwrap_err();
        assert_eq!(err, AbiError::ArityMismatch { expected: 2, got: 1 });
    }

    #[test]
    fn test_erc20_registry_complete() {
        let contract = erc20(Address::ZERO);
        for name in [
            "name",
            "symbol",
            "decimals",
            "totalSupply",
            "balanceOf",
            "transfer",
            "approve",
            "allowance",
            "transferFrom",
        ] {
            assert!(contract.function(name).is_some(), "missing {}", name);
        }
        assert_eq!(contract.address(), &Address::ZERO);
    }
}
