//! Encode an ERC20 transfer call and decode a balance response.
//!
//! Run with: cargo run --example erc20_call

use ravel_abi::{ParamType, Token, decode, erc20};
use ravel_primitives::{Address, U256};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = Address::from_hex("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48")?;
    let recipient = Address::from_hex("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d")?;

    let contract = erc20(token);
    let data = contract.encode_call(
        "transfer",
        &[
            Token::Address(recipient),
            Token::Uint(U256::from(1_000_000u64)),
        ],
    )?;
    println!("transfer calldata: 0x{}", hex::encode(&data));

    // Pretend this came back from an eth_call
    let mut response = [0u8; 32];
    response[31] = 42;
    let balance = decode(&[ParamType::Uint(256)], &response)?;
    println!("decoded balance: {:?}", balance[0]);

    Ok(())
}
