//! Input validation for owner-supplied configuration
//!
//! Helpers return `Result<T, String>` so they can be unit tested without a
//! mocked blockchain. Entry points turn an `Err` into a panic with
//! [`or_panic`], which reverts the transaction.

use near_sdk::{env, Gas};

use crate::{KeyHash, MAX_CALLBACK_GAS, MAX_NUM_WORDS, MAX_REQUEST_CONFIRMATIONS};

/// Unwrap a validation result or abort the call with its message
pub fn or_panic<T>(result: Result<T, String>) -> T {
    result.unwrap_or_else(|e| env::panic_str(&e))
}

/// Number of words must be in `1..=MAX_NUM_WORDS`
pub fn validate_num_words(num_words: u32) -> Result<u32, String> {
    if num_words == 0 {
        return Err("num_words must be at least 1".to_string());
    }
    if num_words > MAX_NUM_WORDS {
        return Err(format!(
            "num_words {} exceeds hard limit of {}",
            num_words, MAX_NUM_WORDS
        ));
    }
    Ok(num_words)
}

pub fn validate_request_confirmations(confirmations: u16) -> Result<u16, String> {
    if confirmations > MAX_REQUEST_CONFIRMATIONS {
        return Err(format!(
            "request_confirmations {} exceeds hard limit of {}",
            confirmations, MAX_REQUEST_CONFIRMATIONS
        ));
    }
    Ok(confirmations)
}

pub fn validate_callback_gas(gas: Gas) -> Result<Gas, String> {
    if gas.as_gas() == 0 {
        return Err("callback_gas must be non-zero".to_string());
    }
    if gas > MAX_CALLBACK_GAS {
        return Err(format!(
            "callback_gas {} exceeds hard limit of {}",
            gas, MAX_CALLBACK_GAS
        ));
    }
    Ok(gas)
}

/// Parse a 32-byte key hash from hex, with or without a `0x` prefix
pub fn parse_key_hash(key_hash: &str) -> Result<KeyHash, String> {
    let trimmed = key_hash.strip_prefix("0x").unwrap_or(key_hash);
    let bytes = hex::decode(trimmed).map_err(|e| format!("Invalid key_hash hex: {}", e))?;

    bytes.try_into().map_err(|bytes: Vec<u8>| {
        format!(
            "key_hash must be 32 bytes, got {} bytes",
            bytes.len()
        )
    })
}
