// Utility helpers shared across services

use crate::error::{AppError, Result};

/// Case-insensitive address/string comparison.
pub fn is_equal_case_insensitive(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Validate a 20-byte hex address (`0x` + 40 hex digits).
pub fn validate_address(address: &str) -> Result<()> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput("Address is empty".to_string()));
    }
    if !trimmed.starts_with("0x") {
        return Err(AppError::InvalidInput(format!(
            "Address {} must start with 0x",
            trimmed
        )));
    }
    let digits = &trimmed[2..];
    if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AppError::InvalidInput(format!(
            "Address {} is not a 20-byte hex address",
            trimmed
        )));
    }
    Ok(())
}

/// Coerce a claimed balance (possibly a numeric string from the resolver)
/// into the enumeration bound. Unparseable input is the caller-visible
/// validation class, not an absorbed failure.
pub fn parse_token_balance(raw: &str) -> Result<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput("Token balance is empty".to_string()));
    }
    trimmed
        .parse::<u64>()
        .map_err(|e| AppError::InvalidInput(format!("Invalid token balance {}: {}", trimmed, e)))
}
