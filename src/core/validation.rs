//! Validation utilities for numeric arguments and configuration values

/// Validate positive integer value
pub fn validate_positive_int(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("Value must be greater than 0".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a valid positive integer", value)),
    }
}

/// Validate a non-negative integer value (zero allowed)
pub fn validate_non_negative_int(value: &str) -> Result<u64, String> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| format!("'{}' is not a valid non-negative integer", value))
}

/// Validate that a queue capacity can hold at least one message
pub fn validate_capacity(owner: &str, capacity: usize) -> Result<usize, String> {
    if capacity == 0 {
        Err(format!("{} queue capacity must be at least 1", owner))
    } else {
        Ok(capacity)
    }
}
