//! Stock quantity representation.

use crate::error::{DomainError, DomainResult};

/// On-hand stock quantity. Fractional units are common in a kitchen
/// (kilograms, liters), so this is a plain `f64` rather than an integer.
pub type Quantity = f64;

/// Validate a quantity that must be non-negative (on-hand levels, minimum
/// thresholds).
pub fn ensure_non_negative(label: &str, value: Quantity) -> DomainResult<Quantity> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::validation(format!(
            "{label} must be a non-negative number, got {value}"
        )));
    }
    Ok(value)
}

/// Validate a quantity that must be strictly positive (ledger entries).
pub fn ensure_positive(label: &str, value: Quantity) -> DomainResult<Quantity> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DomainError::validation(format!(
            "{label} must be a positive number, got {value}"
        )));
    }
    Ok(value)
}
