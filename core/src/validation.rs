//! Field checks shared by message and claim validation.
//!
//! Each check names the JSON field it guards so the resulting
//! [`ValidationError`] can be reported against it.

use tracing::debug;

use crate::account::{AccAddress, ADDR_LEN};
use crate::address::ForeignAddress;
use crate::coin::Coin;
use crate::error::ValidationError;

/// Native account address must be exactly [`ADDR_LEN`] bytes.
pub fn account_len(field: &'static str, addr: &AccAddress) -> Result<(), ValidationError> {
    if addr.len() != ADDR_LEN {
        return reject(ValidationError::AddressLength {
            field,
            expected: ADDR_LEN,
            actual: addr.len(),
        });
    }
    Ok(())
}

pub fn foreign_not_empty(
    field: &'static str,
    addr: &ForeignAddress,
) -> Result<(), ValidationError> {
    if addr.is_empty() {
        return reject(ValidationError::Empty { field });
    }
    Ok(())
}

pub fn not_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return reject(ValidationError::Empty { field });
    }
    Ok(())
}

/// Strictly positive.
pub fn positive(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value <= 0 {
        return reject(ValidationError::NotPositive { field, value });
    }
    Ok(())
}

pub fn non_negative(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return reject(ValidationError::Negative { field, value });
    }
    Ok(())
}

pub fn coin_positive(field: &'static str, coin: &Coin) -> Result<(), ValidationError> {
    if !coin.is_positive() {
        return reject(ValidationError::NotPositive {
            field,
            value: coin.amount,
        });
    }
    Ok(())
}

pub fn same_len(
    field: &'static str,
    actual: usize,
    expected_from: &'static str,
    expected: usize,
) -> Result<(), ValidationError> {
    if actual != expected {
        return reject(ValidationError::LengthMismatch {
            field,
            actual,
            expected_from,
            expected,
        });
    }
    Ok(())
}

pub(crate) fn reject(err: ValidationError) -> Result<(), ValidationError> {
    debug!(field = err.field(), %err, "validation rejected");
    Err(err)
}
