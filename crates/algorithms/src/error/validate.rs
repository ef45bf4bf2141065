//! Validation utilities for gfcrs primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a configuration condition
#[inline(always)]
pub fn configuration(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::config(name, reason));
    }
    Ok(())
}

/// Validate that a configured vector holds exactly `expected` entries
#[inline(always)]
pub fn count(name: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::config(name, format!("expected {} values, got {}", expected, actual)));
    }
    Ok(())
}

/// Validate that a configured size does not exceed `max`
#[inline(always)]
pub fn maximum(name: &'static str, value: usize, max: usize) -> Result<()> {
    if value > max {
        return Err(Error::config(name, format!("{} exceeds the maximum {}", value, max)));
    }
    Ok(())
}

/// Validate that two operands share a characteristic or field
#[inline(always)]
pub fn same_field(condition: bool, operation: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::FieldMismatch { operation });
    }
    Ok(())
}
