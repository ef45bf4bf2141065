//! Limits of the CRS recurrence configuration

/// Smallest accepted sequence length
pub const CRS_MIN_LEN: usize = 1;

/// Largest accepted sequence length (size of the coefficient and history vectors)
pub const CRS_MAX_LEN: usize = 30;
