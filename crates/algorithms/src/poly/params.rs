//! params.rs - Characteristic validation helpers

/// Check if a number is prime (trial division)
///
/// Characteristics are stored as `u8`, so trial division up to the square
/// root is never more than a handful of steps.
pub fn is_prime(p: u8) -> bool {
    if p < 2 {
        return false;
    }
    if p == 2 {
        return true;
    }
    if p % 2 == 0 {
        return false;
    }

    let mut i = 3u8;
    while (i as u16) * (i as u16) <= p as u16 {
        if p % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}
