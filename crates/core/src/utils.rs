//! Shared numeric helpers.

/// Rounds to one decimal place.
///
/// This is the comparison precision for the whole pipeline: vertical
/// offsets are bucketed at it and font sizes are compared at it.
pub fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Integer tenth-of-unit key for a vertical offset.
///
/// Equivalent to `round_tenth` but usable as an ordered map key.
pub fn tenth_key(v: f64) -> i64 {
    (v * 10.0).round() as i64
}
