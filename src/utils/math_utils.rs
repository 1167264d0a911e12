//! Numeric helpers

/// Round a value to the given number of decimals, half-way values toward +∞
///
/// `round_half_up(-0.125, 2)` gives `-0.12`, not `-0.13`, which is what
/// display layers downstream expect.
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}
