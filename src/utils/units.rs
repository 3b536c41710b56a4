/// Convert a stored temperature in tenths of a degree Celsius to Fahrenheit.
///
/// # Examples
/// ```
/// use ecad_api::utils::tenths_to_fahrenheit;
///
/// assert!((tenths_to_fahrenheit(50) - 41.0).abs() < 1e-9);
/// ```
pub fn tenths_to_fahrenheit(tenths: i32) -> f64 {
    (tenths as f64 / 10.0) * 9.0 / 5.0 + 32.0
}
