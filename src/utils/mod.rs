pub mod constants;
pub mod units;

pub use constants::*;
pub use units::tenths_to_fahrenheit;
