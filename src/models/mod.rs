pub mod reading;
pub mod station;

pub use reading::{QualityFlag, ReadingRecord};
pub use station::StationMetadata;
