// Model artifacts and inference
pub mod ml;
