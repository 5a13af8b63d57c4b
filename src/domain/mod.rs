// Error taxonomy (startup artifacts, request inference)
pub mod errors;

// Feature registry and prediction types
pub mod ml;
