// HTTP boundary
pub mod http;
