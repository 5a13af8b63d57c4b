pub mod health_probe;
pub mod observability;
