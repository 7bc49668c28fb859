//! cardgen library: application logic for the test card generator.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
