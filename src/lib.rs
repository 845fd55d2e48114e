pub mod app;
pub mod config;
pub mod display;
pub mod errors;
pub mod exchange;
pub mod http;
pub mod prompt;
pub mod symbol;

pub use errors::{Error, ValidationError};
