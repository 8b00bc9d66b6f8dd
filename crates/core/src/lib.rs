pub mod config;
pub mod error;
pub mod questions;
pub mod scoring;
pub mod types;
pub mod utils;

pub use config::AppConfig;
pub use error::{Error, Result};
