pub mod client;
pub mod config;
pub mod contract;
pub mod default_colors;
pub mod error;
pub mod factories;
pub mod fixture;
pub mod runner;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
