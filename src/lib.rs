pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod naming;
pub mod prompt;
pub mod render;
pub mod services;
pub mod type_mapping;

pub use error::{GenResult, GenerationError};
