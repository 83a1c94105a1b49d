pub mod clients;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod models;
pub mod services;

pub use error::{AppError, Result};
