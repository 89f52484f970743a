//! Core utilities and common types for linkchain.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
