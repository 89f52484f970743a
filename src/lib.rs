//! # linkchain - hash-linked record chains
//!
//! Builds in-memory, singly linked chains whose records are bound to their
//! predecessor by SHA-256, and times how long construction takes:
//! - **chain**: records, the sequential builder, injectable clock and randomness
//! - **bench**: timing harness and reports
//! - **config**: construction constants and scenario tables
//!
//! ## Quick Start
//!
//! ```rust
//! use linkchain::chain::ChainBuilder;
//!
//! let chain = ChainBuilder::new()
//!     .build(3, 4, &mut rand::thread_rng())
//!     .unwrap();
//! let records: Vec<_> = chain.iter().collect();
//! assert_eq!(records[1].linkage(), records[0].signature());
//! ```

pub mod bench;
pub mod chain;
pub mod config;
pub mod core;
pub mod crypto;

pub use chain::{build, Chain, ChainBuilder, ChainShape, Record};
pub use crate::core::error::{Error, Result};
