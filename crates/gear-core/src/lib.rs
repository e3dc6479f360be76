//! GEAR Core
//!
//! Core domain types and error handling for the GEAR license service.
//! This crate has minimal dependencies and defines the shared vocabulary
//! used by the licensing, API and CLI crates.

pub mod error;
pub mod plan;

pub use error::{Error, Result};
pub use plan::Plan;
