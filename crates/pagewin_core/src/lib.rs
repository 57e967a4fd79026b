//! Core types and utilities for pagewin
//!
//! This crate provides the error type, configuration and serialization
//! helpers shared by the pagination components.

pub mod config;
pub mod errors;
pub mod serialization;

pub use config::{ActivePolicy, PaginationConfig, MAX_WINDOW};
pub use errors::{PaginationError, Result};
