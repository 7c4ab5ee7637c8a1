//! # tubeproxy-core
//!
//! Core crate for TubeProxy. Contains the cache backend trait, configuration
//! schemas, domain value types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other TubeProxy crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
