//! Shared Utilities
//!
//! Common utilities used across the crate.

pub mod error;
pub mod suppress;
