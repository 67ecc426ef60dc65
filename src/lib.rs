//! # Crane Configuration Library
//!
//! This crate provides configuration loading for the Crane content service:
//! - INI-style config files with compiled-in defaults
//! - Environment variable overrides for the config path and debug flag
//! - Validation of the serve-content directory at load time
//!
//! ## Module Structure
//!
//! ```text
//! crane_config/
//! +-- config/        Settings types and the loader
//! +-- shared/        Common utilities (errors, suppression guard)
//! +-- telemetry      Tracing/logging setup
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crane_config::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("metadata lives in {}", settings.general.data_dir);
//! ```

// Configuration module
pub mod config;

// Shared utilities
pub mod shared;

// Telemetry and observability
pub mod telemetry;
