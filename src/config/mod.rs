//! # Configuration Module
//!
//! This module handles application configuration loading. Configuration can
//! be loaded from:
//! - A compiled-in defaults file (data/default_config.conf)
//! - An INI config file (path from CRANE_CONFIG_PATH, else /etc/crane.conf)
//! - Environment variables (CRANE_DEBUG)
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crane_config::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("serving content: {}", settings.general.serve_content);
//! ```

mod settings;

pub use settings::*;
