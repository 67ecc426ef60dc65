//! Application Error Types
//!
//! Centralized error handling for configuration loading.

use std::path::PathBuf;

use super::suppress::Kinded;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config file not found at path {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] config::ConfigError),
}

/// Coarse error classification, used by the suppression guard to decide
/// which failures a caller may swallow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Invalid,
}

impl Kinded for AppError {
    type Kind = ErrorKind;

    fn kind(&self) -> ErrorKind {
        match self {
            AppError::ConfigNotFound(_) => ErrorKind::NotFound,
            AppError::Invalid(_) => ErrorKind::Invalid,
        }
    }
}
