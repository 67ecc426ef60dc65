//! Application settings and configuration structures.

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat, FileSourceFile};
use serde::Deserialize;
use tracing::{error, info};

use crate::shared::error::{AppError, ErrorKind};
use crate::shared::suppress::suppress;

/// The default location for a user-provided config file.
pub const CONFIG_PATH: &str = "/etc/crane.conf";

/// Environment variable whose value overrides [`CONFIG_PATH`].
pub const CONFIG_ENV_NAME: &str = "CRANE_CONFIG_PATH";

/// Environment variable whose value overrides the debug setting.
pub const DEBUG_ENV_NAME: &str = "CRANE_DEBUG";

/// Compiled-in default values, merged below any user config file.
const DEFAULT_CONFIG: &str = include_str!("../../data/default_config.conf");

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// General service settings ([general] section)
    pub general: GeneralSettings,

    /// Google Search Appliance integration ([gsa] section)
    pub gsa: SearchSettings,

    /// Solr integration ([solr] section)
    pub solr: SearchSettings,
}

/// Settings from the [general] section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralSettings {
    /// Enable debug behavior in the host application
    pub debug: bool,

    /// Directory holding the repository metadata files
    pub data_dir: String,

    /// Seconds between scans of `data_dir` for changed metadata
    pub data_dir_polling_interval: u64,

    /// Public endpoint advertised to clients (empty = derive from request)
    pub endpoint: String,

    /// Serve static repository content straight from the local filesystem
    pub serve_content: bool,

    /// Root of the v1 content tree
    pub content_dir_v1: String,

    /// Root of the v2 content tree
    pub content_dir_v2: String,
}

/// Settings for an external search backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchSettings {
    /// Backend URL; empty disables the backend
    pub url: String,
}

impl Settings {
    /// Load settings from the process environment and config files.
    ///
    /// The loading order is:
    /// 1. Compiled-in defaults (data/default_config.conf)
    /// 2. The config file named by `CRANE_CONFIG_PATH`, else /etc/crane.conf
    /// 3. The `CRANE_DEBUG` environment variable (highest priority)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ConfigNotFound`] when `CRANE_CONFIG_PATH` names a
    /// file that does not exist, and [`AppError::Invalid`] when any config
    /// source cannot be parsed. A missing file at the default path is not an
    /// error; the defaults apply.
    pub fn load() -> Result<Self, AppError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::load_with(Path::new(CONFIG_PATH), |key| std::env::var(key).ok())
    }

    /// Load settings with an explicit default path and environment lookup.
    ///
    /// [`Settings::load`] delegates here with the process environment; hosts
    /// and tests that manage their own environment call this directly.
    pub fn load_with(
        default_path: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let mut builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Ini));

        // An empty CRANE_CONFIG_PATH counts as unset.
        match env(CONFIG_ENV_NAME).filter(|path| !path.is_empty()) {
            Some(path) => {
                let path = PathBuf::from(path);
                match user_config(&path) {
                    Ok(source) => {
                        builder = builder.add_source(source);
                        info!(path = %path.display(), "configuration loaded");
                    }
                    Err(err) => {
                        error!(path = %path.display(), "config file not found");
                        return Err(err);
                    }
                }
            }
            // A missing file at the default path just means "use defaults".
            None => match suppress(&[ErrorKind::NotFound], || user_config(default_path))? {
                Some(source) => {
                    builder = builder.add_source(source);
                    info!(path = %default_path.display(), "configuration loaded");
                }
                None => info!("no config specified or found, using defaults"),
            },
        }

        // CRANE_DEBUG, when present, decides alone: "true" in any letter
        // case enables debug, every other value disables it.
        if let Some(raw) = env(DEBUG_ENV_NAME) {
            builder = builder.set_override("general.debug", raw.eq_ignore_ascii_case("true"))?;
        }

        let mut settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate_serve_content();
        Ok(settings)
    }

    /// Disable content serving when the configured directory is unusable.
    ///
    /// Logs exactly one error per invalid configuration.
    fn validate_serve_content(&mut self) {
        if !self.general.serve_content {
            return;
        }
        let dir = &self.general.content_dir_v1;
        if dir.is_empty() || !Path::new(dir).exists() {
            error!(
                path = %dir,
                "serve_content is enabled but the v1 content directory does not exist; disabling"
            );
            self.general.serve_content = false;
        }
    }
}

/// Build a config source for a user-provided INI file.
fn user_config(path: &Path) -> Result<File<FileSourceFile, FileFormat>, AppError> {
    if !path.is_file() {
        return Err(AppError::ConfigNotFound(path.to_path_buf()));
    }
    Ok(File::from(path.to_path_buf()).format(FileFormat::Ini))
}
