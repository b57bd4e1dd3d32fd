use std::env;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tracing::warn;

use gala_application::RuntimeConfig;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub data_dir: String,
    pub export_dir: String,
    /// Directory for daily log files. Empty means log to stderr only.
    pub log_dir: String,
    /// Prompt history file. Empty means `.gala_history` under the data
    /// directory.
    pub history_file: String,
    /// Attendee ceiling per event. Zero means unlimited.
    pub max_attendees_per_event: u32,
    pub seed_admin: SeedAdminConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SeedAdminConfig {
    pub username: String,
    pub password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
            export_dir: "./exports".to_string(),
            log_dir: String::new(),
            history_file: String::new(),
            max_attendees_per_event: 0,
            seed_admin: SeedAdminConfig::default(),
        }
    }
}

impl Default for SeedAdminConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let path = env::var("GALA_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        if !file_path.exists() {
            // Relative paths stay relative to the working directory when
            // there is no config file to anchor them.
            warn!("config.toml not found, using defaults");
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            config.normalize();
            config.validate()?;
            return Ok(config);
        }
        let content = fs::read_to_string(file_path)?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.resolve_paths(file_path.parent());
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        self.data_dir = self.data_dir.trim().to_string();
        self.export_dir = self.export_dir.trim().to_string();
        self.log_dir = self.log_dir.trim().to_string();
        self.history_file = self.history_file.trim().to_string();
        if self.history_file.is_empty() && !self.data_dir.is_empty() {
            self.history_file = Path::new(&self.data_dir)
                .join(".gala_history")
                .to_string_lossy()
                .to_string();
        }
        if self.seed_admin.username.trim().is_empty() {
            self.seed_admin.username = SeedAdminConfig::default().username;
        } else {
            self.seed_admin.username = self.seed_admin.username.trim().to_string();
        }
        if self.seed_admin.password.trim().is_empty() {
            self.seed_admin.password = SeedAdminConfig::default().password;
        }
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.data_dir = resolve_path(base, &self.data_dir);
        self.export_dir = resolve_path(base, &self.export_dir);
        self.log_dir = resolve_path(base, &self.log_dir);
        self.history_file = resolve_path(base, &self.history_file);
    }

    pub fn validate(&self) -> Result<()> {
        if self.data_dir.trim().is_empty() {
            return Err(anyhow!("data_dir must not be empty"));
        }
        if self.export_dir.trim().is_empty() {
            return Err(anyhow!("export_dir must not be empty"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            data_dir: self.data_dir.clone(),
            export_dir: self.export_dir.clone(),
            log_dir: self.log_dir.clone(),
            history_file: self.history_file.clone(),
            max_attendees_per_event: self.max_attendees_per_event,
            seed_admin_username: self.seed_admin.username.clone(),
            seed_admin_password: self.seed_admin.password.clone(),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("GALA_DATA_DIR") {
            self.data_dir = value;
        }
        if let Ok(value) = env::var("GALA_EXPORT_DIR") {
            self.export_dir = value;
        }
        if let Ok(value) = env::var("GALA_LOG_DIR") {
            self.log_dir = value;
        }
        if let Ok(value) = env::var("GALA_HISTORY_FILE") {
            self.history_file = value;
        }
        if let Ok(value) = env::var("GALA_MAX_ATTENDEES") {
            self.max_attendees_per_event = value.parse().unwrap_or(self.max_attendees_per_event);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
