use std::io;

use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    #[serde(default = "default_enable_docs")]
    pub enable_docs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            worker_threads: Some(4),
            enable_docs: default_enable_docs(),
        }
    }
}

/// Settings for the in-memory repair-shop directory.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default = "default_seed")]
    pub seed_demo_data: bool,
    /// A customer with no ticket completed inside this window is inactive.
    #[serde(default = "default_inactive_window")]
    pub inactive_window_months: u32,
    #[serde(default = "default_eotm_window")]
    pub employee_of_month_window_months: u32,
    #[serde(default = "default_priority_rule")]
    pub priority_rule: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: default_seed(),
            inactive_window_months: default_inactive_window(),
            employee_of_month_window_months: default_eotm_window(),
            priority_rule: default_priority_rule(),
        }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8080 }
fn default_enable_docs() -> bool { true }
fn default_seed() -> bool { true }
fn default_inactive_window() -> u32 { 12 }
fn default_eotm_window() -> u32 { 1 }
fn default_priority_rule() -> String { "unassigned_last".into() }

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

/// Read `path`; only a missing file falls back to `AppConfig::from_env`.
/// Unreadable or malformed files are errors.
pub fn load_or_env(path: &str) -> Result<AppConfig> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse(&content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(AppConfig::from_env()),
        Err(e) => Err(anyhow!("cannot read {path}: {e}")),
    }
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`); fall back to env vars when the file is missing.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_or_env(&config_path())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Defaults overridden by `SERVER_HOST`, `SERVER_PORT`, `TOKIO_WORKER_THREADS`,
    /// `ENABLE_DOCS` and `PRIORITY_RULE`. The rule name is checked when the directory is built.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            cfg.server.worker_threads = Some(w);
        }
        if let Ok(v) = std::env::var("ENABLE_DOCS") {
            cfg.server.enable_docs = matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Ok(rule) = std::env::var("PRIORITY_RULE") {
            cfg.directory.priority_rule = rule;
        }
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.directory.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        Ok(())
    }
}

impl DirectoryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.inactive_window_months == 0 || self.employee_of_month_window_months == 0 {
            return Err(anyhow!("directory windows must be at least one month"));
        }
        Ok(())
    }
}
