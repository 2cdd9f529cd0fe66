// src/config.rs
use std::{
    env,
    net::SocketAddr,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    template_dir: PathBuf,
    seed_pages: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("templates")
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        listen_addr.parse::<SocketAddr>().map_err(|err| {
            ConfigError::Invalid(format!("LISTEN_ADDR `{listen_addr}` is not a socket address: {err}"))
        })?;

        let template_dir = match lookup("TEMPLATE_DIR") {
            Some(dir) if dir.trim().is_empty() => {
                return Err(ConfigError::Invalid("TEMPLATE_DIR cannot be empty".into()));
            }
            Some(dir) => PathBuf::from(dir),
            None => default_template_dir(),
        };

        let seed_pages = lookup("SEED_PAGES")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            listen_addr,
            template_dir,
            seed_pages,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// Page titles created at startup.
    pub fn seed_pages(&self) -> &[String] {
        &self.seed_pages
    }
}
