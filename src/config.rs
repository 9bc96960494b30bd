//! Configuration system using TOML files.
//!
//! Config is looked up in the OS-standard config directory unless a path is
//! given on the command line:
//! - Windows: %APPDATA%\chromax\config.toml
//! - macOS: ~/Library/Application Support/chromax/config.toml
//! - Linux: ~/.config/chromax/config.toml
//!
//! Every section is optional; missing keys fall back to defaults. The
//! resulting [`Config`] is built once at startup and shared read-only.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8390;

/// User agent sent on every outbound request. MusicBrainz rejects anonymous clients.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "chromax-api/",
    env!("CARGO_PKG_VERSION"),
    " (+https://chromax-api.onrender.com)"
);

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Listener settings
    pub server: ServerConfig,

    /// Outbound request settings
    pub upstream: UpstreamConfig,

    /// Base URLs of the external services
    pub endpoints: Endpoints,
}

/// Listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind (all interfaces by default)
    pub bind: String,

    /// TCP port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Listener address. `bind` must be an IP literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.bind.trim().parse().map_err(|_| ConfigError::Invalid {
            field: "server.bind".to_string(),
            reason: format!("not an IP address: {}", self.bind),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Outbound request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Fixed identifying User-Agent
    pub user_agent: String,

    /// Whole-request timeout for every outbound call, in seconds
    pub timeout_secs: u64,

    /// Budget for a single lyric provider inside the fallback chain, in seconds
    pub provider_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
            provider_timeout_secs: 8,
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }
}

/// Base URLs of the external services (no trailing slash needed)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub ovh: String,
    pub dr: String,
    pub lrclib: String,
    pub musicbrainz: String,
    pub coverart: String,
    pub archive: String,
    pub deezer: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            ovh: "https://api.lyrics.ovh/v1".to_string(),
            dr: "https://lyrics-api-psi.vercel.app/api".to_string(),
            lrclib: "https://lrclib.net/api".to_string(),
            musicbrainz: "https://musicbrainz.org/ws/2".to_string(),
            coverart: "https://coverartarchive.org".to_string(),
            archive: "https://archive.org".to_string(),
            deezer: "https://api.deezer.com".to_string(),
        }
    }
}

impl Endpoints {
    /// Point every service at the same base URL. Used by tests with a stub upstream.
    #[cfg(test)]
    pub fn all(base_url: &str) -> Self {
        Self {
            ovh: format!("{base_url}/ovh"),
            dr: format!("{base_url}/dr"),
            lrclib: format!("{base_url}/lrclib"),
            musicbrainz: format!("{base_url}/mb"),
            coverart: format!("{base_url}/caa"),
            archive: format!("{base_url}/ia"),
            deezer: format!("{base_url}/deezer"),
        }
    }

    fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("ovh", self.ovh.as_str()),
            ("dr", self.dr.as_str()),
            ("lrclib", self.lrclib.as_str()),
            ("musicbrainz", self.musicbrainz.as_str()),
            ("coverart", self.coverart.as_str()),
            ("archive", self.archive.as_str()),
            ("deezer", self.deezer.as_str()),
        ]
        .into_iter()
    }
}

impl Config {
    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.socket_addr()?;
        if self.upstream.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "upstream.user_agent".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "upstream.timeout_secs".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.upstream.provider_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "upstream.provider_timeout_secs".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        for (name, url) in self.endpoints.iter() {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid {
                    field: format!("endpoints.{name}"),
                    reason: format!("not an http(s) URL: {url}"),
                });
            }
        }
        Ok(())
    }

    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(mut self, port: Option<u16>, bind: Option<&str>) -> Self {
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(bind) = bind {
            self.server.bind = bind.to_string();
        }
        self
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("chromax"))
}

/// Get the full path to the default config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if the file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            tracing::warn!("Using default configuration");
            Config::default()
        }
    }
}

/// Load configuration from an explicit path.
///
/// Unlike [`load`], a missing or invalid file is an error: the operator asked
/// for this file specifically.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
    let config: Config =
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
    config.validate()?;
    tracing::info!("Loaded config from {:?}", path);
    Ok(config)
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: String, reason: String },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[server]"));
        assert!(toml.contains("[upstream]"));
        assert!(toml.contains("[endpoints]"));
    }

    #[test]
    fn test_default_server_settings() {
        let config = Config::default();
        assert_eq!(config.server.port, 8390);
        assert_eq!(config.endpoints.ovh, "https://api.lyrics.ovh/v1");
        assert!(config.upstream.user_agent.starts_with("chromax-api/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[server]
port = 9000

[endpoints]
lrclib = "http://localhost:3000/api"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.endpoints.lrclib, "http://localhost:3000/api");

        // Other fields use defaults
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.endpoints.deezer, "https://api.deezer.com");
        assert_eq!(config.upstream.timeout_secs, 10);
    }

    #[test]
    fn test_overrides_win_over_file() {
        let config = Config::default().with_overrides(Some(1234), Some("127.0.0.1"));
        assert_eq!(config.server.port, 1234);
        assert_eq!(config.server.bind, "127.0.0.1");

        let untouched = Config::default().with_overrides(None, None);
        assert_eq!(untouched.server.port, DEFAULT_PORT);
    }

    #[test]
    fn test_socket_addr() {
        let config = Config::default().with_overrides(Some(8080), Some("127.0.0.1"));
        assert_eq!(
            config.server.socket_addr().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );

        let bad = Config::default().with_overrides(None, Some("localhost"));
        assert!(bad.validate().unwrap_err().to_string().contains("server.bind"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.upstream.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("upstream.timeout_secs"));
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let mut config = Config::default();
        config.endpoints.deezer = "ftp://example.com".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("endpoints.deezer"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[upstream]\nprovider_timeout_secs = 3\n").unwrap();

        let config = load_from(&path).unwrap();
        assert_eq!(config.upstream.provider_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_load_from_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Read(_, _))));
    }

    #[test]
    fn test_load_from_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();
        assert!(matches!(load_from(&path), Err(ConfigError::Parse(_, _))));
    }
}
