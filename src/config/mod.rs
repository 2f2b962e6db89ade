use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub track: TrackConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Sent on every request; the share page serves a stripped body to unknown agents.
    pub user_agent: String,
    /// Whole-request timeout in seconds (0 disables).
    pub timeout_secs: u64,
    /// Upper bound on followed redirects.
    pub max_redirects: usize,
    /// Honour `HTTP(S)_PROXY` from the environment.
    pub use_system_proxy: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Share link used when none is given on the command line.
    pub url: String,
    /// Keys kept from `audioWithLyricsOption`, in output order.
    pub fields: Vec<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::USER_AGENT.to_string(),
            timeout_secs: defaults::TIMEOUT_SECS,
            max_redirects: defaults::MAX_REDIRECTS,
            use_system_proxy: true,
        }
    }
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            url: defaults::SHARE_URL.to_string(),
            fields: defaults::fields(),
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "soda", "soda").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn resolve_path(override_path: Option<&Path>) -> anyhow::Result<PathBuf> {
    match override_path {
        Some(p) => Ok(p.to_path_buf()),
        None => default_config_path(),
    }
}

/// Load the config file, falling back to built-in defaults when it doesn't exist.
pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = resolve_path(override_path)?;
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    parse(&raw).with_context(|| format!("parse {}", path.display()))
}

pub fn parse(raw: &str) -> anyhow::Result<Config> {
    let cfg = toml::from_str::<Config>(raw)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.track.url, defaults::SHARE_URL);
        assert_eq!(cfg.track.fields.len(), 14);
        assert_eq!(cfg.track.fields[0], "track_id");
        assert_eq!(cfg.http.max_redirects, 10);
        assert!(cfg.http.use_system_proxy);
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let raw = r#"
[http]
timeout_secs = 3

[track]
fields = ["trackName", "lyrics"]
"#;
        let cfg = parse(raw).unwrap();
        assert_eq!(cfg.http.timeout_secs, 3);
        assert_eq!(cfg.http.user_agent, defaults::USER_AGENT);
        assert_eq!(cfg.track.fields, vec!["trackName", "lyrics"]);
        assert_eq!(cfg.track.url, defaults::SHARE_URL);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(parse("[http\ntimeout_secs = ").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join("soda-test-no-such-dir").join("config.toml");
        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg.http.timeout_secs, defaults::TIMEOUT_SECS);
        assert!(!path.exists());
    }
}
