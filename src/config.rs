use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use directories::ProjectDirs;
use reqwest::Url;
use serde::Deserialize;

use crate::cli::Cli;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";
pub const DEFAULT_WEB_BASE: &str = "http://localhost:5173";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// On-disk config. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_base: Option<String>,
    pub web_base: Option<String>,
    pub token: Option<String>,
    pub token_expires_at: Option<DateTime<FixedOffset>>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub web_base: String,
    pub token: Option<String>,
    pub token_expires_at: Option<DateTime<FixedOffset>>,
    pub timeout: Duration,
    pub log_file: PathBuf,
}

impl Config {
    pub fn resolve(cli: &Cli) -> Result<Self, String> {
        let file = match &cli.config {
            Some(path) => load_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => load_file(&path)?,
                _ => FileConfig::default(),
            },
        };
        Self::merge(file, cli)
    }

    /// Command-line values win over the file, the file over defaults.
    pub fn merge(file: FileConfig, cli: &Cli) -> Result<Self, String> {
        let api_base = cli
            .api_base
            .clone()
            .or(file.api_base)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let web_base = cli
            .web_base
            .clone()
            .or(file.web_base)
            .unwrap_or_else(|| DEFAULT_WEB_BASE.to_string());

        let timeout_secs = file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err("timeout_secs must be greater than zero".to_string());
        }

        Ok(Self {
            api_base: check_base_url("api_base", &api_base)?,
            web_base: check_base_url("web_base", &web_base)?,
            token: cli.token.clone().or(file.token),
            token_expires_at: file.token_expires_at,
            timeout: Duration::from_secs(timeout_secs),
            log_file: cli.log_file.clone().unwrap_or_else(default_log_path),
        })
    }
}

pub fn load_file(path: &Path) -> Result<FileConfig, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read config {}: {}", path.display(), e))?;
    parse_file(&content).map_err(|e| format!("Invalid config {}: {}", path.display(), e))
}

pub fn parse_file(content: &str) -> Result<FileConfig, String> {
    if content.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| e.to_string())
}

fn check_base_url(key: &str, value: &str) -> Result<String, String> {
    let url = Url::parse(value).map_err(|e| format!("{} '{}' is not a URL: {}", key, value, e))?;
    match url.scheme() {
        "http" | "https" => Ok(value.trim_end_matches('/').to_string()),
        other => Err(format!("{} must use http or https, not '{}'", key, other)),
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "askmentor")
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().join("config.yaml"))
}

pub fn default_log_path() -> PathBuf {
    project_dirs()
        .map(|d| d.cache_dir().to_path_buf())
        .unwrap_or_else(std::env::temp_dir)
        .join("askmentor.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["askmentor"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn parses_full_file() {
        let yaml = "api_base: https://api.mentor.dev/api/\n\
                    web_base: https://mentor.dev\n\
                    token: abc\n\
                    token_expires_at: 2026-12-31T23:59:59+09:00\n\
                    timeout_secs: 30\n";
        let file = parse_file(yaml).unwrap();
        assert_eq!(file.timeout_secs, Some(30));
        assert!(file.token_expires_at.is_some());

        let config = Config::merge(file, &cli(&["--token", "from-cli"])).unwrap();
        assert_eq!(config.api_base, "https://api.mentor.dev/api");
        assert_eq!(config.token.as_deref(), Some("from-cli"));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn empty_file_means_defaults() {
        let file = parse_file("").unwrap();
        let config = Config::merge(file, &cli(&["--api-base", "https://x.dev/api"])).unwrap();
        assert_eq!(config.api_base, "https://x.dev/api");
        assert_eq!(config.web_base, DEFAULT_WEB_BASE);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(parse_file("api_url: http://x\n").is_err());
    }

    #[test]
    fn rejects_bad_urls() {
        let err = Config::merge(FileConfig::default(), &cli(&["--web-base", "ftp://x"])).unwrap_err();
        assert!(err.contains("http or https"));
        assert!(Config::merge(FileConfig::default(), &cli(&["--api-base", "not a url"])).is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let file = FileConfig {
            timeout_secs: Some(0),
            ..FileConfig::default()
        };
        assert!(Config::merge(file, &cli(&[])).is_err());
    }
}
