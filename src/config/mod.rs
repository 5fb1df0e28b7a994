use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_yml::Value;

use crate::count::Method;

pub const CONFIG_FILE_NAME: &str = ".partcount.yml";

pub const FORMATS: [&str; 3] = ["text", "json", "quiet"];

/// Settings from `.partcount.yml`. Every key is optional; command-line
/// flags take precedence over whatever is set here.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    format: Option<String>,
    method: Option<Method>,
    show_counts: bool,
    /// File the settings came from, if any.
    source: Option<PathBuf>,
}

impl ResolvedConfig {
    fn empty() -> Self {
        Self {
            format: None,
            method: None,
            show_counts: true,
            source: None,
        }
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn method(&self) -> Option<Method> {
        self.method
    }

    /// Whether per-target counts are printed (totals always are).
    pub fn show_counts(&self) -> bool {
        self.show_counts
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self::empty()
    }
}

/// Load config from an explicit path (which must exist), or from
/// `.partcount.yml` in `search_dir` (default: the current directory).
/// A missing default file yields the built-in defaults.
pub fn load_config(path: Option<&Path>, search_dir: Option<&Path>) -> Result<ResolvedConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("config file does not exist: {}", p.display());
            }
            p.to_path_buf()
        }
        None => {
            let candidate = search_dir
                .unwrap_or_else(|| Path::new("."))
                .join(CONFIG_FILE_NAME);
            if !candidate.exists() {
                return Ok(ResolvedConfig::empty());
            }
            candidate
        }
    };

    let contents = std::fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read config {}", config_path.display()))?;
    let raw: Value = serde_yml::from_str(&contents)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;

    let mut config = parse_config(&raw)
        .with_context(|| format!("invalid config {}", config_path.display()))?;
    config.source = Some(config_path);
    Ok(config)
}

fn parse_config(raw: &Value) -> Result<ResolvedConfig> {
    let mut config = ResolvedConfig::empty();

    let map = match raw {
        Value::Mapping(map) => map,
        // An empty file parses as null.
        Value::Null => return Ok(config),
        _ => anyhow::bail!("expected a mapping at the top level"),
    };

    for (key, value) in map {
        let key_str = match key.as_str() {
            Some(s) => s,
            None => continue,
        };
        match key_str {
            "format" => {
                let format = expect_str(value, key_str)?;
                if !FORMATS.contains(&format) {
                    anyhow::bail!(
                        "unknown format {format:?} (expected one of {})",
                        FORMATS.join(", ")
                    );
                }
                config.format = Some(format.to_string());
            }
            "method" => {
                let name = expect_str(value, key_str)?;
                let method = Method::from_str(name).with_context(|| {
                    format!("unknown method {name:?} (expected prefix or suffix)")
                })?;
                config.method = Some(method);
            }
            "show_counts" => {
                config.show_counts = value
                    .as_bool()
                    .with_context(|| format!("{key_str} must be true or false"))?;
            }
            _ => {}
        }
    }

    Ok(config)
}

fn expect_str<'a>(value: &'a Value, key: &str) -> Result<&'a str> {
    value
        .as_str()
        .with_context(|| format!("{key} must be a string"))
}
