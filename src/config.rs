use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Server configuration.
///
/// Loaded from an optional YAML file (named by the `CONFIG` environment
/// variable), with `LISTEN` overriding the bind address. Defaults match
/// the classic demo server: port 8888 on all interfaces, serving the
/// working directory with `index.html` as the default document.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the listener binds to.
    pub listen_addr: String,
    /// Directory files are served from.
    pub root: PathBuf,
    /// Document served for the `/` target.
    pub index: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8888".to_string(),
            root: PathBuf::from("."),
            index: "index.html".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("CONFIG") {
            Ok(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {path}"))?;
                serde_yaml::from_str(&text)
                    .with_context(|| format!("parsing config file {path}"))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }

        Ok(cfg)
    }
}
