use anyhow::Context;
use serde::Deserialize;

/// Server configuration, loaded from an optional YAML file.
///
/// Missing file or missing sections fall back to defaults, so the binary
/// runs with no configuration at all.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub response: ResponseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Directory the static pages are served from.
    #[serde(default = "default_site_root")]
    pub root: String,
}

/// Fixed header values stamped on every response.
///
/// These are demo constants, not wall-clock values. They are configurable so
/// a deployment can substitute its own literals without a rebuild.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseConfig {
    #[serde(default = "default_date")]
    pub date: String,
    #[serde(default = "default_server")]
    pub server: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:9090".to_string()
}

fn default_site_root() -> String {
    "site".to_string()
}

fn default_date() -> String {
    "Mon, 23 May 2022 22:38:34 GMT".to_string()
}

fn default_server() -> String {
    "Apache/2.4.1 (Unix)".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: default_site_root(),
        }
    }
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            date: default_date(),
            server: default_server(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            site: SiteConfig::default(),
            response: ResponseConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the file named by `DOORMAN_CONFIG`
    /// (default `doorman.yaml`). A missing file yields the defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var("DOORMAN_CONFIG").unwrap_or_else(|_| "doorman.yaml".to_string());

        match std::fs::read_to_string(&path) {
            Ok(text) => Self::from_yaml(&text)
                .with_context(|| format!("invalid config file {path}")),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("cannot read config file {path}")),
        }
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
