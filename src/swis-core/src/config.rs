use serde::{Deserialize, Serialize};
use std::fmt;

/// Path prefix of the JSON API on every SWIS host.
pub const API_PATH: &str = "SolarWinds/InformationService/v3/Json/";

#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Accept self-signed certificates. Insecure, opt-in only.
    #[serde(default)]
    pub insecure_skip_verify: bool,

    #[serde(default = "default_port")]
    pub port: u16,
    /// "https" for real deployments, "http" for local test doubles and plain-text proxies
    #[serde(default = "default_scheme")]
    pub scheme: String,

    // Transport pool configuration
    #[serde(default = "default_max_idle_per_host")]
    pub max_idle_per_host: usize,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    17778
}

fn default_scheme() -> String {
    "https".to_string()
}

fn default_max_idle_per_host() -> usize {
    4 // HTTP client default is 2, too few for concurrent query fan-out
}

impl Config {
    /// Create a config for `host` with basic credentials and all other defaults
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Accept any server certificate (self-signed Orion installs)
    pub fn with_insecure_skip_verify(mut self, insecure_skip_verify: bool) -> Self {
        self.insecure_skip_verify = insecure_skip_verify;
        self
    }

    /// Load a JSON config file, filling in defaults and validating the result
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        tracing::debug!(path = %path, host = %config.host, "Loaded SWIS config");
        Ok(config)
    }

    /// Base address every endpoint path is joined to
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}/{}", self.scheme, self.host, self.port, API_PATH)
    }

    /// Reject configs that could never produce a working base URL
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.host.trim().is_empty() {
            anyhow::bail!("host must not be empty");
        }
        if self.max_idle_per_host == 0 {
            anyhow::bail!("max_idle_per_host must be at least 1");
        }
        match self.scheme.as_str() {
            "http" | "https" => Ok(()),
            other => anyhow::bail!("unsupported scheme '{}', expected http or https", other),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            username: String::new(),
            password: String::new(),
            insecure_skip_verify: false,
            port: default_port(),
            scheme: default_scheme(),
            max_idle_per_host: default_max_idle_per_host(),
            request_timeout_secs: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("insecure_skip_verify", &self.insecure_skip_verify)
            .field("port", &self.port)
            .field("scheme", &self.scheme)
            .field("max_idle_per_host", &self.max_idle_per_host)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
