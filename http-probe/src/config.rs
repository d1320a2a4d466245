use crate::error::{ProbeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Configuration for the probe cycle
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// Base URL the probe points at
    pub base_url: String,
    /// Path requested by the probe cycle
    #[serde(default = "default_path")]
    pub path: String,
    /// User-Agent header sent by the live transport
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds, live transport only
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    /// Whether the live transport follows redirects
    #[serde(default)]
    pub follow_redirects: Option<bool>,
    /// Extra query parameters appended to every request
    #[serde(default)]
    pub params: HashMap<String, String>,
    /// Fixed seed for the fake transport draw
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_path() -> String {
    "/invoice/534".to_string()
}

fn default_user_agent() -> String {
    format!("http-probe/{}", env!("CARGO_PKG_VERSION"))
}

impl ProbeConfig {
    /// Load configuration from a probe.toml file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|_| ProbeError::ConfigNotFound {
                path: path.as_ref().to_path_buf(),
            })?;

        let config: ProbeConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.base_url).map_err(|_| {
            ProbeError::invalid_config(format!(
                "Invalid base_url '{}'. Must be a valid URL.",
                self.base_url
            ))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ProbeError::invalid_config(format!(
                "Unsupported scheme '{}' in base_url. Use http or https.",
                parsed.scheme()
            )));
        }

        if !self.path.starts_with('/') {
            return Err(ProbeError::invalid_config(format!(
                "Invalid path '{}'. Paths must start with '/'.",
                self.path
            )));
        }

        if let Some(timeout) = self.timeout_seconds {
            if timeout == 0 || timeout > 300 {
                return Err(ProbeError::invalid_config(
                    "timeout_seconds must be between 1 and 300 seconds".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Generate default probe.toml template with comments
pub fn generate_default_config_template() -> String {
    format!(
        r#"# Probe configuration
# Target and request shape for the probe cycle

# Base URL the probe points at (http or https)
base_url = "https://api.example.com"

# Path requested by the probe cycle
path = "/invoice/534"

# User-Agent header sent by the live transport
user_agent = "http-probe/{version}"

# Live transport settings (only used with --live)
timeout_seconds = 30
follow_redirects = true

# Fixed seed for the fake transport draw; uncomment for reproducible runs
# seed = 534

# Extra query parameters appended to every request
[params]
currency = "EUR"
"#,
        version = env!("CARGO_PKG_VERSION")
    )
}

/// Check that the configuration file exists, optionally generating the
/// default template. Returns whether a file was generated.
pub fn ensure_config_file_exists(config_path: &str, force_generate: bool) -> Result<bool> {
    if Path::new(config_path).exists() {
        return Ok(false);
    }

    if force_generate {
        std::fs::write(config_path, generate_default_config_template())
            .map_err(ProbeError::Io)?;
        return Ok(true);
    }

    Ok(false)
}
