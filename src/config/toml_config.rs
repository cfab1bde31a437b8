use crate::config::{GalleryOptions, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS, DEMO_API_KEY};
use crate::core::gallery::DEFAULT_SOL;
use crate::domain::model::{FailurePolicy, RoverName};
use crate::utils::error::{CourseError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryToml {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub gallery: GallerySection,
    pub logging: Option<LoggingSection>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ApiSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_key")]
    pub api_key: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GallerySection {
    #[serde(default)]
    pub rover: RoverName,
    #[serde(default = "default_sol")]
    pub sol: u32,
    #[serde(default)]
    pub on_failure: FailurePolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_key() -> String {
    DEMO_API_KEY.to_string()
}

fn default_sol() -> u32 {
    DEFAULT_SOL
}

impl fmt::Debug for ApiSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiSection")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
            timeout_seconds: None,
        }
    }
}

impl Default for GallerySection {
    fn default() -> Self {
        Self {
            rover: RoverName::default(),
            sol: DEFAULT_SOL,
            on_failure: FailurePolicy::default(),
        }
    }
}

impl GalleryToml {
    /// Loads and parses a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CourseError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CourseError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CourseError::Config {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn options(&self) -> GalleryOptions {
        GalleryOptions {
            base_url: self.api.base_url.clone(),
            api_key: self.api.api_key.clone(),
            timeout_seconds: self.api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            failure_policy: self.gallery.on_failure,
        }
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for GalleryToml {
    fn validate(&self) -> Result<()> {
        if self.api.api_key.contains("${") {
            return Err(CourseError::MissingConfig {
                field: format!("api.api_key (unresolved {})", self.api.api_key),
            });
        }
        self.options().validate()
    }
}
