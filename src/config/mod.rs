#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::FailurePolicy;
use crate::domain::ports::GalleryConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, validate_url, Validate};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/mars-photos/api/v1/";
pub const DEMO_API_KEY: &str = "DEMO_KEY";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Resolved settings for the photo client.
#[derive(Clone, PartialEq)]
pub struct GalleryOptions {
    pub base_url: String,
    pub api_key: String,
    pub timeout_seconds: u64,
    pub failure_policy: FailurePolicy,
}

impl fmt::Debug for GalleryOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryOptions")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .field("failure_policy", &self.failure_policy)
            .finish()
    }
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEMO_API_KEY.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            failure_policy: FailurePolicy::Placeholder,
        }
    }
}

impl GalleryConfigProvider for GalleryOptions {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }
}

impl Validate for GalleryOptions {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.base_url)?;
        validate_non_empty_string("api.api_key", &self.api_key)?;
        validate_positive_number("api.timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
