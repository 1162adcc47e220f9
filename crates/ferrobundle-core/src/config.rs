use crate::{BundleId, ValidationError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_REGION_ID: &str = "bundle-content";
pub const DEFAULT_USER_AGENT: &str = concat!("ferrobundle/", env!("CARGO_PKG_VERSION"));

/// Endpoint and transport settings for [`crate::BundleFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    base_url: String,
    timeout_ms: Option<u64>,
    user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: None,
            user_agent: String::from(DEFAULT_USER_AGENT),
        }
    }
}

impl FetcherConfig {
    /// Validate and normalize a base URL; a trailing `/` is dropped.
    pub fn new(base_url: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            ..Self::default()
        })
    }

    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Result<Self, ValidationError> {
        if timeout_ms == Some(0) {
            return Err(ValidationError::ZeroTimeout);
        }
        self.timeout_ms = timeout_ms;
        Ok(self)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout_ms(&self) -> Option<u64> {
        self.timeout_ms
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// `{base_url}/bundle/{id}` with the id encoded as one path segment.
    pub fn bundle_url(&self, bundle_id: &BundleId) -> String {
        format!("{}/bundle/{}", self.base_url, bundle_id.path_segment())
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyBaseUrl);
    }

    let lower = trimmed.to_ascii_lowercase();
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| lower.starts_with(scheme) && lower.len() > scheme.len());
    if !has_host {
        return Err(ValidationError::UnsupportedScheme {
            value: raw.to_owned(),
        });
    }

    Ok(trimmed.to_owned())
}
