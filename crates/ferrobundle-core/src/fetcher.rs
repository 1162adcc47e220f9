//! Bundle fetcher: one GET, one decode, then render or log.
//!
//! # Example
//!
//! ```rust,ignore
//! use ferrobundle_core::{BundleFetcher, BundleId, FetcherConfig, MemoryRegion};
//!
//! let fetcher = BundleFetcher::new(FetcherConfig::default());
//! let region = MemoryRegion::new("bundle-content")?;
//! let outcome = fetcher.load_bundle(&BundleId::new("efficient_banks"), &region).await;
//! if outcome.is_rendered() {
//!     println!("{}", region.content());
//! }
//! ```

use std::sync::Arc;

use serde::Serialize;

use crate::diagnostics::{self, Diagnostics, TracingDiagnostics, BUNDLE_NOT_FOUND};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::render::display_bundle;
use crate::{Bundle, BundleId, BundlePayload, DisplayRegion, FetchError, FetcherConfig};

/// What a [`BundleFetcher::load_bundle`] call ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadOutcome {
    Rendered { stock_count: usize },
    NotFound,
    Failed,
}

impl LoadOutcome {
    pub const fn is_rendered(self) -> bool {
        matches!(self, Self::Rendered { .. })
    }
}

/// Fetches bundles from `{base_url}/bundle/{id}` and renders them into a
/// caller-supplied region.
#[derive(Clone)]
pub struct BundleFetcher {
    config: FetcherConfig,
    http_client: Arc<dyn HttpClient>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl BundleFetcher {
    pub fn new(config: FetcherConfig) -> Self {
        let http_client = Arc::new(ReqwestHttpClient::new(config.user_agent()));
        Self {
            config,
            http_client,
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    pub fn with_http_client(mut self, http_client: Arc<dyn HttpClient>) -> Self {
        self.http_client = http_client;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Request and decode the payload. The HTTP status is not consulted:
    /// only the body decides between a bundle and an error marker.
    pub async fn fetch_payload(&self, bundle_id: &BundleId) -> Result<BundlePayload, FetchError> {
        let url = self.config.bundle_url(bundle_id);
        tracing::debug!(bundle_id = %bundle_id, %url, "requesting bundle");

        let request = HttpRequest::get(url)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.config.timeout_ms());
        let response = self.http_client.execute(request).await?;

        tracing::debug!(
            bundle_id = %bundle_id,
            status = response.status,
            bytes = response.body.len(),
            "bundle response received"
        );
        Ok(BundlePayload::from_json(&response.body)?)
    }

    /// Typed variant of the load pipeline: an error marker becomes
    /// [`FetchError::NotFound`].
    pub async fn fetch_bundle(&self, bundle_id: &BundleId) -> Result<Bundle, FetchError> {
        self.fetch_payload(bundle_id)
            .await?
            .into_bundle()
            .ok_or(FetchError::NotFound)
    }

    /// Fetch and render into `region`.
    ///
    /// Failures never propagate: an error marker logs `Bundle not found`,
    /// anything else logs `Error: <details>`, and the region is left as it
    /// was. The returned outcome is informational only.
    pub async fn load_bundle(&self, bundle_id: &BundleId, region: &dyn DisplayRegion) -> LoadOutcome {
        match self.fetch_bundle(bundle_id).await {
            Ok(bundle) => match display_bundle(&bundle, region) {
                Ok(()) => {
                    tracing::info!(
                        bundle_id = %bundle_id,
                        region = region.id(),
                        stocks = bundle.stocks.len(),
                        "bundle rendered"
                    );
                    LoadOutcome::Rendered {
                        stock_count: bundle.stocks.len(),
                    }
                }
                Err(error) => {
                    self.diagnostics.error(&diagnostics::error_message(error));
                    LoadOutcome::Failed
                }
            },
            Err(FetchError::NotFound) => {
                self.diagnostics.error(BUNDLE_NOT_FOUND);
                LoadOutcome::NotFound
            }
            Err(error) => {
                self.diagnostics.error(&diagnostics::error_message(error));
                LoadOutcome::Failed
            }
        }
    }
}
