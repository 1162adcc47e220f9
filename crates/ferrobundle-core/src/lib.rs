//! # Ferrobundle Core
//!
//! Fetch stock bundles from a bundle server and render them as HTML cards
//! into a display region.
//!
//! ## Overview
//!
//! A load is a linear pipeline:
//!
//! 1. [`BundleFetcher`] issues `GET {base_url}/bundle/{id}` and decodes the body.
//! 2. A truthy `error` field in the body stops the pipeline with a
//!    `Bundle not found` diagnostic.
//! 3. Otherwise [`render::display_bundle`] replaces the content of the
//!    [`DisplayRegion`] the caller passed in.
//!
//! Transport and decode failures stop the pipeline with an `Error: ...`
//! diagnostic. No failure is returned to the caller of
//! [`BundleFetcher::load_bundle`]; [`BundleFetcher::fetch_bundle`] is the
//! typed alternative.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Base URL, timeout and user agent |
//! | [`diagnostics`] | Diagnostic sinks for the load pipeline |
//! | [`domain`] | Bundle, stock, price and payload types |
//! | [`error`] | Core error types |
//! | [`fetcher`] | Fetch-then-render pipeline |
//! | [`http_client`] | HTTP client abstraction |
//! | [`region`] | Display region handles |
//! | [`render`] | Escaped card markup |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ferrobundle_core::{BundleFetcher, BundleId, FetcherConfig, MemoryRegion};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = BundleFetcher::new(FetcherConfig::default());
//!     let region = MemoryRegion::new("bundle-content")?;
//!
//!     fetcher.load_bundle(&BundleId::new("efficient_banks"), &region).await;
//!     println!("{}", region.content());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / Caller   │
//! └────────┬────────┘
//!          │ bundle id + region handle
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Bundle Fetcher  │────▶│ HTTP Client      │
//! └────────┬────────┘     │ (reqwest/static) │
//!          │              └──────────────────┘
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Renderer        │────▶│ Display Region   │
//! │ (escaped HTML)  │     │ (memory/page)    │
//! └─────────────────┘     └──────────────────┘
//! ```

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod http_client;
pub mod region;
pub mod render;

// Configuration
pub use config::{FetcherConfig, DEFAULT_BASE_URL, DEFAULT_REGION_ID};

// Diagnostics
pub use diagnostics::{CollectingDiagnostics, Diagnostics, TracingDiagnostics};

// Domain models
pub use domain::{Bundle, BundleId, BundlePayload, Price, Stock};

// Error types
pub use error::{FetchError, RegionError, ValidationError};

// Pipeline
pub use fetcher::{BundleFetcher, LoadOutcome};

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, StaticHttpClient,
};

// Regions
pub use region::{DisplayRegion, MemoryRegion, PageRegion};

// Rendering
pub use render::{display_bundle, render_bundle};
