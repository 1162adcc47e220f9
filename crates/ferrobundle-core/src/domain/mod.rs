//! # Domain Models
//!
//! Bundle payload types as served by the `/bundle/{id}` endpoint.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`BundleId`] | Opaque caller-supplied identifier (string or numeric) |
//! | [`Bundle`] | Titled, ordered collection of stocks |
//! | [`Stock`] | One named, symbol-tagged, priced record |
//! | [`Price`] | Numeric or textual price as received |
//! | [`BundlePayload`] | Decoded response body: a bundle or an error marker |
//!
//! Decoding is lenient about stock fields: a missing or `null` field becomes
//! empty text instead of failing the whole payload.

mod bundle;
mod bundle_id;
mod payload;

pub use bundle::{Bundle, Price, Stock};
pub use bundle_id::BundleId;
pub use payload::{is_truthy, BundlePayload};
