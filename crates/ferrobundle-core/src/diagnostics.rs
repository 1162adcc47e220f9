//! Console-class diagnostics emitted by the load pipeline.
//!
//! A load emits at most one diagnostic: [`BUNDLE_NOT_FOUND`] for an error
//! marker, or an `Error: <details>` line for transport, decode and region
//! failures. Nothing is surfaced to the caller beyond this.

use std::fmt::Display;
use std::sync::{Mutex, PoisonError};

pub const BUNDLE_NOT_FOUND: &str = "Bundle not found";

/// Formats the diagnostic for a failed load.
pub fn error_message(detail: impl Display) -> String {
    format!("Error: {detail}")
}

/// Sink for pipeline diagnostics.
pub trait Diagnostics: Send + Sync {
    fn error(&self, message: &str);
}

/// Default sink: one `tracing` event at error level per diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn error(&self, message: &str) {
        tracing::error!(target: "ferrobundle::diagnostics", "{message}");
    }
}

/// In-memory sink that keeps every message, for tests and embedding callers.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    messages: Mutex<Vec<String>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_owned());
    }
}
