//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use axum::body::Bytes;
use std::sync::Arc;
use std::time::Instant;

use crate::document::PortfolioDocument;
use crate::page::PageLayout;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Parsed document, rendered on every page request
    pub document: Arc<PortfolioDocument>,
    /// Document exactly as loaded, served to the browser client
    pub document_bytes: Bytes,
    /// Sections of the served page
    pub layout: Arc<PageLayout>,
    /// Where the document was loaded from
    pub source: String,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(
        document: PortfolioDocument,
        document_bytes: impl Into<Bytes>,
        layout: PageLayout,
        source: impl Into<String>,
    ) -> Self {
        Self {
            document: Arc::new(document),
            document_bytes: document_bytes.into(),
            layout: Arc::new(layout),
            source: source.into(),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
