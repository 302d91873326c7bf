//! Content Loader
//!
//! Fetches the portfolio document once, then drives the renderer and the
//! viewport observers:
//!
//! ```text
//! fetch ──► status ok? ──► parse ──► render ──► fade-in ──► nav
//!             │ no            │ fails
//!             ▼               ▼
//!        LoadError::Fetch  LoadError::Parse   (page left untouched)
//! ```
//!
//! Nothing is written to the page until the document has parsed. There is no
//! retry and no timeout.

mod error;
#[cfg(feature = "server")]
mod file;
#[cfg(feature = "server")]
mod http;

pub use error::{LoadError, LoadResult};
#[cfg(feature = "server")]
pub use file::FileSource;
#[cfg(feature = "server")]
pub use http::HttpSource;

use async_trait::async_trait;
use std::cell::RefCell;
use std::rc::Rc;

use crate::document::PortfolioDocument;
use crate::observer::{self, ViewportObserver};
use crate::page::Page;
use crate::render;

/// Raw answer from a document source
#[derive(Debug, Clone)]
pub struct SourceResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl SourceResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Where the document comes from.
///
/// Browser futures are not `Send`, so neither is this trait.
#[async_trait(?Send)]
pub trait DocumentSource {
    /// Human-readable location, for logs
    fn location(&self) -> &str;

    /// Issue the request. A non-success status is still `Ok` here.
    async fn fetch(&self) -> LoadResult<SourceResponse>;
}

/// Fetch and parse the document
pub async fn load<S: DocumentSource + ?Sized>(source: &S) -> LoadResult<PortfolioDocument> {
    tracing::debug!(location = source.location(), "Fetching portfolio document");
    let response = source.fetch().await?;
    parse_response(&response)
}

/// Check the status of a response and parse its body
pub fn parse_response(response: &SourceResponse) -> LoadResult<PortfolioDocument> {
    if !response.is_success() {
        return Err(LoadError::Fetch {
            status: response.status,
        });
    }
    Ok(PortfolioDocument::from_slice(&response.body)?)
}

/// Render a loaded document and start both observers
pub fn populate<P, V>(
    doc: &PortfolioDocument,
    page: &Rc<RefCell<P>>,
    viewport: &mut V,
    year: i32,
) -> LoadResult<()>
where
    P: Page + 'static,
    V: ViewportObserver + ?Sized,
{
    render::render_document(doc, &mut *page.borrow_mut(), year)?;
    observer::setup_fade_in(page, viewport)?;
    observer::setup_nav(page, viewport)?;
    Ok(())
}

/// Full page start-up: load, render, observe.
///
/// Returns the document on success so hosts can keep it around. On error the
/// page has not been touched and the caller is expected to log and stop.
pub async fn run<S, P, V>(
    source: &S,
    page: &Rc<RefCell<P>>,
    viewport: &mut V,
    year: i32,
) -> LoadResult<PortfolioDocument>
where
    S: DocumentSource + ?Sized,
    P: Page + 'static,
    V: ViewportObserver + ?Sized,
{
    let doc = load(source).await?;
    populate(&doc, page, viewport, year)?;
    tracing::info!(
        location = source.location(),
        projects = doc.projects.len(),
        "Portfolio rendered"
    );
    Ok(doc)
}

/// Pick a native source for a path or URL
#[cfg(feature = "server")]
pub fn source_for(location: &str) -> Box<dyn DocumentSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}
