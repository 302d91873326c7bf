//! # Folio
//!
//! Personal portfolio renderer. A single JSON document describes the person;
//! Folio turns it into the sections of a one-page site and wires up the
//! scroll affordances (fade-in, active nav link).
//!
//! The same pipeline runs in two places:
//!
//! - in the browser (the `folio-ui` crate), writing into the live DOM,
//! - natively, writing into a [`page::StaticPage`] that is serialized to HTML
//!   by the `folio` CLI and the `folio-server` binary.
//!
//! ## Modules
//!
//! - [`document`]: Portfolio document model
//! - [`render`]: Section fragment builders and the render pass
//! - [`page`]: The host page contract and an in-memory implementation
//! - [`observer`]: Fade-in and nav-highlight state machines
//! - [`loader`]: Fetch, parse, render, observe
//! - [`config`], [`logging`], [`server`]: native-only (feature `server`)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use folio::loader::{self, FileSource};
//! use folio::page::PageLayout;
//! use folio::render;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let doc = loader::load(&FileSource::new("portfolio_data.json")).await?;
//!     let page = render::prerender(&doc, &PageLayout::default(), render::current_year())?;
//!
//!     std::fs::write("index.html", page.to_html())?;
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod loader;
pub mod observer;
pub mod page;
pub mod render;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod logging;
#[cfg(feature = "server")]
pub mod server;

// Re-export top-level types for convenience
pub use document::{PortfolioDocument, DOCUMENT_PATH};

pub use loader::{DocumentSource, LoadError, LoadResult, SourceResponse};

pub use page::{Page, PageError, PageLayout, Section, SectionHeading, StaticPage, TextSlot};

pub use observer::{
    FadeIn, Intersection, IntersectionCallback, NavHighlighter, ObserverOptions,
    ViewportObserver,
};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError, LoggingConfig, ServerConfig, SiteConfig};
