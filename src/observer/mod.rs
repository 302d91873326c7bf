//! Viewport Observers
//!
//! Two scroll affordances wired up once the page is rendered:
//!
//! - **fade-in**: a section gets [`VISIBLE_CLASS`] the first time 10% of it is
//!   on screen, and keeps it for the page lifetime.
//! - **nav highlight**: one nav link per section is generated, and links whose
//!   section crosses the vertical midpoint of the viewport get
//!   [`ACTIVE_CLASS`].
//!
//! The host environment reports visibility through [`ViewportObserver`]; the
//! state machines here decide what changes. There is no teardown: once
//! observing, always observing.

mod fade;
mod nav;

pub use fade::{setup_fade_in, FadeIn};
pub use nav::{setup_nav, synthesize_nav, NavHighlighter};

use crate::page::PageError;

/// Class marking a section that has been seen
pub const VISIBLE_CLASS: &str = "section-visible";

/// Class marking the nav link of a mid-screen section
pub const ACTIVE_CLASS: &str = "active";

/// When the host should report a visibility change
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the target that must be visible, 0.0 to 1.0
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting
    pub root_margin: String,
}

impl ObserverOptions {
    /// Fire when 10% of a section is on screen
    pub fn fade_in() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px".to_string(),
        }
    }

    /// Shrink the viewport to its vertical midpoint line
    pub fn midpoint() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "-50% 0px -50% 0px".to_string(),
        }
    }
}

/// One visibility change reported by the host
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    /// Id of the observed section
    pub target: String,
    pub is_intersecting: bool,
    /// Visible fraction of the target
    pub ratio: f64,
}

impl Intersection {
    pub fn entering(target: impl Into<String>, ratio: f64) -> Self {
        Self {
            target: target.into(),
            is_intersecting: true,
            ratio,
        }
    }

    pub fn leaving(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

/// Callback invoked with each batch of changes
pub type IntersectionCallback = Box<dyn FnMut(&[Intersection])>;

/// Host-side visibility subscription
pub trait ViewportObserver {
    /// Watch the sections with the given ids and call `callback` whenever
    /// any of them crosses the configured threshold.
    fn observe(
        &mut self,
        options: &ObserverOptions,
        targets: &[String],
        callback: IntersectionCallback,
    ) -> Result<(), PageError>;
}
