//! Fade-in on first sight

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use super::{Intersection, ObserverOptions, ViewportObserver, VISIBLE_CLASS};
use crate::page::{Page, PageError};

/// Per-section hidden/visible state. Visible is terminal.
///
/// The 10% threshold is applied by the host observer (see
/// [`ObserverOptions::fade_in`]), so any entering report reveals its section.
/// A section taller than ten viewports never reaches a 0.1 ratio but is still
/// reported as intersecting.
#[derive(Debug, Clone, Default)]
pub struct FadeIn {
    visible: HashSet<String>,
}

impl FadeIn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, section_id: &str) -> bool {
        self.visible.contains(section_id)
    }

    /// Apply a batch and return the sections that just became visible.
    /// Leaving entries are ignored.
    pub fn observe_batch(&mut self, batch: &[Intersection]) -> Vec<String> {
        let mut revealed = Vec::new();
        for entry in batch {
            if entry.is_intersecting && self.visible.insert(entry.target.clone()) {
                revealed.push(entry.target.clone());
            }
        }
        revealed
    }
}

/// Observe every section and mark it visible the first time it shows up
pub fn setup_fade_in<P, V>(page: &Rc<RefCell<P>>, viewport: &mut V) -> Result<(), PageError>
where
    P: Page + 'static,
    V: ViewportObserver + ?Sized,
{
    let options = ObserverOptions::fade_in();
    let targets: Vec<String> = page
        .borrow()
        .sections()?
        .into_iter()
        .map(|s| s.id)
        .collect();

    let mut state = FadeIn::new();
    let page = Rc::clone(page);

    viewport.observe(
        &options,
        &targets,
        Box::new(move |batch| {
            let revealed = state.observe_batch(batch);
            if revealed.is_empty() {
                return;
            }
            let mut page = page.borrow_mut();
            for id in &revealed {
                if let Err(e) = page.add_section_class(id, VISIBLE_CLASS) {
                    tracing::warn!(section = %id, error = %e, "Failed to reveal section");
                }
            }
        }),
    )?;

    tracing::debug!(sections = targets.len(), "Fade-in observer active");
    Ok(())
}
