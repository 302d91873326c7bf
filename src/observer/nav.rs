//! Generated navigation and active-link highlighting

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use super::{Intersection, ObserverOptions, ViewportObserver, ACTIVE_CLASS};
use crate::page::{Page, PageError, SectionHeading};

/// Append one nav link per section, in document order.
///
/// Returns the sections the links were built from.
pub fn synthesize_nav<P: Page + ?Sized>(page: &mut P) -> Result<Vec<SectionHeading>, PageError> {
    let sections = page.sections()?;
    for section in &sections {
        page.append_nav_link(&section.href(), &section.heading)?;
    }
    Ok(sections)
}

/// Tracks which sections sit on the viewport midpoint.
///
/// Several sections can be there at once; all of their links are active
/// together.
#[derive(Debug, Clone)]
pub struct NavHighlighter {
    order: Vec<String>,
    intersecting: BTreeSet<usize>,
}

impl NavHighlighter {
    pub fn new(sections: &[SectionHeading]) -> Self {
        Self {
            order: sections.iter().map(|s| s.id.clone()).collect(),
            intersecting: BTreeSet::new(),
        }
    }

    /// Apply a batch.
    ///
    /// When the batch contains at least one section entering the midpoint,
    /// returns the hrefs that should be active now (every intersecting
    /// section, in document order). Otherwise returns `None` and the current
    /// highlight stays.
    pub fn observe_batch(&mut self, batch: &[Intersection]) -> Option<Vec<String>> {
        let mut entered = false;
        for entry in batch {
            let Some(index) = self.order.iter().position(|id| *id == entry.target) else {
                continue;
            };
            if entry.is_intersecting {
                self.intersecting.insert(index);
                entered = true;
            } else {
                self.intersecting.remove(&index);
            }
        }

        if !entered {
            return None;
        }

        Some(
            self.intersecting
                .iter()
                .map(|&index| format!("#{}", self.order[index]))
                .collect(),
        )
    }
}

/// Build the navigation, then highlight links as their sections cross the
/// middle of the viewport
pub fn setup_nav<P, V>(page: &Rc<RefCell<P>>, viewport: &mut V) -> Result<(), PageError>
where
    P: Page + 'static,
    V: ViewportObserver + ?Sized,
{
    let sections = synthesize_nav(&mut *page.borrow_mut())?;
    let targets: Vec<String> = sections.iter().map(|s| s.id.clone()).collect();

    let mut state = NavHighlighter::new(&sections);
    let page = Rc::clone(page);

    viewport.observe(
        &ObserverOptions::midpoint(),
        &targets,
        Box::new(move |batch| {
            if let Some(active) = state.observe_batch(batch) {
                if let Err(e) = page.borrow_mut().mark_nav_links(&active, ACTIVE_CLASS) {
                    tracing::warn!(error = %e, "Failed to update nav highlight");
                }
            }
        }),
    )?;

    tracing::debug!(links = targets.len(), "Nav highlighter active");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::testing::RecordingViewport;
    use crate::page::{PageLayout, StaticPage};

    fn layout() -> PageLayout {
        PageLayout {
            sections: vec![
                SectionHeading::new("profile", "Profile"),
                SectionHeading::new("skills", "Skills"),
                SectionHeading::new("contact", "Contact"),
            ],
        }
    }

    #[test]
    fn test_synthesize_one_link_per_section() {
        let mut page = StaticPage::new(&layout());
        synthesize_nav(&mut page).unwrap();

        assert_eq!(
            page.nav_links(),
            vec![
                ("#profile", "Profile"),
                ("#skills", "Skills"),
                ("#contact", "Contact"),
            ]
        );
    }

    #[test]
    fn test_highlighter_switches_sections() {
        let mut nav = NavHighlighter::new(&layout().sections);

        assert_eq!(
            nav.observe_batch(&[Intersection::entering("profile", 0.0)]),
            Some(vec!["#profile".to_string()])
        );
        assert_eq!(
            nav.observe_batch(&[
                Intersection::leaving("profile"),
                Intersection::entering("skills", 0.0),
            ]),
            Some(vec!["#skills".to_string()])
        );
    }

    #[test]
    fn test_leaving_only_keeps_highlight() {
        let mut nav = NavHighlighter::new(&layout().sections);
        nav.observe_batch(&[Intersection::entering("skills", 0.0)]);

        assert_eq!(nav.observe_batch(&[Intersection::leaving("skills")]), None);
    }

    #[test]
    fn test_simultaneous_sections_all_active() {
        let mut nav = NavHighlighter::new(&layout().sections);
        let active = nav.observe_batch(&[
            Intersection::entering("contact", 0.0),
            Intersection::entering("profile", 0.0),
        ]);
        assert_eq!(
            active,
            Some(vec!["#profile".to_string(), "#contact".to_string()])
        );
    }

    #[test]
    fn test_unknown_targets_ignored() {
        let mut nav = NavHighlighter::new(&layout().sections);
        assert_eq!(nav.observe_batch(&[Intersection::entering("footer", 1.0)]), None);
    }

    #[test]
    fn test_setup_nav_drives_page() {
        let page = Rc::new(RefCell::new(StaticPage::new(&layout())));
        let mut viewport = RecordingViewport::default();
        setup_nav(&page, &mut viewport).unwrap();

        assert_eq!(page.borrow().nav_links().len(), 3);
        let (options, targets, _) = &viewport.subscriptions[0];
        assert_eq!(*options, ObserverOptions::midpoint());
        assert_eq!(targets, &["profile", "skills", "contact"]);

        viewport.emit(0, &[Intersection::entering("skills", 0.0)]);
        assert_eq!(page.borrow().nav_links_with_class(ACTIVE_CLASS), vec!["#skills"]);

        viewport.emit(
            0,
            &[
                Intersection::leaving("skills"),
                Intersection::entering("contact", 0.0),
            ],
        );
        assert_eq!(page.borrow().nav_links_with_class(ACTIVE_CLASS), vec!["#contact"]);
    }
}
