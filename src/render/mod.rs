//! Renderer
//!
//! Turns a [`PortfolioDocument`] into page content. Each section is built by a
//! pure function in [`sections`] and appended to its container through the
//! [`Page`] trait. Rendering is one-shot and append-only: it assumes the
//! containers hold no generated content yet.
//!
//! # Order
//!
//! ```text
//! header → profile → introduce → skills → experience → projects
//!        → education → contact → footer
//! ```

pub mod sections;

use chrono::Datelike;

use crate::document::PortfolioDocument;
use crate::observer;
use crate::page::{Page, PageError, PageLayout, Section, StaticPage, TextSlot};

/// Calendar year used in the footer, evaluated at call time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Fragment for one section container
pub fn section_fragment(doc: &PortfolioDocument, section: Section) -> String {
    match section {
        Section::Profile => sections::profile(&doc.profile),
        Section::Introduce => sections::introduce(&doc.introduce),
        Section::Skills => sections::skills(&doc.skills),
        Section::Experience => sections::experience(&doc.experience),
        Section::Projects => sections::projects(&doc.projects),
        Section::Education => sections::education(&doc.education),
        Section::Contact => sections::contact(&doc.contact),
    }
}

/// Render every section of `doc` into `page`
pub fn render_document<P: Page + ?Sized>(
    doc: &PortfolioDocument,
    page: &mut P,
    year: i32,
) -> Result<(), PageError> {
    page.set_title(&doc.title);
    page.set_text(TextSlot::HeaderHeading, &doc.title)?;
    page.set_text(
        TextSlot::HeaderSubtitle,
        &sections::header_subtitle(&doc.last_updated),
    )?;

    for section in Section::ALL {
        let html = section_fragment(doc, section);
        page.append_html(section, &html)?;
        tracing::debug!(section = %section, bytes = html.len(), "Rendered section");
    }

    page.set_text(TextSlot::FooterLine, &sections::footer_line(year, &doc.footer))?;
    Ok(())
}

/// Render into a fresh [`StaticPage`], including the generated navigation.
///
/// This is the whole page as the browser would show it right after load,
/// before any scroll event fires.
pub fn prerender(
    doc: &PortfolioDocument,
    layout: &PageLayout,
    year: i32,
) -> Result<StaticPage, PageError> {
    let mut page = StaticPage::new(layout);
    render_document(doc, &mut page, year)?;
    observer::synthesize_nav(&mut page)?;
    Ok(page)
}
