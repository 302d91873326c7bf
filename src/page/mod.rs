//! Page contract
//!
//! The renderer never looks anything up by itself: everything it writes goes
//! through [`Page`], with the target container named explicitly. The browser
//! implements this over the live DOM; [`StaticPage`] implements it in memory
//! and can serialize the result to a complete HTML document.
//!
//! # Host page layout
//!
//! ```text
//! header            h1 (title), p (subtitle)
//! nav#scroll-nav    generated links
//! main
//!   section#<id>    h2 (nav label) + generated fragments
//! footer            p (copyright line)
//! ```

mod static_page;

pub use static_page::StaticPage;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Sections the renderer appends fragments to, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Profile,
    Introduce,
    Skills,
    Experience,
    Projects,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Profile,
        Section::Introduce,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Education,
        Section::Contact,
    ];

    /// Element id of the section container
    pub fn id(&self) -> &'static str {
        match self {
            Section::Profile => "profile",
            Section::Introduce => "introduce",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Plain-text slots outside the sections. Written as text, never as markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSlot {
    HeaderHeading,
    HeaderSubtitle,
    FooterLine,
}

impl TextSlot {
    /// CSS selector of the slot in the host page
    pub fn selector(&self) -> &'static str {
        match self {
            TextSlot::HeaderHeading => "header h1",
            TextSlot::HeaderSubtitle => "header p",
            TextSlot::FooterLine => "footer p",
        }
    }
}

/// A navigable section: its id and the text of its heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionHeading {
    pub id: String,
    pub heading: String,
}

impl SectionHeading {
    pub fn new(id: impl Into<String>, heading: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            heading: heading.into(),
        }
    }

    /// In-page anchor pointing at this section
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Ordered sections of a host page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLayout {
    pub sections: Vec<SectionHeading>,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            sections: vec![
                SectionHeading::new("profile", "Profile"),
                SectionHeading::new("introduce", "Introduce"),
                SectionHeading::new("skills", "Skills"),
                SectionHeading::new("experience", "Experience"),
                SectionHeading::new("projects", "Projects"),
                SectionHeading::new("education", "Education"),
                SectionHeading::new("contact", "Contact"),
            ],
        }
    }
}

/// The host page did not provide what the renderer needs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// Expected element is not in the page
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// The host environment rejected a DOM operation
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Mutable view of the host page
pub trait Page {
    /// Set the document title
    fn set_title(&mut self, title: &str);

    /// Replace the text content of a slot
    fn set_text(&mut self, slot: TextSlot, text: &str) -> Result<(), PageError>;

    /// Append markup as the last child of a section container
    fn append_html(&mut self, section: Section, html: &str) -> Result<(), PageError>;

    /// Navigable sections (`main section[id]`) in document order
    fn sections(&self) -> Result<Vec<SectionHeading>, PageError>;

    /// Append a link to the navigation container
    fn append_nav_link(&mut self, href: &str, label: &str) -> Result<(), PageError>;

    /// Add a class to a section element
    fn add_section_class(&mut self, section_id: &str, class: &str) -> Result<(), PageError>;

    /// Remove `class` from every nav link, then add it to the links whose
    /// `href` is listed. Unknown hrefs are ignored.
    fn mark_nav_links(&mut self, hrefs: &[String], class: &str) -> Result<(), PageError>;
}

/// Escape text for use as element content or an attribute value
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
