//! Portfolio Document
//!
//! The single read-only input of the renderer. It is fetched once per page
//! load and handed by reference to every section builder.
//!
//! Only `description`, `details`, `link.url` and `link.name` are optional;
//! everything else is required and a missing field is a parse error.

mod types;

pub use types::{
    Contact, EducationEntry, ExperienceEntry, Footer, PortfolioDocument, Profile, Project,
    ProjectLink, Skills, TechStack,
};

/// Relative path the page fetches the document from
pub const DOCUMENT_PATH: &str = "portfolio_data.json";

impl PortfolioDocument {
    /// Parse a document from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse a document from raw response bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Introduce text split into paragraphs on blank lines
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.introduce.split("\n\n")
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::PortfolioDocument;

    pub const SAMPLE_JSON: &str = include_str!("../../tests/fixtures/portfolio_data.json");

    pub fn sample() -> PortfolioDocument {
        PortfolioDocument::from_json(SAMPLE_JSON).expect("fixture parses")
    }
}
