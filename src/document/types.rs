//! Portfolio document types
//!
//! Mirrors the JSON shape of `portfolio_data.json`. Optional fields are
//! modelled as `Option`; accessors collapse empty values to `None` so the
//! renderer only has one "absent" case to handle.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Root document: everything the page shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDocument {
    /// Page title and header heading
    pub title: String,
    /// Display-only timestamp label
    pub last_updated: String,
    pub profile: Profile,
    /// Free text, paragraphs separated by blank lines
    pub introduce: String,
    pub skills: Skills,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<Project>,
    pub education: Vec<EducationEntry>,
    pub contact: Contact,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    /// GitHub username, appended to the profile base URL
    pub github: String,
    /// Image URL
    pub image: String,
}

/// Skill lists, one per fixed category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub frameworks_libraries: Vec<String>,
    pub tools_ides: Vec<String>,
    pub languages: Vec<String>,
    pub infrastructure_databases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub period: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ExperienceEntry {
    /// Description, if present and non-empty
    pub fn description(&self) -> Option<&str> {
        non_empty_str(self.description.as_deref())
    }

    /// Detail lines, if present and non-empty
    pub fn details(&self) -> Option<&[String]> {
        non_empty_list(self.details.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub summary: String,
    pub role: String,
    pub achievements: Vec<String>,
    pub tech_stack: TechStack,
    /// Absent and `null` both mean no link
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: ProjectLink,
}

/// Optional outbound link for a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ProjectLink {
    /// Target URL, if present and non-empty
    pub fn url(&self) -> Option<&str> {
        non_empty_str(self.url.as_deref())
    }

    /// Text to show for the link: the name when set, otherwise the URL.
    ///
    /// Returns `None` when there is no URL, in which case no link is shown.
    pub fn display_text(&self) -> Option<&str> {
        let url = self.url()?;
        Some(non_empty_str(self.name.as_deref()).unwrap_or(url))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub major: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl EducationEntry {
    /// Detail lines, if present and non-empty
    pub fn details(&self) -> Option<&[String]> {
        non_empty_list(self.details.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub copyright: String,
}

/// Category label to skills description, in document order.
///
/// JSON objects are unordered as far as `serde_json::Map` is concerned, so
/// this keeps the pairs in a `Vec` and reads them with its own visitor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TechStack(Vec<(String, String)>);

impl TechStack {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a category (builder style)
    pub fn with(mut self, category: impl Into<String>, skills: impl Into<String>) -> Self {
        self.0.push((category.into(), skills.into()));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(c, s)| (c.as_str(), s.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for TechStack {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, skills) in &self.0 {
            map.serialize_entry(category, skills)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TechStack {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TechStackVisitor;

        impl<'de> Visitor<'de> for TechStackVisitor {
            type Value = TechStack;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category labels to skill descriptions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<TechStack, A::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((category, skills)) = access.next_entry::<String, String>()? {
                    pairs.push((category, skills));
                }
                Ok(TechStack(pairs))
            }
        }

        deserializer.deserialize_map(TechStackVisitor)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty_str(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn non_empty_list(value: Option<&[String]>) -> Option<&[String]> {
    value.filter(|items| !items.is_empty())
}
