//! In-memory page
//!
//! Holds the same state the browser DOM would after rendering, so the
//! renderer and observers can run natively. `to_html` serializes it.

use super::{escape_text, Page, PageError, PageLayout, Section, SectionHeading, TextSlot};

#[derive(Debug, Clone)]
struct SectionNode {
    heading: SectionHeading,
    classes: Vec<String>,
    fragments: Vec<String>,
}

#[derive(Debug, Clone)]
struct NavLink {
    href: String,
    label: String,
    classes: Vec<String>,
}

/// Page held in memory
#[derive(Debug, Clone)]
pub struct StaticPage {
    title: String,
    header_heading: String,
    header_subtitle: String,
    footer_line: String,
    sections: Vec<SectionNode>,
    nav: Vec<NavLink>,
}

impl StaticPage {
    /// Empty page with the given section layout
    pub fn new(layout: &PageLayout) -> Self {
        Self {
            title: String::new(),
            header_heading: String::new(),
            header_subtitle: String::new(),
            footer_line: String::new(),
            sections: layout
                .sections
                .iter()
                .map(|heading| SectionNode {
                    heading: heading.clone(),
                    classes: Vec::new(),
                    fragments: Vec::new(),
                })
                .collect(),
            nav: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current text of a slot
    pub fn text(&self, slot: TextSlot) -> &str {
        match slot {
            TextSlot::HeaderHeading => &self.header_heading,
            TextSlot::HeaderSubtitle => &self.header_subtitle,
            TextSlot::FooterLine => &self.footer_line,
        }
    }

    /// Fragments appended to a section, oldest first
    pub fn fragments(&self, section_id: &str) -> &[String] {
        self.section(section_id)
            .map(|node| node.fragments.as_slice())
            .unwrap_or(&[])
    }

    /// Whether any section received generated content
    pub fn is_populated(&self) -> bool {
        self.sections.iter().any(|node| !node.fragments.is_empty())
    }

    pub fn section_has_class(&self, section_id: &str, class: &str) -> bool {
        self.section(section_id)
            .map(|node| node.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Nav links as `(href, label)` pairs, in order
    pub fn nav_links(&self) -> Vec<(&str, &str)> {
        self.nav
            .iter()
            .map(|link| (link.href.as_str(), link.label.as_str()))
            .collect()
    }

    /// Hrefs of the nav links currently carrying `class`
    pub fn nav_links_with_class(&self, class: &str) -> Vec<&str> {
        self.nav
            .iter()
            .filter(|link| link.classes.iter().any(|c| c == class))
            .map(|link| link.href.as_str())
            .collect()
    }

    fn section(&self, id: &str) -> Option<&SectionNode> {
        self.sections.iter().find(|node| node.heading.id == id)
    }

    fn section_mut(&mut self, id: &str) -> Result<&mut SectionNode, PageError> {
        self.sections
            .iter_mut()
            .find(|node| node.heading.id == id)
            .ok_or_else(|| PageError::MissingElement(format!("section#{}", id)))
    }

    /// Serialize the page as a complete HTML document
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(8192);

        html.push_str("<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!("<title>{}</title>\n", escape_text(&self.title)));
        html.push_str("<link rel=\"stylesheet\" href=\"style.css\">\n");
        html.push_str("</head>\n<body>\n");

        html.push_str("<header>\n");
        html.push_str(&format!("<h1>{}</h1>\n", escape_text(&self.header_heading)));
        html.push_str(&format!("<p>{}</p>\n", escape_text(&self.header_subtitle)));
        html.push_str("</header>\n");

        html.push_str("<nav id=\"scroll-nav\">");
        for link in &self.nav {
            html.push_str(&format!(
                "<a href=\"{}\"{}>{}</a>",
                escape_text(&link.href),
                class_attr(&link.classes),
                escape_text(&link.label)
            ));
        }
        html.push_str("</nav>\n");

        html.push_str("<main>\n");
        for node in &self.sections {
            html.push_str(&format!(
                "<section id=\"{}\"{}>\n",
                escape_text(&node.heading.id),
                class_attr(&node.classes)
            ));
            html.push_str(&format!("<h2>{}</h2>\n", escape_text(&node.heading.heading)));
            for fragment in &node.fragments {
                html.push_str(fragment);
            }
            html.push_str("\n</section>\n");
        }
        html.push_str("</main>\n");

        html.push_str("<footer>\n");
        html.push_str(&format!("<p>{}</p>\n", escape_text(&self.footer_line)));
        html.push_str("</footer>\n");
        html.push_str("</body>\n</html>\n");

        html
    }
}

fn class_attr(classes: &[String]) -> String {
    if classes.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", escape_text(&classes.join(" ")))
    }
}

fn add_class(classes: &mut Vec<String>, class: &str) {
    if !classes.iter().any(|c| c == class) {
        classes.push(class.to_string());
    }
}

impl Page for StaticPage {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_text(&mut self, slot: TextSlot, text: &str) -> Result<(), PageError> {
        let target = match slot {
            TextSlot::HeaderHeading => &mut self.header_heading,
            TextSlot::HeaderSubtitle => &mut self.header_subtitle,
            TextSlot::FooterLine => &mut self.footer_line,
        };
        *target = text.to_string();
        Ok(())
    }

    fn append_html(&mut self, section: Section, html: &str) -> Result<(), PageError> {
        self.section_mut(section.id())?.fragments.push(html.to_string());
        Ok(())
    }

    fn sections(&self) -> Result<Vec<SectionHeading>, PageError> {
        Ok(self.sections.iter().map(|node| node.heading.clone()).collect())
    }

    fn append_nav_link(&mut self, href: &str, label: &str) -> Result<(), PageError> {
        self.nav.push(NavLink {
            href: href.to_string(),
            label: label.to_string(),
            classes: Vec::new(),
        });
        Ok(())
    }

    fn add_section_class(&mut self, section_id: &str, class: &str) -> Result<(), PageError> {
        add_class(&mut self.section_mut(section_id)?.classes, class);
        Ok(())
    }

    fn mark_nav_links(&mut self, hrefs: &[String], class: &str) -> Result<(), PageError> {
        for link in &mut self.nav {
            link.classes.retain(|c| c != class);
            if hrefs.iter().any(|href| *href == link.href) {
                add_class(&mut link.classes, class);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page_is_empty() {
        let page = StaticPage::new(&PageLayout::default());
        assert!(!page.is_populated());
        assert!(page.nav_links().is_empty());
        assert_eq!(page.sections().unwrap().len(), 7);
    }

    #[test]
    fn test_append_is_ordered() {
        let mut page = StaticPage::new(&PageLayout::default());
        page.append_html(Section::Contact, "<p>one</p>").unwrap();
        page.append_html(Section::Contact, "<p>two</p>").unwrap();

        assert_eq!(page.fragments("contact"), ["<p>one</p>", "<p>two</p>"]);
        assert!(page.is_populated());
    }

    #[test]
    fn test_append_to_missing_section() {
        let layout = PageLayout {
            sections: vec![SectionHeading::new("profile", "Profile")],
        };
        let mut page = StaticPage::new(&layout);

        let err = page.append_html(Section::Skills, "<ul></ul>").unwrap_err();
        assert_eq!(err, PageError::MissingElement("section#skills".to_string()));
    }

    #[test]
    fn test_add_class_is_idempotent() {
        let mut page = StaticPage::new(&PageLayout::default());
        page.add_section_class("skills", "section-visible").unwrap();
        page.add_section_class("skills", "section-visible").unwrap();

        let html = page.to_html();
        assert!(html.contains("<section id=\"skills\" class=\"section-visible\">"));
    }

    #[test]
    fn test_mark_nav_links_replaces_previous() {
        let mut page = StaticPage::new(&PageLayout::default());
        page.append_nav_link("#profile", "Profile").unwrap();
        page.append_nav_link("#skills", "Skills").unwrap();

        page.mark_nav_links(&["#profile".to_string()], "active").unwrap();
        assert_eq!(page.nav_links_with_class("active"), vec!["#profile"]);

        page.mark_nav_links(&["#skills".to_string(), "#nope".to_string()], "active")
            .unwrap();
        assert_eq!(page.nav_links_with_class("active"), vec!["#skills"]);
    }

    #[test]
    fn test_text_slots_are_escaped_fragments_are_not() {
        let mut page = StaticPage::new(&PageLayout::default());
        page.set_title("R&D <Lab>");
        page.set_text(TextSlot::HeaderHeading, "R&D <Lab>").unwrap();
        page.append_html(Section::Introduce, "<p>raw</p>").unwrap();

        let html = page.to_html();
        assert!(html.contains("<title>R&amp;D &lt;Lab&gt;</title>"));
        assert!(html.contains("<h1>R&amp;D &lt;Lab&gt;</h1>"));
        assert!(html.contains("<p>raw</p>"));
    }
}
