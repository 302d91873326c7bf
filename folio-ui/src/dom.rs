//! The page contract over the live DOM

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use folio::page::{Page, PageError, Section, SectionHeading, TextSlot};

const NAV_SELECTOR: &str = "#scroll-nav";
const SECTION_SELECTOR: &str = "main section[id]";

/// Host page backed by `window.document`
pub struct BrowserPage {
    document: Document,
}

impl BrowserPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn from_window() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(Self::new)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn query(&self, selector: &str) -> Result<Element, PageError> {
        self.document
            .query_selector(selector)
            .map_err(dom_error)?
            .ok_or_else(|| PageError::MissingElement(selector.to_string()))
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>, PageError> {
        let nodes = self.document.query_selector_all(selector).map_err(dom_error)?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn section(&self, id: &str) -> Result<Element, PageError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| PageError::MissingElement(format!("section#{}", id)))
    }
}

fn dom_error(e: JsValue) -> PageError {
    PageError::Dom(format!("{:?}", e))
}

impl Page for BrowserPage {
    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn set_text(&mut self, slot: TextSlot, text: &str) -> Result<(), PageError> {
        self.query(slot.selector())?.set_text_content(Some(text));
        Ok(())
    }

    fn append_html(&mut self, section: Section, html: &str) -> Result<(), PageError> {
        self.section(section.id())?
            .insert_adjacent_html("beforeend", html)
            .map_err(dom_error)
    }

    fn sections(&self) -> Result<Vec<SectionHeading>, PageError> {
        self.query_all(SECTION_SELECTOR)?
            .into_iter()
            .map(|section| {
                let heading = section
                    .query_selector("h2")
                    .map_err(dom_error)?
                    .and_then(|h2| h2.text_content())
                    .unwrap_or_default();
                Ok(SectionHeading::new(section.id(), heading))
            })
            .collect()
    }

    fn append_nav_link(&mut self, href: &str, label: &str) -> Result<(), PageError> {
        let nav = self.query(NAV_SELECTOR)?;
        let link = self.document.create_element("a").map_err(dom_error)?;
        link.set_attribute("href", href).map_err(dom_error)?;
        link.set_text_content(Some(label));
        nav.append_child(&link).map_err(dom_error)?;
        Ok(())
    }

    fn add_section_class(&mut self, section_id: &str, class: &str) -> Result<(), PageError> {
        self.section(section_id)?
            .class_list()
            .add_1(class)
            .map_err(dom_error)
    }

    fn mark_nav_links(&mut self, hrefs: &[String], class: &str) -> Result<(), PageError> {
        for link in self.query_all(&format!("{} a", NAV_SELECTOR))? {
            link.class_list().remove_1(class).map_err(dom_error)?;
        }
        for href in hrefs {
            let selector = format!("{} a[href=\"{}\"]", NAV_SELECTOR, href);
            if let Some(link) = self.document.query_selector(&selector).map_err(dom_error)? {
                link.class_list().add_1(class).map_err(dom_error)?;
            }
        }
        Ok(())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    const HOST_BODY: &str = r#"
        <header><h1></h1><p></p></header>
        <nav id="scroll-nav"></nav>
        <main>
            <section id="profile"><h2>Profile</h2></section>
            <section id="skills"><h2>Skills</h2></section>
        </main>
        <footer><p></p></footer>
    "#;

    fn host_page() -> BrowserPage {
        let page = BrowserPage::from_window().unwrap();
        page.document().body().unwrap().set_inner_html(HOST_BODY);
        page
    }

    #[wasm_bindgen_test]
    fn test_text_slots_are_text() {
        let mut page = host_page();
        page.set_text(TextSlot::HeaderHeading, "<b>Jiwoo</b>").unwrap();

        let h1 = page.document().query_selector("header h1").unwrap().unwrap();
        assert_eq!(h1.inner_html(), "&lt;b&gt;Jiwoo&lt;/b&gt;");
    }

    #[wasm_bindgen_test]
    fn test_sections_and_nav() {
        let mut page = host_page();
        let sections = page.sections().unwrap();
        assert_eq!(
            sections,
            vec![
                SectionHeading::new("profile", "Profile"),
                SectionHeading::new("skills", "Skills"),
            ]
        );

        for s in &sections {
            page.append_nav_link(&s.href(), &s.heading).unwrap();
        }
        page.mark_nav_links(&["#skills".to_string()], "active").unwrap();

        let active = page
            .document()
            .query_selector("#scroll-nav a.active")
            .unwrap()
            .unwrap();
        assert_eq!(active.get_attribute("href").as_deref(), Some("#skills"));
    }

    #[wasm_bindgen_test]
    fn test_missing_section() {
        let mut page = host_page();
        assert_eq!(
            page.append_html(Section::Contact, "<p></p>"),
            Err(PageError::MissingElement("section#contact".into()))
        );
    }
}
