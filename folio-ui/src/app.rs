//! Page start-up
//!
//! One fetch, then render and observe. Any failure is logged to the console
//! and the page stays as the host markup left it.

use std::cell::RefCell;
use std::rc::Rc;

use folio::loader;

use crate::dom::BrowserPage;
use crate::fetch::GlooSource;
use crate::viewport::BrowserViewport;

/// Calendar year from the browser clock
fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

/// Load the document and populate the page
pub async fn start() {
    let Some(page) = BrowserPage::from_window() else {
        web_sys::console::error_1(&"No document to render into".into());
        return;
    };
    let page = Rc::new(RefCell::new(page));
    let mut viewport = BrowserViewport::new(page.borrow().document().clone());

    match loader::run(&GlooSource::default(), &page, &mut viewport, current_year()).await {
        Ok(doc) => {
            web_sys::console::log_1(&format!("Rendered portfolio: {}", doc.title).into());
        }
        Err(e) => {
            web_sys::console::error_1(&e.report().into());
        }
    }
}
