//! Visibility reports from `IntersectionObserver`

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use folio::observer::{Intersection, IntersectionCallback, ObserverOptions, ViewportObserver};
use folio::page::PageError;

/// One `IntersectionObserver` per subscription, alive for the page lifetime
pub struct BrowserViewport {
    document: Document,
}

impl BrowserViewport {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

fn to_intersection(entry: IntersectionObserverEntry) -> Intersection {
    Intersection {
        target: entry.target().id(),
        is_intersecting: entry.is_intersecting(),
        ratio: entry.intersection_ratio(),
    }
}

impl ViewportObserver for BrowserViewport {
    fn observe(
        &mut self,
        options: &ObserverOptions,
        targets: &[String],
        mut callback: IntersectionCallback,
    ) -> Result<(), PageError> {
        let on_change = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            let batch: Vec<Intersection> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(to_intersection)
                .collect();
            callback(&batch);
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let observer = IntersectionObserver::new_with_options(on_change.as_ref().unchecked_ref(), &init)
            .map_err(|e| PageError::Dom(format!("{:?}", e)))?;

        for id in targets {
            let target = self
                .document
                .get_element_by_id(id)
                .ok_or_else(|| PageError::MissingElement(format!("section#{}", id)))?;
            observer.observe(&target);
        }

        // The observer and its callback live as long as the page
        on_change.forget();
        Ok(())
    }
}
