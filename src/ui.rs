use crate::constants::{NAVBAR_SCROLLED_CLASS, REVEAL_ACTIVE_CLASS, REVEAL_SELECTOR};
use crate::core::{navbar_scrolled, RevealLatch, UiParams};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn sync_navbar(navbar: &web::Element, scroll_y: f64, params: &UiParams) {
    dom::set_class(navbar, NAVBAR_SCROLLED_CLASS, navbar_scrolled(scroll_y, params));
}

/// Observe every reveal-tagged element and mark it active the first time it
/// is at least `reveal_ratio` visible. Revealed elements are unobserved since
/// they can never go back.
pub fn wire_reveal(document: &web::Document, params: &UiParams) -> anyhow::Result<usize> {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return Ok(0);
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let mut latch =
                    RevealLatch::new(target.class_list().contains(REVEAL_ACTIVE_CLASS));
                if latch.observe(entry.is_intersecting()) {
                    dom::set_class(&target, REVEAL_ACTIVE_CLASS, true);
                }
                // Also releases elements whose markup already carried the class
                if latch.is_active() {
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(params.reveal_ratio));
    let observer = web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    for el in &targets {
        observer.observe(el);
    }
    Ok(targets.len())
}
