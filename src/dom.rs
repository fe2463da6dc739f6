use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a listener that lives as long as the page.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: E| handler(ev)) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] failed to listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// First element matching `selector`, cast to an `HtmlElement`.
pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All elements matching `selector`. An invalid selector yields none.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let list = match document.query_selector_all(selector) {
        Ok(l) => l,
        Err(e) => {
            log::warn!("[dom] bad selector {:?}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// Current viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (u32, u32) {
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    (px(window.inner_width()), px(window.inner_height()))
}

/// Match the canvas bitmap to the viewport and return the new size.
pub fn sync_canvas_to_viewport(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
) -> (u32, u32) {
    let (w, h) = viewport_size(window);
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}
