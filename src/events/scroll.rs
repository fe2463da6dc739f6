use crate::background::FieldHandle;
use crate::core::UiParams;
use crate::dom;
use crate::ui;
use web_sys as web;

/// Toggle the navbar's scrolled state on every scroll event.
///
/// The state is also applied once up front so a page restored mid-scroll
/// starts out consistent.
pub fn wire_navbar_scroll(window: &web::Window, navbar: web::Element, params: UiParams) {
    let wnd = window.clone();
    ui::sync_navbar(&navbar, scroll_offset(&wnd), &params);
    dom::add_listener(window, "scroll", move |_: web::Event| {
        ui::sync_navbar(&navbar, scroll_offset(&wnd), &params);
    });
}

/// Resize the background canvas and field bounds with the viewport. Not
/// debounced.
pub fn wire_field_resize(window: &web::Window, field: FieldHandle) {
    let wnd = window.clone();
    dom::add_listener(window, "resize", move |_: web::Event| {
        field.sync_size(&wnd);
    });
}

#[inline]
fn scroll_offset(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}
