use crate::core::{css_px, outline_style, PointerState};
use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
pub fn pointer_client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Keep the shared pointer state in sync with every pointer move.
pub fn wire_pointer_tracking(window: &web::Window, pointer: Rc<RefCell<PointerState>>) {
    dom::add_listener(window, "pointermove", move |ev: web::PointerEvent| {
        let pos = pointer_client_px(&ev);
        pointer.borrow_mut().update(pos.x, pos.y);
    });
}

/// Move the cursor dot to the exact pointer coordinate on every move.
pub fn wire_dot(window: &web::Window, dot: web::HtmlElement) {
    dom::add_listener(window, "pointermove", move |ev: web::PointerEvent| {
        let pos = pointer_client_px(&ev);
        dom::set_style(&dot, "left", &css_px(pos.x));
        dom::set_style(&dot, "top", &css_px(pos.y));
    });
}

/// Enlarge the outline while the pointer is over any of `targets`.
///
/// Each element toggles independently; with overlapping targets the last
/// enter/leave event decides the style.
pub fn wire_hover(targets: &[web::Element], outline: &web::HtmlElement) {
    for el in targets {
        for (event, hovered) in [("pointerenter", true), ("pointerleave", false)] {
            let outline = outline.clone();
            dom::add_listener(el, event, move |_: web::PointerEvent| {
                apply_outline_style(&outline, hovered);
            });
        }
    }
    log::debug!("[cursor] hover wired on {} elements", targets.len());
}

pub fn apply_outline_style(outline: &web::HtmlElement, hovered: bool) {
    for (property, value) in outline_style(hovered).declarations() {
        dom::set_style(outline, property, &value);
    }
}
