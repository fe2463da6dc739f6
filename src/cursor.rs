use crate::constants::{
    CURSOR_DOT_SELECTOR, CURSOR_OUTLINE_SELECTOR, FINE_POINTER_QUERY, INTERACTIVE_SELECTORS,
};
use crate::core::{css_px, CursorFollower, CursorParams, PointerState};
use crate::dom;
use crate::events;
use crate::frame::{self, FrameLoop};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn has_fine_pointer(window: &web::Window) -> bool {
    matches!(window.match_media(FINE_POINTER_QUERY), Ok(Some(mq)) if mq.matches())
}

/// Wire the custom cursor: instant dot, trailing outline and hover sizing.
///
/// Skipped silently (returns `None`) on coarse pointers or when either cursor
/// element is missing from the page.
pub fn wire_cursor(
    window: &web::Window,
    document: &web::Document,
    pointer: Rc<RefCell<PointerState>>,
    params: CursorParams,
) -> Option<FrameLoop> {
    let dot = dom::query_html(document, CURSOR_DOT_SELECTOR);
    let outline = dom::query_html(document, CURSOR_OUTLINE_SELECTOR);
    let (Some(dot), Some(outline)) = (dot, outline) else {
        log::debug!("[cursor] cursor elements missing; skipping");
        return None;
    };
    if !has_fine_pointer(window) {
        log::debug!("[cursor] coarse pointer; skipping");
        return None;
    }

    events::wire_dot(window, dot);

    let targets = dom::query_all(document, INTERACTIVE_SELECTORS);
    events::wire_hover(&targets, &outline);

    let mut follower = CursorFollower::new(params);
    let handle = frame::start_loop("cursor", move || {
        let target = pointer.borrow().position;
        let pos = follower.step(target);
        dom::set_style(&outline, "left", &css_px(pos.x));
        dom::set_style(&outline, "top", &css_px(pos.y));
    });
    log::info!("[cursor] custom cursor active");
    Some(handle)
}
