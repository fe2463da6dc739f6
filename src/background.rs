use crate::constants::BG_CANVAS_ID;
use crate::core::{FieldParams, ParticleField, PointerState};
use crate::dom;
use crate::events;
use crate::frame::{self, FrameLoop};
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas plus the field drawn on it, shared by the resize listener and the
/// frame loop.
#[derive(Clone)]
pub struct FieldHandle {
    canvas: web::HtmlCanvasElement,
    field: Rc<RefCell<ParticleField>>,
}

impl FieldHandle {
    pub fn sync_size(&self, window: &web::Window) {
        let (w, h) = dom::sync_canvas_to_viewport(window, &self.canvas);
        self.field.borrow_mut().resize(w as f32, h as f32);
    }
}

/// Start the background field on `#bg-canvas`. Returns `Ok(None)` when the
/// page has no such canvas.
pub fn wire_field(
    window: &web::Window,
    document: &web::Document,
    pointer: Rc<RefCell<PointerState>>,
    params: FieldParams,
    seed: u64,
) -> anyhow::Result<Option<FrameLoop>> {
    let Some(canvas_el) = document.get_element_by_id(BG_CANVAS_ID) else {
        log::debug!("[field] no #{} element; skipping", BG_CANVAS_ID);
        return Ok(None);
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", BG_CANVAS_ID, e))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let (w, h) = dom::sync_canvas_to_viewport(window, &canvas);
    let field = Rc::new(RefCell::new(ParticleField::new(
        w as f32, h as f32, params, seed,
    )));
    log::info!(
        "[field] {} nodes on {}x{} canvas",
        field.borrow().nodes().len(),
        w,
        h
    );

    events::wire_field_resize(
        window,
        FieldHandle {
            canvas,
            field: field.clone(),
        },
    );

    let field_tick = field.clone();
    let handle = frame::start_loop("field", move || {
        let target = pointer.borrow().target();
        let mut f = field_tick.borrow_mut();
        f.step(target);
        render::draw_field(&ctx, &f);
    });
    Ok(Some(handle))
}
