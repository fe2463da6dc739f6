#![cfg(target_arch = "wasm32")]
use crate::core::{PointerState, Settings};
use frame::FrameLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod background;
mod constants;
mod core;
mod cursor;
mod dom;
mod events;
mod frame;
mod render;
mod ui;

thread_local! {
    // Loops started by `init`; only `teardown` ever stops them.
    static LOOPS: RefCell<Vec<FrameLoop>> = RefCell::new(Vec::new());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-fx starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        dom::add_listener(&document, "DOMContentLoaded", |_: web::Event| run_init());
    } else {
        run_init();
    }
    Ok(())
}

/// Stop both animation loops. Event listeners stay attached.
#[wasm_bindgen]
pub fn teardown() {
    let loops = LOOPS.with(|l| std::mem::take(&mut *l.borrow_mut()));
    let running = loops.iter().filter(|l| l.is_running()).count();
    for l in &loops {
        l.cancel();
    }
    log::info!("[frame] stopped {} loops", running);
}

fn run_init() {
    if let Err(e) = init(Settings::default()) {
        log::error!("init error: {:?}", e);
    }
}

fn init(settings: Settings) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Shared by the cursor outline and the field's repulsion
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    events::wire_pointer_tracking(&window, pointer.clone());

    let mut loops = Vec::new();

    if let Some(l) = cursor::wire_cursor(&window, &document, pointer.clone(), settings.cursor) {
        loops.push(l);
    }

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    match background::wire_field(&window, &document, pointer, settings.field, seed) {
        Ok(Some(l)) => loops.push(l),
        Ok(None) => {}
        Err(e) => log::warn!("[field] disabled: {:?}", e),
    }

    match document.query_selector(constants::NAVBAR_SELECTOR) {
        Ok(Some(navbar)) => events::wire_navbar_scroll(&window, navbar, settings.ui),
        _ => log::debug!("[ui] no navbar; skipping scroll state"),
    }

    match ui::wire_reveal(&document, &settings.ui) {
        Ok(n) => log::debug!("[ui] observing {} reveal elements", n),
        Err(e) => log::warn!("[ui] reveal disabled: {:?}", e),
    }

    LOOPS.with(|l| l.borrow_mut().extend(loops));
    Ok(())
}
