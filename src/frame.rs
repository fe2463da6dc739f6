use crate::core::LoopGate;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a self-rescheduling `requestAnimationFrame` loop.
///
/// Dropping the handle leaves the loop running; only `cancel` stops it.
pub struct FrameLoop {
    name: &'static str,
    gate: Rc<RefCell<LoopGate>>,
    slot: TickSlot,
}

impl FrameLoop {
    pub fn is_running(&self) -> bool {
        self.gate.borrow().is_running()
    }

    /// Stop the loop and release its closure. Must not be called from inside
    /// this loop's own tick.
    pub fn cancel(&self) {
        let Some(pending) = self.gate.borrow_mut().stop() else {
            return;
        };
        if let (Some(id), Some(w)) = (pending, web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.slot.borrow_mut().take();
        log::debug!("[frame] {} loop cancelled", self.name);
    }
}

/// Run `tick` once per display refresh until cancelled.
pub fn start_loop(name: &'static str, mut tick: impl FnMut() + 'static) -> FrameLoop {
    let gate = Rc::new(RefCell::new(LoopGate::default()));
    let slot: TickSlot = Rc::new(RefCell::new(None));

    let gate_tick = gate.clone();
    let slot_tick = slot.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !gate_tick.borrow_mut().enter_tick() {
            return;
        }
        tick();
        let id = request_frame(&slot_tick);
        gate_tick.borrow_mut().scheduled(id);
    }) as Box<dyn FnMut()>));

    let id = request_frame(&slot);
    gate.borrow_mut().scheduled(id);
    log::debug!("[frame] {} loop started", name);
    FrameLoop { name, gate, slot }
}

fn request_frame(slot: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = slot.borrow();
    let closure = slot.as_ref()?;
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
