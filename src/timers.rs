use crate::motion::Timers;
use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `setTimeout` / `setInterval` on the page window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

fn clamp_ms(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

impl Timers for BrowserTimers {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let Some(window) = web::window() else {
            return;
        };
        let cb = Closure::once_into_js(move || task());
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            clamp_ms(delay_ms),
        ) {
            log::warn!("[timers] setTimeout failed: {:?}", e);
        }
    }

    fn every(&self, interval_ms: u32, mut tick: Box<dyn FnMut() -> ControlFlow<()>>) {
        let Some(window) = web::window() else {
            return;
        };
        let handle = Rc::new(Cell::new(None::<i32>));
        let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let handle_cb = handle.clone();
        let slot_cb = slot.clone();
        let closure = Closure::wrap(Box::new(move || {
            if !tick().is_break() {
                return;
            }
            if let (Some(id), Some(w)) = (handle_cb.take(), web::window()) {
                w.clear_interval_with_handle(id);
            }
            // The closure is still running here; free it from a fresh task
            let slot = slot_cb.clone();
            BrowserTimers.after(
                0,
                Box::new(move || {
                    slot.borrow_mut().take();
                }),
            );
        }) as Box<dyn FnMut()>);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            clamp_ms(interval_ms),
        ) {
            Ok(id) => {
                handle.set(Some(id));
                *slot.borrow_mut() = Some(closure);
            }
            Err(e) => log::warn!("[timers] setInterval failed: {:?}", e),
        }
    }
}
