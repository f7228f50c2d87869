use super::FxWiring;
use crate::dom;
use crate::motion::parallax::{parallax_offset, parallax_transform};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hero parallax: floating elements drift at layered speeds while the first
/// viewport is on screen. Not wired at all under reduced motion.
pub fn wire_parallax(w: &FxWiring) {
    let Some(selector) = w.profile.parallax else {
        return;
    };
    if w.motion.is_reduced() {
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    let floaters: Vec<web::HtmlElement> = dom::query_all(&w.document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect();
    if floaters.is_empty() {
        return;
    }
    log::debug!("[scroll] parallax on {} elements", floaters.len());

    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let Some(win) = web::window() else {
            return;
        };
        let scroll_y = win.scroll_y().unwrap_or(0.0) as f32;
        let height = win
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        for (i, el) in floaters.iter().enumerate() {
            let Some(offset) = parallax_offset(i, scroll_y, height) else {
                return;
            };
            dom::set_style(el, "transform", &parallax_transform(offset));
        }
    }) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
