use crate::constants::{
    TOAST_FADE_MS, TOAST_HIDDEN_TRANSFORM, TOAST_SHOWN_TRANSFORM, TOAST_STYLE, TOAST_VISIBLE_MS,
};
use crate::dom;
use crate::motion::Timers;
use crate::timers::BrowserTimers;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Slide a secret message in at the bottom of the page, then fade it out and drop it.
pub fn show_secret_message(document: &web::Document, text: &str) {
    let Some(body) = document.body() else {
        return;
    };
    let Some(toast) = document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    _ = toast.set_attribute("style", TOAST_STYLE);
    toast.set_text_content(Some(text));
    if body.append_child(&toast).is_err() {
        return;
    }
    log::info!("[toast] {}", text);

    let shown = toast.clone();
    dom::next_frame(move || {
        dom::set_style(&shown, "opacity", "1");
        dom::set_style(&shown, "transform", TOAST_SHOWN_TRANSFORM);
    });

    BrowserTimers.after(
        TOAST_VISIBLE_MS,
        Box::new(move || {
            dom::set_style(&toast, "opacity", "0");
            dom::set_style(&toast, "transform", TOAST_HIDDEN_TRANSFORM);
            BrowserTimers.after(TOAST_FADE_MS, Box::new(move || toast.remove()));
        }),
    );
}
