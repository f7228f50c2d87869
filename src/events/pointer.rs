use super::FxWiring;
use crate::constants::{
    CLICKABLE_PAW_SELECTOR, EASTER_FONT_SIZE, EASTER_HIGHLIGHT_COLOR, EASTER_UNLOCK_COLOR,
    GALLERY_SELECTOR, INTERACTIVE_SELECTOR, PAW_CLICKED_CLASS, PAW_CLICKED_MS,
};
use crate::dom;
use crate::motion::counters::{ClickMilestone, MessageCycle};
use crate::motion::profile::{FooterEgg, GalleryClick};
use crate::motion::Timers;
use crate::timers::BrowserTimers;
use crate::toast;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn pointer_of(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn hits_interactive(ev: &web::MouseEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

/// Paw stamp under every plain document click, with an optional secret milestone.
pub fn wire_pointer_stamp(w: &FxWiring) {
    let Some(stamp) = w.profile.pointer_stamp else {
        return;
    };
    let w = w.clone();
    let mut milestone = w
        .profile
        .click_milestone
        .map(|(clicks, text)| (ClickMilestone::once(clicks), text));
    let target = w.document.clone();
    dom::add_listener(target.as_ref(), "click", move |ev: web::MouseEvent| {
        if w.motion.is_reduced() || hits_interactive(&ev) {
            return;
        }
        w.emitter.burst(pointer_of(&ev), &stamp);
        if let Some((counter, text)) = milestone.as_mut() {
            if counter.record() {
                log::info!("[click] milestone after {} clicks", counter.count());
                toast::show_secret_message(&w.document, text);
            }
        }
    });
}

fn restart_class(el: &web::HtmlElement, class: &'static str, hold_ms: u32) {
    let classes = el.class_list();
    _ = classes.remove_1(class);
    // Reading layout forces a reflow so re-adding the class restarts its animation
    _ = el.offset_width();
    _ = classes.add_1(class);
    BrowserTimers.after(
        hold_ms,
        Box::new(move || {
            _ = classes.remove_1(class);
        }),
    );
}

/// Keyboard-focusable paws that burst on click, Enter or Space.
pub fn wire_clickable_paws(w: &FxWiring) {
    let Some(burst) = w.profile.paw_burst else {
        return;
    };
    for el in dom::query_all(&w.document, CLICKABLE_PAW_SELECTOR) {
        let Ok(paw) = el.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        let fire = {
            let w = w.clone();
            let paw = paw.clone();
            move || {
                w.emitter.burst(dom::center_of(&paw), &burst);
                restart_class(&paw, PAW_CLICKED_CLASS, PAW_CLICKED_MS);
            }
        };
        let on_click = fire.clone();
        dom::add_listener(paw.as_ref(), "click", move |_ev: web::MouseEvent| on_click());
        dom::add_listener(paw.as_ref(), "keydown", move |ev: web::KeyboardEvent| {
            let key = ev.key();
            if key == "Enter" || key == " " {
                ev.prevent_default();
                fire();
            }
        });
    }
}

pub fn wire_gallery(w: &FxWiring) {
    for el in dom::query_all(&w.document, GALLERY_SELECTOR) {
        let Ok(item) = el.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        match w.profile.gallery {
            GalleryClick::Press { scale, restore_ms } => {
                let pressed = item.clone();
                dom::add_listener(item.as_ref(), "click", move |_ev: web::MouseEvent| {
                    dom::set_style(&pressed, "transform", &format!("scale({})", scale));
                    let released = pressed.clone();
                    BrowserTimers.after(
                        restore_ms,
                        Box::new(move || dom::set_style(&released, "transform", "")),
                    );
                });
            }
            GalleryClick::Burst(burst) => {
                let w = w.clone();
                dom::add_listener(item.as_ref(), "click", move |ev: web::MouseEvent| {
                    w.emitter.burst(pointer_of(&ev), &burst);
                });
            }
        }
    }
}

fn highlight(el: &web::HtmlElement, color: &str) {
    dom::set_style(el, "color", color);
    dom::set_style(el, "font-size", EASTER_FONT_SIZE);
}

fn restore_after(el: &web::HtmlElement, ms: u32, text: Option<&'static str>) {
    let el = el.clone();
    BrowserTimers.after(
        ms,
        Box::new(move || {
            if let Some(text) = text {
                el.set_text_content(Some(text));
            }
            dom::set_style(&el, "color", "");
            dom::set_style(&el, "font-size", "");
        }),
    );
}

fn top_center(el: &web::HtmlElement) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        (rect.left() + f64::from(el.offset_width()) / 2.0) as f32,
        rect.top() as f32,
    )
}

pub fn wire_footer_egg(w: &FxWiring) {
    match w.profile.footer {
        FooterEgg::Cycle {
            selector,
            messages,
            burst,
            restore_ms,
        } => {
            let Some(egg) = footer_element(&w.document, selector) else {
                return;
            };
            let w = w.clone();
            let mut cycle = MessageCycle::new(messages);
            let el = egg.clone();
            dom::add_listener(egg.as_ref(), "click", move |_ev: web::MouseEvent| {
                if let Some(text) = cycle.advance() {
                    el.set_text_content(Some(text));
                }
                highlight(&el, EASTER_HIGHLIGHT_COLOR);
                w.emitter.burst(dom::center_of(&el), &burst);
                restore_after(&el, restore_ms, None);
            });
        }
        FooterEgg::Unlock {
            selector,
            clicks,
            message,
            idle_text,
            burst,
            restore_ms,
        } => {
            let Some(egg) = footer_element(&w.document, selector) else {
                return;
            };
            let w = w.clone();
            let mut counter = ClickMilestone::every(clicks);
            let el = egg.clone();
            dom::add_listener(egg.as_ref(), "click", move |_ev: web::MouseEvent| {
                if !counter.record() {
                    return;
                }
                el.set_text_content(Some(message));
                highlight(&el, EASTER_UNLOCK_COLOR);
                w.emitter.burst(top_center(&el), &burst);
                restore_after(&el, restore_ms, Some(idle_text));
            });
        }
    }
}

fn footer_element(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}
