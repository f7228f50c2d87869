use super::FxWiring;
use crate::dom;
use crate::motion::sequence::SequenceDetector;
use crate::toast;
use web_sys as web;

fn activate_konami(w: &FxWiring) {
    log::info!("[keys] konami sequence complete");
    if let Some(text) = w.profile.konami_toast {
        toast::show_secret_message(&w.document, text);
    }
    if !w.emitter.rain(&w.profile.rain) {
        log::info!("[keys] rain skipped, reduced motion");
    }
}

pub fn wire_konami(w: &FxWiring) {
    let w = w.clone();
    let mut detector = SequenceDetector::konami();
    let target = w.document.clone();
    dom::add_listener(target.as_ref(), "keydown", move |ev: web::KeyboardEvent| {
        if detector.feed(&ev.key()) {
            activate_konami(&w);
        }
    });
}
