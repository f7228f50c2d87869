use crate::dom;
use crate::motion::profile::RevealSetup;
use crate::motion::{
    MotionPreference, RevealTarget, VisibilityChange, VisibilityNotifier, VisibilityTrigger,
};
use crate::timers::BrowserTimers;
use std::cell::OnceCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A page element that reveals by gaining a CSS class.
#[derive(Clone, Debug)]
pub struct Candidate {
    element: web::Element,
    class: &'static str,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
    }
}

impl RevealTarget for Candidate {
    type Group = web::Element;

    fn group(&self) -> Option<web::Element> {
        self.element.parent_element()
    }

    fn is_attached(&self) -> bool {
        self.element.is_connected()
    }

    fn mark_revealed(&self) {
        _ = self.element.class_list().add_1(self.class);
    }
}

/// IntersectionObserver handle. `None` under reduced motion, where nothing is observed.
#[derive(Clone)]
pub struct DomNotifier {
    observer: Option<web::IntersectionObserver>,
}

impl VisibilityNotifier<Candidate> for DomNotifier {
    fn watch(&self, target: &Candidate) {
        if let Some(observer) = &self.observer {
            observer.observe(&target.element);
        }
    }

    fn unwatch(&self, target: &Candidate) {
        if let Some(observer) = &self.observer {
            observer.unobserve(&target.element);
        }
    }
}

pub type DomTrigger = VisibilityTrigger<Candidate, DomNotifier, BrowserTimers>;

/// Build the scroll reveal for `setup` and start observing.
pub fn wire_reveal(
    document: &web::Document,
    setup: &RevealSetup,
    motion: MotionPreference,
) -> anyhow::Result<()> {
    let class = setup.revealed_class;
    let options = setup.options;
    let candidates = || {
        dom::query_all(document, setup.selector)
            .into_iter()
            .map(|element| Candidate { element, class })
    };

    if motion.is_reduced() {
        VisibilityTrigger::initialize(
            candidates(),
            options,
            motion,
            DomNotifier { observer: None },
            BrowserTimers,
        );
        return Ok(());
    }

    // The observer callback needs the trigger and the trigger needs the observer
    let slot: Rc<OnceCell<DomTrigger>> = Rc::new(OnceCell::new());
    let slot_cb = slot.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            let Some(trigger) = slot_cb.get() else {
                return;
            };
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = Candidate {
                    element: entry.target(),
                    class,
                };
                trigger.on_visibility(
                    &target,
                    VisibilityChange {
                        fraction: entry.intersection_ratio(),
                        intersecting: entry.is_intersecting(),
                    },
                );
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin());
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    let trigger = VisibilityTrigger::initialize(
        candidates(),
        options,
        motion,
        DomNotifier {
            observer: Some(observer),
        },
        BrowserTimers,
    );
    if slot.set(trigger).is_err() {
        log::warn!("[reveal] trigger already installed");
    }
    Ok(())
}
