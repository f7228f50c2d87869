use crate::dom;
use crate::motion::particles::{Driver, Look, ParticleSpec};
use crate::motion::style::{end_properties, start_style};
use crate::motion::ParticleHost;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Particle container on the page. Spawning is a no-op when the container is missing.
#[derive(Clone)]
pub struct DomStage {
    document: web::Document,
    container: Option<web::Element>,
}

impl DomStage {
    pub fn new(document: &web::Document, container_id: &str) -> Self {
        let container = document.get_element_by_id(container_id);
        if container.is_none() {
            log::warn!("[stage] missing #{}, particles disabled", container_id);
        }
        Self {
            document: document.clone(),
            container,
        }
    }
}

impl ParticleHost for DomStage {
    type Node = web::HtmlElement;

    fn spawn(&self, spec: &ParticleSpec) -> Option<web::HtmlElement> {
        let container = self.container.as_ref()?;
        let node = self
            .document
            .create_element("span")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        if let Some(class) = spec.class_name {
            node.set_class_name(class);
        }
        if let Look::Glyph(glyph) = spec.look {
            node.set_text_content(Some(glyph));
        }
        _ = node.set_attribute("style", &start_style(spec));
        container.append_child(&node).ok()?;

        if spec.driver == Driver::Transition {
            let props = end_properties(spec);
            let moving = node.clone();
            dom::next_frame(move || {
                for (name, value) in &props {
                    dom::set_style(&moving, name, value);
                }
            });
        }
        Some(node)
    }

    fn on_finished(&self, node: &web::HtmlElement, spec: &ParticleSpec, done: Box<dyn FnOnce()>) {
        let cb = Closure::once_into_js(move || done());
        let opts = web::AddEventListenerOptions::new();
        // transitionend fires once per property
        opts.set_once(true);
        _ = node.add_event_listener_with_callback_and_add_event_listener_options(
            spec.driver.completion_event(),
            cb.unchecked_ref(),
            &opts,
        );
    }

    fn fade_out(&self, node: &web::HtmlElement) {
        dom::set_style(node, "opacity", "0");
    }

    fn detach(&self, node: &web::HtmlElement) {
        node.remove();
    }

    fn viewport(&self) -> glam::Vec2 {
        let Some(w) = web::window() else {
            return glam::Vec2::ZERO;
        };
        let px = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
        glam::Vec2::new(px(w.inner_width()), px(w.inner_height()))
    }
}
