#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod motion;
mod observer;
mod stage;
mod timers;
mod toast;

use motion::{ParticleEmitter, Profile};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("paw-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::ready(&document).await?;

    // Wiring twice would double every listener
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("paw-fx already initialized");
        return Ok(());
    }

    let motion = dom::sample_motion_preference(&window);
    let profile = Profile::select(dom::html_attr(&document, constants::PROFILE_ATTR).as_deref());
    log::info!("[init] profile={}", profile.name);

    // A broken observer only costs the reveal; particles still wire up
    if let Err(e) = observer::wire_reveal(&document, &profile.reveal, motion) {
        log::error!("[init] reveal disabled: {:?}", e);
    }

    let emitter = ParticleEmitter::new(
        motion,
        stage::DomStage::new(&document, profile.container_id),
        timers::BrowserTimers,
        StdRng::from_entropy(),
    );
    let wiring = events::FxWiring {
        document,
        profile,
        motion,
        emitter,
    };
    events::wire_pointer_stamp(&wiring);
    events::wire_clickable_paws(&wiring);
    events::wire_gallery(&wiring);
    events::wire_footer_egg(&wiring);
    events::wire_konami(&wiring);
    events::wire_parallax(&wiring);
    Ok(())
}
