pub mod keyboard;
pub mod pointer;
pub mod scroll;

pub use keyboard::wire_konami;
pub use pointer::{wire_clickable_paws, wire_footer_egg, wire_gallery, wire_pointer_stamp};
pub use scroll::wire_parallax;

use crate::motion::{MotionPreference, ParticleEmitter, Profile};
use crate::stage::DomStage;
use crate::timers::BrowserTimers;
use rand::rngs::StdRng;
use web_sys as web;

pub type DomEmitter = ParticleEmitter<DomStage, BrowserTimers, StdRng>;

/// Everything an input handler needs to trigger effects.
#[derive(Clone)]
pub struct FxWiring {
    pub document: web::Document,
    pub profile: &'static Profile,
    pub motion: MotionPreference,
    pub emitter: DomEmitter,
}
