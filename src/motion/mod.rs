// Pure effect logic shared by the wasm shell and host-side tests.
// Nothing in here touches web-sys; browser capabilities come in through traits.
pub mod constants;
pub mod counters;
pub mod emitter;
pub mod parallax;
pub mod particles;
pub mod preference;
pub mod presets;
pub mod profile;
pub mod reveal;
pub mod schedule;
pub mod sequence;
pub mod style;

pub use emitter::{ParticleEmitter, ParticleHost};
pub use preference::MotionPreference;
pub use profile::Profile;
pub use reveal::{RevealOptions, RevealTarget, VisibilityChange, VisibilityNotifier, VisibilityTrigger};
pub use schedule::Timers;
