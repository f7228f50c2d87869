use super::constants::FALLBACK_MARGIN_MS;
use super::particles::{plan_burst, plan_drop, BurstPreset, ParticleSpec, RainPreset};
use super::preference::MotionPreference;
use super::schedule::{RainSchedule, Timers};
use glam::Vec2;
use rand::Rng;
use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::Rc;

pub trait ParticleHost {
    type Node: 'static;

    /// Materialize a node at the spec's origin and start it toward its end
    /// keyframe. `None` when there is nowhere to put it.
    fn spawn(&self, spec: &ParticleSpec) -> Option<Self::Node>;

    /// Call `done` once when the node's own animation completes.
    fn on_finished(&self, node: &Self::Node, spec: &ParticleSpec, done: Box<dyn FnOnce()>);

    /// Drop the node's opacity to zero; its inline transition does the rest.
    fn fade_out(&self, node: &Self::Node);

    fn detach(&self, node: &Self::Node);

    fn viewport(&self) -> Vec2;
}

/// Removal guard shared by the completion listener and the fallback timer.
struct Transient<H: ParticleHost> {
    host: H,
    node: H::Node,
    removed: Cell<bool>,
}

impl<H: ParticleHost> Transient<H> {
    fn fade(&self) {
        if !self.removed.get() {
            self.host.fade_out(&self.node);
        }
    }

    fn remove(&self) -> bool {
        if self.removed.replace(true) {
            return false;
        }
        self.host.detach(&self.node);
        true
    }
}

struct EmitterInner<H, T, R> {
    motion: MotionPreference,
    host: H,
    timers: T,
    rng: RefCell<R>,
}

pub struct ParticleEmitter<H, T, R> {
    inner: Rc<EmitterInner<H, T, R>>,
}

impl<H, T, R> Clone for ParticleEmitter<H, T, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<H, T, R> ParticleEmitter<H, T, R>
where
    H: ParticleHost + Clone + 'static,
    T: Timers + 'static,
    R: Rng + 'static,
{
    pub fn new(motion: MotionPreference, host: H, timers: T, rng: R) -> Self {
        Self {
            inner: Rc::new(EmitterInner {
                motion,
                host,
                timers,
                rng: RefCell::new(rng),
            }),
        }
    }

    pub fn burst(&self, origin: Vec2, preset: &BurstPreset) -> usize {
        if self.inner.motion.is_reduced() {
            return 0;
        }
        let count = preset.count.sample(&mut *self.inner.rng.borrow_mut());
        self.emit(origin, count, preset)
    }

    /// Spawn `count` particles around `origin`. Returns how many nodes were created.
    pub fn emit(&self, origin: Vec2, count: usize, preset: &BurstPreset) -> usize {
        if self.inner.motion.is_reduced() {
            return 0;
        }
        let specs = plan_burst(preset, origin, count, &mut *self.inner.rng.borrow_mut());
        let mut created = 0;
        for spec in &specs {
            if !self.launch(spec) {
                break;
            }
            created += 1;
        }
        log::debug!(
            "[fx] {} emitted {}/{} at ({:.0},{:.0})",
            preset.name,
            created,
            count,
            origin.x,
            origin.y
        );
        created
    }

    /// Start a timed rain of single drops from the top of the viewport.
    /// Returns `false` when reduced motion suppressed it.
    pub fn rain(&self, preset: &RainPreset) -> bool {
        if self.inner.motion.is_reduced() {
            return false;
        }
        let preset = *preset;
        let mut schedule = RainSchedule::new(preset.duration_ms, preset.interval_ms);
        let emitter = self.clone();
        log::info!("[fx] {} for {}ms", preset.name, preset.duration_ms);
        self.inner.timers.every(
            preset.interval_ms,
            Box::new(move || {
                if !schedule.tick() {
                    log::debug!("[fx] {} stopped at {}ms", preset.name, schedule.elapsed_ms());
                    return ControlFlow::Break(());
                }
                let viewport = emitter.inner.host.viewport();
                let spec = plan_drop(&preset, viewport, &mut *emitter.inner.rng.borrow_mut());
                if let Some(spec) = spec {
                    emitter.launch(&spec);
                }
                ControlFlow::Continue(())
            }),
        );
        true
    }

    fn launch(&self, spec: &ParticleSpec) -> bool {
        let host = &self.inner.host;
        let Some(node) = host.spawn(spec) else {
            return false;
        };
        let transient = Rc::new(Transient {
            host: host.clone(),
            node,
            removed: Cell::new(false),
        });
        let removal_ms = match spec.fade {
            // Timed fades ignore completion events and go on their own clock
            Some(fade) => {
                let fading = Rc::clone(&transient);
                self.inner
                    .timers
                    .after(fade.after_ms, Box::new(move || fading.fade()));
                fade.remove_ms
            }
            None => {
                let on_done = Rc::clone(&transient);
                host.on_finished(
                    &transient.node,
                    spec,
                    Box::new(move || {
                        on_done.remove();
                    }),
                );
                spec.duration_ms.saturating_add(FALLBACK_MARGIN_MS)
            }
        };
        self.inner.timers.after(
            removal_ms,
            Box::new(move || {
                transient.remove();
            }),
        );
        true
    }
}
