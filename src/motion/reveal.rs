use super::constants::{
    REVEAL_ROOT_MARGIN_BOTTOM_PX, REVEAL_STAGGER_MS, REVEAL_THRESHOLD, THRESHOLD_SLACK,
};
use super::preference::MotionPreference;
use super::schedule::Timers;
use std::cell::Cell;
use std::rc::Rc;

pub trait RevealTarget: PartialEq {
    /// Identity of the sibling group (the parent element in the DOM).
    type Group: PartialEq;

    fn group(&self) -> Option<Self::Group>;
    fn is_attached(&self) -> bool;
    fn mark_revealed(&self);
}

/// Reports visible-fraction crossings for watched targets.
///
/// The notifier only registers interest; crossings are delivered back through
/// [`VisibilityTrigger::on_visibility`] by whoever owns the platform callback.
pub trait VisibilityNotifier<E> {
    fn watch(&self, target: &E);
    fn unwatch(&self, target: &E);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    /// The viewport bottom is pulled up by this much before intersecting.
    pub root_margin_bottom_px: f64,
    pub stagger_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin_bottom_px: REVEAL_ROOT_MARGIN_BOTTOM_PX,
            stagger_ms: REVEAL_STAGGER_MS,
        }
    }
}

impl RevealOptions {
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.root_margin_bottom_px)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityChange {
    pub fraction: f64,
    pub intersecting: bool,
}

impl VisibilityChange {
    #[inline]
    pub fn crosses(&self, threshold: f64) -> bool {
        self.intersecting && self.fraction + THRESHOLD_SLACK >= threshold
    }
}

pub struct RevealCandidate<E> {
    target: E,
    fired: Cell<bool>,
    pending: Cell<bool>,
}

impl<E: RevealTarget> RevealCandidate<E> {
    fn new(target: E) -> Self {
        Self {
            target,
            fired: Cell::new(false),
            pending: Cell::new(false),
        }
    }

    pub fn target(&self) -> &E {
        &self.target
    }

    pub fn is_revealed(&self) -> bool {
        self.fired.get()
    }

    /// Flip to revealed. Returns `true` only for the first call.
    pub fn reveal(&self) -> bool {
        if self.fired.replace(true) {
            return false;
        }
        self.target.mark_revealed();
        true
    }
}

/// One-shot, optionally staggered scroll reveal over a fixed candidate set.
pub struct VisibilityTrigger<E, N, T> {
    candidates: Vec<Rc<RevealCandidate<E>>>,
    options: RevealOptions,
    motion: MotionPreference,
    notifier: N,
    timers: T,
}

impl<E, N, T> VisibilityTrigger<E, N, T>
where
    E: RevealTarget + 'static,
    N: VisibilityNotifier<E> + Clone + 'static,
    T: Timers,
{
    pub fn initialize(
        targets: impl IntoIterator<Item = E>,
        options: RevealOptions,
        motion: MotionPreference,
        notifier: N,
        timers: T,
    ) -> Self {
        let candidates: Vec<_> = targets
            .into_iter()
            .map(|t| Rc::new(RevealCandidate::new(t)))
            .collect();
        if motion.is_reduced() {
            for c in &candidates {
                c.reveal();
            }
            log::info!("[reveal] reduced motion, revealed {} candidates", candidates.len());
        } else {
            for c in &candidates {
                notifier.watch(c.target());
            }
            log::info!("[reveal] watching {} candidates", candidates.len());
        }
        Self {
            candidates,
            options,
            motion,
            notifier,
            timers,
        }
    }

    pub fn on_visibility(&self, target: &E, change: VisibilityChange) {
        if self.motion.is_reduced() || !change.crosses(self.options.threshold) {
            return;
        }
        let Some(index) = self.candidates.iter().position(|c| c.target() == target) else {
            return;
        };
        let candidate = &self.candidates[index];
        if candidate.is_revealed() || candidate.pending.replace(true) {
            return;
        }
        let ordinal = self.sibling_ordinal(index);
        let delay = stagger_delay_ms(ordinal, self.options.stagger_ms);
        log::debug!("[reveal] candidate {} ordinal {} in {}ms", index, ordinal, delay);

        let candidate = Rc::clone(candidate);
        let notifier = self.notifier.clone();
        self.timers.after(
            delay,
            Box::new(move || {
                if candidate.target().is_attached() {
                    candidate.reveal();
                } else {
                    log::debug!("[reveal] target detached before its delay, skipped");
                }
                notifier.unwatch(candidate.target());
            }),
        );
    }

    /// Position among earlier candidates sharing this candidate's parent.
    pub fn sibling_ordinal(&self, index: usize) -> usize {
        let Some(group) = self.candidates[index].target().group() else {
            return 0;
        };
        self.candidates[..index]
            .iter()
            .filter(|c| c.target().group().as_ref() == Some(&group))
            .count()
    }

    pub fn candidates(&self) -> &[Rc<RevealCandidate<E>>] {
        &self.candidates
    }

    pub fn revealed_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.is_revealed()).count()
    }
}

#[inline]
pub fn stagger_delay_ms(ordinal: usize, stagger_ms: u32) -> u32 {
    u32::try_from(ordinal)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger_ms)
}
