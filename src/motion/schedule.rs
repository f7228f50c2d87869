use std::ops::ControlFlow;
use std::rc::Rc;

/// Cooperative timer capability.
pub trait Timers {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);

    /// Run `tick` every `interval_ms` until it returns `ControlFlow::Break`, then drop it.
    fn every(&self, interval_ms: u32, tick: Box<dyn FnMut() -> ControlFlow<()>>);
}

impl<T: Timers + ?Sized> Timers for Rc<T> {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        (**self).after(delay_ms, task);
    }

    fn every(&self, interval_ms: u32, tick: Box<dyn FnMut() -> ControlFlow<()>>) {
        (**self).every(interval_ms, tick);
    }
}

/// Bookkeeping for a fixed-length repeating emitter.
///
/// Each tick advances elapsed time by one interval first; once elapsed reaches
/// the total duration the schedule reports done and stays done.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RainSchedule {
    duration_ms: u32,
    interval_ms: u32,
    elapsed_ms: u32,
    done: bool,
}

impl RainSchedule {
    pub fn new(duration_ms: u32, interval_ms: u32) -> Self {
        Self {
            duration_ms,
            interval_ms,
            elapsed_ms: 0,
            // A zero interval would never reach the deadline
            done: interval_ms == 0,
        }
    }

    /// Advance one interval. Returns `true` when this tick should spawn.
    pub fn tick(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(self.interval_ms);
        if self.elapsed_ms >= self.duration_ms {
            self.done = true;
            return false;
        }
        true
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    pub fn max_spawns(&self) -> u32 {
        if self.interval_ms == 0 || self.duration_ms == 0 {
            return 0;
        }
        (self.duration_ms - 1) / self.interval_ms
    }
}
