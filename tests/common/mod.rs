// Test doubles for the injected browser capabilities.
#![allow(dead_code)]

use crate::motion::emitter::ParticleHost;
use crate::motion::particles::ParticleSpec;
use crate::motion::reveal::{RevealTarget, VisibilityNotifier};
use crate::motion::schedule::Timers;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::Rc;

enum Job {
    Once(Box<dyn FnOnce()>),
    Repeat {
        interval: u64,
        tick: Box<dyn FnMut() -> ControlFlow<()>>,
    },
}

struct Pending {
    due: u64,
    seq: u64,
    job: Job,
}

/// Virtual clock. Tasks run in due-time order, ties in registration order.
#[derive(Default)]
pub struct FakeTimers {
    now: Cell<u64>,
    seq: Cell<u64>,
    queue: RefCell<Vec<Pending>>,
    registrations: Cell<usize>,
}

impl FakeTimers {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Total `after` + `every` calls ever made.
    pub fn registrations(&self) -> usize {
        self.registrations.get()
    }

    fn push(&self, due: u64, job: Job) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.queue.borrow_mut().push(Pending { due, seq, job });
    }

    fn pop_due(&self, until: u64) -> Option<Pending> {
        let mut queue = self.queue.borrow_mut();
        let idx = queue
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        Some(queue.remove(idx))
    }

    pub fn advance(&self, ms: u64) {
        let until = self.now.get() + ms;
        while let Some(p) = self.pop_due(until) {
            self.now.set(p.due);
            match p.job {
                Job::Once(task) => task(),
                Job::Repeat { interval, mut tick } => {
                    if tick().is_continue() {
                        self.push(p.due + interval, Job::Repeat { interval, tick });
                    }
                }
            }
        }
        self.now.set(until);
    }
}

impl Timers for FakeTimers {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.registrations.set(self.registrations.get() + 1);
        self.push(self.now.get() + u64::from(delay_ms), Job::Once(task));
    }

    fn every(&self, interval_ms: u32, tick: Box<dyn FnMut() -> ControlFlow<()>>) {
        self.registrations.set(self.registrations.get() + 1);
        let interval = u64::from(interval_ms.max(1));
        self.push(self.now.get() + interval, Job::Repeat { interval, tick });
    }
}

pub struct TargetState {
    pub id: u32,
    pub parent: Option<u32>,
    pub attached: Cell<bool>,
    pub marks: Cell<u32>,
    pub revealed_at: Cell<Option<u64>>,
    clock: Rc<FakeTimers>,
}

#[derive(Clone)]
pub struct MockTarget(pub Rc<TargetState>);

impl MockTarget {
    pub fn new(id: u32, parent: Option<u32>, clock: &Rc<FakeTimers>) -> Self {
        Self(Rc::new(TargetState {
            id,
            parent,
            attached: Cell::new(true),
            marks: Cell::new(0),
            revealed_at: Cell::new(None),
            clock: Rc::clone(clock),
        }))
    }

    pub fn detach(&self) {
        self.0.attached.set(false);
    }

    pub fn marks(&self) -> u32 {
        self.0.marks.get()
    }

    pub fn revealed_at(&self) -> Option<u64> {
        self.0.revealed_at.get()
    }
}

impl PartialEq for MockTarget {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl RevealTarget for MockTarget {
    type Group = u32;

    fn group(&self) -> Option<u32> {
        self.0.parent
    }

    fn is_attached(&self) -> bool {
        self.0.attached.get()
    }

    fn mark_revealed(&self) {
        self.0.marks.set(self.0.marks.get() + 1);
        self.0.revealed_at.set(Some(self.0.clock.now()));
    }
}

#[derive(Default)]
pub struct NotifierLog {
    pub watched: Vec<u32>,
    pub unwatched: Vec<u32>,
}

#[derive(Clone, Default)]
pub struct MockNotifier(pub Rc<RefCell<NotifierLog>>);

impl MockNotifier {
    pub fn watched(&self) -> Vec<u32> {
        self.0.borrow().watched.clone()
    }

    pub fn unwatched(&self) -> Vec<u32> {
        self.0.borrow().unwatched.clone()
    }
}

impl VisibilityNotifier<MockTarget> for MockNotifier {
    fn watch(&self, target: &MockTarget) {
        self.0.borrow_mut().watched.push(target.0.id);
    }

    fn unwatch(&self, target: &MockTarget) {
        self.0.borrow_mut().unwatched.push(target.0.id);
    }
}

pub struct HostState {
    pub has_container: Cell<bool>,
    pub viewport: Cell<Vec2>,
    next_id: Cell<u32>,
    pub live: RefCell<Vec<u32>>,
    pub spawned: RefCell<Vec<(u64, ParticleSpec)>>,
    pub detach_calls: RefCell<Vec<u32>>,
    pub faded_at: RefCell<Vec<(u32, u64)>>,
    pub detached_at: RefCell<Vec<(u32, u64)>>,
    finish_hooks: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
    clock: Rc<FakeTimers>,
}

/// In-memory particle container. Nodes are plain ids.
#[derive(Clone)]
pub struct MockHost(pub Rc<HostState>);

impl MockHost {
    pub fn new(clock: &Rc<FakeTimers>) -> Self {
        Self(Rc::new(HostState {
            has_container: Cell::new(true),
            viewport: Cell::new(Vec2::new(1280.0, 800.0)),
            next_id: Cell::new(0),
            live: RefCell::new(Vec::new()),
            spawned: RefCell::new(Vec::new()),
            detach_calls: RefCell::new(Vec::new()),
            faded_at: RefCell::new(Vec::new()),
            detached_at: RefCell::new(Vec::new()),
            finish_hooks: RefCell::new(Vec::new()),
            clock: Rc::clone(clock),
        }))
    }

    pub fn without_container(clock: &Rc<FakeTimers>) -> Self {
        let host = Self::new(clock);
        host.0.has_container.set(false);
        host
    }

    pub fn live(&self) -> usize {
        self.0.live.borrow().len()
    }

    pub fn spawned(&self) -> Vec<ParticleSpec> {
        self.0.spawned.borrow().iter().map(|(_, s)| *s).collect()
    }

    pub fn spawn_times(&self) -> Vec<u64> {
        self.0.spawned.borrow().iter().map(|(t, _)| *t).collect()
    }

    pub fn detach_calls(&self) -> usize {
        self.0.detach_calls.borrow().len()
    }

    pub fn hooks_pending(&self) -> usize {
        self.0.finish_hooks.borrow().len()
    }

    /// Deliver every pending completion signal, as the browser would.
    pub fn finish_all(&self) {
        let hooks: Vec<_> = self.0.finish_hooks.borrow_mut().drain(..).collect();
        for (_, done) in hooks {
            done();
        }
    }
}

impl ParticleHost for MockHost {
    type Node = u32;

    fn spawn(&self, spec: &ParticleSpec) -> Option<u32> {
        if !self.0.has_container.get() {
            return None;
        }
        let id = self.0.next_id.get();
        self.0.next_id.set(id + 1);
        self.0.live.borrow_mut().push(id);
        self.0.spawned.borrow_mut().push((self.0.clock.now(), *spec));
        Some(id)
    }

    fn on_finished(&self, node: &u32, _spec: &ParticleSpec, done: Box<dyn FnOnce()>) {
        self.0.finish_hooks.borrow_mut().push((*node, done));
    }

    fn fade_out(&self, node: &u32) {
        self.0.faded_at.borrow_mut().push((*node, self.0.clock.now()));
    }

    fn detach(&self, node: &u32) {
        self.0.detach_calls.borrow_mut().push(*node);
        self.0.detached_at.borrow_mut().push((*node, self.0.clock.now()));
        self.0.live.borrow_mut().retain(|n| n != node);
    }

    fn viewport(&self) -> Vec2 {
        self.0.viewport.get()
    }
}
