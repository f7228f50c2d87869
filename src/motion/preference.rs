/// The visitor's reduced-motion preference, sampled once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPreference {
    reduced: bool,
}

impl MotionPreference {
    pub const fn full() -> Self {
        Self { reduced: false }
    }

    pub const fn reduced() -> Self {
        Self { reduced: true }
    }

    /// Run the platform probe exactly once and freeze its answer.
    pub fn sample(probe: impl FnOnce() -> bool) -> Self {
        let reduced = probe();
        log::info!("[motion] reduced motion={}", reduced);
        Self { reduced }
    }

    #[inline]
    pub fn is_reduced(self) -> bool {
        self.reduced
    }

    #[inline]
    pub fn allows_motion(self) -> bool {
        !self.reduced
    }
}
