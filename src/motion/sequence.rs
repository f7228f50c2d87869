/// ↑ ↑ ↓ ↓ ← → ← → b a, as reported by `KeyboardEvent.key`.
pub const KONAMI: &[&str] = &[
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Matches a fixed key sequence one key at a time.
#[derive(Clone, Debug)]
pub struct SequenceDetector {
    expected: &'static [&'static str],
    progress: usize,
}

impl Default for SequenceDetector {
    fn default() -> Self {
        Self::konami()
    }
}

impl SequenceDetector {
    pub const fn new(expected: &'static [&'static str]) -> Self {
        Self {
            expected,
            progress: 0,
        }
    }

    pub const fn konami() -> Self {
        Self::new(KONAMI)
    }

    /// Feed one key. Returns `true` on the key that completes the sequence.
    pub fn feed(&mut self, key: &str) -> bool {
        let Some(next) = self.expected.get(self.progress) else {
            return false;
        };
        if *next != key {
            self.progress = 0;
            return false;
        }
        self.progress += 1;
        if self.progress == self.expected.len() {
            self.progress = 0;
            return true;
        }
        false
    }

    pub fn progress(&self) -> usize {
        self.progress
    }

    pub fn len(&self) -> usize {
        self.expected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expected.is_empty()
    }
}
