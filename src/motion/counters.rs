#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickMilestone {
    count: u32,
    target: u32,
    repeat: bool,
}

impl ClickMilestone {
    /// Fires on the `target`-th click only; later clicks keep counting silently.
    pub const fn once(target: u32) -> Self {
        Self {
            count: 0,
            target,
            repeat: false,
        }
    }

    /// Fires on every `target`-th click, restarting the count each time.
    pub const fn every(target: u32) -> Self {
        Self {
            count: 0,
            target,
            repeat: true,
        }
    }

    pub fn record(&mut self) -> bool {
        if self.target == 0 {
            return false;
        }
        self.count = self.count.saturating_add(1);
        if self.count != self.target {
            return false;
        }
        if self.repeat {
            self.count = 0;
        }
        true
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Rotates through a fixed message list, advancing before each read.
#[derive(Clone, Copy, Debug)]
pub struct MessageCycle {
    messages: &'static [&'static str],
    index: usize,
}

impl MessageCycle {
    pub const fn new(messages: &'static [&'static str]) -> Self {
        Self { messages, index: 0 }
    }

    pub fn advance(&mut self) -> Option<&'static str> {
        if self.messages.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.messages.len();
        Some(self.messages[self.index])
    }

    pub fn current(&self) -> Option<&'static str> {
        self.messages.get(self.index).copied()
    }
}
