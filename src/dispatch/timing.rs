//! Press-timing latches for the reset and eraser buttons.

/// Counts rapid reset presses. Every press still resets the canvas; the
/// counter only decides when the hidden reward fires.
#[derive(Clone, Copy, Debug)]
pub struct ResetEasterEgg {
    window_ms: u32,
    threshold: u8,
    last_press_ms: Option<u32>,
    count: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EggPress {
    /// Streak length including this press, before any wrap back to zero.
    pub streak: u8,
    pub triggered: bool,
}

impl ResetEasterEgg {
    pub const fn new(window_ms: u32, threshold: u8) -> Self {
        Self {
            window_ms,
            threshold,
            last_press_ms: None,
            count: 0,
        }
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn press(&mut self, now_ms: u32) -> EggPress {
        let rapid = self
            .last_press_ms
            .is_some_and(|last| now_ms.wrapping_sub(last) < self.window_ms);
        self.count = if rapid {
            self.count.saturating_add(1)
        } else {
            1
        };
        self.last_press_ms = Some(now_ms);

        let streak = self.count;
        let triggered = streak >= self.threshold;
        if triggered {
            self.count = 0;
        }
        EggPress { streak, triggered }
    }
}

/// Rejects presses closer than `interval_ms` to the last accepted one.
#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    interval_ms: u32,
    last_accepted_ms: Option<u32>,
}

impl Debounce {
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_accepted_ms: None,
        }
    }

    pub fn accept(&mut self, now_ms: u32) -> bool {
        let bouncing = self
            .last_accepted_ms
            .is_some_and(|last| now_ms.wrapping_sub(last) < self.interval_ms);
        if !bouncing {
            self.last_accepted_ms = Some(now_ms);
        }
        !bouncing
    }
}
