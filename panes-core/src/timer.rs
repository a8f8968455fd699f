//! One-shot deferred actions driven by frame time.

/// Fires exactly once after the given amount of accumulated frame time.
#[derive(Clone, Copy, Debug)]
pub struct Delay {
    remaining: f32,
    fired: bool,
}

impl Delay {
    pub fn new(seconds: f32) -> Self {
        Self {
            remaining: seconds.max(0.0),
            fired: false,
        }
    }

    /// Advances the delay. Returns true on the one frame the delay elapses.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        if self.fired {
            return false;
        }
        self.remaining -= delta_time.max(0.0);
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.fired = true;
            return true;
        }
        false
    }

    pub fn is_fired(&self) -> bool {
        self.fired
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}
