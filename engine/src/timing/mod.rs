//! Timing Module
//!
//! Tick-driven timers for the cooperative game loop. No threads and no
//! wall clock: owners call `tick(dt)` once per simulation frame.

/// A cancellable one-shot timer ticked by the owner each frame.
///
/// Scheduling while a fire is pending replaces the previous deadline, so at
/// most one fire is ever outstanding.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelayedTrigger {
    /// Seconds until the trigger fires, when armed
    remaining_s: Option<f32>,
}

impl DelayedTrigger {
    /// Create an idle trigger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the trigger to fire after `delay_s` seconds.
    ///
    /// Replaces any pending deadline. Non-positive delays fire on the next
    /// tick.
    pub fn schedule(&mut self, delay_s: f32) {
        self.remaining_s = Some(delay_s.max(0.0));
    }

    /// Disarm the trigger without firing.
    pub fn cancel(&mut self) {
        self.remaining_s = None;
    }

    /// Whether a fire is outstanding.
    pub fn is_pending(&self) -> bool {
        self.remaining_s.is_some()
    }

    /// Seconds left until the fire, when armed.
    pub fn remaining(&self) -> Option<f32> {
        self.remaining_s
    }

    /// Advance the timer; returns `true` exactly on the tick it fires.
    pub fn tick(&mut self, dt: f32) -> bool {
        if let Some(remaining) = self.remaining_s.as_mut() {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.remaining_s = None;
                return true;
            }
        }
        false
    }
}
