//! Per-frame animation scheduler.
//!
//! The ticker only tracks which animations are running. The animated values
//! live with their owner, which implements [`Animated`] so the ticker can
//! step them by id once per frame.

use std::time::Duration;

/// Animation rates are expressed per frame of a 60 Hz display.
pub const FRAMES_PER_SECOND: f32 = 60.0;

pub type AnimationId = usize;

/// Outcome of advancing one animation by one frame delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Completed,
}

pub trait Animated {
    fn step(&mut self, id: AnimationId, delta: f32) -> Step;
}

#[derive(Debug, Default)]
pub struct Ticker {
    active: Vec<AnimationId>,
}

impl Ticker {
    pub fn new() -> Self {
        Self { active: Vec::new() }
    }

    /// Register an animation. Registering an id twice is a no-op.
    pub fn add(&mut self, id: AnimationId) {
        if !self.active.contains(&id) {
            self.active.push(id);
        }
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    #[cfg(test)]
    pub fn is_active(&self, id: AnimationId) -> bool {
        self.active.contains(&id)
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Step every registered animation by `delta` frames. Animations that
    /// report [`Step::Completed`] are deregistered and returned in
    /// registration order.
    pub fn tick<A: Animated + ?Sized>(&mut self, host: &mut A, delta: f32) -> Vec<AnimationId> {
        let mut completed = Vec::new();
        self.active.retain(|&id| match host.step(id, delta) {
            Step::Continue => true,
            Step::Completed => {
                completed.push(id);
                false
            }
        });
        completed
    }
}

/// Convert wall-clock time into animation frames.
pub fn frames(elapsed: Duration) -> f32 {
    elapsed.as_secs_f32() * FRAMES_PER_SECOND
}
