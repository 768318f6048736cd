//! A single flip-able card and its reveal state machine.
//!
//! A reveal runs `Idle -> FlippingOut -> FlippingIn -> FadingOut -> Done`.
//! Each frame the ticker calls [`Motion::step`] with the elapsed frame
//! delta; the step is pure so it can be driven with synthetic deltas.

use crate::config::AnimationConfig;
use crate::deck::ticker::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Back,
    Front,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FlippingOut,
    FlippingIn,
    FadingOut,
    Done,
}

/// Per-frame change of horizontal scale and opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub flip: f32,
    pub fade: f32,
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            flip: 0.1,
            fade: 0.02,
        }
    }
}

impl From<&AnimationConfig> for Rates {
    fn from(config: &AnimationConfig) -> Self {
        Self {
            flip: config.flip_rate,
            fade: config.fade_rate,
        }
    }
}

/// The animated values of a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub phase: Phase,
    pub face: Face,
    pub scale_x: f32,
    pub base_scale: f32,
    pub alpha: f32,
}

impl Motion {
    pub fn at_rest(base_scale: f32) -> Self {
        Self {
            phase: Phase::Idle,
            face: Face::Back,
            scale_x: base_scale,
            base_scale,
            alpha: 1.0,
        }
    }

    /// Advance by `delta` frames. Scale is clamped to `[0, base_scale]` and
    /// opacity to `[0, 1]` whatever the delta.
    ///
    /// `Completed` is returned on the step that reaches zero opacity, and
    /// again for any step taken while already `Done`; the ticker drops the
    /// animation on the first one.
    pub fn step(self, delta: f32, rates: &Rates) -> (Self, Step) {
        let mut next = self;
        match self.phase {
            Phase::Idle => return (next, Step::Continue),
            Phase::Done => return (next, Step::Completed),
            Phase::FlippingOut => {
                next.scale_x = (self.scale_x - rates.flip * delta).max(0.0);
                if next.scale_x <= 0.0 {
                    next.face = Face::Front;
                    next.phase = Phase::FlippingIn;
                }
            }
            Phase::FlippingIn => {
                next.scale_x = (self.scale_x + rates.flip * delta).min(self.base_scale);
                if next.scale_x >= self.base_scale {
                    next.phase = Phase::FadingOut;
                }
            }
            Phase::FadingOut => {
                next.alpha = (self.alpha - rates.fade * delta).max(0.0);
                if next.alpha <= 0.0 {
                    next.phase = Phase::Done;
                    return (next, Step::Completed);
                }
            }
        }
        (next, Step::Continue)
    }

    /// Horizontal scale relative to the resting scale, in `[0, 1]`.
    pub fn width_fraction(&self) -> f32 {
        if self.base_scale <= 0.0 {
            return 0.0;
        }
        (self.scale_x / self.base_scale).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Started,
    AlreadyRevealed,
}

#[derive(Debug, Clone)]
pub struct CardView {
    key: String,
    motion: Motion,
    revealed: bool,
    /// Centre of the card in terminal cells.
    pub x: i32,
    pub y: i32,
}

impl CardView {
    pub fn new(key: impl Into<String>, base_scale: f32) -> Self {
        Self {
            key: key.into(),
            motion: Motion::at_rest(base_scale),
            revealed: false,
            x: 0,
            y: 0,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn face(&self) -> Face {
        self.motion.face
    }

    #[cfg(test)]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_visible(&self) -> bool {
        self.motion.phase != Phase::Done
    }

    /// Start the reveal animation. A card only ever animates once; later
    /// calls report `AlreadyRevealed` and leave the card untouched.
    pub fn reveal(&mut self) -> Reveal {
        if self.revealed {
            return Reveal::AlreadyRevealed;
        }
        self.revealed = true;
        self.motion.phase = Phase::FlippingOut;
        Reveal::Started
    }

    pub fn step(&mut self, delta: f32, rates: &Rates) -> Step {
        let (motion, step) = self.motion.step(delta, rates);
        self.motion = motion;
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(card: &mut CardView, delta: f32) -> (Vec<Phase>, usize) {
        let rates = Rates::default();
        let base = card.motion().base_scale;
        let mut phases = vec![card.motion().phase];
        let mut steps = 0;
        loop {
            let step = card.step(delta, &rates);
            steps += 1;
            let m = card.motion();
            assert!(m.scale_x >= 0.0, "scale went negative: {}", m.scale_x);
            assert!(m.scale_x <= base, "scale overshot: {}", m.scale_x);
            assert!(m.alpha >= 0.0 && m.alpha <= 1.0, "alpha out of range: {}", m.alpha);
            if phases.last() != Some(&m.phase) {
                phases.push(m.phase);
            }
            if step == Step::Completed {
                return (phases, steps);
            }
            assert!(steps < 10_000, "animation never completed");
        }
    }

    #[test]
    fn test_idle_card_does_not_move() {
        let rates = Rates::default();
        let (motion, step) = Motion::at_rest(0.5).step(5.0, &rates);
        assert_eq!(step, Step::Continue);
        assert_eq!(motion, Motion::at_rest(0.5));
    }

    #[test]
    fn test_reveal_runs_every_phase() {
        let mut card = CardView::new("ace_of_spades", 0.5);
        assert_eq!(card.reveal(), Reveal::Started);
        let (phases, _) = run_to_completion(&mut card, 1.0);
        assert_eq!(
            phases,
            vec![
                Phase::FlippingOut,
                Phase::FlippingIn,
                Phase::FadingOut,
                Phase::Done
            ]
        );
        assert_eq!(card.face(), Face::Front);
        assert!(!card.is_visible());
        assert_eq!(card.motion().alpha, 0.0);
    }

    #[test]
    fn test_clamping_for_any_delta() {
        for delta in [0.5, 1.0, 5.0] {
            let mut card = CardView::new("k", 0.5);
            card.reveal();
            run_to_completion(&mut card, delta);
            assert_eq!(card.motion().scale_x, 0.5);
        }
    }

    #[test]
    fn test_duration_is_frame_rate_independent() {
        // 0.5 / 0.1 frames out, the same back in, 1 / 0.02 frames of fade.
        let mut fine = CardView::new("k", 0.5);
        fine.reveal();
        let (_, fine_steps) = run_to_completion(&mut fine, 0.5);

        let mut coarse = CardView::new("k", 0.5);
        coarse.reveal();
        let (_, coarse_steps) = run_to_completion(&mut coarse, 1.0);

        let fine_frames = fine_steps as f32 * 0.5;
        let coarse_frames = coarse_steps as f32;
        assert!((58.0..=64.0).contains(&fine_frames), "{fine_frames}");
        assert!((58.0..=64.0).contains(&coarse_frames), "{coarse_frames}");
    }

    #[test]
    fn test_face_swaps_at_flip_floor() {
        let rates = Rates::default();
        let mut motion = Motion::at_rest(0.5);
        motion.phase = Phase::FlippingOut;
        let (motion, _) = motion.step(4.0, &rates);
        assert_eq!(motion.face, Face::Back);
        let (motion, _) = motion.step(4.0, &rates);
        assert_eq!(motion.face, Face::Front);
        assert_eq!(motion.phase, Phase::FlippingIn);
        assert_eq!(motion.scale_x, 0.0);
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let rates = Rates::default();
        let mut card = CardView::new("k", 0.5);
        assert_eq!(card.reveal(), Reveal::Started);
        card.step(1.0, &rates);
        let mid_flip = *card.motion();

        assert_eq!(card.reveal(), Reveal::AlreadyRevealed);
        assert_eq!(*card.motion(), mid_flip);
    }

    #[test]
    fn test_done_keeps_reporting_completed() {
        let rates = Rates::default();
        let mut card = CardView::new("k", 0.5);
        card.reveal();
        run_to_completion(&mut card, 5.0);
        assert_eq!(card.step(1.0, &rates), Step::Completed);
        assert_eq!(card.motion().phase, Phase::Done);
    }

    #[test]
    fn test_width_fraction() {
        let mut motion = Motion::at_rest(0.5);
        assert_eq!(motion.width_fraction(), 1.0);
        motion.scale_x = 0.25;
        assert_eq!(motion.width_fraction(), 0.5);
    }
}
