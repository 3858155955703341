use rand::Rng;
use std::f64::consts::TAU;

// Constants for the wheel animation
pub const WHEEL_SEGMENTS: usize = 4; // Visual wedges, independent of catalog size
pub const SPIN_DURATION_MS: f64 = 4500.0; // Duration of spin animation in milliseconds
pub const MIN_EXTRA_TURNS: f64 = 5.0; // Minimum number of full rotations per spin
pub const MAX_EXTRA_TURNS: f64 = 8.0; // Exclusive upper bound on full rotations
pub const WHEEL_SIZE: u32 = 340; // Logical canvas size in pixels

/// Quartic ease-out used for the spin deceleration: 1 - (1-t)^4.
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

/// An in-flight spin. Fixed at `start_spin` time; `advance` only interpolates.
#[derive(Debug, Clone, PartialEq)]
struct ActiveSpin {
    started_at: f64,
    start_rotation: f64,
    target_rotation: f64,
    chosen_index: usize,
}

/// One frame of the spin animation, produced by [`SpinWheel::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    /// No spin in flight.
    Idle,
    Animating { rotation: f64 },
    /// Terminal frame. Delivered exactly once per spin; `rotation` is the
    /// exact target computed at `start_spin` time.
    Done { rotation: f64, chosen_index: usize },
}

/// The spin engine. Owns the wheel rotation and drives the animated
/// transition to a randomly chosen target angle.
///
/// The engine is clock-driven: the caller supplies `now` timestamps
/// (milliseconds, any monotonic wall clock) to `start_spin` and `advance`,
/// so the easing math is independent of the scheduling environment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpinWheel {
    rotation: f64,
    spinning: bool,
    hovered: bool,
    wobble_phase: f64,
    active: Option<ActiveSpin>,
}

impl SpinWheel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current rotation in radians. Unbounded; never normalized.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    /// Target angle of the in-flight spin, if any.
    pub fn target_rotation(&self) -> Option<f64> {
        self.active.as_ref().map(|a| a.target_rotation)
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Starts a spin: draws a uniform question index, maps it to one of the
    /// four visual segments, and computes the target angle that centers that
    /// segment under the pointer after 5-8 extra full turns.
    ///
    /// Returns `false` without touching any state when a spin is already in
    /// flight or the question list is empty. That is a UI affordance guard,
    /// not an error.
    pub fn start_spin<R: Rng>(&mut self, question_count: usize, now_ms: f64, rng: &mut R) -> bool {
        if self.spinning || question_count == 0 {
            return false;
        }
        self.spinning = true;

        let chosen_index = rng.gen_range(0..question_count);
        let extra_turns = rng.gen_range(MIN_EXTRA_TURNS..MAX_EXTRA_TURNS);

        // Questions are distributed evenly across the four visual segments.
        let segment = (chosen_index % WHEEL_SEGMENTS) as f64;
        let segment_angle = TAU / WHEEL_SEGMENTS as f64;
        let target_rotation = self.rotation
            + extra_turns * TAU
            + (TAU - segment * segment_angle - segment_angle / 2.0);

        self.active = Some(ActiveSpin {
            started_at: now_ms,
            start_rotation: self.rotation,
            target_rotation,
            chosen_index,
        });
        true
    }

    /// Advances the animation to `now`. Call once per display refresh.
    ///
    /// Progress is clamped to 1; on reaching it the rotation lands exactly on
    /// the target, the spinning flag clears, and the chosen index is yielded.
    /// A torn-down caller simply stops calling this, in which case the
    /// terminal frame is never delivered.
    pub fn advance(&mut self, now_ms: f64) -> Frame {
        let Some(active) = self.active.clone() else {
            return Frame::Idle;
        };

        let progress = ((now_ms - active.started_at) / SPIN_DURATION_MS).clamp(0.0, 1.0);
        if progress < 1.0 {
            let eased = ease_out_quart(progress);
            self.rotation =
                active.start_rotation + (active.target_rotation - active.start_rotation) * eased;
            Frame::Animating { rotation: self.rotation }
        } else {
            self.rotation = active.target_rotation;
            self.spinning = false;
            self.active = None;
            Frame::Done { rotation: self.rotation, chosen_index: active.chosen_index }
        }
    }

    /// Small sinusoidal perturbation applied while hovered and idle, for
    /// visual liveliness. Mutates the same rotation the next spin reads as
    /// its starting angle, matching the original behavior.
    pub fn idle_wobble(&mut self) {
        if self.spinning || !self.hovered {
            return;
        }
        self.wobble_phase += 0.015;
        self.rotation += self.wobble_phase.sin() * 0.008;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run_to_completion(wheel: &mut SpinWheel, start_ms: f64) -> (usize, f64, u32) {
        let mut now = start_ms;
        let mut done_count = 0;
        let mut chosen = usize::MAX;
        let mut final_rotation = f64::NAN;
        // 16ms frames, with headroom past the fixed duration
        for _ in 0..400 {
            now += 16.0;
            match wheel.advance(now) {
                Frame::Done { rotation, chosen_index } => {
                    done_count += 1;
                    chosen = chosen_index;
                    final_rotation = rotation;
                }
                Frame::Animating { .. } | Frame::Idle => {}
            }
        }
        (chosen, final_rotation, done_count)
    }

    #[test]
    fn test_spin_completes_exactly_once_with_member_index() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut wheel = SpinWheel::new();
        assert!(wheel.start_spin(12, 1000.0, &mut rng));
        assert!(wheel.is_spinning());

        let (chosen, _, done_count) = run_to_completion(&mut wheel, 1000.0);
        assert_eq!(done_count, 1);
        assert!(chosen < 12);
        assert!(!wheel.is_spinning());
        assert_eq!(wheel.advance(99_999.0), Frame::Idle);
    }

    #[test]
    fn test_final_rotation_equals_target_exactly() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut wheel = SpinWheel::new();
        assert!(wheel.start_spin(5, 0.0, &mut rng));
        let target = wheel.target_rotation().unwrap();

        let (_, final_rotation, _) = run_to_completion(&mut wheel, 0.0);
        assert_eq!(final_rotation, target);
        assert_eq!(wheel.rotation(), target);
    }

    #[test]
    fn test_rotation_is_monotonic_during_spin() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut wheel = SpinWheel::new();
        assert!(wheel.start_spin(8, 0.0, &mut rng));

        let mut prev = wheel.rotation();
        let mut now = 0.0;
        while wheel.is_spinning() {
            now += 16.0;
            match wheel.advance(now) {
                Frame::Animating { rotation } | Frame::Done { rotation, .. } => {
                    assert!(rotation >= prev);
                    prev = rotation;
                }
                Frame::Idle => break,
            }
        }
    }

    #[test]
    fn test_spin_while_spinning_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut wheel = SpinWheel::new();
        assert!(wheel.start_spin(4, 0.0, &mut rng));
        let target = wheel.target_rotation();
        let rotation = wheel.rotation();

        assert!(!wheel.start_spin(4, 100.0, &mut rng));
        assert_eq!(wheel.target_rotation(), target);
        assert_eq!(wheel.rotation(), rotation);
        assert!(wheel.is_spinning());
    }

    #[test]
    fn test_spin_with_empty_list_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut wheel = SpinWheel::new();
        assert!(!wheel.start_spin(0, 0.0, &mut rng));
        assert!(!wheel.is_spinning());
        assert_eq!(wheel.rotation(), 0.0);
        assert_eq!(wheel.advance(5000.0), Frame::Idle);
    }

    #[test]
    fn test_single_question_always_resolves_to_it() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            let mut wheel = SpinWheel::new();
            assert!(wheel.start_spin(1, 0.0, &mut rng));
            let (chosen, _, done_count) = run_to_completion(&mut wheel, 0.0);
            assert_eq!(done_count, 1);
            assert_eq!(chosen, 0);
        }
    }

    #[test]
    fn test_chosen_index_is_uniform() {
        // Chi-square over 10 bins, df = 9: 27.88 is the 0.1% critical value.
        let mut rng = StdRng::seed_from_u64(1234);
        let bins = 10usize;
        let trials = 10_000usize;
        let mut counts = vec![0u32; bins];

        for _ in 0..trials {
            let mut wheel = SpinWheel::new();
            assert!(wheel.start_spin(bins, 0.0, &mut rng));
            let (chosen, _, _) = run_to_completion(&mut wheel, 0.0);
            counts[chosen] += 1;
        }

        let expected = trials as f64 / bins as f64;
        let chi2: f64 = counts
            .iter()
            .map(|&c| {
                let diff = c as f64 - expected;
                diff * diff / expected
            })
            .sum();
        assert!(chi2 < 27.88, "chi-square too high: {chi2}, counts: {counts:?}");
    }

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert!(ease_out_quart(0.5) > 0.5);
    }

    #[test]
    fn test_wobble_only_while_hovered_and_idle() {
        let mut wheel = SpinWheel::new();
        wheel.idle_wobble();
        assert_eq!(wheel.rotation(), 0.0);

        wheel.set_hovered(true);
        wheel.idle_wobble();
        let wobbled = wheel.rotation();
        assert_ne!(wobbled, 0.0);

        let mut rng = StdRng::seed_from_u64(5);
        assert!(wheel.start_spin(3, 0.0, &mut rng));
        wheel.idle_wobble();
        assert_eq!(wheel.rotation(), wobbled);
    }
}
