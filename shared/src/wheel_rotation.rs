use rand::Rng;

use crate::constants::{MIN_SPIN_DEGREES, SPIN_JITTER_DEGREES};

/// Next rotation target: at least five full turns past `current`, plus up to
/// two more turns of jitter so the landing offset is never predictable.
pub fn next_rotation<R: Rng + ?Sized>(current: f64, rng: &mut R) -> f64 {
    let max_delta = MIN_SPIN_DEGREES + SPIN_JITTER_DEGREES;
    let mut next = current + MIN_SPIN_DEGREES + rng.gen_range(0.0..SPIN_JITTER_DEGREES);
    // The sum can round onto either bound; nudge it back inside one ulp at a time
    while next - current >= max_delta {
        next = adjacent_float(next, false);
    }
    while next - current < MIN_SPIN_DEGREES {
        next = adjacent_float(next, true);
    }
    next
}

fn adjacent_float(value: f64, up: bool) -> f64 {
    let bits = value.to_bits();
    if value == 0.0 {
        let tiny = f64::from_bits(1);
        return if up { tiny } else { -tiny };
    }
    // For negative values the bit pattern grows away from zero
    if (value > 0.0) == up {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// Accumulated wheel angle in degrees. Only ever grows, so consecutive spins
/// never animate backwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelRotation {
    degrees: f64,
}

impl WheelRotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Where the wheel visually rests, in `[0, 360)`
    pub fn resting_angle(&self) -> f64 {
        self.degrees.rem_euclid(360.0)
    }

    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        self.degrees = next_rotation(self.degrees, rng);
        self.degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_jitter_gives_exactly_five_turns() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(next_rotation(0.0, &mut rng), 1800.0);
        assert_eq!(next_rotation(123.5, &mut rng), 1923.5);
    }

    #[test]
    fn test_max_jitter_stays_below_seven_turns() {
        let mut rng = StepRng::new(u64::MAX, 0);
        let delta = next_rotation(90.0, &mut rng) - 90.0;
        assert!(delta >= 2519.0);
        assert!(delta < 2520.0);
    }

    #[test]
    fn test_upper_bound_holds_at_any_starting_angle() {
        for current in [0.0, 90.0, 123.5, 5000.0, 1e6, 1e9] {
            let mut rng = StepRng::new(u64::MAX, 0);
            let next = next_rotation(current, &mut rng);
            let delta = next - current;
            assert!(delta < 2520.0, "delta {} from {}", delta, current);
            assert!(delta >= 2519.0, "delta {} from {}", delta, current);
        }
    }

    #[test]
    fn test_lower_bound_holds_with_fractional_start() {
        for current in [0.1, 0.3, 77.7, 1e6 + 0.1] {
            let mut rng = StepRng::new(0, 0);
            let delta = next_rotation(current, &mut rng) - current;
            assert!(delta >= 1800.0, "delta {} from {}", delta, current);
            assert!(delta < 1801.0);
        }
    }

    #[test]
    fn test_adjacent_float_steps_one_ulp() {
        assert!(adjacent_float(2520.0, false) < 2520.0);
        assert!(adjacent_float(2520.0, true) > 2520.0);
        assert!(adjacent_float(-1.0, true) > -1.0);
        assert!(adjacent_float(-1.0, false) < -1.0);
        assert!(adjacent_float(0.0, true) > 0.0);
    }

    #[test]
    fn test_delta_bounds_hold_for_random_draws() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut previous = 0.0;
        for _ in 0..1000 {
            let next = next_rotation(previous, &mut rng);
            let delta = next - previous;
            assert!(delta >= 1800.0, "delta {} too small", delta);
            assert!(delta < 2520.0, "delta {} too large", delta);
            previous = next;
        }
    }

    #[test]
    fn test_rotation_accumulates_without_reset() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut rotation = WheelRotation::new();
        let mut last = rotation.degrees();
        for _ in 0..10 {
            let next = rotation.advance(&mut rng);
            assert!(next > last);
            assert!(rotation.resting_angle() < 360.0);
            last = next;
        }
        assert!(rotation.degrees() >= 18000.0);
    }
}
