//! Bouncing offset driving the animated triangle

/// Horizontal offset that bounces between -1 and 1
///
/// The direction flips only after the bound has been crossed, so `x` may
/// overshoot a bound by at most one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    x: f32,
    direction: f32,
    step: f32,
}

impl Offset {
    /// Upper bound
    pub const MAX: f32 = 1.0;
    /// Lower bound
    pub const MIN: f32 = -1.0;

    /// Start at zero moving in the positive direction
    ///
    /// `step` must be finite and positive, as checked by
    /// [`DemoConfig::validate`](crate::config::DemoConfig::validate).
    pub fn new(step: f32) -> Self {
        Self {
            x: 0.0,
            direction: 1.0,
            step,
        }
    }

    /// Advance one frame and return the new value
    pub fn advance(&mut self) -> f32 {
        if self.x > Self::MAX {
            self.direction = -1.0;
        } else if self.x < Self::MIN {
            self.direction = 1.0;
        }
        self.x += self.direction * self.step;
        self.x
    }

    /// Current value
    pub fn value(&self) -> f32 {
        self.x
    }

    /// Current direction, `1.0` or `-1.0`
    pub fn direction(&self) -> f32 {
        self.direction
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self::new(0.01)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_first_frame_moves_positive() {
        let mut offset = Offset::default();
        assert_relative_eq!(offset.advance(), 0.01, epsilon = EPSILON);
        assert_relative_eq!(offset.direction(), 1.0);
    }

    #[test]
    fn test_stays_within_one_step_of_bounds() {
        let mut offset = Offset::default();
        for _ in 0..2000 {
            let x = offset.advance();
            assert!(x <= Offset::MAX + 0.01 + EPSILON, "x = {x}");
            assert!(x >= Offset::MIN - 0.01 - EPSILON, "x = {x}");
        }
    }

    #[test]
    fn test_flips_direction_after_crossing_upper_bound() {
        let mut offset = Offset::default();
        while offset.value() <= Offset::MAX {
            offset.advance();
        }
        let peak = offset.value();
        let next = offset.advance();
        assert_relative_eq!(offset.direction(), -1.0);
        assert!(next < peak);
    }

    #[test]
    fn test_flips_direction_after_crossing_lower_bound() {
        let mut offset = Offset::default();
        while offset.direction() > 0.0 {
            offset.advance();
        }
        while offset.value() >= Offset::MIN {
            offset.advance();
        }
        let trough = offset.value();
        let next = offset.advance();
        assert_relative_eq!(offset.direction(), 1.0);
        assert!(next > trough);
    }

    #[test]
    fn test_large_step_stays_within_one_step_of_bounds() {
        let step = 0.25;
        let mut offset = Offset::new(step);
        for _ in 0..200 {
            let x = offset.advance();
            assert!(x <= Offset::MAX + step + EPSILON, "x = {x}");
            assert!(x >= Offset::MIN - step - EPSILON, "x = {x}");
        }
    }
}
