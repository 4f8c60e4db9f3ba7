use std::f32::consts::FRAC_PI_2;

use crate::basic::Axis;
use crate::cube::RotationDelta;

/// Euler-like rotation of the cube in radians
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
}

/// Visual orientation of the cube, the target moves in whole quarter
/// turns whenever the snake crosses onto another face and the current
/// rotation follows it with exponential smoothing once per rendered frame
#[derive(Clone, Debug)]
pub struct Orientation {
    current: Rotation,
    /// Target in quarter turns, kept as integers so it is always an
    /// exact multiple of 90°
    target_x: i32,
    target_y: i32,
    smoothing: f32,
}

impl Orientation {
    pub const DEFAULT_SMOOTHING: f32 = 0.1;

    pub fn new(smoothing: f32) -> Self {
        Self {
            current: Rotation::default(),
            target_x: 0,
            target_y: 0,
            smoothing,
        }
    }

    pub fn reset(&mut self) {
        self.current = Rotation::default();
        self.target_x = 0;
        self.target_y = 0;
    }

    pub fn apply(&mut self, delta: RotationDelta) {
        match delta.axis {
            Axis::X => self.target_x += delta.quarter_turns as i32,
            Axis::Y => self.target_y += delta.quarter_turns as i32,
        }
    }

    /// Move the current rotation a fixed fraction of the way to the target
    pub fn ease(&mut self) {
        let target = self.target();
        self.current.x += (target.x - self.current.x) * self.smoothing;
        self.current.y += (target.y - self.current.y) * self.smoothing;
    }

    pub fn current(&self) -> Rotation {
        self.current
    }

    pub fn target(&self) -> Rotation {
        Rotation {
            x: self.target_x as f32 * FRAC_PI_2,
            y: self.target_y as f32 * FRAC_PI_2,
        }
    }

    /// Target as whole quarter turns about (X, Y)
    pub fn target_quarter_turns(&self) -> (i32, i32) {
        (self.target_x, self.target_y)
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SMOOTHING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_converges_without_overshoot() {
        let mut orientation = Orientation::default();
        orientation.apply(RotationDelta::about(Axis::Y, -1));
        orientation.apply(RotationDelta::about(Axis::X, 1));
        let target = orientation.target();
        assert_eq!(target, Rotation { x: FRAC_PI_2, y: -FRAC_PI_2 });

        let mut last = orientation.current();
        for _ in 0..200 {
            orientation.ease();
            let current = orientation.current();
            // monotonic towards the target on both axes
            assert!(current.x >= last.x && current.x <= target.x);
            assert!(current.y <= last.y && current.y >= target.y);
            last = current;
        }
        assert!((last.x - target.x).abs() < 1e-4);
        assert!((last.y - target.y).abs() < 1e-4);
    }

    #[test]
    fn test_first_frame_moves_by_smoothing_factor() {
        let mut orientation = Orientation::new(0.1);
        orientation.apply(RotationDelta::about(Axis::Y, 1));
        orientation.ease();
        assert!((orientation.current().y - 0.1 * FRAC_PI_2).abs() < 1e-6);
        assert_eq!(orientation.current().x, 0.);
    }

    #[test]
    fn test_reset() {
        let mut orientation = Orientation::default();
        orientation.apply(RotationDelta::about(Axis::X, -1));
        orientation.ease();
        orientation.reset();
        assert_eq!(orientation.current(), Rotation::default());
        assert_eq!(orientation.target_quarter_turns(), (0, 0));
    }
}
