use std::ops::Neg;

use rand::Rng;
use Dir::*;

/// Screen-space direction, independent of the face the snake is on
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U = 0,
    D = 1,
    L = 2,
    R = 3,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Axis {
    X, // -
    Y, // |
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            U => D,
            D => U,
            L => R,
            R => L,
        }
    }
}

impl Dir {
    pub const COUNT: usize = 4;

    pub fn iter() -> impl Iterator<Item = Self> + Clone {
        [U, D, L, R].iter().copied()
    }

    /// Index into per-direction tables
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The axis along which a step in this direction moves
    pub fn axis(self) -> Axis {
        match self {
            U | D => Axis::Y,
            L | R => Axis::X,
        }
    }

    pub fn is_opposite(self, other: Self) -> bool {
        -self == other
    }

    /// Offset of a single step in face-local coordinates, y grows upwards
    pub fn delta(self) -> (isize, isize) {
        match self {
            U => (0, 1),
            D => (0, -1),
            L => (-1, 0),
            R => (1, 0),
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        [U, D, L, R][rng.gen_range(0..Self::COUNT)]
    }
}

#[test]
fn test_opposite() {
    for (dir, opposite) in [(U, D), (D, U), (L, R), (R, L)] {
        assert_eq!(-dir, opposite, "{:?}", dir);
        assert!(dir.is_opposite(opposite));
        assert!(!dir.is_opposite(dir));
    }
}

#[test]
fn test_axis_matches_delta() {
    for dir in Dir::iter() {
        let (dx, dy) = dir.delta();
        match dir.axis() {
            Axis::X => assert!(dx != 0 && dy == 0, "{:?}", dir),
            Axis::Y => assert!(dx == 0 && dy != 0, "{:?}", dir),
        }
    }
}
