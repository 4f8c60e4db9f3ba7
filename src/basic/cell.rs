use std::fmt::{Debug, Error, Formatter};

use super::{Dir, Face};

/// Side length of a face in cells
pub type GridSize = isize;

/// A grid cell on one face of the cube, `x` grows to the right
/// and `y` grows upwards in screen space when the face is in front
#[derive(Eq, PartialEq, Copy, Clone, Hash)]
pub struct Cell {
    pub face: Face,
    pub x: isize,
    pub y: isize,
}

impl Cell {
    pub const fn new(face: Face, x: isize, y: isize) -> Self {
        Self { face, x, y }
    }

    /// One step on the same face, the result may be out of bounds,
    /// crossing onto another face is handled by the topology
    #[must_use]
    pub fn translate(self, dir: Dir) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn in_bounds(self, grid_size: GridSize) -> bool {
        (0..grid_size).contains(&self.x) && (0..grid_size).contains(&self.y)
    }

    /// Position of the cell in a board enumerated face by face, row by row
    pub fn linear_index(self, grid_size: GridSize) -> usize {
        debug_assert!(self.in_bounds(grid_size), "{:?} out of bounds", self);
        (self.face.index() as isize * grid_size * grid_size + self.y * grid_size + self.x) as usize
    }

    pub fn from_linear_index(index: usize, grid_size: GridSize) -> Option<Self> {
        let face_len = (grid_size * grid_size) as usize;
        let face = u8::try_from(index / face_len).ok().and_then(|i| Face::try_from(i).ok())?;
        let rest = (index % face_len) as isize;
        Some(Self {
            face,
            x: rest % grid_size,
            y: rest / grid_size,
        })
    }
}

impl Debug for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{:?} {}, {}>", self.face, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_leaves_face_alone() {
        let cell = Cell::new(Face::Top, 0, 3);
        assert_eq!(cell.translate(Dir::U), Cell::new(Face::Top, 0, 4));
        assert_eq!(cell.translate(Dir::D), Cell::new(Face::Top, 0, 2));
        assert_eq!(cell.translate(Dir::L), Cell::new(Face::Top, -1, 3));
        assert_eq!(cell.translate(Dir::R), Cell::new(Face::Top, 1, 3));
    }

    #[test]
    fn test_in_bounds() {
        for (x, y, expected) in [(0, 0, true), (3, 3, true), (4, 0, false), (0, -1, false)] {
            assert_eq!(Cell::new(Face::Front, x, y).in_bounds(4), expected, "({}, {})", x, y);
        }
    }

    #[test]
    fn test_linear_index_covers_board() {
        let grid_size = 4;
        for index in 0..Face::COUNT * 16 {
            let cell = Cell::from_linear_index(index, grid_size).unwrap();
            assert!(cell.in_bounds(grid_size));
            assert_eq!(cell.linear_index(grid_size), index);
        }
        assert_eq!(Cell::from_linear_index(Face::COUNT * 16, grid_size), None);
    }
}
