use std::collections::VecDeque;

pub use builder::{Builder, BuilderError};

use crate::basic::{Cell, Dir};
use crate::cube::{CubeTopology, RotationDelta};

pub mod builder;

/// Where the head would go on the next tick
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Advance {
    pub cell: Cell,
    /// Set when the move crosses onto another face
    pub rotation: Option<RotationDelta>,
}

/// Ordered cells of the snake, head first
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// A snake made of exactly these cells, head first, without any of
    /// the checks [`Builder`] performs
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let body: VecDeque<_> = cells.into_iter().collect();
        assert!(!body.is_empty(), "a snake needs at least a head");
        Self { body }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    /// Compute the next head position without touching the body
    pub fn advance_head(&self, dir: Dir, topology: &CubeTopology) -> Advance {
        let (cell, rotation) = topology.step(self.head(), dir);
        Advance { cell, rotation }
    }

    /// Add a new head, the tail stays when `grow` is set
    pub fn push_head(&mut self, cell: Cell, grow: bool) {
        self.body.push_front(cell);
        if !grow {
            self.body.pop_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::Face;

    #[test]
    fn test_advance_head_does_not_mutate() {
        let topology = CubeTopology::new(4).unwrap();
        let snake = Snake::from_cells([Cell::new(Face::Front, 3, 2), Cell::new(Face::Front, 2, 2)]);
        let before = snake.clone();

        let advance = snake.advance_head(Dir::R, &topology);
        assert_eq!(advance.cell, Cell::new(Face::Right, 0, 2));
        assert!(advance.rotation.is_some());
        assert_eq!(snake, before);
    }

    #[test]
    fn test_push_head() {
        let mut snake = Snake::from_cells([Cell::new(Face::Top, 1, 1), Cell::new(Face::Top, 1, 0)]);

        snake.push_head(Cell::new(Face::Top, 1, 2), false);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Cell::new(Face::Top, 1, 2));
        assert_eq!(snake.tail(), Cell::new(Face::Top, 1, 1));

        snake.push_head(Cell::new(Face::Top, 1, 3), true);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.tail(), Cell::new(Face::Top, 1, 1));
    }
}
