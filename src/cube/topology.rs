//! Face adjacency of the cube and the remapping of a cell that walks off
//! the edge of its face onto the neighbouring face
//!
//! The mapping is an explicit table with one entry per face and direction.
//! Every entry keeps the coordinate parallel to the crossed edge and resets
//! the other one to the edge the snake enters through, so the visible path
//! stays continuous across the seam.

use crate::basic::{Axis, Cell, Dir, Face, GridSize};
use itertools::iproduct;
use std::f32::consts::FRAC_PI_2;
use std::ops::Neg;

/// Which end of an axis a cell enters a face through
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Edge {
    /// Coordinate 0
    Min,
    /// Coordinate N - 1
    Max,
}

impl Edge {
    /// The edge a cell enters through when it keeps moving in `dir`
    pub fn entered_moving(dir: Dir) -> Self {
        match dir {
            Dir::U | Dir::R => Edge::Min,
            Dir::D | Dir::L => Edge::Max,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Entry {
    /// The coordinate that is reset, the other one is carried over
    pub axis: Axis,
    pub edge: Edge,
}

/// A visual re-orientation of the cube by a whole number of quarter turns
/// about the world X or Y axis
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct RotationDelta {
    pub axis: Axis,
    pub quarter_turns: i8,
}

impl RotationDelta {
    pub const fn about(axis: Axis, quarter_turns: i8) -> Self {
        Self { axis, quarter_turns }
    }

    pub fn radians(self) -> f32 {
        self.quarter_turns as f32 * FRAC_PI_2
    }
}

impl Neg for RotationDelta {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { quarter_turns: -self.quarter_turns, ..self }
    }
}

/// One entry of the adjacency table
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Link {
    pub to: Face,
    pub entry: Entry,
    pub rotation: RotationDelta,
}

/// Indexed by `[face.index()][dir.index()]`
pub type AdjacencyTable = [[Link; Dir::COUNT]; Face::COUNT];

#[derive(Copy, Clone, Eq, PartialEq, Debug, Display, Error)]
pub enum TopologyError {
    #[display(fmt = "grid size must be positive, got {}", size)]
    GridSize { size: GridSize },
    #[display(fmt = "{} going {:?} must reset the {:?} coordinate", face, dir, expected)]
    EntryAxis { face: Face, dir: Dir, expected: Axis },
    #[display(fmt = "{} going {:?} must enter through the {:?} edge", face, dir, expected)]
    EntryEdge { face: Face, dir: Dir, expected: Edge },
    #[display(fmt = "{} going {:?} must rotate about {:?}", face, dir, expected)]
    RotationAxis { face: Face, dir: Dir, expected: Axis },
    #[display(fmt = "{} going {:?} rotates by {} quarter turns instead of one", face, dir, quarter_turns)]
    RotationSize { face: Face, dir: Dir, quarter_turns: i8 },
    #[display(fmt = "{} going {:?} and {:?} must rotate in opposite senses", face, dir, opposite)]
    RotationSense { face: Face, dir: Dir, opposite: Dir },
    #[display(fmt = "{} going {:?} leads back onto itself", face, dir)]
    SelfLoop { face: Face, dir: Dir },
}

const fn link(to: Face, dir: Dir) -> Link {
    // entry edge and rotation only depend on the direction of travel,
    // the destination face is what differs per entry
    let (entry, rotation) = match dir {
        Dir::R => (Entry { axis: Axis::X, edge: Edge::Min }, RotationDelta::about(Axis::Y, -1)),
        Dir::L => (Entry { axis: Axis::X, edge: Edge::Max }, RotationDelta::about(Axis::Y, 1)),
        Dir::U => (Entry { axis: Axis::Y, edge: Edge::Min }, RotationDelta::about(Axis::X, 1)),
        Dir::D => (Entry { axis: Axis::Y, edge: Edge::Max }, RotationDelta::about(Axis::X, -1)),
    };
    Link { to, entry, rotation }
}

/// Row order follows [`Face`], column order follows [`Dir`] (U, D, L, R)
#[rustfmt::skip]
pub const CUBE_ADJACENCY: AdjacencyTable = {
    use Dir::*;
    use Face::*;
    [
        /* Front  */ [link(Top, U),   link(Bottom, D), link(Left, L),  link(Right, R)],
        /* Back   */ [link(Top, U),   link(Bottom, D), link(Right, L), link(Left, R)],
        /* Right  */ [link(Top, U),   link(Bottom, D), link(Front, L), link(Back, R)],
        /* Left   */ [link(Top, U),   link(Bottom, D), link(Back, L),  link(Front, R)],
        /* Top    */ [link(Back, U),  link(Front, D),  link(Left, L),  link(Right, R)],
        /* Bottom */ [link(Front, U), link(Back, D),   link(Left, L),  link(Right, R)],
    ]
};

impl Link {
    /// Check that this entry is a well-formed crossing out of `face` going `dir`
    pub fn check(&self, face: Face, dir: Dir) -> Result<(), TopologyError> {
        if self.to == face {
            return Err(TopologyError::SelfLoop { face, dir });
        }
        if self.entry.axis != dir.axis() {
            return Err(TopologyError::EntryAxis { face, dir, expected: dir.axis() });
        }
        let expected_edge = Edge::entered_moving(dir);
        if self.entry.edge != expected_edge {
            return Err(TopologyError::EntryEdge { face, dir, expected: expected_edge });
        }
        // moving horizontally spins the cube about the vertical axis and vice versa
        let expected_axis = match dir.axis() {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        };
        if self.rotation.axis != expected_axis {
            return Err(TopologyError::RotationAxis { face, dir, expected: expected_axis });
        }
        if self.rotation.quarter_turns.abs() != 1 {
            return Err(TopologyError::RotationSize {
                face,
                dir,
                quarter_turns: self.rotation.quarter_turns,
            });
        }
        Ok(())
    }
}

/// Result of walking off the edge of a face
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Crossing {
    pub cell: Cell,
    pub rotation: RotationDelta,
}

#[derive(Clone, Debug)]
pub struct CubeTopology {
    grid_size: GridSize,
    table: AdjacencyTable,
}

impl CubeTopology {
    pub fn new(grid_size: GridSize) -> Result<Self, TopologyError> {
        Self::with_table(grid_size, CUBE_ADJACENCY)
    }

    /// Build a topology from an explicit table, every entry is validated
    pub fn with_table(grid_size: GridSize, table: AdjacencyTable) -> Result<Self, TopologyError> {
        if grid_size <= 0 {
            return Err(TopologyError::GridSize { size: grid_size });
        }

        for (face, dir) in iproduct!(Face::iter(), Dir::iter()) {
            table[face.index()][dir.index()].check(face, dir)?;
        }

        // only once every entry is well-formed on its own, otherwise a
        // broken entry would be blamed on its opposite
        for (face, dir) in iproduct!(Face::iter(), Dir::iter()) {
            let link = table[face.index()][dir.index()];
            let opposite = table[face.index()][(-dir).index()];
            if opposite.rotation != -link.rotation {
                return Err(TopologyError::RotationSense { face, dir, opposite: -dir });
            }
        }

        Ok(Self { grid_size, table })
    }

    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    pub fn link(&self, face: Face, dir: Dir) -> Link {
        self.table[face.index()][dir.index()]
    }

    /// Move `from` across the edge of its face in direction `dir`
    ///
    /// `from` is the last cell on the old face (or the out-of-bounds cell
    /// one step past it, the carried-over coordinate is the same)
    pub fn cross(&self, from: Cell, dir: Dir) -> Crossing {
        let link = self.link(from.face, dir);
        if let Err(e) = link.check(from.face, dir) {
            panic!("malformed adjacency entry {:?}: {}", link, e);
        }

        let max = self.grid_size - 1;
        let reset = match link.entry.edge {
            Edge::Min => 0,
            Edge::Max => max,
        };

        // only out of range if the table were wrong, `check` already ruled that out
        let carried = |coord: isize| {
            debug_assert!((0..=max).contains(&coord), "carried coordinate {} out of range", coord);
            coord.clamp(0, max)
        };

        let cell = match link.entry.axis {
            Axis::X => Cell { face: link.to, x: reset, y: carried(from.y) },
            Axis::Y => Cell { face: link.to, x: carried(from.x), y: reset },
        };

        Crossing { cell, rotation: link.rotation }
    }

    /// One step from `from` in direction `dir`, crossing onto the
    /// neighbouring face if necessary
    pub fn step(&self, from: Cell, dir: Dir) -> (Cell, Option<RotationDelta>) {
        let next = from.translate(dir);
        if next.in_bounds(self.grid_size) {
            (next, None)
        } else {
            let Crossing { cell, rotation } = self.cross(from, dir);
            (cell, Some(rotation))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::board::all_cells;
    use itertools::iproduct;

    const N: GridSize = 4;

    fn topology() -> CubeTopology {
        CubeTopology::new(N).unwrap()
    }

    /// The last in-bounds cell before leaving `face` in direction `dir`
    fn exit_cells(face: Face, dir: Dir) -> Vec<Cell> {
        all_cells(N)
            .filter(|cell| cell.face == face && !cell.translate(dir).in_bounds(N))
            .collect()
    }

    #[test]
    fn test_canonical_table_is_valid() {
        assert!(CubeTopology::with_table(N, CUBE_ADJACENCY).is_ok());
    }

    #[test]
    fn test_totality() {
        let topology = topology();
        for (face, dir) in iproduct!(Face::iter(), Dir::iter()) {
            let exits = exit_cells(face, dir);
            assert_eq!(exits.len(), N as usize, "{:?} {:?}", face, dir);
            for from in exits {
                let Crossing { cell, .. } = topology.cross(from, dir);
                assert!(cell.in_bounds(N), "{:?} going {:?} landed on {:?}", from, dir, cell);
                assert_ne!(cell.face, face);
            }
        }
    }

    #[test]
    fn test_continuity() {
        let topology = topology();
        for (face, dir) in iproduct!(Face::iter(), Dir::iter()) {
            for from in exit_cells(face, dir) {
                let Crossing { cell, .. } = topology.cross(from, dir);
                match dir.axis() {
                    // crossed a vertical edge, the row is kept
                    Axis::X => assert_eq!(cell.y, from.y, "{:?} going {:?}", from, dir),
                    // crossed a horizontal edge, the column is kept
                    Axis::Y => assert_eq!(cell.x, from.x, "{:?} going {:?}", from, dir),
                }
            }
        }
    }

    #[test]
    fn test_entry_edge() {
        let topology = topology();
        for (from, dir, expected) in [
            (Cell::new(Face::Front, 3, 2), Dir::R, Cell::new(Face::Right, 0, 2)),
            (Cell::new(Face::Front, 0, 1), Dir::L, Cell::new(Face::Left, 3, 1)),
            (Cell::new(Face::Front, 1, 3), Dir::U, Cell::new(Face::Top, 1, 0)),
            (Cell::new(Face::Front, 2, 0), Dir::D, Cell::new(Face::Bottom, 2, 3)),
            (Cell::new(Face::Right, 3, 0), Dir::R, Cell::new(Face::Back, 0, 0)),
            (Cell::new(Face::Back, 3, 3), Dir::R, Cell::new(Face::Left, 0, 3)),
            (Cell::new(Face::Top, 2, 3), Dir::U, Cell::new(Face::Back, 2, 0)),
            (Cell::new(Face::Bottom, 0, 0), Dir::D, Cell::new(Face::Back, 0, 3)),
        ] {
            assert_eq!(topology.cross(from, dir).cell, expected, "{:?} going {:?}", from, dir);
        }
    }

    #[test]
    fn test_rotation_delta() {
        let topology = topology();
        let crossing = topology.cross(Cell::new(Face::Front, 3, 2), Dir::R);
        assert_eq!(crossing.rotation.axis, Axis::Y);
        assert_eq!(crossing.rotation.quarter_turns.abs(), 1);
        assert!((crossing.rotation.radians().abs() - FRAC_PI_2).abs() < f32::EPSILON);

        for (face, dir) in iproduct!(Face::iter(), Dir::iter()) {
            let rotation = topology.link(face, dir).rotation;
            assert_eq!(rotation, -topology.link(face, -dir).rotation, "{:?} {:?}", face, dir);
        }
    }

    #[test]
    fn test_horizontal_ring() {
        // going right four times around the equator returns to the start
        let topology = topology();
        let mut cell = Cell::new(Face::Front, 3, 1);
        let mut faces = vec![];
        for _ in 0..4 {
            cell = topology.cross(cell, Dir::R).cell;
            faces.push(cell.face);
            cell.x = N - 1;
        }
        assert_eq!(faces, [Face::Right, Face::Back, Face::Left, Face::Front]);
    }

    #[test]
    fn test_step_stays_on_face() {
        let topology = topology();
        let (cell, rotation) = topology.step(Cell::new(Face::Left, 1, 1), Dir::U);
        assert_eq!(cell, Cell::new(Face::Left, 1, 2));
        assert_eq!(rotation, None);

        let (cell, rotation) = topology.step(Cell::new(Face::Left, 1, 3), Dir::U);
        assert_eq!(cell, Cell::new(Face::Top, 1, 0));
        assert_eq!(rotation, Some(RotationDelta::about(Axis::X, 1)));
    }

    #[test]
    fn test_malformed_tables_are_rejected() {
        let front = Face::Front.index();
        let right = Dir::R.index();

        let mut table = CUBE_ADJACENCY;
        table[front][right].entry.axis = Axis::Y;
        assert_eq!(
            CubeTopology::with_table(N, table).unwrap_err(),
            TopologyError::EntryAxis { face: Face::Front, dir: Dir::R, expected: Axis::X },
        );

        let mut table = CUBE_ADJACENCY;
        table[front][right].entry.edge = Edge::Max;
        assert!(matches!(
            CubeTopology::with_table(N, table),
            Err(TopologyError::EntryEdge { .. })
        ));

        let mut table = CUBE_ADJACENCY;
        table[front][right].to = Face::Front;
        assert!(matches!(
            CubeTopology::with_table(N, table),
            Err(TopologyError::SelfLoop { .. })
        ));

        let mut table = CUBE_ADJACENCY;
        table[front][right].rotation = RotationDelta::about(Axis::X, -1);
        assert!(matches!(
            CubeTopology::with_table(N, table),
            Err(TopologyError::RotationAxis { .. })
        ));

        let mut table = CUBE_ADJACENCY;
        table[front][right].rotation.quarter_turns = -2;
        assert!(matches!(
            CubeTopology::with_table(N, table),
            Err(TopologyError::RotationSize { .. })
        ));

        let mut table = CUBE_ADJACENCY;
        table[front][right].rotation.quarter_turns = 1;
        assert!(matches!(
            CubeTopology::with_table(N, table),
            Err(TopologyError::RotationSense { .. })
        ));

        assert_eq!(
            CubeTopology::new(0).unwrap_err(),
            TopologyError::GridSize { size: 0 }
        );
    }

    #[test]
    fn test_error_names_the_broken_entry() {
        // Front/R is validated after Front/L, which is its opposite
        let mut table = CUBE_ADJACENCY;
        table[Face::Front.index()][Dir::R.index()].rotation = RotationDelta::about(Axis::X, -1);
        assert_eq!(
            CubeTopology::with_table(N, table).unwrap_err(),
            TopologyError::RotationAxis { face: Face::Front, dir: Dir::R, expected: Axis::Y },
        );

        let mut table = CUBE_ADJACENCY;
        table[Face::Bottom.index()][Dir::R.index()].rotation.quarter_turns = 2;
        assert_eq!(
            CubeTopology::with_table(N, table).unwrap_err(),
            TopologyError::RotationSize { face: Face::Bottom, dir: Dir::R, quarter_turns: 2 },
        );
    }
}
