use crate::basic::{Cell, Face};
use crate::color::Color;
use crate::cube::Rotation;

/// Read-only description of one frame, all a renderer needs to draw the
/// cube. Face basis vectors are left to the renderer, cells are given as
/// face index plus local (x, y).
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub grid_size: isize,
    /// Head first
    pub snake: Vec<Cell>,
    pub food: Option<Cell>,
    /// Indexed by [`Face::index`]
    pub face_colors: [Color; Face::COUNT],
    pub grid_color: Color,
    pub snake_color: Color,
    pub food_color: Color,
    pub background_color: Color,
    pub rotation: Rotation,
    pub paused: bool,
    pub game_over: bool,
    pub won: bool,
    pub score: usize,
    pub tick_interval_ms: u32,
}

impl Scene {
    pub fn cells_on(&self, face: Face) -> impl Iterator<Item = Cell> + '_ {
        self.snake.iter().copied().filter(move |cell| cell.face == face)
    }
}
