use crate::basic::{Cell, Dir};
use crate::cube::CubeTopology;
use crate::snake::Snake;

pub use autopilot::Autopilot;
pub use keyboard::{try_set_pending, InputBuffer};

mod autopilot;
mod keyboard;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Template {
    Autopilot,
}

/// Steers the snake without a player, asked once before every tick
pub trait Controller {
    /// Direction to propose for the coming tick, `None` leaves the
    /// pending direction as it is
    fn next_dir(&mut self, snake: &Snake, dir: Dir, food: Option<Cell>, topology: &CubeTopology) -> Option<Dir>;
}

impl Template {
    pub fn into_controller(self) -> Box<dyn Controller> {
        match self {
            Template::Autopilot => Box::new(Autopilot),
        }
    }
}
