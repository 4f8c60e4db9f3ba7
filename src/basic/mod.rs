pub use cell::{Cell, GridSize};
pub use dir::{Axis, Dir};
pub use face::{Face, InvalidFace};

pub mod board;
mod cell;
mod dir;
mod face;

/// Elapsed wall-clock time in milliseconds
pub type Millis = f64;
