//! The per-tick simulation step: move the snake, detect collisions,
//! eat food and keep the cube orientation in sync with face crossings

use rand::Rng;

use crate::app::control::Control;
use crate::basic::{Cell, Dir};
use crate::cube::{CubeTopology, Orientation};
use crate::food::place_food;
use crate::snake::{Advance, Snake};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Continued,
    Ate,
    Collided,
    /// Food was eaten and no free cell is left for the next one
    Won,
}

/// Everything a tick mutates apart from the clock
#[derive(Clone, Debug)]
pub struct World {
    pub snake: Snake,
    /// Only `None` once the board is full
    pub food: Option<Cell>,
    pub orientation: Orientation,
    /// Food eaten so far
    pub score: usize,
}

/// Advance the game by one step in direction `dir`
///
/// `dir` must not be the reverse of the previously applied direction,
/// [`InputBuffer`](crate::snake_control::InputBuffer) guarantees that.
/// The candidate head is checked against the body as it was before the
/// move, the tail included, and a collision leaves the world untouched.
pub fn tick(
    world: &mut World,
    control: &mut Control,
    topology: &CubeTopology,
    dir: Dir,
    max_food_attempts: usize,
    rng: &mut impl Rng,
) -> Outcome {
    let Advance { cell, rotation } = world.snake.advance_head(dir, topology);

    if world.snake.contains(cell) {
        log::info!("game over, snake ran into itself at {:?} with length {}", cell, world.snake.len());
        control.game_over();
        return Outcome::Collided;
    }

    if let Some(rotation) = rotation {
        log::debug!("crossed onto {:?}, rotating {:?}", cell.face, rotation);
        world.orientation.apply(rotation);
    }

    let ate = world.food == Some(cell);
    world.snake.push_head(cell, ate);
    if !ate {
        return Outcome::Continued;
    }

    world.score += 1;
    control.speed_up();
    world.food = place_food(&world.snake, topology.grid_size(), max_food_attempts, rng);

    match world.food {
        Some(_) => Outcome::Ate,
        None => {
            log::info!("board is full, won with length {}", world.snake.len());
            control.won();
            Outcome::Won
        }
    }
}
