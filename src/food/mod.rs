use rand::Rng;

use crate::basic::board::{get_occupied_cells, random_free_spot};
use crate::basic::{Cell, Face, GridSize};
use crate::snake::Snake;

/// Draw a random cell anywhere on the cube that the snake doesn't cover
///
/// Candidates are drawn uniformly and rejected while they are occupied.
/// After `max_attempts` rejections the free cells are enumerated and one
/// of them is picked uniformly instead, so a nearly full board can't stall
/// the game. Returns `None` when there is no free cell left.
pub fn place_food(snake: &Snake, grid_size: GridSize, max_attempts: usize, rng: &mut impl Rng) -> Option<Cell> {
    for _ in 0..max_attempts {
        let candidate = Cell {
            face: Face::random(rng),
            x: rng.gen_range(0..grid_size),
            y: rng.gen_range(0..grid_size),
        };
        if !snake.contains(candidate) {
            log::debug!("food placed at {:?}", candidate);
            return Some(candidate);
        }
    }

    log::warn!(
        "no free cell after {} attempts (snake length {}), enumerating free cells",
        max_attempts,
        snake.len(),
    );
    let occupied_cells = get_occupied_cells(snake.iter(), grid_size);
    random_free_spot(&occupied_cells, grid_size, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::board::all_cells;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_food_never_on_snake() {
        let mut rng = StdRng::seed_from_u64(1);
        let snake = Snake::from_cells(all_cells(4).filter(|cell| cell.face == Face::Front));
        for _ in 0..500 {
            let food = place_food(&snake, 4, 64, &mut rng).unwrap();
            assert!(!snake.contains(food), "{:?}", food);
            assert!(food.in_bounds(4));
        }
    }

    #[test]
    fn test_falls_back_to_last_free_cell() {
        let mut rng = StdRng::seed_from_u64(2);
        let last = Cell::new(Face::Left, 3, 0);
        let snake = Snake::from_cells(all_cells(4).filter(|&cell| cell != last));
        // zero attempts forces the enumeration path
        assert_eq!(place_food(&snake, 4, 0, &mut rng), Some(last));
        assert_eq!(place_food(&snake, 4, 3, &mut rng), Some(last));
    }

    #[test]
    fn test_full_board() {
        let mut rng = StdRng::seed_from_u64(3);
        let snake = Snake::from_cells(all_cells(4));
        assert_eq!(place_food(&snake, 4, 100, &mut rng), None);
    }
}
