use std::collections::{HashMap, HashSet, VecDeque};

use crate::basic::{Cell, Dir};
use crate::cube::CubeTopology;
use crate::snake::Snake;
use crate::snake_control::Controller;

/// Steers towards the food along a shortest path found by a breadth-first
/// search over the cube surface
///
/// The search state is a cell together with the direction it was entered
/// from: face adjacency is not symmetric (going up from the top face and
/// then down again doesn't lead back) so the no-reversal rule has to be
/// tracked per step instead of per cell.
pub struct Autopilot;

/// (cell, direction it was entered with)
type SearchPoint = (Cell, Dir);

impl Autopilot {
    /// First direction of a shortest path from the head to `target`
    pub fn path_start(snake: &Snake, dir: Dir, target: Cell, topology: &CubeTopology) -> Option<Dir> {
        let off_limits: HashSet<Cell> = snake.iter().copied().collect();

        // first step of the path that reached each search point
        let mut first_dir: HashMap<SearchPoint, Dir> = HashMap::new();
        let mut queue = VecDeque::new();
        queue.push_back(((snake.head(), dir), None));

        while let Some(((cell, last_dir), first)) = queue.pop_front() {
            for next_dir in Dir::iter().filter(|&d| d != -last_dir) {
                let (next, _) = topology.step(cell, next_dir);
                let point = (next, next_dir);
                if off_limits.contains(&next) || first_dir.contains_key(&point) {
                    continue;
                }

                let first = first.unwrap_or(next_dir);
                if next == target {
                    return Some(first);
                }
                first_dir.insert(point, first);
                queue.push_back((point, Some(first)));
            }
        }

        None
    }

    /// Any direction that doesn't run into the snake on the next tick
    pub fn safe_dir(snake: &Snake, dir: Dir, topology: &CubeTopology) -> Option<Dir> {
        Dir::iter()
            .filter(|&d| d != -dir)
            // prefer going straight
            .min_by_key(|&d| d != dir)
            .filter(|&d| !snake.contains(topology.step(snake.head(), d).0))
            .or_else(|| {
                Dir::iter()
                    .filter(|&d| d != -dir)
                    .find(|&d| !snake.contains(topology.step(snake.head(), d).0))
            })
    }
}

impl Controller for Autopilot {
    fn next_dir(&mut self, snake: &Snake, dir: Dir, food: Option<Cell>, topology: &CubeTopology) -> Option<Dir> {
        let path = food.and_then(|target| Self::path_start(snake, dir, target, topology));
        let next = path.or_else(|| Self::safe_dir(snake, dir, topology));
        if next.is_none() {
            log::warn!("autopilot: no safe move from {:?}", snake.head());
        }
        next
    }
}
