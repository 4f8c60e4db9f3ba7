use itertools::iproduct;
use rand::distributions::uniform::SampleRange;
use rand::Rng;

use crate::basic::{Cell, Face, GridSize};

/// Number of cells on all six faces
pub fn board_len(grid_size: GridSize) -> usize {
    Face::COUNT * (grid_size * grid_size) as usize
}

/// Every cell of the board, face by face, row by row
pub fn all_cells(grid_size: GridSize) -> impl Iterator<Item = Cell> {
    iproduct!(Face::iter(), 0..grid_size, 0..grid_size).map(|(face, y, x)| Cell { face, x, y })
}

/// Sorted, deduplicated linear indices of the given cells
pub fn get_occupied_cells<'a>(cells: impl IntoIterator<Item = &'a Cell>, grid_size: GridSize) -> Vec<usize> {
    let mut occupied_cells: Vec<_> = cells
        .into_iter()
        .map(|cell| cell.linear_index(grid_size))
        .collect();
    occupied_cells.sort_unstable();
    occupied_cells.dedup();
    occupied_cells
}

/// Uniformly random cell that is not in `occupied_cells`
/// (as returned by [`get_occupied_cells`]), `None` if the board is full
pub fn random_free_spot(occupied_cells: &[usize], grid_size: GridSize, rng: &mut impl Rng) -> Option<Cell> {
    let total = board_len(grid_size);
    let free_spaces = total - occupied_cells.len();
    if free_spaces == 0 {
        return None;
    }

    let mut new_idx = (0..free_spaces).sample_single(rng);
    for &idx in occupied_cells {
        if idx <= new_idx {
            new_idx += 1;
        }
    }

    assert!(new_idx < total);
    Cell::from_linear_index(new_idx, grid_size)
}
