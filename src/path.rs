use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use itertools::Itertools;

use crate::cell::{CellIndex, CellState};
use crate::pathing_grid::Grid;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Walks predecessor links back from `goal`. The result runs goal to start and includes both; it
/// is empty when `goal` has no predecessor.
pub fn reconstruct(predecessors: &FxIndexMap<CellIndex, CellIndex>, goal: CellIndex) -> Vec<CellIndex> {
    if !predecessors.contains_key(&goal) {
        return Vec::new();
    }
    // Costs strictly decrease along predecessor links, so the walk ends; the bound only guards
    // against a corrupted map.
    std::iter::successors(Some(goal), |cell| predecessors.get(cell).copied())
        .take(predecessors.len() + 1)
        .collect()
}

/// Marks every cell strictly between the two ends of `path` as [CellState::Path].
pub fn mark_path(grid: &mut Grid, path: &[CellIndex]) {
    if path.len() > 2 {
        for &cell in &path[1..path.len() - 1] {
            grid.set_state(cell, CellState::Path);
        }
    }
}

/// Number of moves along a path.
pub fn path_steps(path: &[CellIndex]) -> usize {
    path.len().saturating_sub(1)
}

/// Whether every consecutive pair of cells is orthogonally adjacent.
pub fn is_contiguous(grid: &Grid, path: &[CellIndex]) -> bool {
    path.iter().tuple_windows().all(|(&a, &b)| {
        let (ar, ac) = grid.position(a);
        let (br, bc) = grid.position(b);
        ar.abs_diff(br) + ac.abs_diff(bc) == 1
    })
}
