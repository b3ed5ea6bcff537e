use core::fmt;

use itertools::{iproduct, Itertools};
use log::debug;
use petgraph::unionfind::UnionFind;

use crate::cell::{Cell, CellIndex, CellState, Neighbours, INFINITY};
use crate::error::{Error, Result};
use crate::heuristic::Heuristic;

/// Square grid of [Cell]s stored row-major, so a [CellIndex] is `row * rows + col`.
///
/// Passability is read from the cell states. Neighbour lists are a snapshot: after changing
/// obstacles call [refresh_neighbours](Self::refresh_neighbours) before searching, since the
/// search only follows the stored lists. Connected components are kept in a [UnionFind] and
/// regenerated lazily once an obstacle edit marks them dirty.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    width: usize,
    cell_size: usize,
    cells: Vec<Cell>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Grid {
    /// Builds a `rows x rows` grid of Empty cells drawn over `width` pixels.
    pub fn new(rows: usize, width: usize) -> Result<Grid> {
        if rows == 0 || width / rows == 0 {
            return Err(Error::InvalidDimensions { rows, width });
        }
        let cells = iproduct!(0..rows, 0..rows)
            .map(|(row, col)| Cell::new(row, col))
            .collect();
        let mut grid = Grid {
            rows,
            width,
            cell_size: width / rows,
            cells,
            components: UnionFind::new(rows * rows),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Side of one cell in pixels.
    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.rows
    }

    pub fn index(&self, row: usize, col: usize) -> Option<CellIndex> {
        self.in_bounds(row, col).then(|| row * self.rows + col)
    }

    pub fn position(&self, index: CellIndex) -> (usize, usize) {
        (index / self.rows, index % self.rows)
    }

    pub fn cell(&self, index: CellIndex) -> &Cell {
        &self.cells[index]
    }

    pub fn cell_mut(&mut self, index: CellIndex) -> &mut Cell {
        &mut self.cells[index]
    }

    pub fn get(&self, index: CellIndex) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).map(|ix| &self.cells[ix])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn check_index(&self, index: CellIndex) -> Result<()> {
        if index < self.cells.len() {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                index,
                len: self.cells.len(),
            })
        }
    }

    /// Maps a pixel to the cell drawn under it. Rows advance along `x` and columns along `y`.
    pub fn cell_at_pixel(&self, x: usize, y: usize) -> Option<CellIndex> {
        self.index(x / self.cell_size, y / self.cell_size)
    }

    /// Top-left pixel of the cell, matching [cell_at_pixel](Self::cell_at_pixel).
    pub fn pixel_origin(&self, index: CellIndex) -> (usize, usize) {
        let (row, col) = self.position(index);
        (row * self.cell_size, col * self.cell_size)
    }

    /// Sets the state of a cell without any validation. Obstacle changes flag the components as
    /// dirty.
    pub fn set_state(&mut self, index: CellIndex, state: CellState) {
        let cell = &mut self.cells[index];
        if (cell.state == CellState::Obstacle) != (state == CellState::Obstacle) {
            self.components_dirty = true;
        }
        cell.state = state;
    }

    pub fn is_passable(&self, index: CellIndex) -> bool {
        !self.cells[index].is_obstacle()
    }

    /// Passable orthogonal neighbours in the fixed order down, up, right, left.
    pub fn neighbours_of(&self, index: CellIndex) -> Neighbours {
        let (row, col) = self.position(index);
        [
            (row + 1 < self.rows).then(|| (row + 1, col)),
            row.checked_sub(1).map(|r| (r, col)),
            (col + 1 < self.rows).then(|| (row, col + 1)),
            col.checked_sub(1).map(|c| (row, c)),
        ]
        .into_iter()
        .flatten()
        .map(|(r, c)| r * self.rows + c)
        .filter(|&ix| self.is_passable(ix))
        .collect()
    }

    /// Recomputes every cell's neighbour list from the current obstacle layout.
    pub fn refresh_neighbours(&mut self) {
        debug!("Refreshing neighbour lists of {} cells", self.cells.len());
        for ix in 0..self.cells.len() {
            let neighbours = self.neighbours_of(ix);
            self.cells[ix].neighbours = neighbours;
        }
    }

    /// Stores the heuristic estimate towards `goal` in every cell's `h`.
    pub fn apply_heuristic<H: Heuristic + ?Sized>(&mut self, heuristic: &H, goal: CellIndex) {
        let target = self.cells[goal].point();
        for cell in &mut self.cells {
            cell.h = heuristic.estimate(&cell.point(), &target);
        }
    }

    /// Sets every `g` back to [INFINITY].
    pub fn reset_costs(&mut self) {
        for cell in &mut self.cells {
            cell.g = INFINITY;
        }
    }

    /// Turns Open, Closed and Path cells back into Empty ones, keeping the edited scene.
    pub fn clear_search_marks(&mut self) {
        for cell in &mut self.cells {
            if cell.state.is_search_mark() {
                cell.state = CellState::Empty;
            }
        }
    }

    /// First cell found in the given state, scanning row-major.
    pub fn find_state(&self, state: CellState) -> Option<CellIndex> {
        self.cells.iter().position(|cell| cell.state == state)
    }

    pub fn count_state(&self, state: CellState) -> usize {
        self.cells.iter().filter(|cell| cell.state == state).count()
    }

    /// Retrieves the component id a given cell belongs to.
    pub fn get_component(&self, index: CellIndex) -> usize {
        self.components.find(index)
    }

    /// Checks if `a` and `b` are passable and on the same component. Call
    /// [update](Self::update) first if obstacles changed.
    pub fn reachable(&self, a: CellIndex, b: CellIndex) -> bool {
        a < self.cells.len()
            && b < self.cells.len()
            && self.is_passable(a)
            && self.is_passable(b)
            && self.components.equiv(a, b)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        debug!("Generating connected components");
        let n = self.rows;
        self.components = UnionFind::new(n * n);
        self.components_dirty = false;
        for (row, col) in iproduct!(0..n, 0..n) {
            let ix = row * n + col;
            if !self.is_passable(ix) {
                continue;
            }
            // Down and right cover every edge once.
            let down = (row + 1 < n).then(|| ix + n);
            let right = (col + 1 < n).then(|| ix + 1);
            for other in [down, right].into_iter().flatten() {
                if self.is_passable(other) {
                    self.components.union(ix, other);
                }
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.rows) {
            writeln!(f, "{}", row.iter().map(|cell| cell.state.symbol()).join(""))?;
        }
        Ok(())
    }
}
