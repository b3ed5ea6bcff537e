use grid_util::point::Point;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Row-major handle of a cell inside its [Grid](crate::Grid).
pub type CellIndex = usize;

/// Unit-step path cost.
pub type Cost = i32;

/// Sentinel for "no path found yet"; larger than any finite cost on a grid that fits in memory.
pub const INFINITY: Cost = Cost::MAX;

pub const N_NEIGHBOURS: usize = 4;

pub type Neighbours = SmallVec<[CellIndex; N_NEIGHBOURS]>;

/// What a cell currently shows. Start, End and Obstacle are set by the scene editor, the rest by
/// the search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Start,
    End,
    Obstacle,
    Open,
    Closed,
    Path,
}

impl CellState {
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Obstacle => '#',
            CellState::Open => 'o',
            CellState::Closed => 'x',
            CellState::Path => '*',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<CellState> {
        let state = match symbol {
            '.' => CellState::Empty,
            'S' => CellState::Start,
            'E' => CellState::End,
            '#' => CellState::Obstacle,
            'o' => CellState::Open,
            'x' => CellState::Closed,
            '*' => CellState::Path,
            _ => return None,
        };
        Some(state)
    }

    /// Search marks are the states written by the engine rather than the editor.
    pub fn is_search_mark(self) -> bool {
        matches!(self, CellState::Open | CellState::Closed | CellState::Path)
    }
}

/// A node of the implicit grid graph. Position is fixed at creation; `g` and `h` are scratch
/// values of the latest search.
#[derive(Clone, Debug)]
pub struct Cell {
    row: usize,
    col: usize,
    pub state: CellState,
    pub g: Cost,
    pub h: Cost,
    pub(crate) neighbours: Neighbours,
}

impl Cell {
    pub(crate) fn new(row: usize, col: usize) -> Cell {
        Cell {
            row,
            col,
            state: CellState::Empty,
            g: INFINITY,
            h: 0,
            neighbours: Neighbours::new(),
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// The cell as a [Point] with `x` the column and `y` the row.
    pub fn point(&self) -> Point {
        Point::new(self.col as i32, self.row as i32)
    }

    /// Passable neighbours as of the last [refresh_neighbours](crate::Grid::refresh_neighbours).
    pub fn neighbours(&self) -> &[CellIndex] {
        &self.neighbours
    }

    pub fn is_obstacle(&self) -> bool {
        self.state == CellState::Obstacle
    }

    pub fn f(&self) -> Option<Cost> {
        (self.g != INFINITY).then(|| self.g.saturating_add(self.h))
    }
}
