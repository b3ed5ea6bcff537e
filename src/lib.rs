//! # grid_astar
//!
//! An interactive [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) demonstrator for a
//! square, 4-connected, uniform-cost grid. A scene is painted with a start, an end and
//! obstacles; a search then expands the frontier one cell at a time, handing control to a
//! [SearchObserver] after every expansion so the caller can redraw or cancel, and finally marks
//! the recovered path on the grid.
//!
//! Heuristics are pluggable. [Manhattan](heuristic::Manhattan) and
//! [Chebyshev](heuristic::Chebyshev) never overestimate and give shortest paths, while
//! [Inadmissible](heuristic::Inadmissible) and [Weighted](heuristic::Weighted) may return longer
//! paths after fewer expansions.
pub mod astar;
pub mod cell;
pub mod config;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod observer;
pub mod path;
pub mod pathing_grid;
mod scene;

pub use crate::astar::{search, SearchContext, SearchOutcome};
pub use crate::cell::{Cell, CellIndex, CellState, Cost, INFINITY};
pub use crate::config::PathfinderConfig;
pub use crate::error::{Error, Result};
pub use crate::heuristic::{Heuristic, HeuristicKind};
pub use crate::observer::{Control, NoopObserver, SearchObserver, StepBudget};
pub use crate::pathing_grid::Grid;

use core::fmt;
use log::{debug, info, warn};

/// Owns a [Grid] together with its start and end cells and keeps at most one of each. Edits go
/// through the methods below; [run](Self::run) prepares the grid and searches it.
#[derive(Clone, Debug)]
pub struct Pathfinder {
    pub grid: Grid,
    pub config: PathfinderConfig,
    start: Option<CellIndex>,
    end: Option<CellIndex>,
    context: SearchContext,
}

impl Pathfinder {
    pub fn new(config: PathfinderConfig) -> Result<Pathfinder> {
        config.validate()?;
        Ok(Pathfinder {
            grid: Grid::new(config.rows, config.width)?,
            config,
            start: None,
            end: None,
            context: SearchContext::new(),
        })
    }

    pub fn start(&self) -> Option<CellIndex> {
        self.start
    }

    pub fn end(&self) -> Option<CellIndex> {
        self.end
    }

    /// Statistics and search state of the latest [run](Self::run).
    pub fn context(&self) -> &SearchContext {
        &self.context
    }

    /// Places the start first, then the end, then obstacles, never overwriting the start or end.
    /// Returns the state the cell ends up in.
    pub fn paint(&mut self, index: CellIndex) -> Result<CellState> {
        self.grid.check_index(index)?;
        let is_start = self.start == Some(index);
        let is_end = self.end == Some(index);
        if self.start.is_none() && !is_end {
            self.set_start(index)?;
        } else if self.end.is_none() && !is_start {
            self.set_end(index)?;
        } else if !is_start && !is_end {
            self.grid.set_state(index, CellState::Obstacle);
        } else {
            debug!("Paint on {:?} left the endpoint in place", self.grid.position(index));
        }
        Ok(self.grid.cell(index).state)
    }

    /// Empties a cell, forgetting it if it was the start or end.
    pub fn erase(&mut self, index: CellIndex) -> Result<()> {
        self.grid.check_index(index)?;
        self.forget(index);
        self.grid.set_state(index, CellState::Empty);
        Ok(())
    }

    /// Moves the start to `index`, emptying the previous start cell.
    pub fn set_start(&mut self, index: CellIndex) -> Result<()> {
        self.grid.check_index(index)?;
        self.forget(index);
        if let Some(old) = self.start.replace(index) {
            self.grid.set_state(old, CellState::Empty);
        }
        self.grid.set_state(index, CellState::Start);
        Ok(())
    }

    /// Moves the end to `index`, emptying the previous end cell.
    pub fn set_end(&mut self, index: CellIndex) -> Result<()> {
        self.grid.check_index(index)?;
        self.forget(index);
        if let Some(old) = self.end.replace(index) {
            self.grid.set_state(old, CellState::Empty);
        }
        self.grid.set_state(index, CellState::End);
        Ok(())
    }

    pub fn set_obstacle(&mut self, index: CellIndex) -> Result<()> {
        self.grid.check_index(index)?;
        if self.forget(index) {
            warn!(
                "Obstacle placed over an endpoint at {:?}",
                self.grid.position(index)
            );
        }
        self.grid.set_state(index, CellState::Obstacle);
        Ok(())
    }

    fn forget(&mut self, index: CellIndex) -> bool {
        if self.start == Some(index) {
            self.start = None;
            true
        } else if self.end == Some(index) {
            self.end = None;
            true
        } else {
            false
        }
    }

    /// Rebuilds an empty grid of the configured size.
    pub fn reset(&mut self) -> Result<()> {
        self.grid = Grid::new(self.config.rows, self.config.width)?;
        self.start = None;
        self.end = None;
        Ok(())
    }

    /// Searches from the start to the end with the configured heuristic. Marks of a previous run
    /// are cleared, neighbour lists refreshed and the heuristic reapplied first; without both
    /// endpoints nothing is touched.
    pub fn run<O>(&mut self, observer: &mut O) -> Result<SearchOutcome>
    where
        O: SearchObserver + ?Sized,
    {
        let (start, end) = match (self.start, self.end) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(Error::MissingEndpoint),
        };
        if start == end {
            let (row, col) = self.grid.position(start);
            return Err(Error::SameEndpoints { row, col });
        }
        info!("Running A* with the {} heuristic", self.config.heuristic);
        self.grid.clear_search_marks();
        self.grid.refresh_neighbours();
        self.grid.apply_heuristic(&self.config.heuristic, end);
        if self.config.skip_unreachable {
            self.grid.update();
            if !self.grid.reachable(start, end) {
                info!(
                    "{:?} is not reachable from {:?}, skipping search",
                    self.grid.position(end),
                    self.grid.position(start)
                );
                return Ok(SearchOutcome::Exhausted);
            }
        }
        self.context.search(&mut self.grid, start, end, observer)
    }
}

impl fmt::Display for Pathfinder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
