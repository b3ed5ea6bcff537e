//! Best-first A* search over the neighbour lists of a [Grid].
//!
//! The engine reads the `h` values the caller stored with
//! [apply_heuristic](Grid::apply_heuristic) and follows the neighbour lists stored by
//! [refresh_neighbours](Grid::refresh_neighbours). It writes display states (Open, Closed,
//! Path) and mirrors every relaxed `g` into the cells, but never changes the obstacle layout.
use fxhash::{FxBuildHasher, FxHashMap, FxHashSet};
use indexmap::IndexSet;
use log::{debug, info, trace, warn};

use crate::cell::{CellIndex, CellState, Cost, INFINITY};
use crate::error::{Error, Result};
use crate::frontier::Frontier;
use crate::observer::{Control, SearchObserver};
use crate::path::{mark_path, reconstruct, FxIndexMap};
use crate::pathing_grid::Grid;

type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Cost of moving to an orthogonal neighbour.
const STEP_COST: Cost = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was reached. The path runs start to goal and includes both.
    Found(Vec<CellIndex>),
    /// The frontier ran empty; no path exists under the current obstacles.
    Exhausted,
    /// The observer asked to stop.
    Aborted,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&[CellIndex]> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

/// State of one search invocation. Kept between runs so its allocations can be reused; every
/// call to [search](Self::search) starts from a clean slate.
#[derive(Clone, Debug, Default)]
pub struct SearchContext {
    g: FxHashMap<CellIndex, Cost>,
    predecessors: FxIndexMap<CellIndex, CellIndex>,
    frontier: Frontier,
    open: FxHashSet<CellIndex>,
    closed: FxIndexSet<CellIndex>,
    pushes: usize,
    stale_pops: usize,
}

impl SearchContext {
    pub fn new() -> SearchContext {
        SearchContext::default()
    }

    /// Best known cost from the start, [INFINITY] if the cell was not reached.
    pub fn g(&self, cell: CellIndex) -> Cost {
        self.g.get(&cell).copied().unwrap_or(INFINITY)
    }

    pub fn predecessor(&self, cell: CellIndex) -> Option<CellIndex> {
        self.predecessors.get(&cell).copied()
    }

    pub fn predecessors(&self) -> &FxIndexMap<CellIndex, CellIndex> {
        &self.predecessors
    }

    /// Expanded cells in expansion order. The goal is not expanded, so it never appears here.
    pub fn expanded(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.closed.iter().copied()
    }

    pub fn expansions(&self) -> usize {
        self.closed.len()
    }

    pub fn is_open(&self, cell: CellIndex) -> bool {
        self.open.contains(&cell)
    }

    pub fn is_closed(&self, cell: CellIndex) -> bool {
        self.closed.contains(&cell)
    }

    /// Frontier entries pushed, including the start. Each cell is pushed at most once.
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    /// Entries popped with an outdated priority: their cell found a cheaper `g` while it was
    /// open, which updates the cell but leaves its frontier entry where it was.
    pub fn stale_pops(&self) -> usize {
        self.stale_pops
    }

    pub fn high_water(&self) -> usize {
        self.frontier.high_water()
    }

    fn clear(&mut self) {
        self.g.clear();
        self.predecessors.clear();
        self.frontier.clear();
        self.open.clear();
        self.closed.clear();
        self.pushes = 0;
        self.stale_pops = 0;
    }

    /// Runs A* from `start` to `goal`. Expects current neighbour lists and `h` values computed
    /// against `goal`. Invalid endpoints are rejected before the grid is touched.
    pub fn search<O>(
        &mut self,
        grid: &mut Grid,
        start: CellIndex,
        goal: CellIndex,
        observer: &mut O,
    ) -> Result<SearchOutcome>
    where
        O: SearchObserver + ?Sized,
    {
        grid.check_index(start)?;
        grid.check_index(goal)?;
        if start == goal {
            let (row, col) = grid.position(start);
            return Err(Error::SameEndpoints { row, col });
        }
        info!(
            "Searching from {:?} to {:?}",
            grid.position(start),
            grid.position(goal)
        );

        self.clear();
        if grid.cell(start).is_obstacle() {
            warn!("Start {:?} is an obstacle", grid.position(start));
            return Ok(SearchOutcome::Exhausted);
        }
        grid.reset_costs();
        self.relax(grid, start, 0);
        self.push(grid, start);

        while let Some(entry) = self.frontier.pop() {
            let current = entry.cell;
            self.open.remove(&current);
            let current_g = self.g(current);
            if entry.cost > current_g {
                self.stale_pops += 1;
            }

            if current == goal {
                let mut path = reconstruct(&self.predecessors, goal);
                mark_path(grid, &path);
                grid.set_state(goal, CellState::End);
                grid.set_state(start, CellState::Start);
                path.reverse();
                info!(
                    "Found a path of {} steps after {} expansions",
                    path.len().saturating_sub(1),
                    self.closed.len()
                );
                observer.on_path_marked(grid);
                return Ok(SearchOutcome::Found(path));
            }

            trace!("Expanding {:?} at g={}", grid.position(current), current_g);
            let tentative = current_g + STEP_COST;
            let neighbours = grid.cell(current).neighbours.clone();
            for neighbour in neighbours {
                if tentative >= self.g(neighbour) {
                    continue;
                }
                if grid.cell(neighbour).is_obstacle() {
                    warn!(
                        "Obstacle {:?} listed as a neighbour, neighbour lists are stale",
                        grid.position(neighbour)
                    );
                }
                self.predecessors.insert(neighbour, current);
                self.relax(grid, neighbour, tentative);
                // Open cells keep their frontier entry and closed cells are never reopened.
                if self.open.contains(&neighbour) || self.closed.contains(&neighbour) {
                    continue;
                }
                self.push(grid, neighbour);
                mark(grid, neighbour, CellState::Open);
            }

            let control = observer.on_step(grid);

            self.closed.insert(current);
            if current != start {
                mark(grid, current, CellState::Closed);
            }

            if control == Control::Abort {
                info!("Search aborted after {} expansions", self.closed.len());
                return Ok(SearchOutcome::Aborted);
            }
        }

        info!(
            "Frontier exhausted after {} expansions, no path to {:?}",
            self.closed.len(),
            grid.position(goal)
        );
        Ok(SearchOutcome::Exhausted)
    }

    fn relax(&mut self, grid: &mut Grid, cell: CellIndex, g: Cost) {
        self.g.insert(cell, g);
        grid.cell_mut(cell).g = g;
    }

    fn push(&mut self, grid: &Grid, cell: CellIndex) {
        let g = self.g(cell);
        let f = g.saturating_add(grid.cell(cell).h);
        let sequence = self.frontier.push(f, cell, g);
        self.open.insert(cell);
        self.pushes += 1;
        debug!(
            "Pushed {:?} with f={} (g={}, seq={})",
            grid.position(cell),
            f,
            g,
            sequence
        );
    }
}

/// Sets a display state, leaving obstacles reached through stale neighbour lists alone.
fn mark(grid: &mut Grid, cell: CellIndex, state: CellState) {
    if !grid.cell(cell).is_obstacle() {
        grid.cell_mut(cell).state = state;
    }
}

/// Runs a single search with a fresh [SearchContext].
pub fn search<O>(
    grid: &mut Grid,
    start: CellIndex,
    goal: CellIndex,
    observer: &mut O,
) -> Result<SearchOutcome>
where
    O: SearchObserver + ?Sized,
{
    SearchContext::new().search(grid, start, goal, observer)
}
