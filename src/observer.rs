use crate::pathing_grid::Grid;

/// Answer of an observer after each expansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Abort,
}

/// Hook through which the search hands control back to its caller, typically a renderer that
/// redraws the grid and polls for a quit request.
pub trait SearchObserver {
    /// Called once per expansion, after the expanded cell's neighbours have been processed.
    fn on_step(&mut self, grid: &Grid) -> Control;

    /// Called once after the path has been marked.
    fn on_path_marked(&mut self, grid: &Grid) {
        let _ = self.on_step(grid);
    }
}

impl<F> SearchObserver for F
where
    F: FnMut(&Grid) -> Control,
{
    fn on_step(&mut self, grid: &Grid) -> Control {
        self(grid)
    }
}

/// Observer that never interrupts and draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_step(&mut self, _: &Grid) -> Control {
        Control::Continue
    }

    fn on_path_marked(&mut self, _: &Grid) {}
}

/// Aborts the search once it has seen `limit` steps.
#[derive(Clone, Copy, Debug)]
pub struct StepBudget {
    limit: usize,
    steps: usize,
}

impl StepBudget {
    pub fn new(limit: usize) -> StepBudget {
        StepBudget { limit, steps: 0 }
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl SearchObserver for StepBudget {
    fn on_step(&mut self, _: &Grid) -> Control {
        self.steps += 1;
        if self.steps >= self.limit {
            Control::Abort
        } else {
            Control::Continue
        }
    }

    fn on_path_marked(&mut self, _: &Grid) {}
}
