use grid_astar::{Control, Grid, Pathfinder, PathfinderConfig, SearchOutcome};

// The observer is the only place the search yields control, so it is also where a quit request
// is noticed. Here the "user" quits once a quarter of the grid has been closed.

fn main() -> grid_astar::Result<()> {
    env_logger::init();
    let mut pathfinder = Pathfinder::new(PathfinderConfig::new(20, 600))?;
    let start = pathfinder.grid.cell_at_pixel(5, 5).unwrap_or(0);
    let end = pathfinder.grid.cell_at_pixel(595, 595).unwrap_or(399);
    pathfinder.paint(start)?;
    pathfinder.paint(end)?;
    for row in 2..18 {
        if let Some(ix) = pathfinder.grid.index(row, 10) {
            pathfinder.paint(ix)?;
        }
    }

    let quota = pathfinder.grid.len() / 4;
    let mut steps = 0;
    let outcome = pathfinder.run(&mut |_: &Grid| {
        steps += 1;
        if steps >= quota {
            Control::Abort
        } else {
            Control::Continue
        }
    })?;
    match outcome {
        SearchOutcome::Aborted => println!("Quit after {steps} expansions:\n{pathfinder}"),
        other => println!("Finished before the quit request: {other:?}\n{pathfinder}"),
    }
    Ok(())
}
