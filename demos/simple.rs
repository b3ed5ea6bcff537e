use grid_astar::{Control, Grid, Pathfinder, SearchOutcome};

// In this example a path is found on a 7x7 grid with shape
//
// S......
// .#####.
// .....#.
// ####.#.
// .....#.
// .#####.
// ......E
//
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Every expansion is drawn, with o for open cells, x for closed cells and * for the path.

/// Explicit render context handed to the search through its observer.
struct TerminalRenderer {
    frame: usize,
}

impl TerminalRenderer {
    fn draw(&mut self, grid: &Grid) -> Control {
        self.frame += 1;
        println!("Frame {}:\n{}", self.frame, grid);
        Control::Continue
    }
}

fn main() -> grid_astar::Result<()> {
    env_logger::init();
    let mut pathfinder: Pathfinder = "
        S......
        .#####.
        .....#.
        ####.#.
        .....#.
        .#####.
        ......E
    "
    .parse()?;
    let mut renderer = TerminalRenderer { frame: 0 };
    let outcome = pathfinder.run(&mut |grid: &Grid| renderer.draw(grid))?;
    match outcome {
        SearchOutcome::Found(path) => {
            println!("Path:");
            for ix in path {
                println!("{:?}", pathfinder.grid.position(ix));
            }
        }
        other => println!("{other:?}"),
    }
    Ok(())
}
