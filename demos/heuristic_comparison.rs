use grid_astar::path::path_steps;
use grid_astar::{Heuristic, HeuristicKind, NoopObserver, Pathfinder};

// Runs every heuristic on the same scene. The admissible ones agree on the length of the path;
// the inadmissible product heuristic and the weighted one may expand fewer cells and return a
// longer path.

fn main() -> grid_astar::Result<()> {
    env_logger::init();
    let scene = "
        S....
        ...#.
        ..#..
        ##.#.
        ....E
    ";
    for name in ["manhattan", "chebyshev", "zero", "inadmissible", "weighted:1.5"] {
        let heuristic: HeuristicKind = name.parse()?;
        let mut pathfinder: Pathfinder = scene.parse()?;
        pathfinder.config.heuristic = heuristic;
        let outcome = pathfinder.run(&mut NoopObserver)?;
        let steps = outcome.path().map(path_steps);
        println!(
            "{:<14} admissible={:<5} steps={:?} expansions={}",
            heuristic.to_string(),
            heuristic.admissible(),
            steps,
            pathfinder.context().expansions()
        );
        println!("{pathfinder}");
    }
    Ok(())
}
