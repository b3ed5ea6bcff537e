use grid_astar::heuristic::Manhattan;
use grid_astar::path::{is_contiguous, path_steps};
use grid_astar::{
    search, CellState, Control, Grid, HeuristicKind, NoopObserver, Pathfinder, SearchOutcome,
    StepBudget,
};

// Admissible heuristics find the 8-step path straight along row 0 and down column 4; the product
// heuristic is lured through the gap at (2, 3) and needs 10.
const DETOUR: &str = "
S....
...#.
..#..
##.#.
....E
";

fn run_with(scene: &str, heuristic: HeuristicKind) -> (Pathfinder, SearchOutcome) {
    let mut pathfinder: Pathfinder = scene.parse().unwrap();
    pathfinder.config.heuristic = heuristic;
    let outcome = pathfinder.run(&mut NoopObserver).unwrap();
    (pathfinder, outcome)
}

#[test]
fn empty_five_by_five() {
    let scene = "S....\n.....\n.....\n.....\n....E";
    let (pathfinder, outcome) = run_with(scene, HeuristicKind::Manhattan);
    let path = outcome.path().unwrap();
    assert_eq!(path.len(), 9);
    assert_eq!(path_steps(path), 8);
    assert!(is_contiguous(&pathfinder.grid, path));
    assert_eq!(pathfinder.grid.count_state(CellState::Path), 7);
}

#[test]
fn wall_with_single_opening() {
    let scene = "S....\n.....\n##.##\n.....\nE....";
    for heuristic in [HeuristicKind::Manhattan, HeuristicKind::Chebyshev] {
        let (pathfinder, outcome) = run_with(scene, heuristic);
        let path = outcome.path().unwrap();
        let opening = pathfinder.grid.index(2, 2).unwrap();
        assert!(path.contains(&opening));
        assert_eq!(pathfinder.grid.cell(opening).state, CellState::Path);
        assert_eq!(path_steps(path), 8);
    }
}

#[test]
fn end_cell_as_obstacle_is_exhausted() {
    let mut grid = Grid::new(3, 30).unwrap();
    let start = grid.index(0, 0).unwrap();
    let end = grid.index(2, 2).unwrap();
    grid.set_state(start, CellState::Start);
    grid.set_state(end, CellState::Obstacle);
    grid.refresh_neighbours();
    grid.apply_heuristic(&Manhattan, end);
    let outcome = search(&mut grid, start, end, &mut NoopObserver).unwrap();
    assert_eq!(outcome, SearchOutcome::Exhausted);
    assert_eq!(grid.count_state(CellState::Path), 0);
}

#[test]
fn walled_off_end_is_exhausted() {
    let scene = "S....\n.....\n.....\n....#\n...#E";
    for heuristic in [HeuristicKind::Manhattan, HeuristicKind::Inadmissible] {
        let (pathfinder, outcome) = run_with(scene, heuristic);
        assert_eq!(outcome, SearchOutcome::Exhausted);
        assert_eq!(pathfinder.grid.count_state(CellState::Path), 0);
        // Everything reachable was expanded: 25 cells minus two walls and the end.
        assert_eq!(pathfinder.context().expansions(), 22);
    }
}

#[test]
fn admissible_heuristics_find_shortest_detour() {
    for heuristic in [
        HeuristicKind::Manhattan,
        HeuristicKind::Chebyshev,
        HeuristicKind::Zero,
    ] {
        let (_, outcome) = run_with(DETOUR, heuristic);
        assert_eq!(path_steps(outcome.path().unwrap()), 8, "{heuristic}");
    }
}

#[test]
fn inadmissible_heuristic_returns_longer_path() {
    let (_, admissible) = run_with(DETOUR, HeuristicKind::Manhattan);
    let (pathfinder, inadmissible) = run_with(DETOUR, HeuristicKind::Inadmissible);
    let path = inadmissible.path().unwrap();
    assert_eq!(path_steps(path), 10);
    assert!(path.len() > admissible.path().unwrap().len());
    assert!(is_contiguous(&pathfinder.grid, path));
}

#[test]
fn repeated_runs_are_identical() {
    for heuristic in [
        HeuristicKind::Manhattan,
        HeuristicKind::Chebyshev,
        HeuristicKind::Inadmissible,
        HeuristicKind::Weighted(1.5),
    ] {
        let (first, first_outcome) = run_with(DETOUR, heuristic);
        let (second, second_outcome) = run_with(DETOUR, heuristic);
        assert_eq!(first_outcome, second_outcome);
        assert_eq!(
            first.context().expanded().collect::<Vec<_>>(),
            second.context().expanded().collect::<Vec<_>>()
        );
        assert_eq!(first.to_string(), second.to_string());
    }
}

/// A cell that finds a cheaper `g` while open keeps its original frontier entry; the entry
/// surfaces later with an outdated priority and is expanded with the improved cost. Each cell is
/// pushed once and expanded once, and the path stays optimal.
#[test]
fn open_cells_are_not_pushed_twice() {
    let scene = "
.##E.
...#.
S#...
.....
.....
";
    let (pathfinder, outcome) = run_with(scene, HeuristicKind::Manhattan);
    let path = outcome.path().unwrap();
    assert_eq!(path_steps(path), 9);
    let context = pathfinder.context();
    assert_eq!(context.stale_pops(), 2);
    let reached = pathfinder
        .grid
        .cells()
        .iter()
        .filter(|cell| cell.g != grid_astar::INFINITY)
        .count();
    assert_eq!(context.pushes(), reached);
    assert_eq!(context.pushes(), 21);
    assert_eq!(context.expansions(), 19);
    let mut expanded: Vec<_> = context.expanded().collect();
    let total = expanded.len();
    expanded.sort_unstable();
    expanded.dedup();
    assert_eq!(expanded.len(), total);
}

#[test]
fn observer_sees_every_expansion_and_the_path() {
    let scene = "S....\n.....\n.....\n.....\n....E";
    let mut pathfinder: Pathfinder = scene.parse().unwrap();
    let mut frames = Vec::new();
    let outcome = pathfinder
        .run(&mut |grid: &Grid| {
            frames.push(grid.to_string());
            Control::Continue
        })
        .unwrap();
    assert!(outcome.is_found());
    assert_eq!(frames.len(), pathfinder.context().expansions() + 1);
    // The first frame shows the start's neighbours opened; the last one the marked path.
    assert_eq!(frames[0].lines().next(), Some("So..."));
    assert_eq!(frames.last(), Some(&pathfinder.to_string()));
}

#[test]
fn abort_is_not_exhaustion() {
    let mut pathfinder: Pathfinder = DETOUR.parse().unwrap();
    let mut budget = StepBudget::new(4);
    assert_eq!(pathfinder.run(&mut budget), Ok(SearchOutcome::Aborted));
    assert_eq!(budget.steps(), 4);
    assert_eq!(pathfinder.context().expansions(), 4);
    assert_eq!(pathfinder.grid.count_state(CellState::Path), 0);
    assert_eq!(pathfinder.grid.count_state(CellState::Start), 1);
}

#[test]
fn missing_endpoints_are_invalid_input() {
    let mut pathfinder: Pathfinder = "S..\n...\n...".parse().unwrap();
    let err = pathfinder.run(&mut NoopObserver).unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(pathfinder.to_string(), "S..\n...\n...\n");
}

#[test]
fn weighted_heuristic_still_finds_a_path() {
    let (pathfinder, outcome) = run_with(DETOUR, HeuristicKind::Weighted(2.0));
    let path = outcome.path().unwrap();
    assert!(path_steps(path) >= 8);
    assert!(is_contiguous(&pathfinder.grid, path));
}

#[test]
fn huge_weight_does_not_overflow() {
    let heuristic: HeuristicKind = "weighted:1e30".parse().unwrap();
    let (pathfinder, outcome) = run_with("S..\n...\n..E", heuristic);
    let path = outcome.path().unwrap();
    assert_eq!(path_steps(path), 4);
    assert!(is_contiguous(&pathfinder.grid, path));
    let start = pathfinder.start().unwrap();
    assert_eq!(pathfinder.grid.cell(start).f(), Some(i32::MAX));
}
