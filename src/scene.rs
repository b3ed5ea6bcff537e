//! Text scenes using the [Display](core::fmt::Display) alphabet of [Grid](crate::Grid), one row
//! per line:
//!
//! ```text
//! S....
//! ...#.
//! ..#..
//! ##.#.
//! ....E
//! ```
use std::str::FromStr;

use crate::cell::CellState;
use crate::config::PathfinderConfig;
use crate::error::{Error, Result};
use crate::Pathfinder;

fn invalid(line: usize, reason: impl Into<String>) -> Error {
    Error::InvalidScene {
        line,
        reason: reason.into(),
    }
}

impl Pathfinder {
    /// Parses a scene into a pathfinder built with `config`, whose row count is replaced by the
    /// number of lines in the scene. Search marks in the text are kept as drawn.
    pub fn from_scene(text: &str, config: PathfinderConfig) -> Result<Pathfinder> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let rows = lines.len();
        if rows == 0 {
            return Err(invalid(0, "scene is empty"));
        }
        let mut pathfinder = Pathfinder::new(PathfinderConfig { rows, ..config })?;
        for (row, line) in lines.iter().enumerate() {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != rows {
                return Err(invalid(
                    row + 1,
                    format!("expected {rows} cells, found {}", symbols.len()),
                ));
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                let state = CellState::from_symbol(symbol)
                    .ok_or_else(|| invalid(row + 1, format!("unknown cell `{symbol}`")))?;
                let ix = row * rows + col;
                match state {
                    CellState::Start if pathfinder.start().is_some() => {
                        return Err(invalid(row + 1, "more than one start"));
                    }
                    CellState::End if pathfinder.end().is_some() => {
                        return Err(invalid(row + 1, "more than one end"));
                    }
                    CellState::Start => pathfinder.set_start(ix)?,
                    CellState::End => pathfinder.set_end(ix)?,
                    other => pathfinder.grid.set_state(ix, other),
                }
            }
        }
        pathfinder.grid.update();
        Ok(pathfinder)
    }
}

impl FromStr for Pathfinder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s.lines().filter(|line| !line.trim().is_empty()).count();
        // Keep the default cell size where it fits, and one pixel per cell otherwise.
        let width = PathfinderConfig::default().width.max(rows);
        Pathfinder::from_scene(s, PathfinderConfig::new(rows, width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_prints_back() {
        let text = "S....\n...#.\n..#..\n##.#.\n....E\n";
        let pathfinder: Pathfinder = text.parse().unwrap();
        assert_eq!(pathfinder.grid.rows(), 5);
        assert_eq!(pathfinder.start(), Some(0));
        assert_eq!(pathfinder.end(), Some(24));
        assert_eq!(pathfinder.grid.count_state(CellState::Obstacle), 5);
        assert_eq!(pathfinder.to_string(), text);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let pathfinder: Pathfinder = "\n  S.\n  .E\n".parse().unwrap();
        assert_eq!(pathfinder.to_string(), "S.\n.E\n");
    }

    #[test]
    fn rejects_malformed_scenes() {
        assert!(matches!(
            "".parse::<Pathfinder>(),
            Err(Error::InvalidScene { line: 0, .. })
        ));
        assert!(matches!(
            "S..\n..\n..E".parse::<Pathfinder>(),
            Err(Error::InvalidScene { line: 2, .. })
        ));
        assert!(matches!(
            "S.\n.?".parse::<Pathfinder>(),
            Err(Error::InvalidScene { line: 2, .. })
        ));
        assert!(matches!(
            "SS\n.E".parse::<Pathfinder>(),
            Err(Error::InvalidScene { line: 1, .. })
        ));
        assert!(matches!(
            "SE\nE.".parse::<Pathfinder>(),
            Err(Error::InvalidScene { line: 2, .. })
        ));
    }
}
