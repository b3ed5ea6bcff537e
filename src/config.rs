#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::heuristic::HeuristicKind;

const DEFAULT_ROWS: usize = 50;
const DEFAULT_WIDTH: usize = 600;

/// Settings for a [Pathfinder](crate::Pathfinder).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathfinderConfig {
    /// Cells per side.
    pub rows: usize,
    /// Side of the drawing area in pixels.
    pub width: usize,
    pub heuristic: HeuristicKind,
    /// Answer Exhausted without expanding anything when start and end lie on different connected
    /// components.
    pub skip_unreachable: bool,
}

impl Default for PathfinderConfig {
    fn default() -> PathfinderConfig {
        PathfinderConfig {
            rows: DEFAULT_ROWS,
            width: DEFAULT_WIDTH,
            heuristic: HeuristicKind::default(),
            skip_unreachable: false,
        }
    }
}

impl PathfinderConfig {
    pub fn new(rows: usize, width: usize) -> PathfinderConfig {
        PathfinderConfig {
            rows,
            width,
            ..PathfinderConfig::default()
        }
    }

    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> PathfinderConfig {
        self.heuristic = heuristic;
        self
    }

    pub fn with_skip_unreachable(mut self, skip_unreachable: bool) -> PathfinderConfig {
        self.skip_unreachable = skip_unreachable;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.width / self.rows == 0 {
            return Err(Error::InvalidDimensions {
                rows: self.rows,
                width: self.width,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PathfinderConfig::default();
        assert_eq!(config.rows, 50);
        assert_eq!(config.width, 600);
        assert_eq!(config.heuristic, HeuristicKind::Manhattan);
        assert!(!config.skip_unreachable);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_sub_pixel_cells() {
        assert!(PathfinderConfig::new(0, 100).validate().is_err());
        assert!(PathfinderConfig::new(101, 100).validate().is_err());
        assert!(PathfinderConfig::new(100, 100).validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_with_defaults() {
        let config: PathfinderConfig =
            serde_json::from_str(r#"{"rows": 20, "heuristic": "chebyshev"}"#).unwrap();
        assert_eq!(
            config,
            PathfinderConfig::new(20, 600).with_heuristic(HeuristicKind::Chebyshev)
        );
        let weighted: PathfinderConfig =
            serde_json::from_str(r#"{"heuristic": {"weighted": 1.5}}"#).unwrap();
        assert_eq!(weighted.heuristic, HeuristicKind::Weighted(1.5));
    }
}
