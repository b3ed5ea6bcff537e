//! Distance estimates between two cells. [Manhattan] and [Chebyshev] never overestimate on a
//! 4-connected unit-cost grid; [Inadmissible] and [Weighted] with a factor above one may, which
//! trades optimality for fewer expansions.
use core::fmt;
use std::str::FromStr;

use grid_util::point::Point;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cell::Cost;
use crate::error::Error;

pub trait Heuristic {
    fn estimate(&self, from: &Point, to: &Point) -> Cost;

    /// Whether the estimate is a lower bound of the true remaining cost on a 4-connected grid.
    fn admissible(&self) -> bool {
        true
    }
}

impl<F> Heuristic for F
where
    F: Fn(&Point, &Point) -> Cost,
{
    fn estimate(&self, from: &Point, to: &Point) -> Cost {
        self(from, to)
    }

    fn admissible(&self) -> bool {
        false
    }
}

/// `|dx| + |dy|`, exact on an empty 4-connected grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, from: &Point, to: &Point) -> Cost {
        from.manhattan_distance(to)
    }
}

/// `max(|dx|, |dy|)`. Admissible but looser than [Manhattan] without diagonal moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct Chebyshev;

impl Heuristic for Chebyshev {
    fn estimate(&self, from: &Point, to: &Point) -> Cost {
        from.move_distance(to)
    }
}

/// Product of the Manhattan and Chebyshev distances.
#[derive(Clone, Copy, Debug, Default)]
pub struct Inadmissible;

impl Heuristic for Inadmissible {
    fn estimate(&self, from: &Point, to: &Point) -> Cost {
        from
            .manhattan_distance(to)
            .saturating_mul(from.move_distance(to))
    }

    fn admissible(&self) -> bool {
        false
    }
}

/// No estimate at all; the search degrades to uniform-cost search.
#[derive(Clone, Copy, Debug, Default)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&self, _: &Point, _: &Point) -> Cost {
        0
    }
}

/// Scales another heuristic by a constant factor (Weighted A*).
#[derive(Clone, Copy, Debug)]
pub struct Weighted<H> {
    pub inner: H,
    pub factor: f32,
}

impl<H: Heuristic> Weighted<H> {
    pub fn new(inner: H, factor: f32) -> Weighted<H> {
        Weighted { inner, factor }
    }
}

impl<H: Heuristic> Heuristic for Weighted<H> {
    fn estimate(&self, from: &Point, to: &Point) -> Cost {
        (self.inner.estimate(from, to) as f32 * self.factor) as Cost
    }

    fn admissible(&self) -> bool {
        self.factor <= 1.0 && self.inner.admissible()
    }
}

/// Selectable heuristic, used by configuration and the search trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HeuristicKind {
    #[default]
    Manhattan,
    Chebyshev,
    Inadmissible,
    Zero,
    /// Manhattan distance scaled by the factor.
    Weighted(f32),
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, from: &Point, to: &Point) -> Cost {
        match *self {
            HeuristicKind::Manhattan => Manhattan.estimate(from, to),
            HeuristicKind::Chebyshev => Chebyshev.estimate(from, to),
            HeuristicKind::Inadmissible => Inadmissible.estimate(from, to),
            HeuristicKind::Zero => Zero.estimate(from, to),
            HeuristicKind::Weighted(factor) => Weighted::new(Manhattan, factor).estimate(from, to),
        }
    }

    fn admissible(&self) -> bool {
        match *self {
            HeuristicKind::Inadmissible => false,
            HeuristicKind::Weighted(factor) => factor <= 1.0,
            _ => true,
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HeuristicKind::Manhattan => write!(f, "manhattan"),
            HeuristicKind::Chebyshev => write!(f, "chebyshev"),
            HeuristicKind::Inadmissible => write!(f, "inadmissible"),
            HeuristicKind::Zero => write!(f, "zero"),
            HeuristicKind::Weighted(factor) => write!(f, "weighted:{factor}"),
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "manhattan" => Ok(HeuristicKind::Manhattan),
            "chebyshev" => Ok(HeuristicKind::Chebyshev),
            "inadmissible" => Ok(HeuristicKind::Inadmissible),
            "zero" | "dijkstra" => Ok(HeuristicKind::Zero),
            _ => name
                .strip_prefix("weighted:")
                .and_then(|factor| factor.parse::<f32>().ok())
                .filter(|factor| factor.is_finite() && *factor >= 0.0)
                .map(HeuristicKind::Weighted)
                .ok_or_else(|| Error::UnknownHeuristic(s.to_owned())),
        }
    }
}
