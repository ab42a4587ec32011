//! Distance values with an explicit "unreachable" state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance from the source to a vertex.
///
/// Variant order matters: the derived ordering places every `Reachable`
/// value below `Unreachable`, which is how relaxation treats +infinity.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    Reachable(f64),
    #[default]
    Unreachable,
}

impl Distance {
    pub const ZERO: Distance = Distance::Reachable(0.0);

    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Reachable(_))
    }

    /// The numeric distance, or `None` when unreachable.
    pub fn value(&self) -> Option<f64> {
        match self {
            Distance::Reachable(d) => Some(*d),
            Distance::Unreachable => None,
        }
    }

    /// Distance after following an edge of the given weight.
    ///
    /// A sum that overflows to +infinity or is NaN never beats an
    /// unreachable vertex, so it collapses to `Unreachable`.
    pub fn relaxed(self, weight: f64) -> Distance {
        match self {
            Distance::Reachable(d) => {
                let sum = d + weight;
                if sum.is_nan() || sum == f64::INFINITY {
                    Distance::Unreachable
                } else {
                    Distance::Reachable(sum)
                }
            }
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl From<Option<f64>> for Distance {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Distance::Unreachable, Distance::Reachable)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Reachable(d) => write!(f, "{}", d),
            Distance::Unreachable => f.write_str("∞"),
        }
    }
}
