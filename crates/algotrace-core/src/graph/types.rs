use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::TraceError;

/// Outgoing edge as seen from one vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub neighbor: String,
    pub weight: u32,
}

/// An undirected edge named by its endpoints, in the direction it was explored
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeRef {
    pub from: String,
    pub to: String,
}

impl EdgeRef {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// True when both refs name the same undirected edge
    pub fn same_edge(&self, other: &EdgeRef) -> bool {
        (self.from == other.from && self.to == other.to)
            || (self.from == other.to && self.to == other.from)
    }
}

impl fmt::Display for EdgeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Edge description used to build graphs: `A,B` or `A,B,5`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: u32,
}

impl EdgeSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: u32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

impl FromStr for EdgeSpec {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_edge_spec(s)
    }
}

impl fmt::Display for EdgeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.from, self.to, self.weight)
    }
}

/// Tentative or final path length; `Infinite` until a vertex is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Distance {
    Finite(u64),
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn value(&self) -> Option<u64> {
        match self {
            Distance::Finite(v) => Some(*v),
            Distance::Infinite => None,
        }
    }

    /// Extend by one edge; unreachable stays unreachable
    pub fn extend(self, weight: u32) -> Distance {
        match self {
            Distance::Finite(v) => Distance::Finite(v.saturating_add(u64::from(weight))),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(v) => write!(f, "{}", v),
            Distance::Infinite => write!(f, "Infinity"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(v) => serializer.serialize_u64(*v),
            Distance::Infinite => serializer.serialize_str("Infinity"),
        }
    }
}
