use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two labels the rotation alternates between.
///
/// The engine only cares that there are exactly two variants and which one
/// follows the other; the labels themselves are opaque to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Choice {
    #[serde(rename = "AD")]
    Ad,
    #[default]
    #[serde(rename = "D3")]
    D3,
}

impl Choice {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ad => "AD",
            Self::D3 => "D3",
        }
    }

    /// The opposite label.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Ad => Self::D3,
            Self::D3 => Self::Ad,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Choice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AD" => Ok(Self::Ad),
            "D3" => Ok(Self::D3),
            _ => Err(()),
        }
    }
}

/// Where a resolved choice came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// A manual per-date pin superseded the rotation.
    Override,
    /// Computed from the anchored alternation.
    Rotation,
}

/// A choice together with the origin it was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub choice: Choice,
    pub origin: Origin,
}
