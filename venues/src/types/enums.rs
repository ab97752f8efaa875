use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VenueError;

/// Order / trade side. Serialized lowercase, matching both venues' wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Lowercase wire string, e.g. for query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The venues this crate talks to.
///
/// [`VenueId::label`] is the stable lowercase name used in logs and in
/// snapshot JSON keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueId {
    #[serde(rename = "gateio")]
    Gate,
    Mexc,
}

impl VenueId {
    pub fn label(&self) -> &'static str {
        match self {
            VenueId::Gate => "gateio",
            VenueId::Mexc => "mexc",
        }
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VenueId {
    type Err = VenueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gateio" | "gate" => Ok(VenueId::Gate),
            "mexc" => Ok(VenueId::Mexc),
            other => Err(VenueError::Validation(format!("unknown venue: {other}"))),
        }
    }
}
