use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VenueError;

/// A spot trading pair, e.g. GMRT/USDT.
///
/// Venues disagree on the wire format: Gate.io wants `GMRT_USDT`, MEXC wants
/// `GMRTUSDT`. The [`Display`] form uses a slash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub base: String,
    pub quote: String,
}

impl Pair {
    pub fn new(base: &str, quote: &str) -> Self {
        Self {
            base: base.to_uppercase(),
            quote: quote.to_uppercase(),
        }
    }

    /// Gate.io currency pair identifier, e.g. `GMRT_USDT`.
    pub fn gate_id(&self) -> String {
        format!("{}_{}", self.base, self.quote)
    }

    /// MEXC symbol, e.g. `GMRTUSDT`.
    pub fn mexc_id(&self) -> String {
        format!("{}{}", self.base, self.quote)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

impl FromStr for Pair {
    type Err = VenueError;

    /// Parses `BASE/QUOTE` or `BASE_QUOTE` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, quote) = s
            .split_once('/')
            .or_else(|| s.split_once('_'))
            .ok_or_else(|| VenueError::InvalidPair(s.to_string()))?;
        if base.is_empty() || quote.is_empty() {
            return Err(VenueError::InvalidPair(s.to_string()));
        }
        Ok(Pair::new(base, quote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_ids() {
        let pair = Pair::new("GMRT", "USDT");
        assert_eq!(pair.gate_id(), "GMRT_USDT");
        assert_eq!(pair.mexc_id(), "GMRTUSDT");
        assert_eq!(pair.to_string(), "GMRT/USDT");
    }

    #[test]
    fn test_pair_from_str_slash() {
        let pair: Pair = "GMRT/USDT".parse().unwrap();
        assert_eq!(pair, Pair::new("GMRT", "USDT"));
    }

    #[test]
    fn test_pair_from_str_underscore() {
        let pair: Pair = "gmrt_usdt".parse().unwrap();
        assert_eq!(pair.base, "GMRT");
        assert_eq!(pair.quote, "USDT");
    }

    #[test]
    fn test_pair_from_str_invalid() {
        assert!("GMRTUSDT".parse::<Pair>().is_err());
        assert!("/USDT".parse::<Pair>().is_err());
        assert!("GMRT/".parse::<Pair>().is_err());
    }
}
