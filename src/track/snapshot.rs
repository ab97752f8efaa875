//! JSON snapshot files for external chart consumers.
//!
//! Two whole-file rewrites per cycle under the output directory:
//! `market_data.json` (prices) and `volume_data.json` (volume and market
//! share), both keyed by venue label.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::track::analytics::VenueAnalytics;

pub const MARKET_DATA_FILE: &str = "market_data.json";
pub const VOLUME_DATA_FILE: &str = "volume_data.json";

/// One venue's slice of `market_data.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueMarketData {
    pub timestamps: Vec<DateTime<Utc>>,
    pub prices: Vec<Option<Decimal>>,
    /// Bid sizes of the latest book snapshot.
    pub volumes: Vec<Decimal>,
    pub last_update: DateTime<Utc>,
}

/// `market_data.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketData {
    pub gateio: VenueMarketData,
    pub mexc: VenueMarketData,
}

/// One venue's slice of `volume_data.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueVolumeData {
    pub timestamps: Vec<DateTime<Utc>>,
    pub accumulated_volume: Vec<Decimal>,
    pub market_share: Vec<Decimal>,
    pub last_update: DateTime<Utc>,
}

/// `volume_data.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeData {
    pub gateio: VenueVolumeData,
    pub mexc: VenueVolumeData,
}

impl VenueMarketData {
    pub fn from_analytics(analytics: &VenueAnalytics, now: DateTime<Utc>) -> Self {
        Self {
            timestamps: analytics.timestamps.clone(),
            prices: analytics.prices.clone(),
            volumes: analytics.bid_volumes.clone(),
            last_update: now,
        }
    }
}

impl VenueVolumeData {
    pub fn from_analytics(analytics: &VenueAnalytics, now: DateTime<Utc>) -> Self {
        Self {
            timestamps: analytics.timestamps.clone(),
            accumulated_volume: analytics.accumulated_volume.clone(),
            market_share: analytics.market_share.clone(),
            last_update: now,
        }
    }
}

/// Write both snapshot files. A whole-file rewrite each time; a torn
/// read by a chart consumer self-heals on the next cycle.
pub fn write_snapshots(dir: &Path, market: &MarketData, volume: &VolumeData) -> Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(
        dir.join(MARKET_DATA_FILE),
        serde_json::to_vec_pretty(market)?,
    )?;
    fs::write(
        dir.join(VOLUME_DATA_FILE),
        serde_json::to_vec_pretty(volume)?,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn analytics() -> VenueAnalytics {
        let mut a = VenueAnalytics::new();
        a.timestamps.push(Utc::now());
        a.prices.push(Some(dec!(0.31)));
        a.bid_volumes = vec![dec!(1000), dec!(2000)];
        a.volumes.push(dec!(150));
        a.accumulated_volume.push(dec!(150));
        a.market_share.push(dec!(60.0));
        a
    }

    #[test]
    fn test_write_snapshots_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let now = Utc::now();
        let a = analytics();

        let market = MarketData {
            gateio: VenueMarketData::from_analytics(&a, now),
            mexc: VenueMarketData::from_analytics(&VenueAnalytics::new(), now),
        };
        let volume = VolumeData {
            gateio: VenueVolumeData::from_analytics(&a, now),
            mexc: VenueVolumeData::from_analytics(&VenueAnalytics::new(), now),
        };

        write_snapshots(dir.path(), &market, &volume).unwrap();

        let raw = std::fs::read_to_string(dir.path().join(MARKET_DATA_FILE)).unwrap();
        let parsed: MarketData = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.gateio.prices, vec![Some(dec!(0.31))]);
        assert_eq!(parsed.gateio.volumes, vec![dec!(1000), dec!(2000)]);
        assert!(parsed.mexc.prices.is_empty());

        // The JSON keys are the venue labels the charts expect.
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.get("gateio").is_some());
        assert!(value.get("mexc").is_some());

        let raw = std::fs::read_to_string(dir.path().join(VOLUME_DATA_FILE)).unwrap();
        let parsed: VolumeData = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.gateio.accumulated_volume, vec![dec!(150)]);
        assert_eq!(parsed.gateio.market_share, vec![dec!(60.0)]);
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs");
        let now = Utc::now();
        let empty = VenueAnalytics::new();

        let market = MarketData {
            gateio: VenueMarketData::from_analytics(&empty, now),
            mexc: VenueMarketData::from_analytics(&empty, now),
        };
        let volume = VolumeData {
            gateio: VenueVolumeData::from_analytics(&empty, now),
            mexc: VenueVolumeData::from_analytics(&empty, now),
        };

        write_snapshots(&nested, &market, &volume).unwrap();
        assert!(nested.join(MARKET_DATA_FILE).exists());
        assert!(nested.join(VOLUME_DATA_FILE).exists());
    }
}
