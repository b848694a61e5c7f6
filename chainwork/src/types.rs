//! Data types shared by the estimator and its block sources.

use serde::{Deserialize, Serialize};

/// Header fields of a single block, as needed for hash rate estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Height of the block, 0 for genesis
    pub height: u64,

    /// Block timestamp in Unix seconds. Non-decreasing along the chain but
    /// not strictly; nodes accept slightly out-of-order timestamps.
    pub time: u64,

    /// Network difficulty the block was mined at
    pub difficulty: f64,
}

/// A single point in the estimated hash rate time-series.
///
/// Derived from the first blocks of two consecutive difficulty periods. The
/// timestamp is the START of the period the sample describes, so the series
/// lags the chain tip by up to one full period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashRateSample {
    /// Height of the first block of the period
    pub height: u64,

    /// Timestamp of the first block of the period (Unix seconds)
    pub timestamp: u64,

    /// Difficulty shared by every block in the period
    pub difficulty: f64,

    /// Average seconds per block across the period
    pub interval_secs: f64,

    /// Coinbase subsidy at the period's first block, in BTC
    pub subsidy_btc: f64,

    /// Estimated network hash rate in hashes per second
    pub hashrate_hs: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_serialization() {
        let sample = HashRateSample {
            height: 2016,
            timestamp: 1_233_061_996,
            difficulty: 1.0,
            interval_secs: 600.0,
            subsidy_btc: 50.0,
            hashrate_hs: 7_158_388.0,
        };

        let json = serde_json::to_string(&sample).unwrap();
        assert!(json.contains("\"timestamp\":1233061996"));
        assert!(json.contains("\"hashrate_hs\""));

        let back: HashRateSample = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample);
    }

    #[test]
    fn test_header_deserialization() {
        let header: BlockHeader =
            serde_json::from_str(r#"{"height":0,"time":1231006505,"difficulty":1.0}"#).unwrap();
        assert_eq!(header.height, 0);
        assert_eq!(header.time, 1_231_006_505);
        assert_eq!(header.difficulty, 1.0);
    }
}
