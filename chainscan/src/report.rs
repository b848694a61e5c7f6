//! JSON report emission.

use chainwork::HashRateSample;
use std::fs;
use std::io::{self, Write};
use tracing::info;

/// Serialize the sample series as a JSON array, ascending timestamps.
pub fn render(samples: &[HashRateSample]) -> serde_json::Result<String> {
    serde_json::to_string(samples)
}

/// Write the report to `path`, or stdout when no path is configured.
pub fn write_report(
    samples: &[HashRateSample],
    path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut body = render(samples)?;
    body.push('\n');
    match path {
        Some(path) => {
            fs::write(path, body)?;
            info!("Wrote {} samples to {}", samples.len(), path);
        }
        None => io::stdout().write_all(body.as_bytes())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(height: u64, timestamp: u64) -> HashRateSample {
        HashRateSample {
            height,
            timestamp,
            difficulty: 1.0,
            interval_secs: 600.0,
            subsidy_btc: 50.0,
            hashrate_hs: 7_158_388.0,
        }
    }

    #[test]
    fn test_render_empty_series() {
        assert_eq!(render(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_render_preserves_order_and_fields() {
        let samples = vec![sample(0, 1_231_006_505), sample(2016, 1_233_550_000)];
        let json = render(&samples).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["timestamp"], 1_231_006_505u64);
        assert_eq!(array[1]["timestamp"], 1_233_550_000u64);
        assert!(array[0]["hashrate_hs"].is_f64());
        assert_eq!(array[1]["height"], 2016);
    }
}
