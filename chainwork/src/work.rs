//! Difficulty-to-work conversion.

/// Expected hashes to find one block at difficulty 1.
///
/// Difficulty is defined against the maximum target `0xffff * 2^208`, which
/// makes the exact expectation `2^48 / 0xffff` hashes per difficulty unit,
/// slightly above the commonly quoted `2^32`.
pub const HASHES_PER_DIFFICULTY: f64 = (1u64 << 48) as f64 / 0xffff as f64;

/// Expected number of hashes behind a single block mined at `difficulty`.
pub fn expected_hashes(difficulty: f64) -> f64 {
    difficulty * HASHES_PER_DIFFICULTY
}

/// Estimate the hash rate that produced `blocks` blocks at `difficulty`
/// within `elapsed_secs` seconds, in hashes per second.
///
/// `elapsed_secs` must be positive; callers reject degenerate intervals
/// before deriving a rate.
pub fn period_hashrate(difficulty: f64, blocks: u64, elapsed_secs: u64) -> f64 {
    expected_hashes(difficulty) * blocks as f64 / elapsed_secs as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_constant_is_exact() {
        // 2^48 / 0xffff = 4_295_032_833.000076...
        assert!((HASHES_PER_DIFFICULTY - 4_295_032_833.0).abs() < 1.0);
        // Strictly above the 2^32 approximation
        assert!(HASHES_PER_DIFFICULTY > 4_294_967_296.0);
    }

    #[test]
    fn test_expected_hashes_scales_linearly() {
        assert_eq!(expected_hashes(1.0), HASHES_PER_DIFFICULTY);
        assert_eq!(expected_hashes(1000.0), 1000.0 * HASHES_PER_DIFFICULTY);
    }

    #[test]
    fn test_ten_minute_blocks_at_difficulty_one() {
        // One period of 2016 blocks at the target 600s spacing
        let rate = period_hashrate(1.0, 2016, 2016 * 600);
        let expected = HASHES_PER_DIFFICULTY / 600.0;
        assert!((rate - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn test_rate_doubles_with_difficulty() {
        let base = period_hashrate(1.0, 2016, 1_209_600);
        let doubled = period_hashrate(2.0, 2016, 1_209_600);
        assert!((doubled - 2.0 * base).abs() / doubled < 1e-12);
    }

    #[test]
    fn test_first_retarget_scenario() {
        // Genesis at 1231006505, height 2016 at 1233550000, difficulty 1
        let rate = period_hashrate(1.0, 2016, 1_233_550_000 - 1_231_006_505);
        let expected = 2016.0 * HASHES_PER_DIFFICULTY / 2_543_495.0;
        assert!((rate - expected).abs() / expected < 1e-12);
    }
}
