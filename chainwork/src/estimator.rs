//! Difficulty-period hash rate estimator.
//!
//! Walks the chain from genesis in steps of one difficulty period, anchoring
//! on the first block of each period. Each sample divides the work expected
//! from the earlier period's difficulty by the wall-clock time between the
//! two anchors, and keeps the earlier anchor's timestamp, so the series
//! reports a period by its start time and lags the tip by up to one period.
//! Windowing over the first blocks of consecutive periods shifts absolute
//! rates slightly against a first/last-of-period comparison; downstream
//! consumers rely on exactly this estimate, so it stays.

use crate::source::{BlockSource, SourceError};
use crate::subsidy::block_subsidy;
use crate::types::{BlockHeader, HashRateSample};
use crate::work::period_hashrate;
use thiserror::Error;
use tracing::debug;

/// Blocks per difficulty period (protocol retarget interval).
pub const RETARGET_INTERVAL: u64 = 2016;

const SECS_PER_DAY: u64 = 86_400;

/// When to stop walking the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopCondition {
    /// Walk until the source runs out of blocks.
    ChainTip,
    /// Stop once this many samples have been collected.
    Samples(usize),
    /// Stop at the first period starting this many days after genesis.
    Days(u64),
}

#[derive(Error, Debug)]
pub enum EstimateError {
    /// The chain ends before the requested range was covered.
    #[error("no block at height {missing_height} yet; {} samples collected before the chain ran out", .collected.len())]
    IncompleteData {
        missing_height: u64,
        collected: Vec<HashRateSample>,
    },

    /// Two consecutive anchors with a zero or negative time delta.
    #[error("degenerate interval between heights {from_height} and {to_height}: {from_time}s -> {to_time}s")]
    DegenerateInterval {
        from_height: u64,
        to_height: u64,
        from_time: u64,
        to_time: u64,
    },

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Walk `source` from genesis and derive one hash rate sample per completed
/// difficulty period, until `stop` is satisfied.
///
/// Samples come back in strictly ascending timestamp order, one per period
/// transition. The walk is strictly sequential and holds at most two block
/// headers at any point.
pub async fn estimate<S>(
    source: &S,
    stop: StopCondition,
) -> Result<Vec<HashRateSample>, EstimateError>
where
    S: BlockSource + ?Sized,
{
    let mut samples = Vec::new();

    let Some(genesis) = source.block_at(0).await? else {
        return Err(EstimateError::IncompleteData {
            missing_height: 0,
            collected: samples,
        });
    };

    let cutoff = match stop {
        StopCondition::Days(days) => {
            Some(genesis.time.saturating_add(days.saturating_mul(SECS_PER_DAY)))
        }
        _ => None,
    };

    let mut anchor = genesis;
    loop {
        if let StopCondition::Samples(limit) = stop {
            if samples.len() >= limit {
                break;
            }
        }
        if let Some(cutoff) = cutoff {
            if anchor.time >= cutoff {
                break;
            }
        }

        let next_height = anchor.height + RETARGET_INTERVAL;
        let next = match source.block_at(next_height).await? {
            Some(block) => block,
            None if stop == StopCondition::ChainTip => break,
            None => {
                return Err(EstimateError::IncompleteData {
                    missing_height: next_height,
                    collected: samples,
                });
            }
        };

        let sample = transition_sample(&anchor, &next)?;
        debug!(
            "period transition {} -> {}: {:.3e} H/s",
            anchor.height, next.height, sample.hashrate_hs
        );
        samples.push(sample);
        anchor = next;
    }

    Ok(samples)
}

/// Derive the sample for the transition from the period anchored at `start`
/// to the one anchored at `next`.
fn transition_sample(
    start: &BlockHeader,
    next: &BlockHeader,
) -> Result<HashRateSample, EstimateError> {
    let elapsed = next.time as i64 - start.time as i64;
    if elapsed <= 0 {
        return Err(EstimateError::DegenerateInterval {
            from_height: start.height,
            to_height: next.height,
            from_time: start.time,
            to_time: next.time,
        });
    }
    let elapsed = elapsed as u64;

    Ok(HashRateSample {
        height: start.height,
        timestamp: start.time,
        difficulty: start.difficulty,
        interval_secs: elapsed as f64 / RETARGET_INTERVAL as f64,
        subsidy_btc: block_subsidy(start.height),
        hashrate_hs: period_hashrate(start.difficulty, RETARGET_INTERVAL, elapsed),
    })
}
