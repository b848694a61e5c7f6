//! Difficulty-period hash rate estimation for Bitcoin chains.
//!
//! Walks a chain from genesis in fixed difficulty-period steps and derives
//! one network hash rate sample per completed period transition. Block data
//! comes through the [`source::BlockSource`] capability, so the estimator
//! stays independent of any particular node transport.

pub mod estimator;
pub mod source;
pub mod subsidy;
pub mod types;
pub mod work;

pub use estimator::{estimate, EstimateError, StopCondition, RETARGET_INTERVAL};
pub use source::{BlockSource, SourceError};
pub use subsidy::{block_subsidy, HALVING_INTERVAL};
pub use types::{BlockHeader, HashRateSample};
pub use work::{expected_hashes, period_hashrate, HASHES_PER_DIFFICULTY};
