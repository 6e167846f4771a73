//! Validated domain types for split/reconstruct parameters
//!
//! The grouped share header stores indices and thresholds in 4-bit fields,
//! so every bound here tops out at 16:
//! - [`Threshold`] - shares or groups required for reconstruction (1..=16)
//! - [`ShareIndex`] - group or member index (0..=15)
//! - [`ShareCount`] - shares or groups issued (1..=16)
//! - [`GroupSpec`] / [`SlipConfig`] - validated grouped layouts
//! - [`SplitPlan`] - per-invocation parameters, tagged by standard

mod config;
mod share_count;
mod share_index;
mod threshold;

pub use config::{GroupSpec, SlipConfig, SplitPlan, Standard};
pub use share_count::ShareCount;
pub use share_index::ShareIndex;
pub use threshold::Threshold;
