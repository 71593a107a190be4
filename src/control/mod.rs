//! Set-point storage and manual override flags.

pub mod overrides;
pub mod thresholds;

pub use overrides::{ForceMode, ForceOverride};
pub use thresholds::{ThresholdPair, ThresholdStore};
