//! Quality indicators: static definitions and their derivation from raw
//! metrics.

pub mod catalog;
pub mod engine;
pub mod format;

pub use catalog::{IndicatorDefinition, IndicatorKey, Locale};
pub use engine::{compute, IndicatorResult, IndicatorValue};
