//! Range parsing and expression sampling.
//!
//! A [`RangeSpec`] is parsed from free-form text, then a
//! [`SampleSeriesBuilder`] evaluates an expression once per point.

mod builder;
mod range;

pub use builder::{Sample, SampleSeriesBuilder, SAMPLE_VARIABLE};
pub use range::{RangeSpec, DEFAULT_RANGE_TEXT, DEFAULT_STEP_TEXT};
