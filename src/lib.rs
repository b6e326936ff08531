//! Plotterm - a terminal calculator that evaluates and plots expressions.
//!
//! Plotterm evaluates single expressions through a pluggable evaluator and
//! plots expressions of `x` by sampling them across a numeric range.
//!
//! # Features
//!
//! - Range and step validation with user-readable messages
//! - Fail-fast sampling through an external evaluator
//! - Multiple plotted series with FIFO removal and marker toggling
//! - Bounded history of recent evaluations
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```
//! use plotterm::oracle::{ExpressionOracle, MevalInterpreter};
//! use plotterm::sampling::{RangeSpec, SampleSeriesBuilder};
//!
//! let range = RangeSpec::parse("0,10", "2", false)?;
//! let mut oracle = ExpressionOracle::new(MevalInterpreter::new());
//! let samples = SampleSeriesBuilder::default().build(&mut oracle, &range, "x^2")?;
//! assert_eq!(samples.len(), 6);
//! assert_eq!(samples[5].y, 100.0);
//! # Ok::<(), plotterm::PlottermError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod history;
pub mod oracle;
pub mod plot;
pub mod sampling;
pub mod ui;

pub use error::{PlottermError, Result};
