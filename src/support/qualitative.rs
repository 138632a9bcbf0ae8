//! Qualitative arithmetic over directions of change.
//!
//! A [`Trend`] records only whether a positive quantity is rising, falling,
//! holding steady, or unknown. This module provides the two operators needed
//! to reason about ratios of such quantities:
//!
//! - [`product`]: the trend of `a * b`
//! - [`quotient`]: the trend of `a / b`
//!
//! Both operators are total: every pair of trends has a result, and
//! [`Trend::Unknown`] is returned whenever the direction depends on
//! magnitudes that a trend does not carry.
//!
//! The same operators are available as `*` and `/` on [`Trend`].
//!
//! # Example
//!
//! ```
//! use twine_qualitative::support::qualitative::{Trend, product, quotient};
//!
//! assert_eq!(product(Trend::Increasing, Trend::Constant), Trend::Increasing);
//! assert_eq!(quotient(Trend::Constant, Trend::Decreasing), Trend::Increasing);
//! assert_eq!(Trend::Increasing / Trend::Increasing, Trend::Constant);
//! ```

mod algebra;
mod trend;

pub use algebra::{product, quotient};
pub use trend::{ParseTrendError, Trend};
