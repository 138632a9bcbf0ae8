//! # Twine Qualitative
//!
//! Qualitative-reasoning models for [Twine](https://github.com/isentropic-dev/twine).
//!
//! Instead of numbers, these models work with *trends*: whether each quantity
//! is increasing, decreasing, constant, or unknown. Known trends are
//! propagated through the dimensionless groups that describe a device until
//! nothing more can be inferred, and any rule that disagrees with a held
//! trend is reported as a contradiction.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models, including the
//!   qualitative algebra.
//!
//! Only the utilities in [`support`] and the types re-exported by each model
//! module are part of the public API. Model internals remain private.

pub mod models;
pub mod support;
