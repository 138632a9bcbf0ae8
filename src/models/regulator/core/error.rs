use thiserror::Error;

use crate::support::qualitative::Trend;

use super::{ParseVariableError, Variable};

/// Errors that can occur while building an [`Assignment`](super::Assignment).
///
/// These are configuration mistakes by the caller, reported before any
/// propagation starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// A name did not match any regulator variable.
    #[error(transparent)]
    UnknownVariable(#[from] ParseVariableError),

    /// A material constant was given a trend other than `Constant`.
    #[error("{variable} is fixed during operation and cannot be {trend}")]
    FixedConstant {
        /// The constant that was targeted.
        variable: Variable,
        /// The rejected trend.
        trend: Trend,
    },
}
