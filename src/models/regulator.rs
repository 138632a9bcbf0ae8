//! Pressure regulator model.
//!
//! [`PressureRegulator`] is the [`twine_core::Model`] adapter over the
//! internal propagation core. Its input is an initial [`Assignment`] of
//! trends and its output is the [`Solution`] reached once no rule can infer
//! anything more.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_qualitative::models::regulator::{PressureRegulator, RuleId, Scenario, Variable};
//! use twine_qualitative::support::qualitative::Trend;
//!
//! let regulator = PressureRegulator::default();
//!
//! let solution = regulator.call(&Scenario::BothRising.initial()).unwrap();
//! assert!(!solution.contradiction_found());
//! assert_eq!(solution.assignment[Variable::PiA2], Trend::Constant);
//!
//! let initial = Scenario::OutletFalling
//!     .initial()
//!     .with(Variable::PiA2, Trend::Constant)?;
//! let solution = regulator.call(&initial).unwrap();
//! assert_eq!(solution.contradictions[0].rule, RuleId::A2);
//! # Ok::<(), twine_qualitative::models::regulator::AssignmentError>(())
//! ```

mod core;

pub use self::core::{
    Assignment, AssignmentError, Contradiction, OnContradiction, OperatingPoint,
    ParseVariableError, PHYSICAL_LINK, RULES, Relation, Rule, RuleId, Scenario, Solution, SolveConfig, Status,
    Variable,
};

use std::convert::Infallible;

use twine_core::Model;

/// Qualitative pressure regulator model.
///
/// Propagation cannot fail: missing information stays [`Trend::Unknown`]
/// and disagreements are reported in [`Solution::contradictions`].
///
/// [`Trend::Unknown`]: crate::support::qualitative::Trend::Unknown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressureRegulator {
    config: SolveConfig,
}

impl PressureRegulator {
    /// Creates a regulator model with the given propagation config.
    #[must_use]
    pub fn new(config: SolveConfig) -> Self {
        Self { config }
    }

    /// The propagation config in use.
    #[must_use]
    pub fn config(&self) -> &SolveConfig {
        &self.config
    }

    /// Propagates `initial` to a fixed point.
    ///
    /// Equivalent to [`Model::call`], without the `Result`.
    #[must_use]
    pub fn solve(&self, initial: &Assignment) -> Solution {
        self::core::solve(initial, &self.config)
    }
}

impl Model for PressureRegulator {
    type Input = Assignment;
    type Output = Solution;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.solve(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::qualitative::Trend;

    #[test]
    fn call_matches_solve() {
        let regulator = PressureRegulator::default();
        let initial = Scenario::OutletRising.initial();

        let Ok(called) = regulator.call(&initial);
        assert_eq!(called, regulator.solve(&initial));
    }

    #[test]
    fn config_is_forwarded() {
        let initial = Assignment::from_pairs([
            (Variable::InletPressure, Trend::Constant),
            (Variable::OutletPressure, Trend::Decreasing),
            (Variable::PiA2, Trend::Constant),
        ])
        .unwrap();

        let halting = PressureRegulator::new(SolveConfig::halting());
        assert_eq!(halting.config().on_contradiction, OnContradiction::Halt);
        assert_eq!(halting.solve(&initial).status, Status::Halted);

        let default = PressureRegulator::default();
        assert_eq!(default.solve(&initial).status, Status::Stable);
    }

    #[test]
    fn independent_sessions_share_nothing() {
        let regulator = PressureRegulator::default();
        let conflicted = Scenario::OutletFalling
            .initial()
            .with(Variable::PiA2, Trend::Constant)
            .unwrap();

        assert!(regulator.solve(&conflicted).contradiction_found());
        assert!(
            !regulator
                .solve(&Scenario::OutletFalling.initial())
                .contradiction_found()
        );
    }
}
