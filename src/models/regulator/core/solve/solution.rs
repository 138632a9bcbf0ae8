use std::fmt;

use crate::support::qualitative::Trend;

use super::super::{Assignment, RuleId, Variable};

/// A rule computed a trend that disagrees with an already held trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Contradiction {
    /// Rule that detected the disagreement.
    pub rule: RuleId,

    /// Variable in conflict.
    ///
    /// This is the rule's ratio when the operands disagree with it, or an
    /// operand when the ratio and the other operands disagree with that operand.
    pub variable: Variable,

    /// Trend the variable already held.
    pub stored: Trend,

    /// Trend the rule computed.
    pub computed: Trend,

    /// Pass (1-based) in which the disagreement was first detected.
    pub pass: usize,
}

impl fmt::Display for Contradiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on pass {}: {} is {} but the rule computes {}",
            self.rule, self.pass, self.variable, self.stored, self.computed
        )
    }
}

/// How propagation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A full pass changed nothing.
    Stable,

    /// Propagation stopped at a contradiction, as configured.
    Halted,
}

/// Result of propagating an initial assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Final trend of every variable.
    pub assignment: Assignment,

    /// Contradictions detected, in order of first detection.
    pub contradictions: Vec<Contradiction>,

    /// Number of passes run, including the final pass that changed nothing.
    pub passes: usize,

    /// How propagation ended.
    pub status: Status,
}

impl Solution {
    /// Returns `true` if any rule reported a contradiction.
    #[must_use]
    pub fn contradiction_found(&self) -> bool {
        !self.contradictions.is_empty()
    }

    /// Returns the contradictions detected by `rule`.
    pub fn contradictions_from(&self, rule: RuleId) -> impl Iterator<Item = &Contradiction> {
        self.contradictions.iter().filter(move |c| c.rule == rule)
    }
}
