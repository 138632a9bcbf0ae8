//! The regulator's relationship rules.
//!
//! Each rule ties one dimensionless group to the physical variables it is
//! built from. Material constants (`rho`, `K`) only scale the groups, so they
//! are divided out of the relations.

mod relation;

pub use relation::Relation;

use std::fmt;

use tracing::debug;

use crate::support::qualitative::Trend;

use super::{Assignment, Offer, Variable};

/// Identifies a relationship rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleId {
    A1,
    A2,
    B1,
    C1,
    C2,
    /// Direct link between plunger displacement and opening area.
    Link,
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A1 => "R_A1",
            Self::A2 => "R_A2",
            Self::B1 => "R_B1",
            Self::C1 => "R_C1",
            Self::C2 => "R_C2",
            Self::Link => "L_x",
        };
        f.write_str(name)
    }
}

/// A relationship `ratio = relation(operands)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    id: RuleId,
    ratio: Variable,
    relation: Relation,
}

/// The rule table, in application order.
pub const RULES: [Rule; 5] = [
    Rule {
        id: RuleId::A1,
        ratio: Variable::PiA1,
        relation: Relation::QuotientOfProduct {
            numerator: Variable::Flow,
            denominator: [Variable::OpeningArea, Variable::InletPressure],
        },
    },
    Rule {
        id: RuleId::A2,
        ratio: Variable::PiA2,
        relation: Relation::Quotient {
            numerator: Variable::OutletPressure,
            denominator: Variable::InletPressure,
        },
    },
    Rule {
        id: RuleId::B1,
        ratio: Variable::PiB1,
        relation: Relation::Product {
            left: Variable::PlungerDisplacement,
            right: Variable::SpringForce,
        },
    },
    Rule {
        id: RuleId::C1,
        ratio: Variable::PiC1,
        relation: Relation::Quotient {
            numerator: Variable::SpringForce,
            denominator: Variable::OutletPressure,
        },
    },
    Rule {
        id: RuleId::C2,
        ratio: Variable::PiC2,
        relation: Relation::Quotient {
            numerator: Variable::PlungerDisplacement,
            denominator: Variable::OpeningArea,
        },
    },
];

/// Treats opening area as directly proportional to plunger displacement.
///
/// Not part of [`RULES`]. Propagation applies it after the table only when
/// [`SolveConfig::physical_link`] is set.
///
/// [`SolveConfig::physical_link`]: super::SolveConfig::physical_link
pub const PHYSICAL_LINK: Rule = Rule {
    id: RuleId::Link,
    ratio: Variable::OpeningArea,
    relation: Relation::Proportional {
        source: Variable::PlungerDisplacement,
    },
};

/// Outcome of applying a rule once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Unchanged,
    Changed,
    Conflict(Conflict),
}

/// A rule computed a trend that disagrees with the one already held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Conflict {
    pub(crate) variable: Variable,
    pub(crate) stored: Trend,
    pub(crate) computed: Trend,
}

impl Rule {
    /// Identifier of this rule.
    #[must_use]
    pub fn id(&self) -> RuleId {
        self.id
    }

    /// The variable this rule defines, a dimensionless group for every
    /// rule in [`RULES`].
    #[must_use]
    pub fn ratio(&self) -> Variable {
        self.ratio
    }

    /// Applies the rule once against `store`.
    ///
    /// Infers the ratio when the operands determine it.
    /// Otherwise, with the ratio known, infers a single missing operand or,
    /// when no operand is missing, checks whether the ratio and the other
    /// operands force some operand to move opposite to its held trend.
    /// Stops at the first conflict.
    pub(crate) fn apply(&self, store: &mut Assignment) -> Step {
        let computed = self.relation.evaluate(store);
        if computed.is_known() {
            return self.settle(store, self.ratio, computed);
        }

        let ratio = store[self.ratio];
        if !ratio.is_known() {
            return Step::Unchanged;
        }

        let (first, second) = {
            let mut missing = self.relation.operands().filter(|&v| !store[v].is_known());
            (missing.next(), missing.next())
        };

        match (first, second) {
            (Some(target), None) => {
                let solved = self.relation.solve_for(target, ratio, store);
                if solved.is_known() {
                    self.settle(store, target, solved)
                } else {
                    Step::Unchanged
                }
            }
            (None, _) => self.check_operands(store, ratio),
            (Some(_), Some(_)) => Step::Unchanged,
        }
    }

    /// Only a reversal counts. A `Constant` solved from cancelling trends does
    /// not pin the operand, since the operands alone leave the ratio open.
    fn check_operands(&self, store: &Assignment, ratio: Trend) -> Step {
        self.relation
            .operands()
            .find_map(|variable| {
                let computed = self.relation.solve_for(variable, ratio, store);
                let stored = store[variable];
                let reversed = computed != stored && computed == stored.inverted();
                reversed.then_some(Conflict {
                    variable,
                    stored,
                    computed,
                })
            })
            .map_or(Step::Unchanged, Step::Conflict)
    }

    fn settle(&self, store: &mut Assignment, variable: Variable, computed: Trend) -> Step {
        match store.offer(variable, computed) {
            Offer::Assigned => {
                debug!(rule = %self.id, %variable, trend = %computed, "inferred");
                Step::Changed
            }
            Offer::Agrees => Step::Unchanged,
            Offer::Conflicts(stored) => Step::Conflict(Conflict {
                variable,
                stored,
                computed,
            }),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} = {}", self.id, self.ratio, self.relation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::qualitative::Trend::{Constant, Decreasing, Increasing, Unknown};

    fn rule(id: RuleId) -> Rule {
        RULES
            .into_iter()
            .find(|r| r.id() == id)
            .expect("every id has a rule")
    }

    fn store(pairs: &[(Variable, Trend)]) -> Assignment {
        Assignment::from_pairs(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn table_covers_every_ratio_once() {
        let ratios: Vec<_> = RULES.iter().map(Rule::ratio).collect();
        assert_eq!(ratios, Variable::RATIOS);
    }

    #[test]
    fn forward_inference_assigns_unknown_ratio() {
        let mut s = store(&[
            (Variable::InletPressure, Increasing),
            (Variable::OutletPressure, Increasing),
        ]);
        assert_eq!(rule(RuleId::A2).apply(&mut s), Step::Changed);
        assert_eq!(s[Variable::PiA2], Constant);

        // A second application has nothing left to add.
        assert_eq!(rule(RuleId::A2).apply(&mut s), Step::Unchanged);
    }

    #[test]
    fn forward_inference_flags_mismatched_ratio() {
        let mut s = store(&[
            (Variable::InletPressure, Constant),
            (Variable::OutletPressure, Decreasing),
            (Variable::PiA2, Constant),
        ]);
        assert_eq!(
            rule(RuleId::A2).apply(&mut s),
            Step::Conflict(Conflict {
                variable: Variable::PiA2,
                stored: Constant,
                computed: Decreasing,
            })
        );
        assert_eq!(s[Variable::PiA2], Constant);
    }

    #[test]
    fn backward_inference_solves_missing_operand() {
        let mut s = store(&[
            (Variable::SpringForce, Increasing),
            (Variable::PiC1, Constant),
        ]);
        assert_eq!(rule(RuleId::C1).apply(&mut s), Step::Changed);
        assert_eq!(s[Variable::OutletPressure], Increasing);
    }

    #[test]
    fn backward_inference_through_product_denominator() {
        let mut s = store(&[
            (Variable::Flow, Constant),
            (Variable::InletPressure, Increasing),
            (Variable::PiA1, Constant),
        ]);
        assert_eq!(rule(RuleId::A1).apply(&mut s), Step::Changed);
        assert_eq!(s[Variable::OpeningArea], Decreasing);
    }

    #[test]
    fn two_missing_operands_are_left_alone() {
        let mut s = store(&[
            (Variable::InletPressure, Increasing),
            (Variable::PiA1, Constant),
        ]);
        assert_eq!(rule(RuleId::A1).apply(&mut s), Step::Unchanged);
        assert_eq!(s[Variable::Flow], Unknown);
        assert_eq!(s[Variable::OpeningArea], Unknown);
    }

    #[test]
    fn invariant_ratio_rejects_opposite_operands() {
        let mut s = store(&[
            (Variable::PlungerDisplacement, Increasing),
            (Variable::OpeningArea, Decreasing),
            (Variable::PiC2, Constant),
        ]);
        assert_eq!(
            rule(RuleId::C2).apply(&mut s),
            Step::Conflict(Conflict {
                variable: Variable::PlungerDisplacement,
                stored: Increasing,
                computed: Decreasing,
            })
        );
    }

    #[test]
    fn invariant_product_accepts_opposite_operands() {
        let mut s = store(&[
            (Variable::PlungerDisplacement, Increasing),
            (Variable::SpringForce, Decreasing),
            (Variable::PiB1, Constant),
        ]);
        assert_eq!(rule(RuleId::B1).apply(&mut s), Step::Unchanged);
    }

    #[test]
    fn rising_product_allows_one_falling_factor() {
        // x can outpace a falling spring force.
        let mut s = store(&[
            (Variable::PlungerDisplacement, Increasing),
            (Variable::SpringForce, Decreasing),
            (Variable::PiB1, Increasing),
        ]);
        assert_eq!(rule(RuleId::B1).apply(&mut s), Step::Unchanged);
    }

    #[test]
    fn invariant_a1_allows_opposing_denominator_factors() {
        let mut s = store(&[
            (Variable::Flow, Increasing),
            (Variable::OpeningArea, Increasing),
            (Variable::InletPressure, Decreasing),
            (Variable::PiA1, Constant),
        ]);
        assert_eq!(rule(RuleId::A1).apply(&mut s), Step::Unchanged);
    }

    #[test]
    fn link_copies_displacement_to_area() {
        let mut s = store(&[(Variable::PlungerDisplacement, Increasing)]);
        assert_eq!(PHYSICAL_LINK.apply(&mut s), Step::Changed);
        assert_eq!(s[Variable::OpeningArea], Increasing);

        let mut s = store(&[(Variable::OpeningArea, Decreasing)]);
        assert_eq!(PHYSICAL_LINK.apply(&mut s), Step::Changed);
        assert_eq!(s[Variable::PlungerDisplacement], Decreasing);
    }

    #[test]
    fn link_flags_diverging_displacement_and_area() {
        let mut s = store(&[
            (Variable::PlungerDisplacement, Increasing),
            (Variable::OpeningArea, Decreasing),
        ]);
        assert_eq!(
            PHYSICAL_LINK.apply(&mut s),
            Step::Conflict(Conflict {
                variable: Variable::OpeningArea,
                stored: Decreasing,
                computed: Increasing,
            })
        );
    }

    #[test]
    fn displays_equation() {
        assert_eq!(rule(RuleId::C2).to_string(), "R_C2: Pi_C2 = x / A_open");
        assert_eq!(PHYSICAL_LINK.to_string(), "L_x: A_open = x");
    }
}
