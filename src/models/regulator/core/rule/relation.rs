use std::fmt;

use crate::support::qualitative::{Trend, product, quotient};

use super::super::{Assignment, Variable};

/// Right-hand side of a rule `ratio = relation(operands)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `numerator / denominator`
    Quotient {
        numerator: Variable,
        denominator: Variable,
    },
    /// `left * right`
    Product { left: Variable, right: Variable },
    /// `numerator / (denominator[0] * denominator[1])`
    QuotientOfProduct {
        numerator: Variable,
        denominator: [Variable; 2],
    },
    /// `source`, for a direct proportionality.
    Proportional { source: Variable },
}

impl Relation {
    /// Iterates over the operands, numerator first.
    pub fn operands(self) -> impl Iterator<Item = Variable> {
        let (a, b, c) = match self {
            Self::Quotient {
                numerator,
                denominator,
            } => (numerator, Some(denominator), None),
            Self::Product { left, right } => (left, Some(right), None),
            Self::QuotientOfProduct {
                numerator,
                denominator: [d0, d1],
            } => (numerator, Some(d0), Some(d1)),
            Self::Proportional { source } => (source, None, None),
        };
        std::iter::once(a).chain(b).chain(c)
    }

    /// Evaluates the relation from the operand trends held in `store`.
    pub(crate) fn evaluate(self, store: &Assignment) -> Trend {
        match self {
            Self::Quotient {
                numerator,
                denominator,
            } => quotient(store[numerator], store[denominator]),
            Self::Product { left, right } => product(store[left], store[right]),
            Self::QuotientOfProduct {
                numerator,
                denominator: [d0, d1],
            } => quotient(store[numerator], product(store[d0], store[d1])),
            Self::Proportional { source } => store[source],
        }
    }

    /// Solves for `target` given the ratio and the other operands in `store`.
    ///
    /// Returns `Unknown` if `target` is not an operand of this relation.
    pub(crate) fn solve_for(self, target: Variable, ratio: Trend, store: &Assignment) -> Trend {
        match self {
            Self::Quotient {
                numerator,
                denominator,
            } => {
                if target == numerator {
                    product(ratio, store[denominator])
                } else if target == denominator {
                    quotient(store[numerator], ratio)
                } else {
                    Trend::Unknown
                }
            }
            Self::Product { left, right } => {
                if target == left {
                    quotient(ratio, store[right])
                } else if target == right {
                    quotient(ratio, store[left])
                } else {
                    Trend::Unknown
                }
            }
            Self::QuotientOfProduct {
                numerator,
                denominator: [d0, d1],
            } => {
                if target == numerator {
                    product(ratio, product(store[d0], store[d1]))
                } else if target == d0 {
                    quotient(quotient(store[numerator], ratio), store[d1])
                } else if target == d1 {
                    quotient(quotient(store[numerator], ratio), store[d0])
                } else {
                    Trend::Unknown
                }
            }
            Self::Proportional { source } => {
                if target == source {
                    ratio
                } else {
                    Trend::Unknown
                }
            }
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quotient {
                numerator,
                denominator,
            } => write!(f, "{numerator} / {denominator}"),
            Self::Product { left, right } => write!(f, "{left} * {right}"),
            Self::QuotientOfProduct {
                numerator,
                denominator: [d0, d1],
            } => write!(f, "{numerator} / ({d0} * {d1})"),
            Self::Proportional { source } => write!(f, "{source}"),
        }
    }
}
