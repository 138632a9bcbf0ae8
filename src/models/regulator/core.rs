//! Qualitative propagation for a spring-loaded pressure regulator.
//!
//! The regulator is described by six physical variables, two material
//! constants, and five dimensionless groups. Each group is a rule linking a
//! few physical variables. Starting from whatever trends the caller knows,
//! [`solve`] applies every rule repeatedly until nothing more can be inferred,
//! recording any disagreement between a rule and a held trend as a
//! [`Contradiction`].

mod assignment;
mod error;
mod observation;
mod rule;
mod scenario;
mod solve;
mod variable;

pub use assignment::Assignment;
pub use error::AssignmentError;
pub use observation::OperatingPoint;
pub use rule::{PHYSICAL_LINK, RULES, Relation, Rule, RuleId};
pub use scenario::Scenario;
pub use solve::{Contradiction, OnContradiction, Solution, SolveConfig, Status};
pub use variable::{ParseVariableError, Variable};

pub(super) use solve::solve;

pub(crate) use assignment::Offer;
