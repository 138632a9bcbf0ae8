//! Fixed-point propagation over the rule table.

mod config;
mod solution;

pub use config::{OnContradiction, SolveConfig};
pub use solution::{Contradiction, Solution, Status};

use tracing::{debug, debug_span, trace, warn};

use super::{
    Assignment,
    rule::{PHYSICAL_LINK, RULES, Step},
};

/// Propagates `initial` through every rule until a full pass changes nothing.
///
/// Rules are applied in table order, once per pass, followed by
/// [`PHYSICAL_LINK`] when the config enables it.
/// Variables only ever move from unknown to known, so the number of passes
/// is bounded by the number of variables plus one.
///
/// Contradictions are recorded once each, with the pass in which they were
/// first seen. Unless the config says to halt, they do not stop propagation.
/// The caller's assignment is never modified.
pub(crate) fn solve(initial: &Assignment, config: &SolveConfig) -> Solution {
    let _span = debug_span!("propagation").entered();

    let mut assignment = initial.clone();
    let mut contradictions = Vec::new();
    let mut passes = 0;
    let link = config.physical_link.then_some(PHYSICAL_LINK);

    let status = 'propagate: loop {
        passes += 1;
        let mut changed = false;

        for rule in RULES.iter().chain(link.as_ref()) {
            match rule.apply(&mut assignment) {
                Step::Unchanged => {}
                Step::Changed => changed = true,
                Step::Conflict(conflict) => {
                    let contradiction = Contradiction {
                        rule: rule.id(),
                        variable: conflict.variable,
                        stored: conflict.stored,
                        computed: conflict.computed,
                        pass: passes,
                    };
                    record(&mut contradictions, contradiction);

                    if config.on_contradiction == OnContradiction::Halt {
                        break 'propagate Status::Halted;
                    }
                }
            }
        }

        trace!(pass = passes, changed, %assignment, "pass complete");
        if !changed {
            break Status::Stable;
        }
    };

    debug!(
        passes,
        contradictions = contradictions.len(),
        unresolved = assignment.unknowns().count(),
        ?status,
        "propagation finished"
    );

    Solution {
        assignment,
        contradictions,
        passes,
        status,
    }
}

/// Appends `contradiction` unless the same disagreement was already recorded.
fn record(contradictions: &mut Vec<Contradiction>, contradiction: Contradiction) {
    let key = |c: &Contradiction| (c.rule, c.variable, c.stored, c.computed);
    if contradictions.iter().any(|c| key(c) == key(&contradiction)) {
        return;
    }

    warn!(
        rule = %contradiction.rule,
        variable = %contradiction.variable,
        stored = %contradiction.stored,
        computed = %contradiction.computed,
        pass = contradiction.pass,
        "contradiction"
    );
    contradictions.push(contradiction);
}
