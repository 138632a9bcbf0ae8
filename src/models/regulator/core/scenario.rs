use std::fmt;

use crate::support::qualitative::Trend::{self, Constant, Decreasing, Increasing};

use super::{Assignment, Variable};

/// Canned operating scenarios for the regulator.
///
/// Each scenario fixes a few trends and leaves the rest unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Inlet pressure rises, outlet pressure holds, `Pi_A1` invariant.
    InletRising,
    /// Inlet pressure holds, outlet pressure falls, `Pi_A1` invariant.
    OutletFalling,
    /// Both pressures rise, `Pi_A1` invariant.
    BothRising,
    /// Inlet pressure and opening area rise at fixed flow.
    InletRisingWithFixedFlow,
    /// Inlet pressure holds, outlet pressure rises.
    OutletRising,
    /// Only `Pi_A1` invariant; the starting point for manual entry.
    Manual,
}

impl Scenario {
    /// Every scenario.
    pub const ALL: [Scenario; 6] = [
        Scenario::InletRising,
        Scenario::OutletFalling,
        Scenario::BothRising,
        Scenario::InletRisingWithFixedFlow,
        Scenario::OutletRising,
        Scenario::Manual,
    ];

    /// The trends this scenario fixes.
    #[must_use]
    pub fn trends(self) -> &'static [(Variable, Trend)] {
        match self {
            Self::InletRising => &[
                (Variable::InletPressure, Increasing),
                (Variable::OutletPressure, Constant),
                (Variable::PiA1, Constant),
            ],
            Self::OutletFalling => &[
                (Variable::InletPressure, Constant),
                (Variable::OutletPressure, Decreasing),
                (Variable::PiA1, Constant),
            ],
            Self::BothRising => &[
                (Variable::InletPressure, Increasing),
                (Variable::OutletPressure, Increasing),
                (Variable::PiA1, Constant),
            ],
            Self::InletRisingWithFixedFlow => &[
                (Variable::InletPressure, Increasing),
                (Variable::Flow, Constant),
                (Variable::OpeningArea, Increasing),
            ],
            Self::OutletRising => &[
                (Variable::InletPressure, Constant),
                (Variable::OutletPressure, Increasing),
            ],
            Self::Manual => &[(Variable::PiA1, Constant)],
        }
    }

    /// Initial assignment for this scenario.
    #[must_use]
    pub fn initial(self) -> Assignment {
        let mut assignment = Assignment::new();
        for &(variable, trend) in self.trends() {
            assignment.put(variable, trend);
        }
        assignment
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InletRising => "P_out constant, P_in increasing",
            Self::OutletFalling => "P_in constant, P_out decreasing",
            Self::BothRising => "P_in increasing, P_out increasing",
            Self::InletRisingWithFixedFlow => "P_in increasing, P_out undetermined",
            Self::OutletRising => "P_in constant, P_out increasing",
            Self::Manual => "manual input",
        };
        f.write_str(text)
    }
}
