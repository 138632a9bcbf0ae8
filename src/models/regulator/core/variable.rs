use std::{fmt, str::FromStr};

use thiserror::Error;

/// A named quantity of the pressure regulator.
///
/// Six physical variables, two material constants, and the five
/// dimensionless groups that link them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variable {
    /// Upstream pressure `P_in`.
    InletPressure,
    /// Regulated downstream pressure `P_out`.
    OutletPressure,
    /// Volumetric flow through the valve `Q`.
    Flow,
    /// Valve opening area `A_open`.
    OpeningArea,
    /// Plunger displacement `x`.
    PlungerDisplacement,
    /// Spring force on the plunger `P`.
    SpringForce,
    /// Fluid density `rho`, fixed during operation.
    FluidDensity,
    /// Spring stiffness `K`, fixed during operation.
    SpringStiffness,
    /// `Pi_A1 = Q / (A_open * P_in)`.
    PiA1,
    /// `Pi_A2 = P_out / P_in`.
    PiA2,
    /// `Pi_B1 = x * P / K`.
    PiB1,
    /// `Pi_C1 = P / P_out`.
    PiC1,
    /// `Pi_C2 = x / A_open`.
    PiC2,
}

/// An error returned when a string names no regulator variable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown regulator variable `{0}`")]
pub struct ParseVariableError(pub(crate) String);

impl Variable {
    /// Number of variables.
    pub const COUNT: usize = 13;

    /// Every variable, in index order.
    pub const ALL: [Variable; Self::COUNT] = [
        Variable::InletPressure,
        Variable::OutletPressure,
        Variable::Flow,
        Variable::OpeningArea,
        Variable::PlungerDisplacement,
        Variable::SpringForce,
        Variable::FluidDensity,
        Variable::SpringStiffness,
        Variable::PiA1,
        Variable::PiA2,
        Variable::PiB1,
        Variable::PiC1,
        Variable::PiC2,
    ];

    /// The dimensionless groups.
    pub const RATIOS: [Variable; 5] = [
        Variable::PiA1,
        Variable::PiA2,
        Variable::PiB1,
        Variable::PiC1,
        Variable::PiC2,
    ];

    /// Returns `true` for the material constants, which never change.
    #[must_use]
    pub fn is_fixed_constant(self) -> bool {
        matches!(self, Self::FluidDensity | Self::SpringStiffness)
    }

    /// Position of this variable in [`Variable::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Conventional engineering symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::InletPressure => "P_in",
            Self::OutletPressure => "P_out",
            Self::Flow => "Q",
            Self::OpeningArea => "A_open",
            Self::PlungerDisplacement => "x",
            Self::SpringForce => "P",
            Self::FluidDensity => "rho",
            Self::SpringStiffness => "K",
            Self::PiA1 => "Pi_A1",
            Self::PiA2 => "Pi_A2",
            Self::PiB1 => "Pi_B1",
            Self::PiC1 => "Pi_C1",
            Self::PiC2 => "Pi_C2",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::InletPressure => "inlet_pressure",
            Self::OutletPressure => "outlet_pressure",
            Self::Flow => "flow",
            Self::OpeningArea => "opening_area",
            Self::PlungerDisplacement => "plunger_displacement",
            Self::SpringForce => "spring_force",
            Self::FluidDensity => "fluid_density",
            Self::SpringStiffness => "spring_stiffness",
            Self::PiA1 => "ratio_a1",
            Self::PiA2 => "ratio_a2",
            Self::PiB1 => "ratio_b1",
            Self::PiC1 => "ratio_c1",
            Self::PiC2 => "ratio_c2",
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Parses the exact symbol (`P_in`, `Pi_A1`) or the snake_case name
/// (`inlet_pressure`, `ratio_a1`), the latter ignoring case.
impl FromStr for Variable {
    type Err = ParseVariableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.symbol() == s || v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseVariableError(s.to_owned()))
    }
}
