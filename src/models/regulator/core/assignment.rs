use std::{fmt, ops::Index};

use crate::support::qualitative::Trend;

use super::{AssignmentError, Variable};

/// A trend for every regulator variable.
///
/// Every variable always has an entry.
/// Unspecified variables are [`Trend::Unknown`], and the material constants
/// (`rho`, `K`) are pinned to [`Trend::Constant`].
///
/// # Example
///
/// ```
/// use twine_qualitative::models::regulator::{Assignment, Variable};
/// use twine_qualitative::support::qualitative::Trend;
///
/// let assignment = Assignment::new()
///     .with(Variable::InletPressure, Trend::Increasing)?
///     .with(Variable::PiA1, Trend::Constant)?;
///
/// assert_eq!(assignment[Variable::InletPressure], Trend::Increasing);
/// assert_eq!(assignment[Variable::Flow], Trend::Unknown);
/// assert_eq!(assignment[Variable::SpringStiffness], Trend::Constant);
/// # Ok::<(), twine_qualitative::models::regulator::AssignmentError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    trends: [Trend; Variable::COUNT],
}

/// Outcome of offering an inferred trend to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Offer {
    /// The variable was unknown and now holds the offered trend.
    Assigned,
    /// The variable already held the offered trend.
    Agrees,
    /// The variable already held a different trend, returned here.
    Conflicts(Trend),
}

impl Assignment {
    /// Creates an assignment with every variable unknown except the constants.
    #[must_use]
    pub fn new() -> Self {
        let mut trends = [Trend::Unknown; Variable::COUNT];
        for variable in Variable::ALL {
            if variable.is_fixed_constant() {
                trends[variable.index()] = Trend::Constant;
            }
        }
        Self { trends }
    }

    /// Builds an assignment from `(variable, trend)` pairs.
    ///
    /// Later pairs overwrite earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::FixedConstant`] if a constant is given a
    /// trend other than `Constant`.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, AssignmentError>
    where
        I: IntoIterator<Item = (Variable, Trend)>,
    {
        pairs
            .into_iter()
            .try_fold(Self::new(), |assignment, (variable, trend)| {
                assignment.with(variable, trend)
            })
    }

    /// Builds an assignment from `(name, trend)` pairs.
    ///
    /// Names are variable symbols (`P_in`) or snake_case names
    /// (`inlet_pressure`).
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::UnknownVariable`] for a name that matches no
    /// variable, or [`AssignmentError::FixedConstant`] as for
    /// [`Assignment::from_pairs`].
    pub fn from_named<I, S>(pairs: I) -> Result<Self, AssignmentError>
    where
        I: IntoIterator<Item = (S, Trend)>,
        S: AsRef<str>,
    {
        pairs
            .into_iter()
            .try_fold(Self::new(), |assignment, (name, trend)| {
                let variable = name.as_ref().parse::<Variable>()?;
                assignment.with(variable, trend)
            })
    }

    /// Returns this assignment with `variable` set to `trend`.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::FixedConstant`] if `variable` is a constant
    /// and `trend` is not `Constant`.
    pub fn with(mut self, variable: Variable, trend: Trend) -> Result<Self, AssignmentError> {
        self.set(variable, trend)?;
        Ok(self)
    }

    /// Sets `variable` to `trend`.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::FixedConstant`] if `variable` is a constant
    /// and `trend` is not `Constant`.
    pub fn set(&mut self, variable: Variable, trend: Trend) -> Result<(), AssignmentError> {
        if variable.is_fixed_constant() && trend != Trend::Constant {
            return Err(AssignmentError::FixedConstant { variable, trend });
        }
        self.trends[variable.index()] = trend;
        Ok(())
    }

    /// Returns the trend held for `variable`.
    #[must_use]
    pub fn get(&self, variable: Variable) -> Trend {
        self.trends[variable.index()]
    }

    /// Iterates over every variable and its trend, in [`Variable::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, Trend)> + '_ {
        Variable::ALL.into_iter().map(|v| (v, self.get(v)))
    }

    /// Iterates over the variables that are still unknown.
    pub fn unknowns(&self) -> impl Iterator<Item = Variable> + '_ {
        self.iter()
            .filter(|(_, trend)| !trend.is_known())
            .map(|(variable, _)| variable)
    }

    /// Writes a trend for a variable that is not a material constant.
    pub(crate) fn put(&mut self, variable: Variable, trend: Trend) {
        debug_assert!(
            !variable.is_fixed_constant(),
            "{variable} is a fixed constant"
        );
        self.trends[variable.index()] = trend;
    }

    /// Offers an inferred trend for `variable`.
    ///
    /// Only unknown variables are written, so information is never lost.
    pub(crate) fn offer(&mut self, variable: Variable, trend: Trend) -> Offer {
        debug_assert!(trend.is_known(), "only known trends are offered");
        let slot = &mut self.trends[variable.index()];
        match *slot {
            Trend::Unknown => {
                *slot = trend;
                Offer::Assigned
            }
            held if held == trend => Offer::Agrees,
            held => Offer::Conflicts(held),
        }
    }
}

impl Default for Assignment {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Variable> for Assignment {
    type Output = Trend;

    fn index(&self, variable: Variable) -> &Trend {
        &self.trends[variable.index()]
    }
}

/// Formats as `P_in=I P_out=C ...`.
impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (variable, trend)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{variable}={}", trend.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::regulator::core::ParseVariableError;

    #[test]
    fn new_pins_constants_and_leaves_the_rest_unknown() {
        let assignment = Assignment::new();
        for (variable, trend) in assignment.iter() {
            let expected = if variable.is_fixed_constant() {
                Trend::Constant
            } else {
                Trend::Unknown
            };
            assert_eq!(trend, expected, "{variable}");
        }
        assert_eq!(assignment.unknowns().count(), Variable::COUNT - 2);
    }

    #[test]
    fn rejects_changing_a_constant() {
        let err = Assignment::new()
            .with(Variable::FluidDensity, Trend::Increasing)
            .unwrap_err();
        assert_eq!(
            err,
            AssignmentError::FixedConstant {
                variable: Variable::FluidDensity,
                trend: Trend::Increasing,
            }
        );

        assert!(
            Assignment::new()
                .with(Variable::SpringStiffness, Trend::Constant)
                .is_ok()
        );
    }

    #[test]
    fn builds_from_names() {
        let assignment =
            Assignment::from_named([("P_in", Trend::Increasing), ("flow", Trend::Decreasing)])
                .unwrap();
        assert_eq!(assignment[Variable::InletPressure], Trend::Increasing);
        assert_eq!(assignment[Variable::Flow], Trend::Decreasing);

        let err = Assignment::from_named([("T_in", Trend::Increasing)]).unwrap_err();
        assert_eq!(
            err,
            AssignmentError::UnknownVariable(ParseVariableError("T_in".into()))
        );
    }

    #[test]
    fn offer_never_overwrites_known_trends() {
        let mut assignment = Assignment::new();
        assert_eq!(
            assignment.offer(Variable::Flow, Trend::Increasing),
            Offer::Assigned
        );
        assert_eq!(
            assignment.offer(Variable::Flow, Trend::Increasing),
            Offer::Agrees
        );
        assert_eq!(
            assignment.offer(Variable::Flow, Trend::Decreasing),
            Offer::Conflicts(Trend::Increasing)
        );
        assert_eq!(assignment[Variable::Flow], Trend::Increasing);
    }

    #[test]
    fn displays_symbols() {
        let assignment = Assignment::new()
            .with(Variable::InletPressure, Trend::Increasing)
            .unwrap();
        let text = assignment.to_string();
        assert!(text.starts_with("P_in=I P_out=U Q=U"));
        assert!(text.contains("rho=C"));
    }
}
