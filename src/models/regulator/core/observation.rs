use std::ops::Sub;

use num_traits::Zero;
use uom::si::f64::{Area, Force, Length, Pressure, VolumeRate};

use crate::support::qualitative::Trend;

use super::{Assignment, Variable};

/// Measured state of the regulator's physical variables.
///
/// Unmeasured quantities are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OperatingPoint {
    pub inlet_pressure: Option<Pressure>,
    pub outlet_pressure: Option<Pressure>,
    pub flow: Option<VolumeRate>,
    pub opening_area: Option<Area>,
    pub plunger_displacement: Option<Length>,
    pub spring_force: Option<Force>,
}

impl Assignment {
    /// Derives physical trends from two measured operating points.
    ///
    /// A variable measured at both points gets the direction of its change.
    /// Anything else, including every dimensionless group, stays unknown.
    ///
    /// # Example
    ///
    /// ```
    /// use twine_qualitative::models::regulator::{Assignment, OperatingPoint, Variable};
    /// use twine_qualitative::support::qualitative::Trend;
    /// use uom::si::{f64::Pressure, pressure::kilopascal};
    ///
    /// let before = OperatingPoint {
    ///     inlet_pressure: Some(Pressure::new::<kilopascal>(800.0)),
    ///     ..OperatingPoint::default()
    /// };
    /// let after = OperatingPoint {
    ///     inlet_pressure: Some(Pressure::new::<kilopascal>(850.0)),
    ///     ..OperatingPoint::default()
    /// };
    ///
    /// let assignment = Assignment::from_operating_points(&before, &after);
    /// assert_eq!(assignment[Variable::InletPressure], Trend::Increasing);
    /// assert_eq!(assignment[Variable::OutletPressure], Trend::Unknown);
    /// ```
    #[must_use]
    pub fn from_operating_points(before: &OperatingPoint, after: &OperatingPoint) -> Self {
        let mut assignment = Self::new();
        let mut put = |variable, trend| assignment.put(variable, trend);

        put(
            Variable::InletPressure,
            change(before.inlet_pressure, after.inlet_pressure),
        );
        put(
            Variable::OutletPressure,
            change(before.outlet_pressure, after.outlet_pressure),
        );
        put(Variable::Flow, change(before.flow, after.flow));
        put(
            Variable::OpeningArea,
            change(before.opening_area, after.opening_area),
        );
        put(
            Variable::PlungerDisplacement,
            change(before.plunger_displacement, after.plunger_displacement),
        );
        put(
            Variable::SpringForce,
            change(before.spring_force, after.spring_force),
        );

        assignment
    }
}

fn change<T>(before: Option<T>, after: Option<T>) -> Trend
where
    T: Sub<Output = T> + PartialOrd + Zero,
{
    match (before, after) {
        (Some(before), Some(after)) => Trend::between(before, after),
        _ => Trend::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        area::square_millimeter, force::newton, length::millimeter, pressure::bar,
        volume_rate::liter_per_second,
    };

    use crate::models::regulator::core::{SolveConfig, solve};

    fn point(p_in: f64, p_out: f64, flow: f64, area: f64, x: f64, force: f64) -> OperatingPoint {
        OperatingPoint {
            inlet_pressure: Some(Pressure::new::<bar>(p_in)),
            outlet_pressure: Some(Pressure::new::<bar>(p_out)),
            flow: Some(VolumeRate::new::<liter_per_second>(flow)),
            opening_area: Some(Area::new::<square_millimeter>(area)),
            plunger_displacement: Some(Length::new::<millimeter>(x)),
            spring_force: Some(Force::new::<newton>(force)),
        }
    }

    #[test]
    fn classifies_each_measured_variable() {
        let before = point(8.0, 2.0, 1.0, 20.0, 3.0, 150.0);
        let after = point(9.0, 2.0, 0.8, 18.0, 3.0, 160.0);

        let assignment = Assignment::from_operating_points(&before, &after);
        assert_eq!(assignment[Variable::InletPressure], Trend::Increasing);
        assert_eq!(assignment[Variable::OutletPressure], Trend::Constant);
        assert_eq!(assignment[Variable::Flow], Trend::Decreasing);
        assert_eq!(assignment[Variable::OpeningArea], Trend::Decreasing);
        assert_eq!(assignment[Variable::PlungerDisplacement], Trend::Constant);
        assert_eq!(assignment[Variable::SpringForce], Trend::Increasing);
        assert!(Variable::RATIOS.iter().all(|&v| !assignment[v].is_known()));
    }

    #[test]
    fn missing_measurements_stay_unknown() {
        let before = OperatingPoint {
            flow: Some(VolumeRate::new::<liter_per_second>(1.0)),
            ..OperatingPoint::default()
        };
        let after = OperatingPoint::default();

        let assignment = Assignment::from_operating_points(&before, &after);
        assert_eq!(assignment[Variable::Flow], Trend::Unknown);
        assert_eq!(assignment[Variable::FluidDensity], Trend::Constant);
    }

    #[test]
    fn measured_points_feed_propagation() {
        let before = point(8.0, 2.0, 1.0, 20.0, 3.0, 150.0);
        let after = point(8.0, 2.5, 1.0, 20.0, 3.0, 150.0);

        let solution = solve(
            &Assignment::from_operating_points(&before, &after),
            &SolveConfig::default(),
        );
        assert_eq!(solution.assignment[Variable::PiA2], Trend::Increasing);
        assert_eq!(solution.assignment[Variable::PiC1], Trend::Decreasing);
        assert!(!solution.contradiction_found());
    }
}
