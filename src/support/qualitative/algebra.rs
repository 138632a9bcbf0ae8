use std::ops::{Div, Mul};

use super::Trend;

/// Returns the trend of the product of two positive quantities.
///
/// - Unknown on either side gives Unknown.
/// - Constant is the identity.
/// - Matching directions keep that direction.
/// - Opposite directions give Unknown, since the result depends on magnitudes.
#[must_use]
pub fn product(a: Trend, b: Trend) -> Trend {
    match (a, b) {
        (Trend::Unknown, _) | (_, Trend::Unknown) => Trend::Unknown,
        (Trend::Constant, other) | (other, Trend::Constant) => other,
        (Trend::Increasing, Trend::Increasing) => Trend::Increasing,
        (Trend::Decreasing, Trend::Decreasing) => Trend::Decreasing,
        (Trend::Increasing, Trend::Decreasing) | (Trend::Decreasing, Trend::Increasing) => {
            Trend::Unknown
        }
    }
}

/// Returns the trend of `numerator / denominator` for positive quantities.
///
/// - Unknown on either side gives Unknown.
/// - A constant denominator passes the numerator through.
/// - Matching trends cancel to Constant.
/// - A constant numerator inverts the denominator.
/// - Opposite directions give Unknown.
#[must_use]
pub fn quotient(numerator: Trend, denominator: Trend) -> Trend {
    match (numerator, denominator) {
        (Trend::Unknown, _) | (_, Trend::Unknown) => Trend::Unknown,
        (n, Trend::Constant) => n,
        (n, d) if n == d => Trend::Constant,
        (Trend::Constant, d) => d.inverted(),
        _ => Trend::Unknown,
    }
}

impl Mul for Trend {
    type Output = Trend;

    fn mul(self, rhs: Self) -> Trend {
        product(self, rhs)
    }
}

impl Div for Trend {
    type Output = Trend;

    fn div(self, rhs: Self) -> Trend {
        quotient(self, rhs)
    }
}
