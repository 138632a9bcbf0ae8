use std::{cmp::Ordering, fmt, ops::Sub, str::FromStr};

use num_traits::Zero;
use thiserror::Error;
use tracing::warn;

/// Direction of change of a positive quantity.
///
/// `Unknown` means no information is available.
/// It absorbs every qualitative operation it takes part in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Trend {
    /// The quantity is rising.
    Increasing,
    /// The quantity is falling.
    Decreasing,
    /// The quantity does not change.
    Constant,
    /// Nothing is known about the direction of change.
    #[default]
    Unknown,
}

/// An error returned when a string is not a recognized trend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid trend `{input}`: expected one of I, D, C, U")]
pub struct ParseTrendError {
    input: String,
}

impl ParseTrendError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Trend {
    /// All four trends.
    pub const ALL: [Trend; 4] = [
        Trend::Increasing,
        Trend::Decreasing,
        Trend::Constant,
        Trend::Unknown,
    ];

    /// Returns the opposite direction.
    ///
    /// `Constant` and `Unknown` have no direction and are returned unchanged.
    #[must_use]
    pub fn inverted(self) -> Self {
        match self {
            Self::Increasing => Self::Decreasing,
            Self::Decreasing => Self::Increasing,
            other => other,
        }
    }

    /// Returns `true` for anything other than [`Trend::Unknown`].
    #[must_use]
    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }

    /// Returns the single-letter symbol (`I`, `D`, `C` or `U`).
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Increasing => 'I',
            Self::Decreasing => 'D',
            Self::Constant => 'C',
            Self::Unknown => 'U',
        }
    }

    /// Classifies a signed change.
    ///
    /// Positive is `Increasing`, negative is `Decreasing`, zero is `Constant`.
    /// Values that cannot be compared (such as `NaN`) are `Unknown`.
    ///
    /// # Example
    ///
    /// ```
    /// use twine_qualitative::support::qualitative::Trend;
    ///
    /// assert_eq!(Trend::from_change(-0.5), Trend::Decreasing);
    /// assert_eq!(Trend::from_change(f64::NAN), Trend::Unknown);
    /// ```
    pub fn from_change<T: PartialOrd + Zero>(delta: T) -> Self {
        match delta.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Self::Increasing,
            Some(Ordering::Less) => Self::Decreasing,
            Some(Ordering::Equal) => Self::Constant,
            None => Self::Unknown,
        }
    }

    /// Classifies the change from `before` to `after`.
    ///
    /// Works for plain numbers and for `uom` quantities alike.
    pub fn between<T>(before: T, after: T) -> Self
    where
        T: Sub<Output = T> + PartialOrd + Zero,
    {
        Self::from_change(after - before)
    }

    /// Parses a trend, falling back to `Unknown` on invalid input.
    ///
    /// Empty input is silently `Unknown`.
    /// Anything else that fails to parse is logged and treated as `Unknown`.
    #[must_use]
    pub fn parse_or_unknown(input: &str) -> Self {
        if input.trim().is_empty() {
            return Self::Unknown;
        }
        input.parse().unwrap_or_else(|err: ParseTrendError| {
            warn!(input = err.input(), "invalid trend, using unknown");
            Self::Unknown
        })
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Increasing => "Increasing",
            Self::Decreasing => "Decreasing",
            Self::Constant => "Constant",
            Self::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Parses a symbol (`I`, `D`, `C`, `U`) or a full name, ignoring case.
impl FromStr for Trend {
    type Err = ParseTrendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "i" | "increasing" | "increased" => Ok(Self::Increasing),
            "d" | "decreasing" | "decreased" => Ok(Self::Decreasing),
            "c" | "constant" => Ok(Self::Constant),
            "u" | "unknown" => Ok(Self::Unknown),
            _ => Err(ParseTrendError {
                input: s.to_owned(),
            }),
        }
    }
}
