/// What propagation does once a contradiction has been found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnContradiction {
    /// Record it and keep propagating until the assignment is stable.
    #[default]
    Continue,

    /// Stop immediately and return the assignment as it stands.
    Halt,
}

/// Propagation configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveConfig {
    /// Contradiction handling policy.
    pub on_contradiction: OnContradiction,

    /// Applies [`PHYSICAL_LINK`] after the rule table on every pass.
    ///
    /// Off by default, as the link is an extra modelling assumption.
    ///
    /// [`PHYSICAL_LINK`]: super::super::PHYSICAL_LINK
    pub physical_link: bool,
}

impl SolveConfig {
    /// Configuration that stops at the first contradiction.
    #[must_use]
    pub fn halting() -> Self {
        Self {
            on_contradiction: OnContradiction::Halt,
            ..Self::default()
        }
    }

    /// Configuration that also applies the displacement/area link.
    #[must_use]
    pub fn linked() -> Self {
        Self {
            physical_link: true,
            ..Self::default()
        }
    }
}
