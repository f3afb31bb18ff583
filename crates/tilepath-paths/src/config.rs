/// Search limits for a [`Pathfinder`](crate::Pathfinder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Stop after this many node expansions and report
    /// [`SearchOutcome::LimitReached`](crate::SearchOutcome::LimitReached).
    /// `None` means no limit.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Set the expansion limit (builder).
    #[inline]
    pub const fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }
}
