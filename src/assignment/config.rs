//! Assignment configuration.

/// Options for one assignment run.
///
/// # Examples
///
/// ```
/// use u_seating::assignment::AssignmentConfig;
///
/// let config = AssignmentConfig::default()
///     .with_relations(false)
///     .with_seed(7);
/// assert!(!config.use_relations);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentConfig {
    /// Whether the relation phase runs before zones.
    pub use_relations: bool,
    /// Random seed for reproducibility. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            use_relations: true,
            seed: None,
        }
    }
}

impl AssignmentConfig {
    /// Enables or disables the relation phase.
    pub fn with_relations(mut self, use_relations: bool) -> Self {
        self.use_relations = use_relations;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
