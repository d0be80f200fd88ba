//! Configuration options for fuzzy matching and ranked search.
//!
//! [`MatchOptions`] carries the similarity threshold and the optional
//! edit-distance budget shared by [`fuzzy_match`](crate::fuzzy_match) and
//! [`fuzzy_search`](crate::fuzzy_search).

use thiserror::Error;

/// Default minimum n-gram similarity for a candidate to be accepted.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Permissive threshold used by [`fuzzy_includes`](crate::fuzzy_includes).
pub const INCLUDES_THRESHOLD: f64 = 0.3;

/// Error returned when validating [`MatchOptions`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    /// The threshold was NaN, infinite, or outside `[0, 1]`.
    #[error("threshold must be a finite value in [0, 1], got {0}")]
    InvalidThreshold(f64),
}

/// Options controlling when a non-substring candidate is accepted.
///
/// Substring hits are accepted regardless of these options. For everything
/// else, an explicit `max_distance` takes over from `threshold` entirely:
/// the candidate is accepted iff its Levenshtein distance to the query is at
/// most `max_distance`.
///
/// # Defaults
///
/// - `threshold`: `0.5` ([`DEFAULT_THRESHOLD`])
/// - `max_distance`: `None`
///
/// # Examples
///
/// ```
/// use fuzzyrank::MatchOptions;
///
/// let opts = MatchOptions::default();
/// assert_eq!(opts.threshold, 0.5);
/// assert_eq!(opts.max_distance, None);
///
/// let opts = MatchOptions::new(0.8).unwrap().with_max_distance(2);
/// assert_eq!(opts.max_distance, Some(2));
///
/// assert!(MatchOptions::new(1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOptions {
    /// Minimum n-gram similarity in `[0, 1]` for acceptance.
    pub threshold: f64,
    /// Edit-distance budget. When `Some`, replaces the threshold test.
    pub max_distance: Option<usize>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_distance: None,
        }
    }
}

impl MatchOptions {
    /// Build options with a validated threshold and no distance budget.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidThreshold`] when `threshold` is not a
    /// finite number in `[0, 1]`.
    pub fn new(threshold: f64) -> Result<Self, OptionsError> {
        Self::default().with_threshold(threshold).validated()
    }

    /// The permissive preset used by [`fuzzy_includes`](crate::fuzzy_includes).
    pub fn includes() -> Self {
        Self {
            threshold: INCLUDES_THRESHOLD,
            max_distance: None,
        }
    }

    /// Replace the similarity threshold. Not validated; see [`MatchOptions::validated`].
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set an edit-distance budget that overrides the threshold.
    #[must_use]
    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = Some(max_distance);
        self
    }

    /// Check the threshold and hand the options back unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidThreshold`] when `threshold` is not a
    /// finite number in `[0, 1]`.
    pub fn validated(self) -> Result<Self, OptionsError> {
        if self.threshold.is_finite() && (0.0..=1.0).contains(&self.threshold) {
            Ok(self)
        } else {
            Err(OptionsError::InvalidThreshold(self.threshold))
        }
    }
}
