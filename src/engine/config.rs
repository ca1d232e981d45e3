//! Engine configuration.

use crate::error::SeatingError;

/// Tunable constants for classification and pair scoring.
///
/// The defaults reproduce the reference heuristic: quartile thresholds,
/// a 60% majority vote for levels, a 30% relative gap cap, and a level
/// proximity bonus that outweighs any single subject.
///
/// # Examples
///
/// ```
/// use seatwise::engine::ScoringConfig;
///
/// let config = ScoringConfig::default()
///     .with_max_relative_gap(0.25)
///     .with_majority_ratio(0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ScoringConfig {
    /// Position of the "excellent" threshold in the descending score order,
    /// as a fraction of the cohort size.
    pub excellent_quantile: f64,

    /// Position of the "poor" threshold in the descending score order.
    pub poor_quantile: f64,

    /// Offset from the average used when a threshold index is out of range.
    pub fallback_margin: f64,

    /// Fraction of a student's subjects that must be excellent (or poor)
    /// for the student to be classified excellent (or poor).
    pub majority_ratio: f64,

    /// Largest admissible `|avg1 - avg2|` relative to the pair's mean average.
    pub max_relative_gap: f64,

    /// Lower bound of the normalization range ceiling (scores are assumed
    /// to be on a 0..=100 scale unless the cohort goes higher).
    pub normalization_ceiling: f64,

    /// Normalized gap at which the difference bonus peaks.
    pub target_difference: f64,

    /// Normalized gap at or above which the difference bonus is zero.
    pub difference_cutoff: f64,

    /// Multiplier applied to each per-subject complement score.
    pub subject_weight: f64,

    /// Multiplier applied to the level proximity bonus.
    pub level_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            excellent_quantile: 0.25,
            poor_quantile: 0.75,
            fallback_margin: 10.0,
            majority_ratio: 0.6,
            max_relative_gap: 0.3,
            normalization_ceiling: 100.0,
            target_difference: 0.3,
            difference_cutoff: 0.6,
            subject_weight: 50.0,
            level_weight: 20.0,
        }
    }
}

impl ScoringConfig {
    pub fn with_quantiles(mut self, excellent: f64, poor: f64) -> Self {
        self.excellent_quantile = excellent;
        self.poor_quantile = poor;
        self
    }

    pub fn with_majority_ratio(mut self, ratio: f64) -> Self {
        self.majority_ratio = ratio;
        self
    }

    pub fn with_max_relative_gap(mut self, gap: f64) -> Self {
        self.max_relative_gap = gap;
        self
    }

    pub fn with_normalization_ceiling(mut self, ceiling: f64) -> Self {
        self.normalization_ceiling = ceiling;
        self
    }

    pub fn with_weights(mut self, subject: f64, level: f64) -> Self {
        self.subject_weight = subject;
        self.level_weight = level;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SeatingError> {
        let bad = |msg: String| Err(SeatingError::InvalidScoring(msg));

        for (name, q) in [
            ("excellent_quantile", self.excellent_quantile),
            ("poor_quantile", self.poor_quantile),
        ] {
            if !(0.0..1.0).contains(&q) {
                return bad(format!("{name} must be in [0, 1), got {q}"));
            }
        }
        if self.excellent_quantile > self.poor_quantile {
            return bad("excellent_quantile must not exceed poor_quantile".into());
        }
        if self.majority_ratio <= 0.0 || self.majority_ratio > 1.0 {
            return bad(format!(
                "majority_ratio must be in (0, 1], got {}",
                self.majority_ratio
            ));
        }
        if self.max_relative_gap < 0.0 {
            return bad(format!(
                "max_relative_gap must be non-negative, got {}",
                self.max_relative_gap
            ));
        }
        if self.normalization_ceiling <= 0.0 {
            return bad("normalization_ceiling must be positive".into());
        }
        if self.target_difference <= 0.0 || self.target_difference >= self.difference_cutoff {
            return bad("target_difference must be in (0, difference_cutoff)".into());
        }
        Ok(())
    }
}

/// Which arrangement algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Strategy {
    /// `Paired` for cohorts with two or more subjects, `Balanced` otherwise.
    #[default]
    Auto,

    /// Classify, pair complementary students, then seat pairs table by table.
    Paired,

    /// Skip pairing; balance per-table score sums with a two-pass greedy fill.
    Balanced,
}

/// Configuration for one seating run.
///
/// # Examples
///
/// ```
/// use seatwise::engine::{SeatingConfig, Strategy};
///
/// let config = SeatingConfig::default()
///     .with_strategy(Strategy::Paired)
///     .with_parallel(false);
/// assert_eq!(config.strategy, Strategy::Paired);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct SeatingConfig {
    pub strategy: Strategy,
    pub scoring: ScoringConfig,

    /// Whether to score candidate pairs in parallel using rayon.
    ///
    /// Ignored unless the `parallel` feature is enabled. Selection and
    /// placement are always sequential.
    pub parallel: bool,
}

impl SeatingConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
