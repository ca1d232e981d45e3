//! Student records and performance levels.

use std::collections::BTreeMap;
use std::fmt;

/// Subject key used for single-score cohorts.
pub const SINGLE_SUBJECT: &str = "score";

/// Discrete performance tier derived from quartile thresholds.
///
/// Ordered from weakest to strongest so that `Poor < Excellent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Level {
    Poor,
    #[default]
    Average,
    Good,
    Excellent,
}

impl Level {
    /// All levels, strongest first.
    pub const ALL: [Level; 4] = [Level::Excellent, Level::Good, Level::Average, Level::Poor];

    /// Numeric rank: excellent 4, good 3, average 2, poor 1.
    pub fn rank(self) -> u8 {
        match self {
            Level::Excellent => 4,
            Level::Good => 3,
            Level::Average => 2,
            Level::Poor => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Excellent => "excellent",
            Level::Good => "good",
            Level::Average => "average",
            Level::Poor => "poor",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A student with one or more subject scores.
///
/// `level` stays `None` until classification runs; every other derived value
/// (`total_score`, `average_score`) is computed from `scores` on demand.
///
/// # Examples
///
/// ```
/// use seatwise::model::Student;
///
/// let s = Student::new("s1", "Ada", 0)
///     .with_score("math", 90.0)
///     .with_score("physics", 70.0);
/// assert_eq!(s.total_score(), 160.0);
/// assert_eq!(s.average_score(), Some(80.0));
/// assert!(s.level.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Student {
    /// Stable, unique identity.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Subject name to score.
    pub scores: BTreeMap<String, f64>,

    /// Position in the caller's input, used for stable tie-breaking.
    pub original_index: usize,

    /// Performance level, attached by classification.
    #[cfg_attr(feature = "serde", serde(default))]
    pub level: Option<Level>,
}

impl Student {
    /// Creates a student with no scores.
    pub fn new(id: impl Into<String>, name: impl Into<String>, original_index: usize) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            scores: BTreeMap::new(),
            original_index,
            level: None,
        }
    }

    /// Creates a single-score student, keyed under [`SINGLE_SUBJECT`].
    pub fn with_single_score(
        id: impl Into<String>,
        name: impl Into<String>,
        score: f64,
        original_index: usize,
    ) -> Self {
        Self::new(id, name, original_index).with_score(SINGLE_SUBJECT, score)
    }

    /// Adds or replaces a subject score.
    pub fn with_score(mut self, subject: impl Into<String>, score: f64) -> Self {
        self.scores.insert(subject.into(), score);
        self
    }

    /// Score for `subject`, if recorded.
    pub fn score(&self, subject: &str) -> Option<f64> {
        self.scores.get(subject).copied()
    }

    /// Number of subjects with a recorded score.
    pub fn subject_count(&self) -> usize {
        self.scores.len()
    }

    /// Sum of all recorded scores.
    pub fn total_score(&self) -> f64 {
        self.scores.values().sum()
    }

    /// Mean of the recorded scores, `None` when nothing is recorded.
    pub fn average_score(&self) -> Option<f64> {
        if self.scores.is_empty() {
            None
        } else {
            Some(self.total_score() / self.scores.len() as f64)
        }
    }

    /// The attached level, or [`Level::Average`] before classification.
    pub fn level_or_default(&self) -> Level {
        self.level.unwrap_or_default()
    }
}
