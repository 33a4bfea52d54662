//! @ai:module:intent Aggregate types behind the dashboard panels
//! @ai:module:layer domain
//! @ai:module:public_api QuestionMean, CategoryCount, RatingMatrix, DashboardStats
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

/// Means below this value are flagged as critical.
pub const CRITICAL_MEAN_THRESHOLD: f64 = 3.0;

/// Lowest possible rating score.
pub const MIN_SCORE: f64 = 1.0;

/// Highest possible rating score.
pub const MAX_SCORE: f64 = 5.0;

/// @ai:intent Mean rating of one question across all rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionMean {
    pub question: String,
    pub mean: f64,
}

impl QuestionMean {
    /// @ai:intent Whether the mean falls below the critical threshold
    /// @ai:effects pure
    pub fn is_critical(&self) -> bool {
        self.mean < CRITICAL_MEAN_THRESHOLD
    }
}

/// @ai:intent Number of rows with a given categorical answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

impl CategoryCount {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// @ai:intent Mean rating per (question, hospitality area) pair
///
/// `values[q][a]` is the mean for `questions[q]` among rows of `areas[a]`,
/// `None` when no row of that area rated the question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingMatrix {
    pub questions: Vec<String>,
    pub areas: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl RatingMatrix {
    /// @ai:intent Look up one cell by labels
    /// @ai:effects pure
    pub fn get(&self, question: &str, area: &str) -> Option<f64> {
        let q = self.questions.iter().position(|x| x == question)?;
        let a = self.areas.iter().position(|x| x == area)?;
        self.values.get(q)?.get(a).copied().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty() || self.areas.is_empty()
    }
}

/// @ai:intent Everything the dashboard renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub participants: usize,
    /// Ascending by mean
    pub mean_ratings: Vec<QuestionMean>,
    /// Descending by count, at most ten entries
    pub ticket_sources: Vec<CategoryCount>,
    pub area_matrix: RatingMatrix,
    /// Fixed recommendation order, zero-filled
    pub recommendations: Vec<CategoryCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let at = QuestionMean {
            question: "q".to_string(),
            mean: 3.0,
        };
        let below = QuestionMean {
            question: "q".to_string(),
            mean: 2.99,
        };
        assert!(!at.is_critical());
        assert!(below.is_critical());
    }

    #[test]
    fn test_matrix_lookup() {
        let matrix = RatingMatrix {
            questions: vec!["q1".to_string(), "q2".to_string()],
            areas: vec!["A".to_string()],
            values: vec![vec![Some(4.5)], vec![None]],
        };

        assert_eq!(matrix.get("q1", "A"), Some(4.5));
        assert_eq!(matrix.get("q2", "A"), None);
        assert_eq!(matrix.get("q3", "A"), None);
    }
}
