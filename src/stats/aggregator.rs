//! @ai:module:intent Statistical aggregation of survey datasets
//! @ai:module:layer application
//! @ai:module:public_api StatsAggregator, mean_ratings, ticket_source_counts, area_rating_matrix, recommendation_counts
//! @ai:module:stateless true

use crate::dataset::{AggregateRow, Dataset};
use crate::stats::types::{CategoryCount, DashboardStats, QuestionMean, RatingMatrix};
use crate::survey::RecommendationLevel;
use std::collections::{BTreeMap, HashMap};

/// Number of ticket sources shown on the dashboard.
pub const TOP_TICKET_SOURCES: usize = 10;

/// @ai:intent Trait for dashboard aggregation
pub trait StatsAggregatorTrait {
    /// @ai:intent Compute all dashboard aggregates
    fn aggregate(&self, dataset: &Dataset) -> DashboardStats;
}

/// @ai:intent Computes the four dashboard aggregates
pub struct StatsAggregator;

impl StatsAggregator {
    /// @ai:intent Create a new stats aggregator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }
}

impl Default for StatsAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsAggregatorTrait for StatsAggregator {
    /// @ai:intent Aggregate dataset into dashboard stats
    /// @ai:effects pure
    fn aggregate(&self, dataset: &Dataset) -> DashboardStats {
        DashboardStats {
            participants: dataset.len(),
            mean_ratings: mean_ratings(dataset),
            ticket_sources: ticket_source_counts(dataset, TOP_TICKET_SOURCES),
            area_matrix: area_rating_matrix(dataset),
            recommendations: recommendation_counts(dataset),
        }
    }
}

/// @ai:intent Calculate average of an iterator of f64
/// @ai:effects pure
fn average<I: Iterator<Item = f64>>(iter: I) -> Option<f64> {
    let (sum, count) = iter.fold((0.0, 0u32), |(s, c), v| (s + v, c + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// @ai:intent Mean of each rating column, ascending
/// @ai:effects pure
pub fn mean_ratings(dataset: &Dataset) -> Vec<QuestionMean> {
    let mut means: Vec<QuestionMean> = dataset
        .rating_columns()
        .into_iter()
        .filter_map(|question| {
            let mean = average(
                dataset
                    .rows()
                    .iter()
                    .filter_map(|row| row.ratings.get(&question).copied()),
            )?;
            Some(QuestionMean { question, mean })
        })
        .collect();

    means.sort_by(|a, b| {
        a.mean
            .total_cmp(&b.mean)
            .then_with(|| a.question.cmp(&b.question))
    });
    means
}

/// @ai:intent Count rows per value and sort descending by count, then label
/// @ai:effects pure
fn count_by<'a, I: Iterator<Item = &'a str>>(values: I) -> Vec<CategoryCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    let mut counts: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(label, count)| CategoryCount::new(label, count))
        .collect();

    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    counts
}

/// @ai:intent Most frequent ticket sources, descending
/// @ai:effects pure
pub fn ticket_source_counts(dataset: &Dataset, limit: usize) -> Vec<CategoryCount> {
    let mut counts = count_by(dataset.rows().iter().map(|row| row.ticket_source.as_str()));
    counts.truncate(limit);
    counts
}

/// @ai:intent Mean rating per question and hospitality area
/// @ai:effects pure
pub fn area_rating_matrix(dataset: &Dataset) -> RatingMatrix {
    let mut by_area: BTreeMap<&str, Vec<&AggregateRow>> = BTreeMap::new();

    for row in dataset.rows() {
        by_area.entry(row.area.as_str()).or_default().push(row);
    }

    let questions = dataset.rating_columns();

    let values: Vec<Vec<Option<f64>>> = questions
        .iter()
        .map(|question| {
            by_area
                .values()
                .map(|rows| {
                    average(rows.iter().filter_map(|row| row.ratings.get(question).copied()))
                })
                .collect::<Vec<_>>()
        })
        .collect();

    RatingMatrix {
        areas: by_area.keys().map(|area| area.to_string()).collect(),
        questions,
        values,
    }
}

/// @ai:intent Recommendation counts in fixed order, missing levels as zero
/// @ai:effects pure
pub fn recommendation_counts(dataset: &Dataset) -> Vec<CategoryCount> {
    RecommendationLevel::ALL
        .iter()
        .map(|level| {
            let count = dataset
                .rows()
                .iter()
                .filter(|row| row.recommendation == level.as_str())
                .count();
            CategoryCount::new(level.as_str(), count)
        })
        .collect()
}
