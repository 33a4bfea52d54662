//! @ai:module:intent Dashboard statistics over survey datasets
//! @ai:module:layer application
//! @ai:module:public_api StatsAggregator, DashboardStats, QuestionMean, CategoryCount, RatingMatrix

pub mod aggregator;
pub mod types;

pub use aggregator::{
    area_rating_matrix, mean_ratings, recommendation_counts, ticket_source_counts,
    StatsAggregator, StatsAggregatorTrait, TOP_TICKET_SOURCES,
};
pub use types::{CategoryCount, DashboardStats, QuestionMean, RatingMatrix};
