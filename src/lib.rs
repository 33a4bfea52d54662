//! @ai:module:intent Hospitality survey generator and dashboard library
//! @ai:module:layer application
//! @ai:module:public_api config, survey, generator, dataset, stats, report

pub mod config;
pub mod dataset;
pub mod error;
pub mod generator;
pub mod report;
pub mod stats;
pub mod survey;

pub use config::SurveyConfig;
pub use dataset::{AggregateRow, Dataset, DatasetLoader};
pub use error::{Result, SurveyError};
pub use generator::{SurveyGenerator, SurveyGeneratorTrait};
pub use report::ReportGenerator;
pub use stats::{DashboardStats, StatsAggregator};
pub use survey::{RecommendationLevel, SurveyRecord};
