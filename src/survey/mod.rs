//! @ai:module:intent Survey document model and answer vocabularies
//! @ai:module:layer domain
//! @ai:module:public_api SurveyRecord, SurveyAnswers, ChoiceAnswer, RecommendationLevel

pub mod record;
pub mod vocabulary;

pub use record::{ChoiceAnswer, SurveyAnswers, SurveyRecord};
pub use vocabulary::RecommendationLevel;
