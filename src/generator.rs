//! @ai:module:intent Synthetic survey generation with positively skewed answers
//! @ai:module:layer application
//! @ai:module:public_api SurveyGenerator, SurveyGeneratorTrait, rng_from_seed
//! @ai:module:stateless true

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::survey::vocabulary::{
    CONTACT_PREFERENCES, HOSPITALITY_AREAS, RATING_QUESTIONS, RATING_SCORES, RATING_WEIGHTS,
    SPECIFICATION_OPTIONS, TICKET_SOURCES,
};
use crate::survey::{ChoiceAnswer, RecommendationLevel, SurveyAnswers, SurveyRecord};
use chrono::{DateTime, Utc};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// @ai:intent Trait for survey generation
pub trait SurveyGeneratorTrait {
    /// @ai:intent Generate `count` records numbered from 1
    fn generate<R: Rng + ?Sized>(&self, count: u32, rng: &mut R) -> Vec<SurveyRecord>;

    /// @ai:intent Write records as individual JSON files
    fn write_all(&self, records: &[SurveyRecord], output_dir: &Path) -> Result<Vec<PathBuf>>;
}

/// @ai:intent Generates plausible survey responses from the closed vocabularies
pub struct SurveyGenerator {
    event_name: String,
    kickoff: DateTime<Utc>,
    rating_dist: WeightedIndex<u32>,
    recommendation_dist: WeightedIndex<u32>,
}

/// @ai:intent Build the random source, seeded when a seed is given
/// @ai:effects random
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

impl SurveyGenerator {
    /// @ai:intent Create a generator for one event
    /// @ai:effects pure
    pub fn new(event_name: impl Into<String>, kickoff: DateTime<Utc>) -> Result<Self> {
        Ok(Self {
            event_name: event_name.into(),
            kickoff,
            rating_dist: WeightedIndex::new(RATING_WEIGHTS)?,
            recommendation_dist: WeightedIndex::new(RecommendationLevel::WEIGHTS)?,
        })
    }

    /// @ai:intent Create a generator from configuration
    /// @ai:effects pure
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        Self::new(config.event_name.clone(), config.kickoff)
    }

    /// @ai:intent File name of the record with the given 1-based index
    /// @ai:effects pure
    pub fn file_name(index: u32) -> String {
        format!("Simulated_Umfrage_{}.json", index)
    }

    /// @ai:intent Generate a single record
    /// @ai:effects random
    fn generate_record<R: Rng + ?Sized>(&self, index: u32, rng: &mut R) -> SurveyRecord {
        let ratings = RATING_QUESTIONS
            .iter()
            .map(|question| {
                let score = RATING_SCORES[self.rating_dist.sample(rng)];
                (question.to_string(), Some(f64::from(score)))
            })
            .collect();

        let recommendation = RecommendationLevel::ALL[self.recommendation_dist.sample(rng)];

        SurveyRecord {
            kickoff: Some(self.kickoff),
            event_name: Some(self.event_name.clone()),
            answers: SurveyAnswers {
                hospitality_area: Some(ChoiceAnswer::from_options(
                    &HOSPITALITY_AREAS,
                    pick(&HOSPITALITY_AREAS, rng),
                )),
                area_specification: Some(pick(&SPECIFICATION_OPTIONS, rng).to_string()),
                ticket_source: Some(ChoiceAnswer::from_options(
                    &TICKET_SOURCES,
                    pick(&TICKET_SOURCES, rng),
                )),
                ratings,
                recommendation: Some(recommendation.as_str().to_string()),
                comment: Some(format!("Simulierter Kommentar {}", index)),
                contact_preference: Some(pick(&CONTACT_PREFERENCES, rng).to_string()),
                contact: Some(format!("User {} / 555-01{:02}", index, index)),
            },
        }
    }

    /// @ai:intent Write one record as 4-space indented UTF-8 JSON
    /// @ai:effects fs:write
    fn write_record(record: &SurveyRecord, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);

        record.serialize(&mut serializer)?;
        writer.flush()?;
        Ok(())
    }
}

/// @ai:intent Uniform choice from a non-empty option list
/// @ai:effects random
fn pick<'a, R: Rng + ?Sized>(options: &[&'a str], rng: &mut R) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

impl SurveyGeneratorTrait for SurveyGenerator {
    /// @ai:intent Generate records 1..=count
    /// @ai:effects random
    fn generate<R: Rng + ?Sized>(&self, count: u32, rng: &mut R) -> Vec<SurveyRecord> {
        (1..=count)
            .map(|index| self.generate_record(index, rng))
            .collect()
    }

    /// @ai:intent Write records, creating the directory and overwriting same-named files
    /// @ai:effects fs:write
    fn write_all(&self, records: &[SurveyRecord], output_dir: &Path) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(output_dir)?;

        let mut written = Vec::with_capacity(records.len());

        for (index, record) in (1u32..).zip(records) {
            let path = output_dir.join(Self::file_name(index));
            Self::write_record(record, &path)?;
            written.push(path);
        }

        tracing::info!("Wrote {} survey files to {}", written.len(), output_dir.display());
        Ok(written)
    }
}
