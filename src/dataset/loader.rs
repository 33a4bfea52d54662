//! @ai:module:intent JSON survey directory loader
//! @ai:module:layer infrastructure
//! @ai:module:public_api DatasetLoader
//! @ai:module:stateless true

use crate::dataset::row::{AggregateRow, Dataset};
use crate::error::{Result, SurveyError};
use crate::survey::SurveyRecord;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// @ai:intent Trait for loading survey datasets
pub trait DatasetLoaderTrait {
    /// @ai:intent Load every parseable survey file of a directory
    fn load(&self, survey_dir: &Path) -> Result<Dataset>;
}

/// @ai:intent Loads survey records from a flat directory of JSON files
pub struct DatasetLoader;

impl DatasetLoader {
    /// @ai:intent Create a new dataset loader
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Parse a single survey file
    /// @ai:effects fs:read
    fn parse_survey_file(path: &Path) -> Result<SurveyRecord> {
        let content = std::fs::read_to_string(path).map_err(|source| SurveyError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(serde_json::from_str(&content)?)
    }

    /// @ai:intent Find JSON files directly inside the directory, sorted by name
    /// @ai:effects fs:read
    fn find_survey_files(survey_dir: &Path) -> Vec<PathBuf> {
        WalkDir::new(survey_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.path()
                    .extension()
                    .map(|ext| ext == "json")
                    .unwrap_or(false)
            })
            .map(|e| e.path().to_path_buf())
            .collect()
    }
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoaderTrait for DatasetLoader {
    /// @ai:intent Load survey files, skipping unreadable or malformed ones
    /// @ai:effects fs:read
    fn load(&self, survey_dir: &Path) -> Result<Dataset> {
        if !survey_dir.is_dir() {
            return Err(SurveyError::MissingDirectory(survey_dir.to_path_buf()));
        }

        let files = Self::find_survey_files(survey_dir);
        let mut rows = Vec::with_capacity(files.len());

        for path in files {
            match Self::parse_survey_file(&path) {
                Ok(record) => rows.push(AggregateRow::from(record)),
                Err(e) => {
                    tracing::debug!("Skipping survey file {}: {}", path.display(), e);
                }
            }
        }

        if rows.is_empty() {
            return Err(SurveyError::NoData(survey_dir.to_path_buf()));
        }

        tracing::info!("Loaded {} survey responses from {}", rows.len(), survey_dir.display());
        Ok(Dataset::new(rows))
    }
}
