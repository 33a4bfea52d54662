//! @ai:module:intent Flattened analysis rows built from survey records
//! @ai:module:layer domain
//! @ai:module:public_api AggregateRow, Dataset
//! @ai:module:stateless true

use crate::survey::vocabulary::{strip_rating_prefix, RATING_QUESTIONS};
use crate::survey::{ChoiceAnswer, SurveyRecord};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Event name used when a record carries none.
pub const UNKNOWN_EVENT: &str = "Unbekannt";

/// Placeholder for missing categorical answers.
pub const MISSING_ANSWER: &str = "N/A";

/// @ai:intent One survey response reduced to the fields the dashboard needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRow {
    pub event: String,
    pub area: String,
    pub ticket_source: String,
    pub recommendation: String,
    /// Rating score by question text without the `"... "` prefix
    pub ratings: BTreeMap<String, f64>,
}

impl From<SurveyRecord> for AggregateRow {
    fn from(record: SurveyRecord) -> Self {
        let answers = record.answers;

        let ratings = answers
            .ratings
            .into_iter()
            .filter_map(|(question, score)| Some((strip_rating_prefix(&question), score?)))
            .collect();

        AggregateRow {
            event: record.event_name.unwrap_or_else(|| UNKNOWN_EVENT.to_string()),
            area: selected_or_missing(answers.hospitality_area),
            ticket_source: selected_or_missing(answers.ticket_source),
            recommendation: answers
                .recommendation
                .unwrap_or_else(|| MISSING_ANSWER.to_string()),
            ratings,
        }
    }
}

fn selected_or_missing(answer: Option<ChoiceAnswer>) -> String {
    answer
        .and_then(|a| a.selected)
        .unwrap_or_else(|| MISSING_ANSWER.to_string())
}

/// @ai:intent Ordered collection of rows, one per parsed survey file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<AggregateRow>,
}

impl Dataset {
    /// @ai:intent Create a dataset from rows
    /// @ai:effects pure
    pub fn new(rows: Vec<AggregateRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[AggregateRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// @ai:intent List rating columns present in any row
    /// @ai:effects pure
    ///
    /// Known questions come first in questionnaire order, unknown ones follow
    /// alphabetically, so the result does not depend on row order.
    pub fn rating_columns(&self) -> Vec<String> {
        let present: BTreeSet<&str> = self
            .rows
            .iter()
            .flat_map(|row| row.ratings.keys().map(String::as_str))
            .collect();

        let known: Vec<String> = RATING_QUESTIONS
            .iter()
            .map(|q| strip_rating_prefix(q))
            .filter(|q| present.contains(q.as_str()))
            .collect();

        let extra = present
            .iter()
            .filter(|q| !known.iter().any(|k| k == *q))
            .map(|q| q.to_string());

        known.iter().cloned().chain(extra).collect()
    }
}

impl FromIterator<AggregateRow> for Dataset {
    fn from_iter<I: IntoIterator<Item = AggregateRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::SurveyAnswers;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flatten_full_record() {
        let record = SurveyRecord {
            kickoff: None,
            event_name: Some("Heimspiel".to_string()),
            answers: SurveyAnswers {
                hospitality_area: Some(ChoiceAnswer::from_options(&["CLUB 1893"], "CLUB 1893")),
                ticket_source: Some(ChoiceAnswer::from_options(&["Mitarbeiter"], "Mitarbeiter")),
                ratings: BTreeMap::from([
                    ("... den Hostessen-Service?".to_string(), Some(4.0)),
                    ("... insgesamt Ihr Spieltagserlebnis?".to_string(), Some(5.0)),
                    ("... das Catering (Qualität & Auswahl)?".to_string(), None),
                ]),
                recommendation: Some("Eher ja".to_string()),
                ..Default::default()
            },
        };

        let row = AggregateRow::from(record);

        assert_eq!(row.event, "Heimspiel");
        assert_eq!(row.area, "CLUB 1893");
        assert_eq!(row.ticket_source, "Mitarbeiter");
        assert_eq!(row.recommendation, "Eher ja");
        assert_eq!(row.ratings.get("den Hostessen-Service?"), Some(&4.0));
        assert_eq!(row.ratings.get("insgesamt Ihr Spieltagserlebnis?"), Some(&5.0));
        assert_eq!(row.ratings.get("das Catering (Qualität & Auswahl)?"), None);
        assert_eq!(row.ratings.len(), 2);
    }

    #[test]
    fn test_flatten_uses_placeholders() {
        let record = SurveyRecord {
            kickoff: None,
            event_name: None,
            answers: SurveyAnswers {
                hospitality_area: Some(ChoiceAnswer::default()),
                ..Default::default()
            },
        };

        let row = AggregateRow::from(record);

        assert_eq!(row.event, UNKNOWN_EVENT);
        assert_eq!(row.area, MISSING_ANSWER);
        assert_eq!(row.ticket_source, MISSING_ANSWER);
        assert_eq!(row.recommendation, MISSING_ANSWER);
        assert!(row.ratings.is_empty());
    }

    #[test]
    fn test_rating_columns_canonical_order() {
        let row = |keys: &[&str]| AggregateRow {
            event: "e".to_string(),
            area: "a".to_string(),
            ticket_source: "t".to_string(),
            recommendation: "Ja".to_string(),
            ratings: keys.iter().map(|k| (k.to_string(), 3.0)).collect(),
        };

        let dataset: Dataset = vec![
            row(&["insgesamt Ihr Spieltagserlebnis?", "Zusatzfrage"]),
            row(&["den Hostessen-Service?", "Andere Frage"]),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            dataset.rating_columns(),
            vec![
                "den Hostessen-Service?",
                "insgesamt Ihr Spieltagserlebnis?",
                "Andere Frage",
                "Zusatzfrage",
            ]
        );
    }
}
