//! @ai:module:intent Survey record document as exchanged through JSON files
//! @ai:module:layer domain
//! @ai:module:public_api SurveyRecord, SurveyAnswers, ChoiceAnswer
//! @ai:module:stateless true

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// @ai:intent Decode a field, falling back to its default when the shape is wrong
/// @ai:effects pure
///
/// Used for fields the dashboard never aggregates, so a malformed timestamp or
/// contact line does not cost the whole response.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// @ai:intent One survey response, synthetic or exported
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyRecord {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub kickoff: Option<DateTime<Utc>>,
    #[serde(
        rename = "eventName",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_name: Option<String>,
    #[serde(default)]
    pub answers: SurveyAnswers,
}

/// @ai:intent Answers keyed by the literal question text
/// @ai:effects pure
///
/// Unknown questions are ignored on read. Every field is optional so that
/// partially filled exports still load. Choice answers and rating scores keep
/// their strict shape, the remaining answers decode leniently. An unanswered
/// rating is stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyAnswers {
    #[serde(
        rename = "In welchem Hospitality-Bereich waren Sie zu Gast?",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hospitality_area: Option<ChoiceAnswer>,

    #[serde(
        rename = "Wenn Sie mögen, können Sie hier Ihren Bereich genauer spezifizieren (Lounge / Flügel / Rondell / Loge):",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub area_specification: Option<String>,

    #[serde(
        rename = "Wie sind Sie an Ihr VIP-Ticket gekommen?",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ticket_source: Option<ChoiceAnswer>,

    #[serde(rename = "Wie bewerten Sie...", default)]
    pub ratings: BTreeMap<String, Option<f64>>,

    #[serde(
        rename = "Würden Sie den VIP-Hospitality-Bereich des VfB Stuttgart weiterempfehlen?",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub recommendation: Option<String>,

    #[serde(
        rename = "Was hat Ihnen besonders gut gefallen oder wo sehen Sie Verbesserungsbedarf?",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub comment: Option<String>,

    #[serde(
        rename = "Möchten Sie zukünftig Informationen zu Hospitality-Angeboten des VfB Stuttgart erhalten?",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact_preference: Option<String>,

    #[serde(
        rename = "Bitte tragen Sie für eine Kontaktaufnahme Ihre Daten ein [Name / Ggf. Unternehmen / E-Mail / Telefon]",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact: Option<String>,
}

/// @ai:intent Single-choice answer together with the options that were offered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoiceAnswer {
    #[serde(default, deserialize_with = "lenient")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
}

impl ChoiceAnswer {
    /// @ai:intent Build an answer from a fixed option list
    /// @ai:effects pure
    pub fn from_options(options: &[&str], selected: &str) -> Self {
        Self {
            options: options.iter().map(|o| o.to_string()).collect(),
            selected: Some(selected.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::vocabulary::{
        COMMENT_QUESTION, CONTACT_PREFERENCE_QUESTION, CONTACT_QUESTION, HOSPITALITY_QUESTION,
        RATINGS_QUESTION, RECOMMENDATION_QUESTION, SPECIFICATION_QUESTION, TICKET_QUESTION,
    };

    fn full_answers() -> SurveyAnswers {
        SurveyAnswers {
            hospitality_area: Some(ChoiceAnswer::from_options(&["A", "B"], "B")),
            area_specification: Some("Loge".to_string()),
            ticket_source: Some(ChoiceAnswer::from_options(&["X"], "X")),
            ratings: BTreeMap::from([("... q?".to_string(), Some(4.0))]),
            recommendation: Some("Ja".to_string()),
            comment: Some("gut".to_string()),
            contact_preference: Some("Nein".to_string()),
            contact: Some("User 1".to_string()),
        }
    }

    #[test]
    fn test_answer_keys_match_question_constants() {
        let value = serde_json::to_value(full_answers()).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            HOSPITALITY_QUESTION,
            SPECIFICATION_QUESTION,
            TICKET_QUESTION,
            RATINGS_QUESTION,
            RECOMMENDATION_QUESTION,
            COMMENT_QUESTION,
            CONTACT_PREFERENCE_QUESTION,
            CONTACT_QUESTION,
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(object.len(), 8);
    }

    #[test]
    fn test_parse_minimal_record() {
        let record: SurveyRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.event_name, None);
        assert_eq!(record.answers, SurveyAnswers::default());
    }

    #[test]
    fn test_parse_kickoff_and_event_name() {
        let json = r#"{"kickoff": "2023-10-01T15:00:00Z", "eventName": "Heimspiel", "answers": {}}"#;
        let record: SurveyRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.event_name.as_deref(), Some("Heimspiel"));
        assert_eq!(
            record.kickoff.map(|k| k.to_rfc3339()),
            Some("2023-10-01T15:00:00+00:00".to_string())
        );
    }

    #[test]
    fn test_unaggregated_fields_of_wrong_shape_are_dropped() {
        let json = r#"{
            "kickoff": "2023-10-01 15:00",
            "eventName": 42,
            "answers": {
                "In welchem Hospitality-Bereich waren Sie zu Gast?": {"options": "CLUB 1893", "selected": "CLUB 1893"},
                "Bitte tragen Sie für eine Kontaktaufnahme Ihre Daten ein [Name / Ggf. Unternehmen / E-Mail / Telefon]": 5550101,
                "Was hat Ihnen besonders gut gefallen oder wo sehen Sie Verbesserungsbedarf?": null,
                "Wie bewerten Sie...": {"... q?": null, "... r?": 3}
            }
        }"#;
        let record: SurveyRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.kickoff, None);
        assert_eq!(record.event_name, None);
        assert_eq!(record.answers.contact, None);
        assert_eq!(record.answers.comment, None);

        let area = record.answers.hospitality_area.unwrap();
        assert!(area.options.is_empty());
        assert_eq!(area.selected.as_deref(), Some("CLUB 1893"));

        assert_eq!(
            record.answers.ratings,
            BTreeMap::from([("... q?".to_string(), None), ("... r?".to_string(), Some(3.0))])
        );
    }

    #[test]
    fn test_non_numeric_rating_is_rejected() {
        let json = r#"{"answers": {"Wie bewerten Sie...": {"... q?": "fünf"}}}"#;
        assert!(serde_json::from_str::<SurveyRecord>(json).is_err());
    }

    #[test]
    fn test_choice_answer_as_plain_string_is_rejected() {
        let json = r#"{"answers": {"Wie sind Sie an Ihr VIP-Ticket gekommen?": "direkt"}}"#;
        assert!(serde_json::from_str::<SurveyRecord>(json).is_err());
    }
}
