//! @ai:module:intent Closed answer vocabularies and question keys of the hospitality survey
//! @ai:module:layer domain
//! @ai:module:public_api RecommendationLevel, HOSPITALITY_AREAS, TICKET_SOURCES, RATING_QUESTIONS
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

pub const HOSPITALITY_QUESTION: &str = "In welchem Hospitality-Bereich waren Sie zu Gast?";
pub const SPECIFICATION_QUESTION: &str = "Wenn Sie mögen, können Sie hier Ihren Bereich genauer spezifizieren (Lounge / Flügel / Rondell / Loge):";
pub const TICKET_QUESTION: &str = "Wie sind Sie an Ihr VIP-Ticket gekommen?";
pub const RATINGS_QUESTION: &str = "Wie bewerten Sie...";
pub const RECOMMENDATION_QUESTION: &str =
    "Würden Sie den VIP-Hospitality-Bereich des VfB Stuttgart weiterempfehlen?";
pub const COMMENT_QUESTION: &str =
    "Was hat Ihnen besonders gut gefallen oder wo sehen Sie Verbesserungsbedarf?";
pub const CONTACT_PREFERENCE_QUESTION: &str =
    "Möchten Sie zukünftig Informationen zu Hospitality-Angeboten des VfB Stuttgart erhalten?";
pub const CONTACT_QUESTION: &str = "Bitte tragen Sie für eine Kontaktaufnahme Ihre Daten ein [Name / Ggf. Unternehmen / E-Mail / Telefon]";

/// Prefix every rating question carries in the raw survey export.
pub const RATING_PREFIX: &str = "... ";

pub const HOSPITALITY_AREAS: [&str; 6] = [
    "Mercedes-Benz Business Center - Business Seat",
    "Mercedes-Benz Business Center - Loge",
    "Porsche Tunnel Club",
    "MECHATRONIK Württemberg Lounge - Business Seat",
    "MECHATRONIK Württemberg Lounge - Loge",
    "CLUB 1893",
];

pub const TICKET_SOURCES: [&str; 8] = [
    "Ich bin selbst VIP-Dauerkarteninhaber bzw. Unternehmens-Verantwortlicher",
    "Ich bin Mitarbeiter des Unternehmens",
    "Ich bin ein direkter Angehöriger (Familie/Freunde/Bekannte)",
    "Ich wurde als Geschäftspartner oder Kunde eingeladen",
    "Ich habe bei einem Gewinnspiel, Verlosung o.ä. teilgenommen",
    "Ich nutze Tageskarten (ohne Dauerkarten-Arrangement) als Ticketkäufer",
    "Ich nutze Tageskarten (ohne Dauerkarten-Arrangement) und wurde eingeladen",
    "",
];

pub const RATING_QUESTIONS: [&str; 10] = [
    "... die An- und Abreise bzw. Parkmöglichkeiten?",
    "... den Einlassprozess (Abwicklung / Dauer)?",
    "... den Hostessen-Service?",
    "... das Catering (Qualität & Auswahl)?",
    "... das Servicepersonal des Caterers?",
    "... die Atmosphäre & das Entertainment?",
    "... die Aktionsbereiche (Partner-Promotions / Getränke-Bars / Candy-Bar / Piano Bar)?",
    "... das Ambiente des Lounge- und Tischbereichs?",
    "... die Möglichkeit des Knüpfens bzw. Pflegens geschäftlicher Kontakte?",
    "... insgesamt Ihr Spieltagserlebnis?",
];

pub const SPECIFICATION_OPTIONS: [&str; 5] = ["Lounge", "Flügel", "Rondell", "Loge", ""];

pub const CONTACT_PREFERENCES: [&str; 2] = ["Ja, ich bin interessiert", "Nein"];

/// Scores a rating question can take, lowest first.
pub const RATING_SCORES: [u8; 5] = [1, 2, 3, 4, 5];

/// Sampling weights for [`RATING_SCORES`], skewed towards positive answers.
pub const RATING_WEIGHTS: [u32; 5] = [5, 10, 20, 40, 25];

/// @ai:intent Ordinal answer to the recommendation question
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationLevel {
    #[serde(rename = "Ja")]
    Yes,
    #[serde(rename = "Eher ja")]
    RatherYes,
    #[serde(rename = "Eher nein")]
    RatherNo,
    #[serde(rename = "Nein")]
    No,
}

impl RecommendationLevel {
    /// Display order, most positive first.
    pub const ALL: [RecommendationLevel; 4] = [
        RecommendationLevel::Yes,
        RecommendationLevel::RatherYes,
        RecommendationLevel::RatherNo,
        RecommendationLevel::No,
    ];

    /// Sampling weights aligned with [`RecommendationLevel::ALL`].
    pub const WEIGHTS: [u32; 4] = [40, 30, 20, 10];

    /// @ai:intent Convert level to its survey answer text
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationLevel::Yes => "Ja",
            RecommendationLevel::RatherYes => "Eher ja",
            RecommendationLevel::RatherNo => "Eher nein",
            RecommendationLevel::No => "Nein",
        }
    }

    /// @ai:intent Parse survey answer text into a level
    /// @ai:effects pure
    pub fn from_answer(answer: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == answer)
    }
}

impl std::fmt::Display for RecommendationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @ai:intent Strip the rating prefix for display
/// @ai:effects pure
pub fn strip_rating_prefix(question: &str) -> String {
    question.replace(RATING_PREFIX, "")
}
