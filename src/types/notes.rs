//! Domain model: user preferences in, study notes out.

use serde::{Deserialize, Serialize};

/// Caller-supplied preferences driving study-notes generation.
///
/// All fields are interpolated into the prompt as-is; nothing is validated
/// locally. Construct with [`UserPreferences::builder`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Subject the notes belong to, e.g. "Pharmacology".
    pub subject: String,
    /// Semester label, e.g. "Semester 5".
    pub semester: String,
    /// Topic to generate notes for.
    pub topic: String,
    /// Desired length/detail level, e.g. "comprehensive" or "concise".
    pub notes_length: String,
    /// Target institution; prompts fall back to a generic audience when absent.
    pub university: Option<String>,
    /// Ask the model to describe relevant diagrams.
    pub include_diagrams: bool,
    /// Ask the model for mnemonics on exam points.
    pub include_mnemonics: bool,
    /// Ask the model for a clinical-correlation section.
    pub include_clinical_correlation: bool,
}

impl UserPreferences {
    /// Start building preferences for the given subject, semester and topic.
    pub fn builder(
        subject: impl Into<String>,
        semester: impl Into<String>,
        topic: impl Into<String>,
    ) -> UserPreferencesBuilder {
        UserPreferencesBuilder {
            subject: subject.into(),
            semester: semester.into(),
            topic: topic.into(),
            notes_length: "comprehensive".to_string(),
            university: None,
            include_diagrams: false,
            include_mnemonics: false,
            include_clinical_correlation: false,
        }
    }
}

/// Builder for [`UserPreferences`].
#[derive(Debug, Clone)]
pub struct UserPreferencesBuilder {
    subject: String,
    semester: String,
    topic: String,
    notes_length: String,
    university: Option<String>,
    include_diagrams: bool,
    include_mnemonics: bool,
    include_clinical_correlation: bool,
}

impl UserPreferencesBuilder {
    /// Set the desired length/detail level.
    pub fn notes_length(mut self, length: impl Into<String>) -> Self {
        self.notes_length = length.into();
        self
    }

    /// Set the target institution.
    pub fn university(mut self, university: impl Into<String>) -> Self {
        self.university = Some(university.into());
        self
    }

    /// Request diagram descriptions.
    pub const fn include_diagrams(mut self, include: bool) -> Self {
        self.include_diagrams = include;
        self
    }

    /// Request mnemonics on exam points.
    pub const fn include_mnemonics(mut self, include: bool) -> Self {
        self.include_mnemonics = include;
        self
    }

    /// Request a clinical-correlation section.
    pub const fn include_clinical_correlation(mut self, include: bool) -> Self {
        self.include_clinical_correlation = include;
        self
    }

    /// Finish building.
    pub fn build(self) -> UserPreferences {
        UserPreferences {
            subject: self.subject,
            semester: self.semester,
            topic: self.topic,
            notes_length: self.notes_length,
            university: self.university,
            include_diagrams: self.include_diagrams,
            include_mnemonics: self.include_mnemonics,
            include_clinical_correlation: self.include_clinical_correlation,
        }
    }
}

/// Structured study notes parsed from the model's JSON reply.
///
/// Required fields have no serde defaults, so a payload missing any of them
/// fails deserialization instead of producing a partially-populated value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyNotes {
    /// Opening overview of the topic.
    pub introduction: String,
    /// Formal definition, when the topic has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// Classification of the topic into types, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Vec<ClassificationEntry>>,
    /// Main body, one paragraph per entry.
    #[serde(rename = "detailedExplanation")]
    pub detailed_explanation: Vec<String>,
    /// Worked examples.
    pub examples: Vec<String>,
    /// Text description of a relevant diagram, when requested.
    #[serde(skip_serializing_if = "Option::is_none", rename = "diagramDescription")]
    pub diagram_description: Option<String>,
    /// High-yield exam points, each optionally carrying a mnemonic.
    #[serde(rename = "examPoints")]
    pub exam_points: Vec<ExamPoint>,
    /// Likely short-answer questions.
    #[serde(rename = "shortAnswerQuestions")]
    pub short_answer_questions: Vec<String>,
    /// Likely long-answer questions.
    #[serde(rename = "longAnswerQuestions")]
    pub long_answer_questions: Vec<String>,
    /// Previous-year questions.
    pub pyqs: Vec<String>,
    /// Likely viva questions.
    #[serde(rename = "vivaQuestions")]
    pub viva_questions: Vec<String>,
    /// Clinical relevance of the topic, when requested.
    #[serde(skip_serializing_if = "Option::is_none", rename = "clinicalCorrelation")]
    pub clinical_correlation: Option<String>,
}

/// One entry of a topic classification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassificationEntry {
    /// Name of the class or type.
    #[serde(rename = "type")]
    pub entry_type: String,
    /// What distinguishes it.
    pub explanation: String,
}

/// A single high-yield exam point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExamPoint {
    /// The point itself.
    pub point: String,
    /// Optional memory aid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
}

/// An image payload for analysis: base64-encoded bytes plus MIME type.
///
/// The caller guarantees the encoding and the MIME type; neither is checked
/// locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageData {
    /// Base64-encoded image bytes.
    pub data: String,
    /// IANA MIME type, e.g. "image/png".
    pub mime_type: String,
}

impl ImageData {
    pub fn new(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Base64-encode raw bytes into an [`ImageData`].
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        use base64::Engine;
        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            mime_type: mime_type.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> serde_json::Value {
        json!({
            "introduction": "Beta blockers are...",
            "definition": "Drugs that antagonize beta-adrenergic receptors.",
            "classification": [
                { "type": "Non-selective", "explanation": "Block beta-1 and beta-2." },
                { "type": "Cardioselective", "explanation": "Preferentially block beta-1." }
            ],
            "detailedExplanation": ["Mechanism...", "Pharmacokinetics..."],
            "examples": ["Propranolol", "Atenolol"],
            "diagramDescription": "Receptor cascade diagram.",
            "examPoints": [
                { "point": "Contraindicated in asthma", "mnemonic": "B-BLOCKER" },
                { "point": "Mask hypoglycemia symptoms" }
            ],
            "shortAnswerQuestions": ["Define beta blockade."],
            "longAnswerQuestions": ["Discuss classification with examples."],
            "pyqs": ["Classify beta blockers. (2022)"],
            "vivaQuestions": ["Why avoid abrupt withdrawal?"],
            "clinicalCorrelation": "Used post-MI to reduce mortality."
        })
    }

    #[test]
    fn full_payload_round_trips_every_field() {
        let notes: StudyNotes = serde_json::from_value(full_payload()).unwrap();
        assert_eq!(notes.exam_points[0].mnemonic.as_deref(), Some("B-BLOCKER"));
        assert_eq!(notes.exam_points[1].mnemonic, None);
        assert_eq!(
            notes.classification.as_ref().unwrap()[1].entry_type,
            "Cardioselective"
        );

        let back = serde_json::to_value(&notes).unwrap();
        assert_eq!(back, full_payload());
    }

    #[test]
    fn missing_required_field_fails_deserialization() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("pyqs");
        let err = serde_json::from_value::<StudyNotes>(payload).unwrap_err();
        assert!(err.to_string().contains("pyqs"));
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let mut payload = full_payload();
        let obj = payload.as_object_mut().unwrap();
        obj.remove("definition");
        obj.remove("classification");
        obj.remove("diagramDescription");
        obj.remove("clinicalCorrelation");

        let notes: StudyNotes = serde_json::from_value(payload).unwrap();
        assert!(notes.definition.is_none());
        assert!(notes.classification.is_none());
        assert!(notes.diagram_description.is_none());
        assert!(notes.clinical_correlation.is_none());
    }

    #[test]
    fn preferences_builder_fills_defaults() {
        let prefs = UserPreferences::builder("Pharmacology", "Semester 5", "Beta blockers")
            .include_mnemonics(true)
            .build();
        assert_eq!(prefs.notes_length, "comprehensive");
        assert!(prefs.university.is_none());
        assert!(prefs.include_mnemonics);
        assert!(!prefs.include_diagrams);
    }

    #[test]
    fn image_data_from_bytes_encodes_base64() {
        let image = ImageData::from_bytes(b"ABC", "image/png");
        assert_eq!(image.data, "QUJD");
        assert_eq!(image.mime_type, "image/png");
    }
}
