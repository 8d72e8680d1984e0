//! Study-notes generation with structured JSON output.

use tracing::error;

use crate::client::GeminiClient;
use crate::config::GeminiConfig;
use crate::error::MentorError;
use crate::schema::study_notes_schema;
use crate::types::{
    Content, GenerateContentRequest, GenerationConfig, StudyNotes, UserPreferences,
};

/// Fixed persona and formatting rules for notes generation.
const NOTES_SYSTEM_INSTRUCTION: &str = "You are an expert pharmacy professor with 20 years of \
experience teaching B.Pharm students in India. You write exam-oriented study notes that are \
accurate, well-structured and easy to revise. Always respond with JSON matching the requested \
schema. Keep language simple and precise, expand abbreviations on first use, and never invent \
references or previous-year questions you are not confident about.";

/// Shown to callers when the service fails without a usable message.
const NOTES_FALLBACK_ERROR: &str = "Failed to generate study notes. Please try again.";

/// Study-notes generation capability.
#[derive(Debug, Clone)]
pub struct NotesGenerator {
    client: GeminiClient,
}

impl NotesGenerator {
    /// Create a generator from the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: GeminiClient::new(config),
        }
    }

    /// Generate structured study notes for the given preferences.
    ///
    /// Issues one generateContent call with structured-output mode enabled
    /// and parses the reply into [`StudyNotes`]. An empty reply fails with
    /// [`MentorError::EmptyResponse`]; a non-JSON reply fails with
    /// [`MentorError::Parse`] after logging the offending text.
    pub async fn generate_study_notes(
        &self,
        preferences: &UserPreferences,
    ) -> Result<StudyNotes, MentorError> {
        let request = GenerateContentRequest::new(vec![Content::user(build_notes_prompt(
            preferences,
        ))])
        .with_system_instruction(Content::system_text(NOTES_SYSTEM_INSTRUCTION))
        .with_generation_config(
            GenerationConfig::new()
                .with_temperature(0.4)
                .with_response_mime_type("application/json")
                .with_response_schema(study_notes_schema().to_value()),
        );

        let response = self
            .client
            .generate_content(&request)
            .await
            .map_err(|err| {
                error!(error = %err, "study notes generation failed");
                match err {
                    // Service errors with a cause have no service-provided
                    // message (transport failures, envelope-less HTTP
                    // statuses); show the generic fallback instead.
                    MentorError::Service {
                        source: source @ Some(_),
                        ..
                    } => MentorError::Service {
                        message: NOTES_FALLBACK_ERROR.to_string(),
                        source,
                    },
                    other => other,
                }
            })?;

        let Some(text) = response.first_text() else {
            error!(topic = %preferences.topic, "service returned no text for study notes");
            return Err(MentorError::EmptyResponse);
        };

        serde_json::from_str::<StudyNotes>(&text).map_err(|err| {
            error!(raw = %text, "study notes reply was not valid JSON: {err}");
            MentorError::parse("the model reply was not valid study-notes JSON", err)
        })
    }
}

/// Interpolate every preference field into the per-call prompt.
fn build_notes_prompt(preferences: &UserPreferences) -> String {
    let university = preferences.university.as_deref().unwrap_or("your university");

    let mut prompt = format!(
        "Generate {length} study notes on the topic \"{topic}\" for the subject {subject} \
         ({semester}), tailored to the examination pattern of {university}.\n\n\
         Cover: introduction, definition, classification with explanations, a detailed \
         explanation in ordered paragraphs, concrete examples, high-yield exam points, \
         short answer questions, long answer questions, previous year questions (PYQs) \
         and viva questions.",
        length = preferences.notes_length,
        topic = preferences.topic,
        subject = preferences.subject,
        semester = preferences.semester,
    );

    if preferences.include_diagrams {
        prompt.push_str(
            "\nInclude a diagramDescription: a text description of the most useful diagram \
             for this topic.",
        );
    }
    if preferences.include_mnemonics {
        prompt.push_str("\nAttach a mnemonic to every exam point where a memorable one exists.");
    }
    if preferences.include_clinical_correlation {
        prompt.push_str(
            "\nInclude a clinicalCorrelation section connecting the topic to clinical practice.",
        );
    }

    prompt
}
