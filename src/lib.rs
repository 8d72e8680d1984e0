//! Gemini-backed study assistant for pharmacy-education apps.
//!
//! Three operations, all thin wrappers over the Generative Language API:
//!
//! - [`PharmaMentor::generate_study_notes`] — structured study notes from
//!   user preferences, constrained by a declared JSON response schema.
//! - [`PharmaMentor::analyze_pharmacy_image`] — free-form markdown analysis
//!   of a pharmacy-related image.
//! - [`PharmaMentor::start_mentor_chat`] — a stateful mentor chat session;
//!   creation is local, the first request goes out on the first send.
//!
//! ```rust,no_run
//! use pharma_mentor::{PharmaMentor, UserPreferences};
//!
//! # async fn example() -> Result<(), pharma_mentor::MentorError> {
//! let mentor = PharmaMentor::from_env();
//! let prefs = UserPreferences::builder("Pharmacology", "Semester 5", "Beta blockers")
//!     .include_mnemonics(true)
//!     .build();
//! let notes = mentor.generate_study_notes(&prefs).await?;
//! println!("{}", notes.introduction);
//! # Ok(())
//! # }
//! ```

pub mod chat;
pub mod client;
pub mod config;
pub mod error;
pub mod notes;
pub mod schema;
pub mod types;
pub mod vision;

pub use chat::{MentorChat, MentorSession};
pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::MentorError;
pub use notes::NotesGenerator;
pub use schema::{Schema, study_notes_schema};
pub use types::{
    ClassificationEntry, Content, ExamPoint, ImageData, StudyNotes, UserPreferences,
};
pub use vision::ImageAnalyzer;

/// Facade over the three study-assistant operations.
///
/// Holds only the configuration; each call constructs its own capability and
/// HTTP client, so concurrent calls are independent by construction.
#[derive(Debug, Clone)]
pub struct PharmaMentor {
    config: GeminiConfig,
}

impl PharmaMentor {
    /// Create a facade from an explicit configuration.
    pub fn new(config: GeminiConfig) -> Self {
        Self { config }
    }

    /// Create a facade with the credential resolved from the environment.
    pub fn from_env() -> Self {
        Self::new(GeminiConfig::from_env())
    }

    /// Generate structured study notes for the given preferences.
    pub async fn generate_study_notes(
        &self,
        preferences: &UserPreferences,
    ) -> Result<StudyNotes, MentorError> {
        NotesGenerator::new(self.config.clone())
            .generate_study_notes(preferences)
            .await
    }

    /// Analyze a pharmacy-related image into free-form markdown.
    pub async fn analyze_pharmacy_image(&self, image: &ImageData) -> Result<String, MentorError> {
        ImageAnalyzer::new(self.config.clone())
            .analyze_pharmacy_image(image)
            .await
    }

    /// Open a mentor chat session. Performs no network call.
    pub fn start_mentor_chat(&self) -> MentorSession {
        MentorSession::new(self.config.clone())
    }
}
