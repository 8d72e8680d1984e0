//! Wire types for the Generative Language API and the crate's domain model.

mod content;
mod generation;
mod notes;

pub use content::{Blob, Candidate, Content, Part};
pub use generation::{
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, UsageMetadata,
};
pub use notes::{
    ClassificationEntry, ExamPoint, ImageData, StudyNotes, UserPreferences,
    UserPreferencesBuilder,
};
