//! Pharmacy image analysis (multimodal, free-form text output).

use tracing::error;

use crate::client::GeminiClient;
use crate::config::GeminiConfig;
use crate::error::MentorError;
use crate::types::{Content, GenerateContentRequest, ImageData, Part};

/// Fixed persona for image analysis.
const VISION_SYSTEM_INSTRUCTION: &str = "You are an expert pharmacy professor reviewing study \
material submitted by B.Pharm students. You identify what an image shows, place it in its \
academic context and point out anything incorrect or misleading in it.";

/// Fixed five-section instruction sent alongside the image.
const VISION_PROMPT: &str = "Analyze this pharmacy-related image and respond in markdown with \
exactly these five sections:\n\
## Identification\nWhat the image shows (drug, structure, apparatus, label, chart...).\n\
## Academic Context\nWhere this sits in the B.Pharm curriculum and the underlying theory.\n\
## Exam Focus\nWhat examiners ask about this and the points students must remember.\n\
## Practical & Safety\nHandling, dosing or laboratory safety considerations, as applicable.\n\
## Correction Note\nAnything wrong or outdated in the image; write \"None\" if it is accurate.";

/// Returned instead of failing when the service replies with no text.
const ANALYSIS_UNAVAILABLE: &str = "Analysis unavailable for this image.";

/// Shown to callers on any failure; the root cause stays in the error source.
const VISION_ERROR: &str = "Image analysis failed. Please try again.";

/// Image-analysis capability.
#[derive(Debug, Clone)]
pub struct ImageAnalyzer {
    client: GeminiClient,
}

impl ImageAnalyzer {
    /// Create an analyzer from the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: GeminiClient::new(config),
        }
    }

    /// Analyze a pharmacy-related image and return free-form markdown text.
    ///
    /// An empty reply yields the literal fallback string rather than an
    /// error. Any transport/API failure is surfaced with a fixed generic
    /// message; the original error is logged and preserved as the cause.
    pub async fn analyze_pharmacy_image(
        &self,
        image: &ImageData,
    ) -> Result<String, MentorError> {
        let request = GenerateContentRequest::new(vec![Content::user_parts(vec![
            Part::inline_data(image.mime_type.clone(), image.data.clone()),
            Part::text(VISION_PROMPT),
        ])])
        .with_system_instruction(Content::system_text(VISION_SYSTEM_INSTRUCTION));

        let response = self
            .client
            .generate_content(&request)
            .await
            .map_err(|err| {
                error!(error = %err, "image analysis request failed");
                MentorError::service_with_source(VISION_ERROR, err)
            })?;

        Ok(response
            .first_text()
            .unwrap_or_else(|| ANALYSIS_UNAVAILABLE.to_string()))
    }
}
