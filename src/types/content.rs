//! Content and part types shared by requests and responses.

use serde::{Deserialize, Serialize};

/// A single turn of content, attributed to a role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Producer of the content: "user" or "model". Absent on system content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered parts making up the content.
    pub parts: Vec<Part>,
}

impl Content {
    /// A user turn with a single text part.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part::text(text)],
        }
    }

    /// A model turn with a single text part.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Some("model".to_string()),
            parts: vec![Part::text(text)],
        }
    }

    /// Role-less content used for system instructions.
    pub fn system_text(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }

    /// A user turn carrying arbitrary parts (e.g. image + instruction).
    pub fn user_parts(parts: Vec<Part>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts,
        }
    }

    /// Concatenated text of all text parts.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::Text { text } => Some(text.as_str()),
                Part::InlineData { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

/// A single part of a content turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
}

impl Part {
    /// A text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// An inline-data part from already base64-encoded bytes.
    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self::InlineData {
            inline_data: Blob {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }
}

/// Raw media bytes, base64-encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blob {
    /// IANA MIME type of the data.
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Base64-encoded bytes.
    pub data: String,
}

/// A candidate response from the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Generated content. May be absent when the candidate was blocked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// Why the model stopped generating, e.g. "STOP" or "MAX_TOKENS".
    #[serde(skip_serializing_if = "Option::is_none", rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_part_serializes_flat() {
        let value = serde_json::to_value(Part::text("hello")).unwrap();
        assert_eq!(value, serde_json::json!({ "text": "hello" }));
    }

    #[test]
    fn inline_data_part_uses_camel_case() {
        let value = serde_json::to_value(Part::inline_data("image/png", "QUJD")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "inlineData": { "mimeType": "image/png", "data": "QUJD" } })
        );
    }

    #[test]
    fn content_text_skips_inline_data_parts() {
        let content = Content::user_parts(vec![
            Part::inline_data("image/png", "QUJD"),
            Part::text("caption"),
        ]);
        assert_eq!(content.text(), "caption");
    }
}
