//! Declarative response schemas for structured output.
//!
//! The schema handed to the service as `responseSchema` is kept as a small
//! tagged tree and rendered to JSON, instead of being rebuilt as an ad-hoc
//! `json!` blob on every call. The study-notes schema is built once at module
//! initialization.

use std::sync::LazyLock;

use serde_json::{Value, json};

/// A node in the OpenAPI-subset schema tree accepted by the Gemini API.
#[derive(Debug, Clone)]
pub enum Schema {
    /// A plain string value.
    String {
        /// Optional description forwarded to the service.
        description: Option<&'static str>,
    },
    /// An array of homogeneous items.
    Array(Box<Schema>),
    /// An object with named properties and a required subset.
    Object {
        properties: Vec<(&'static str, Schema)>,
        required: &'static [&'static str],
    },
}

impl Schema {
    /// A string node with no description.
    pub const fn string() -> Self {
        Self::String { description: None }
    }

    /// A string node carrying a description.
    pub const fn described_string(description: &'static str) -> Self {
        Self::String {
            description: Some(description),
        }
    }

    /// An array node.
    pub fn array(items: Schema) -> Self {
        Self::Array(Box::new(items))
    }

    /// An object node.
    pub fn object(
        properties: Vec<(&'static str, Schema)>,
        required: &'static [&'static str],
    ) -> Self {
        Self::Object {
            properties,
            required,
        }
    }

    /// Render the tree into the JSON form the API expects.
    pub fn to_value(&self) -> Value {
        match self {
            Self::String { description } => match description {
                Some(desc) => json!({ "type": "STRING", "description": desc }),
                None => json!({ "type": "STRING" }),
            },
            Self::Array(items) => json!({ "type": "ARRAY", "items": items.to_value() }),
            Self::Object {
                properties,
                required,
            } => {
                let props: serde_json::Map<String, Value> = properties
                    .iter()
                    .map(|(name, schema)| ((*name).to_string(), schema.to_value()))
                    .collect();
                let mut out = json!({ "type": "OBJECT", "properties": props });
                if !required.is_empty() {
                    out["required"] = json!(required);
                }
                out
            }
        }
    }
}

static STUDY_NOTES_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    let classification_entry = Schema::object(
        vec![
            ("type", Schema::string()),
            ("explanation", Schema::string()),
        ],
        &["type", "explanation"],
    );
    let exam_point = Schema::object(
        vec![
            ("point", Schema::string()),
            (
                "mnemonic",
                Schema::described_string("Optional memory aid for this point"),
            ),
        ],
        &["point"],
    );

    Schema::object(
        vec![
            ("introduction", Schema::string()),
            ("definition", Schema::string()),
            ("classification", Schema::array(classification_entry)),
            ("detailedExplanation", Schema::array(Schema::string())),
            ("examples", Schema::array(Schema::string())),
            ("diagramDescription", Schema::string()),
            ("examPoints", Schema::array(exam_point)),
            ("shortAnswerQuestions", Schema::array(Schema::string())),
            ("longAnswerQuestions", Schema::array(Schema::string())),
            ("pyqs", Schema::array(Schema::string())),
            ("vivaQuestions", Schema::array(Schema::string())),
            ("clinicalCorrelation", Schema::string()),
        ],
        &[
            "introduction",
            "detailedExplanation",
            "examples",
            "examPoints",
            "shortAnswerQuestions",
            "longAnswerQuestions",
            "pyqs",
            "vivaQuestions",
        ],
    )
});

/// The response schema declared for study-notes generation.
pub fn study_notes_schema() -> &'static Schema {
    &STUDY_NOTES_SCHEMA
}
