use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `kind` value marking a user-authored free-text entry. Every other value
/// denotes an entry derived from an original source.
pub const CUSTOM_KIND: &str = "custom";

/// A hit as stored and fetched, and the input of the display-path insert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub original: bool,
}

/// An incoming record on the textarea path. `original_index` and `original`
/// are not part of this shape; the insertion path computes them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewHit {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

impl NewHit {
    /// A user-authored free-text record.
    pub fn custom(text: impl Into<String>) -> Self {
        NewHit {
            kind: CUSTOM_KIND.to_string(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn is_custom(&self) -> bool {
        self.kind == CUSTOM_KIND
    }
}

/// Envelope written by `hits export` and accepted by `hits restore`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HitsExport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
    pub hits: Vec<Hit>,
}
