//! Idea posts as served by the feed and sent on creation.

use crate::AttachmentKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server identifier of an idea; numeric or textual depending on backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(untagged)]
pub enum IdeaId {
    /// Numeric identifier
    Number(i64),
    /// String identifier
    Text(String),
}

/// An idea post in the feed.
///
/// # Examples
///
/// ```
/// use ideafeed_core::Idea;
///
/// let idea: Idea = serde_json::from_str(
///     r#"{"id": 7, "userName": "ana", "title": "Bike racks",
///         "description": "More of them", "supporting_documents": ["k1", "k2"]}"#,
/// ).unwrap();
///
/// assert_eq!(idea.user_name, "ana");
/// assert_eq!(idea.supporting_documents.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    /// Server identifier
    pub id: IdeaId,
    /// Author display name
    #[serde(rename = "userName", default)]
    pub user_name: String,
    /// Caption shown on the description slide
    pub title: String,
    /// Body shown on the description slide
    #[serde(default)]
    pub description: String,
    /// Attachment keys in display order
    #[serde(default)]
    pub supporting_documents: Vec<AttachmentKey>,
    /// Creation time, when the server provides it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of the idea creation request.
///
/// `supporting_documents` is positional: it lists storage keys in the
/// order the files were uploaded.
///
/// # Examples
///
/// ```
/// use ideafeed_core::NewIdea;
///
/// let body = NewIdea {
///     title: "Bike racks".to_string(),
///     description: "More of them".to_string(),
///     supporting_documents: vec!["ka".into(), "kb".into()],
/// };
/// let json = serde_json::to_value(&body).unwrap();
/// assert_eq!(json["supporting_documents"], serde_json::json!(["ka", "kb"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewIdea {
    /// Post title
    pub title: String,
    /// Post description
    pub description: String,
    /// Storage keys in upload order
    pub supporting_documents: Vec<AttachmentKey>,
}
