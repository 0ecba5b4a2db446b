//! Dashboard-compatible content records.
//!
//! The marketing dashboard ingests generated copy as `ContentItem` JSON;
//! the key set (`id`, `title`, `body`, `type`, `status`, `sku`,
//! `createdAt`) and the kebab-case type tokens are its contract.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    TiktokHook,
    SeoMeta,
    VideoScript,
    ProductDescription,
    SocialPost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Draft,
    Review,
    Approved,
    Published,
}

/// Single content piece produced by one of the generators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    /// Generated identifier, `"cg-"` plus 8 hex characters.
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub status: ContentStatus,
    /// Stock-keeping code when the content is tied to one product.
    /// Serialized as `null` rather than omitted — the dashboard expects
    /// the key to be present.
    pub sku: Option<String>,
    /// RFC 3339 UTC timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl ContentItem {
    /// Creates a draft item with a fresh id and the current timestamp.
    #[must_use]
    pub fn draft(title: impl Into<String>, body: impl Into<String>, kind: ContentType) -> Self {
        let uuid = Uuid::new_v4().simple().to_string();
        Self {
            id: format!("cg-{}", &uuid[..8]),
            title: title.into(),
            body: body.into(),
            content_type: kind,
            status: ContentStatus::Draft,
            sku: None,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}
