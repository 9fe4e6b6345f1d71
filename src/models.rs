use serde::{Deserialize, Serialize};

/// A single FAQ entry as stored in the catalog / FAQカタログの1件
///
/// The retrieval engine treats records as read-only snapshots; `tags` and
/// `search_keywords` are free-text maintenance fields and may be absent.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FaqRecord {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub tags: Option<String>,
    pub search_keywords: Option<String>,
    pub category_id: i64,
    pub view_count: i64,
    pub priority: i64,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}
