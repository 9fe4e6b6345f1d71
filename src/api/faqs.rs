//! Related-FAQ API / 関連FAQ API

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;
use faqdesk_backend::config;
use faqdesk_backend::models::FaqRecord;

use super::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct RelatedFaqRequest {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub content: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RelatedFaqItem {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub tags: Option<String>,
    pub category_id: i64,
    pub view_count: i64,
    pub priority: i64,
}

impl From<FaqRecord> for RelatedFaqItem {
    fn from(faq: FaqRecord) -> Self {
        Self {
            id: faq.id,
            question: faq.question,
            answer: faq.answer,
            tags: faq.tags,
            category_id: faq.category_id,
            view_count: faq.view_count,
            priority: faq.priority,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RelatedFaqResponse {
    pub results: Vec<RelatedFaqItem>,
    pub total: usize,
}

/// Find FAQs related to inquiry text / 問い合わせ本文に関連するFAQを検索
pub async fn find_related(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RelatedFaqRequest>,
) -> Json<ApiResponse<RelatedFaqResponse>> {
    if req.content.trim().is_empty() {
        return Json(ApiResponse::error("content must not be empty"));
    }

    let limit = match req.limit {
        Some(0) | None => config::config().search.default_related_limit,
        Some(n) => n,
    };

    match state
        .engine
        .find_related_faqs(
            &req.subject,
            req.summary.as_deref(),
            &req.content,
            req.category_id,
            limit,
        )
        .await
    {
        Ok(faqs) => {
            let results: Vec<RelatedFaqItem> = faqs.into_iter().map(Into::into).collect();
            let total = results.len();
            Json(ApiResponse::success(RelatedFaqResponse { results, total }))
        }
        Err(e) => {
            tracing::warn!("Related FAQ search failed: {}", e);
            Json(ApiResponse::error("related FAQ search failed"))
        }
    }
}
