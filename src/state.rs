use faqdesk_backend::search::RelatedFaqEngine;

/// Shared application state / 共有アプリケーション状態
pub struct AppState {
    pub engine: RelatedFaqEngine,
}
