//! Related-FAQ engine - extract, search, rank / 関連FAQエンジン
//!
//! Stateless pipeline: keyword extraction → candidate search (scoped then
//! broadened) → relevance ranking. Each call is independent; the engine
//! never writes, so concurrent invocations need no coordination beyond the
//! repository's own read handling.

use anyhow::Result;
use std::sync::Arc;

use super::keyword::extract_keywords;
use super::ranker::rank_candidates;
use super::repository::FaqRepository;
use super::searcher::CandidateSearcher;
use crate::models::FaqRecord;

/// Default result count when the caller gives no limit / 既定の件数
pub const DEFAULT_RELATED_LIMIT: usize = 10;

/// Finds FAQs related to a free-text inquiry / 問い合わせに関連するFAQを検索
pub struct RelatedFaqEngine {
    searcher: CandidateSearcher,
}

impl RelatedFaqEngine {
    pub fn new(repository: Arc<dyn FaqRepository>) -> Self {
        Self {
            searcher: CandidateSearcher::new(repository),
        }
    }

    /// Return at most `limit` FAQs, highest relevance first.
    ///
    /// Empty or symbol-only inquiry text yields an empty list without
    /// touching the repository; repository errors propagate unchanged.
    pub async fn find_related_faqs(
        &self,
        subject: &str,
        summary: Option<&str>,
        content: &str,
        category_id: Option<i64>,
        limit: usize,
    ) -> Result<Vec<FaqRecord>> {
        let keywords = extract_keywords(subject, summary, content);
        if keywords.is_empty() {
            tracing::debug!("No keywords extracted, skipping FAQ search");
            return Ok(Vec::new());
        }

        let candidates = self.searcher.search(&keywords, category_id, limit).await?;
        tracing::debug!(
            "Ranking {} candidates for {} keywords",
            candidates.len(),
            keywords.len()
        );

        Ok(rank_candidates(candidates, &keywords, category_id, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::repository::MemoryFaqRepository;
    use crate::search::score_candidate;

    fn faq(id: i64, question: &str, answer: &str, tags: Option<&str>, category_id: i64) -> FaqRecord {
        FaqRecord {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
            tags: tags.map(str::to_string),
            search_keywords: None,
            category_id,
            view_count: 0,
            priority: 1,
            is_active: true,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn engine(faqs: Vec<FaqRecord>) -> RelatedFaqEngine {
        RelatedFaqEngine::new(Arc::new(MemoryFaqRepository::new(faqs)))
    }

    #[tokio::test]
    async fn test_login_inquiry_prefers_tag_match() {
        // 代表シナリオ: ログインできません
        let e = engine(vec![
            faq(1, "接続の問題", "ログインを試す", None, 1),
            faq(2, "サインインの問題", "別の回答", Some("ログイン 認証"), 1),
        ]);

        let results = e
            .find_related_faqs("", None, "ログインできません", None, 10)
            .await
            .unwrap();
        assert_eq!(results.len(), 2);
        // Tag weight 4 beats answer weight 2 / タグ一致が上位
        assert_eq!(results[0].id, 2);
    }

    #[tokio::test]
    async fn test_empty_content_returns_empty() {
        let e = engine(vec![faq(1, "ログイン", "回答", None, 1)]);
        let results = e.find_related_faqs("", None, "", None, 10).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_result_bound_and_order() {
        let mut faqs = Vec::new();
        for i in 0..20 {
            let mut f = faq(i, "ログインの質問", "ログインの回答", None, 1);
            f.view_count = i * 10;
            faqs.push(f);
        }
        let e = engine(faqs);

        let limit = 5;
        let results = e
            .find_related_faqs("ログイン", None, "ログインできません", None, limit)
            .await
            .unwrap();
        assert!(results.len() <= limit);

        let kws = crate::search::extract_keywords("ログイン", None, "ログインできません");
        let scores: Vec<f64> = results
            .iter()
            .map(|f| score_candidate(f, &kws, None))
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn test_scoped_results_topped_up_from_other_categories() {
        let mut faqs = vec![
            faq(1, "ログイン不可", "回答", None, 3),
            faq(2, "ログインエラー", "回答", None, 3),
        ];
        for i in 0..5 {
            faqs.push(faq(10 + i, "ログイン関連", "回答", None, 7));
        }
        let e = engine(faqs);

        let results = e
            .find_related_faqs("", None, "ログインできません", Some(3), 10)
            .await
            .unwrap();
        // Only 7 matching FAQs exist / 該当は7件のみ
        assert_eq!(results.len(), 7);

        // Scoped FAQs carry the +2 category bonus and are otherwise
        // identical, so they rank first here / カテゴリ一致の2件が上位
        assert!(results[..2].iter().all(|f| f.category_id == 3));
    }

    #[tokio::test]
    async fn test_heavy_foreign_match_can_outrank_scoped() {
        let scoped = faq(1, "無関係の質問", "ログインに触れる回答", None, 3);
        let foreign = faq(2, "ログインできない", "ログインの回答", Some("ログイン"), 7);
        let e = engine(vec![scoped, foreign]);

        let results = e
            .find_related_faqs("", None, "ログインできません", Some(3), 10)
            .await
            .unwrap();
        assert_eq!(results.len(), 2);
        // 2 (answer) + 2 (category) < 3 + 2 + 4 / 多重一致が勝つ
        assert_eq!(results[0].id, 2);
    }
}
