//! Candidate search - scoped query with broadened top-up / 候補検索
//!
//! When a category hint is given the first query is scoped to it; if that
//! undershoots the limit a second query over the remaining categories tops
//! up the shortfall. The two phases are disjoint by category predicate, so
//! the combined list never contains the same FAQ twice.

use anyhow::Result;
use std::sync::Arc;

use super::repository::{CategoryFilter, FaqRepository};
use crate::models::FaqRecord;

/// Fetches candidate FAQs for a keyword set / キーワードから候補を取得
pub struct CandidateSearcher {
    repository: Arc<dyn FaqRepository>,
}

impl CandidateSearcher {
    pub fn new(repository: Arc<dyn FaqRepository>) -> Self {
        Self { repository }
    }

    /// Fetch up to `limit` candidates. Repository errors propagate to the
    /// caller; retries, if any, belong to the repository adapter.
    pub async fn search(
        &self,
        keywords: &[String],
        category_id: Option<i64>,
        limit: usize,
    ) -> Result<Vec<FaqRecord>> {
        if keywords.is_empty() {
            return Ok(Vec::new());
        }

        let scoped = match category_id {
            Some(id) => CategoryFilter::Only(id),
            None => CategoryFilter::Any,
        };
        let mut candidates = self
            .repository
            .find_active_by_keywords(keywords, scoped, limit)
            .await?;

        // Scoped search came up short: broaden to the other categories
        // for the remainder / 件数不足なら他カテゴリへ広げて補充
        if let Some(id) = category_id {
            if candidates.len() < limit {
                let shortfall = limit - candidates.len();
                let broadened = self
                    .repository
                    .find_active_by_keywords(keywords, CategoryFilter::Excluding(id), shortfall)
                    .await?;
                tracing::debug!(
                    "Broadened search added {} candidates to {} scoped",
                    broadened.len(),
                    candidates.len()
                );
                candidates.extend(broadened);
            }
        }

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::repository::MemoryFaqRepository;

    fn faq(id: i64, question: &str, category_id: i64) -> FaqRecord {
        FaqRecord {
            id,
            question: question.to_string(),
            answer: "回答".to_string(),
            tags: None,
            search_keywords: None,
            category_id,
            view_count: 0,
            priority: 1,
            is_active: true,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn searcher(faqs: Vec<FaqRecord>) -> CandidateSearcher {
        CandidateSearcher::new(Arc::new(MemoryFaqRepository::new(faqs)))
    }

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[tokio::test]
    async fn test_empty_keywords_issue_no_query() {
        let s = searcher(vec![faq(1, "ログイン", 1)]);
        let result = s.search(&[], Some(1), 10).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_scoped_then_broadened() {
        // 2 matches in category 3, 5 in other categories / カテゴリ3に2件、他に5件
        let mut faqs = vec![
            faq(1, "ログイン不可", 3),
            faq(2, "ログイン画面が出ない", 3),
        ];
        for i in 0..5 {
            faqs.push(faq(10 + i, "ログイン関連", 7));
        }
        let s = searcher(faqs);

        let result = s.search(&keywords(&["ログイン"]), Some(3), 10).await.unwrap();
        assert_eq!(result.len(), 7);
        // Scoped candidates come first, no duplicates / 重複なし
        assert_eq!(result[0].category_id, 3);
        assert_eq!(result[1].category_id, 3);
        let mut ids: Vec<i64> = result.iter().map(|f| f.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[tokio::test]
    async fn test_no_broadening_when_scoped_fills_limit() {
        let mut faqs = Vec::new();
        for i in 0..4 {
            faqs.push(faq(i, "ログイン手順", 3));
        }
        faqs.push(faq(99, "ログイン設定", 8));
        let s = searcher(faqs);

        let result = s.search(&keywords(&["ログイン"]), Some(3), 3).await.unwrap();
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|f| f.category_id == 3));
    }

    #[tokio::test]
    async fn test_unscoped_search_queries_once() {
        let s = searcher(vec![faq(1, "ログイン", 1), faq(2, "ログイン", 2)]);
        let result = s.search(&keywords(&["ログイン"]), None, 10).await.unwrap();
        assert_eq!(result.len(), 2);
    }
}
