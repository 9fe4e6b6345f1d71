//! Relevance ranking - weighted field matches + popularity bonuses / 関連度ランキング
//!
//! Weights per keyword hit: question 3, answer 2, tags 4, search_keywords 2.
//! A matching category adds 2, the view count adds up to 1 (saturating at
//! 100 views), and each priority step adds 0.5.

use std::cmp::Ordering;

use crate::models::FaqRecord;

/// Compute the relevance score for one candidate / 候補1件のスコア計算
///
/// Keyword matches are plain substring checks against the stored text;
/// missing `tags` / `search_keywords` count as empty strings.
pub fn score_candidate(faq: &FaqRecord, keywords: &[String], category_id: Option<i64>) -> f64 {
    let tags = faq.tags.as_deref().unwrap_or("");
    let search_keywords = faq.search_keywords.as_deref().unwrap_or("");

    let mut score = 0.0;
    for keyword in keywords {
        let keyword = keyword.as_str();
        if faq.question.contains(keyword) {
            score += 3.0;
        }
        if faq.answer.contains(keyword) {
            score += 2.0;
        }
        if tags.contains(keyword) {
            score += 4.0;
        }
        if search_keywords.contains(keyword) {
            score += 2.0;
        }
    }

    if category_id == Some(faq.category_id) {
        score += 2.0;
    }

    // Popularity bonus saturates at 100 views / 閲覧数ボーナスは1.0で頭打ち
    score += (faq.view_count as f64 / 100.0).min(1.0);
    score += faq.priority as f64 * 0.5;

    score
}

/// Sort candidates by descending score and truncate to `limit` / スコア降順に整列
///
/// The sort is stable: candidates with equal scores keep their input order.
/// This function owns the final truncation; callers pass their limit through.
pub fn rank_candidates(
    candidates: Vec<FaqRecord>,
    keywords: &[String],
    category_id: Option<i64>,
    limit: usize,
) -> Vec<FaqRecord> {
    let mut scored: Vec<(f64, FaqRecord)> = candidates
        .into_iter()
        .map(|faq| (score_candidate(&faq, keywords, category_id), faq))
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored.truncate(limit);

    scored.into_iter().map(|(_, faq)| faq).collect()
}
