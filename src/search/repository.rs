//! FAQ repository - the engine's only external boundary / FAQリポジトリ
//!
//! Matching semantics / 一致条件：
//! - a FAQ qualifies if ANY keyword occurs as a substring in ANY of
//!   {question, answer, tags, search_keywords}
//! - inactive FAQs are never returned
//! - the category predicate is explicit so the scoped and broadened search
//!   phases stay disjoint (`Only` vs `Excluding`)

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

use crate::models::FaqRecord;

/// Category predicate applied on top of the keyword match / カテゴリ条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No category restriction / 制限なし
    Any,
    /// Only FAQs in this category (scoped search) / このカテゴリのみ
    Only(i64),
    /// Every category except this one (broadened search) / このカテゴリ以外
    Excluding(i64),
}

/// Read-only access to the FAQ corpus / FAQコーパスへの読み取り
#[async_trait]
pub trait FaqRepository: Send + Sync {
    /// Fetch up to `limit` active FAQs where any keyword substring-matches
    /// any searchable field, further restricted by the category predicate.
    async fn find_active_by_keywords(
        &self,
        keywords: &[String],
        category: CategoryFilter,
        limit: usize,
    ) -> Result<Vec<FaqRecord>>;
}

const FAQ_COLUMNS: &str = "id, question, answer, tags, search_keywords, category_id, \
     view_count, priority, is_active, created_at, updated_at";

/// SQLite-backed repository (LIKE substring scan) / SQLite実装
///
/// The keyword predicate is rendered as parameterized SQL: one
/// `(question LIKE ? OR answer LIKE ? OR tags LIKE ? OR search_keywords LIKE ?)`
/// group per keyword, groups OR'd together. Naive by design; there is no
/// tokenized index behind this.
pub struct SqliteFaqRepository {
    db: Pool<Sqlite>,
}

impl SqliteFaqRepository {
    pub fn new(db: Pool<Sqlite>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FaqRepository for SqliteFaqRepository {
    async fn find_active_by_keywords(
        &self,
        keywords: &[String],
        category: CategoryFilter,
        limit: usize,
    ) -> Result<Vec<FaqRecord>> {
        if keywords.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let mut sql = format!("SELECT {} FROM faqs WHERE is_active = 1", FAQ_COLUMNS);
        match category {
            CategoryFilter::Any => {}
            CategoryFilter::Only(_) => sql.push_str(" AND category_id = ?"),
            CategoryFilter::Excluding(_) => sql.push_str(" AND category_id != ?"),
        }

        let group = "(question LIKE ? OR answer LIKE ? OR tags LIKE ? OR search_keywords LIKE ?)";
        sql.push_str(" AND (");
        for i in 0..keywords.len() {
            if i > 0 {
                sql.push_str(" OR ");
            }
            sql.push_str(group);
        }
        // Order by id so ties stay deterministic for the ranker / id順で安定化
        sql.push_str(") ORDER BY id LIMIT ?");

        let mut query = sqlx::query_as::<_, FaqRecord>(&sql);
        match category {
            CategoryFilter::Any => {}
            CategoryFilter::Only(id) | CategoryFilter::Excluding(id) => {
                query = query.bind(id);
            }
        }
        for keyword in keywords {
            let pattern = format!("%{}%", keyword);
            query = query
                .bind(pattern.clone())
                .bind(pattern.clone())
                .bind(pattern.clone())
                .bind(pattern);
        }
        query = query.bind(limit as i64);

        let records = query.fetch_all(&self.db).await?;
        tracing::debug!(
            "FAQ query matched {} records ({} keywords, {:?})",
            records.len(),
            keywords.len(),
            category
        );
        Ok(records)
    }
}

/// In-memory repository over a fixed corpus / メモリ内実装
///
/// Applies the same matching predicate as the SQLite adapter. Used in tests
/// and small embedded deployments where no database file is wanted.
pub struct MemoryFaqRepository {
    faqs: Vec<FaqRecord>,
}

impl MemoryFaqRepository {
    pub fn new(faqs: Vec<FaqRecord>) -> Self {
        Self { faqs }
    }

    fn matches_keywords(faq: &FaqRecord, keywords: &[String]) -> bool {
        keywords.iter().any(|k| {
            field_contains(&faq.question, k)
                || field_contains(&faq.answer, k)
                || faq.tags.as_deref().is_some_and(|t| field_contains(t, k))
                || faq
                    .search_keywords
                    .as_deref()
                    .is_some_and(|s| field_contains(s, k))
        })
    }
}

/// Substring check mirroring SQLite LIKE, which folds case for ASCII
/// letters only; non-ASCII text matches case-sensitively in both adapters.
/// / LIKE相当の部分一致（ASCIIのみ大文字小文字を無視）
fn field_contains(field: &str, keyword: &str) -> bool {
    field
        .to_ascii_lowercase()
        .contains(&keyword.to_ascii_lowercase())
}

#[async_trait]
impl FaqRepository for MemoryFaqRepository {
    async fn find_active_by_keywords(
        &self,
        keywords: &[String],
        category: CategoryFilter,
        limit: usize,
    ) -> Result<Vec<FaqRecord>> {
        if keywords.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let records = self
            .faqs
            .iter()
            .filter(|faq| faq.is_active)
            .filter(|faq| match category {
                CategoryFilter::Any => true,
                CategoryFilter::Only(id) => faq.category_id == id,
                CategoryFilter::Excluding(id) => faq.category_id != id,
            })
            .filter(|faq| Self::matches_keywords(faq, keywords))
            .take(limit)
            .cloned()
            .collect();

        Ok(records)
    }
}
