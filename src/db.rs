use anyhow::Result;
use sqlx::SqlitePool;

/// Run database migrations / データベースマイグレーション実行
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS faqs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            tags TEXT,
            search_keywords TEXT,
            category_id INTEGER NOT NULL,
            view_count INTEGER NOT NULL DEFAULT 0,
            priority INTEGER NOT NULL DEFAULT 1,
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Narrows the LIKE scan to active rows of one category / LIKE走査の絞り込み用
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_faqs_active_category ON faqs(is_active, category_id)",
    )
    .execute(pool)
    .await?;

    tracing::info!("Database migrations completed");
    Ok(())
}
