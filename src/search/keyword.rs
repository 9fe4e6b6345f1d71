//! Keyword extractor - turns free inquiry text into search keywords / キーワード抽出器
//!
//! Supports / 対応：
//! - Unicode normalization (full-width spaces, punctuation stripping) / 正規化
//! - Heuristic suffix stemming for Japanese inflections / 語尾ヒューリスティック
//! - Stopword filtering with a base-token fallback / ストップワード除去

use std::collections::HashSet;

/// Inflectional / particle endings stripped during stem expansion.
/// Order matters: longer compound endings are tried before their tails,
/// so `がうまくいきません` wins over `ません`. / 語尾リスト（長いものが先）
static SUFFIXES: &[&str] = &[
    "がうまくいきません",
    "ができません",
    "がうまくいかない",
    "ができない",
    "について",
    "できません",
    "できない",
    "します",
    "しない",
    "ます",
    "ません",
    "です",
    "でした",
    "が出る",
    "が出",
    "が",
    "を",
    "に",
    "で",
    "は",
    "と",
    "から",
    "まで",
];

/// Tokens that carry no search value on their own. / 検索価値のない語
static STOPWORDS: &[&str] = &[
    "について", "です", "ます", "する", "した", "して", "される", "ある", "いる",
    "ない", "お", "ご", "の", "を", "に", "は", "で", "と", "から", "まで",
];

/// Extract deduplicated search keywords from inquiry text / 問い合わせ本文からキーワードを抽出
///
/// Keywords are lowercase, at least 2 code points long, and expanded with
/// progressively shortened stems so that inflected forms like
/// `ログインできません` also match a FAQ tagged `ログイン`.
/// Insertion order is preserved for deterministic behavior.
pub fn extract_keywords(subject: &str, summary: Option<&str>, content: &str) -> Vec<String> {
    let base = base_tokens(subject, summary, content);

    // Stem expansion: each base token followed by its chain of stems / 語幹展開
    let mut keywords: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for token in &base {
        push_unique(&mut keywords, &mut seen, token.clone());

        let mut current = token.clone();
        for suffix in SUFFIXES {
            if let Some(stem) = current.strip_suffix(suffix) {
                if stem.chars().count() >= 2 && stem != current {
                    let stem = stem.to_string();
                    push_unique(&mut keywords, &mut seen, stem.clone());
                    // Keep stripping from the shorter stem / 短い語幹から続行
                    current = stem;
                }
            }
        }
    }

    // Stopword filter / ストップワード除去
    keywords.retain(|k| !STOPWORDS.contains(&k.as_str()) && k.chars().count() >= 2);

    // Too few survivors: fall back to the first base tokens so a short
    // inquiry still produces a usable query / 残りが少なければ基本トークンで補完
    if keywords.len() < 2 {
        let mut seen: HashSet<String> = keywords.iter().cloned().collect();
        for token in base.into_iter().take(3) {
            push_unique(&mut keywords, &mut seen, token);
        }
    }

    tracing::debug!("Extracted {} keywords", keywords.len());
    keywords
}

/// Normalize and tokenize the raw text / 正規化と分割
///
/// Full-width spaces become ASCII spaces, the text is Unicode-lowercased,
/// and every character that is not a Unicode letter or number is replaced
/// with a space. CJK ideographs count as letters, so Japanese text survives
/// while punctuation and symbols do not.
fn base_tokens(subject: &str, summary: Option<&str>, content: &str) -> Vec<String> {
    let mut text = String::with_capacity(subject.len() + content.len() + 16);
    text.push_str(subject);
    if let Some(summary) = summary {
        text.push(' ');
        text.push_str(summary);
    }
    text.push(' ');
    text.push_str(content);

    let text = text.replace('\u{3000}', " ").to_lowercase();
    let cleaned: String = text
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

fn push_unique(keywords: &mut Vec<String>, seen: &mut HashSet<String>, keyword: String) {
    if seen.insert(keyword.clone()) {
        keywords.push(keyword);
    }
}
