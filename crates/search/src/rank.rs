use indexmap::IndexSet;
use serde::Serialize;

use crate::corpus::{CorpusReader, DocumentPages};
use crate::normalize::fold;

pub const MAX_RESULTS: usize = 10;
const DENSITY_THRESHOLD: usize = 2;
const DENSITY_BONUS: f32 = 0.5;
const EXCERPT_RADIUS: usize = 150;

#[derive(Debug, Clone, Serialize)]
pub struct ScoredPage {
    pub document: String,
    pub page: u32,
    pub score: f32,
    /// Terms that hit this page, in term-set order. The first entry
    /// anchors the excerpt.
    pub matched_terms: Vec<String>,
    /// Full extracted page text, kept for context assembly.
    #[serde(skip)]
    pub text: String,
    pub excerpt: String,
    pub tier: String,
}

/// Scores every non-empty page of `docs` against `terms` and returns at
/// most [`MAX_RESULTS`] pages, sorted by descending score. The sort is
/// stable, so equal scores keep corpus-scan order (documents in listing
/// order, pages in page order).
pub fn rank(terms: &IndexSet<String>, docs: &[DocumentPages]) -> Vec<ScoredPage> {
    let mut scored = Vec::new();
    for doc in docs {
        for page in &doc.pages {
            if page.text.trim().is_empty() {
                continue;
            }
            let folded_page = fold(&page.text);
            let mut score = 0.0f32;
            let mut matched = Vec::new();
            for term in terms {
                let folded_term = fold(term);
                if folded_term.is_empty() {
                    continue;
                }
                if folded_page.contains(&folded_term) {
                    score += 1.0;
                    matched.push(term.clone());
                    if count_occurrences(&folded_page, &folded_term) > DENSITY_THRESHOLD {
                        score += DENSITY_BONUS;
                    }
                }
            }
            if score > 0.0 {
                let excerpt = build_excerpt(&page.text, matched.first().map(String::as_str));
                scored.push(ScoredPage {
                    document: doc.name.clone(),
                    page: page.number,
                    score,
                    matched_terms: matched,
                    text: page.text.clone(),
                    excerpt,
                    tier: format!("Relevância: {score:.1}"),
                });
            }
        }
    }
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(MAX_RESULTS);
    scored
}

/// Re-reads the corpus and ranks it; unreadable documents were already
/// skipped by the reader, so a corrupt file never aborts a query.
pub fn search_corpus(terms: &IndexSet<String>, reader: &CorpusReader) -> Vec<ScoredPage> {
    rank(terms, &reader.load_all())
}

fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Cuts a display window of [`EXCERPT_RADIUS`] characters around the
/// anchor term's first case-insensitive hit in the raw page text. The
/// anchor search is lowercase-only (no accent folding); when it misses,
/// the window starts at the top of the page.
fn build_excerpt(text: &str, anchor: Option<&str>) -> String {
    let lower = text.to_lowercase();
    let anchor_char = anchor
        .and_then(|term| lower.find(&term.to_lowercase()))
        .map(|byte_pos| lower[..byte_pos].chars().count())
        .unwrap_or(0);
    let chars: Vec<char> = text.chars().collect();
    let start = anchor_char.saturating_sub(EXCERPT_RADIUS).min(chars.len());
    let end = (anchor_char + EXCERPT_RADIUS).min(chars.len());
    let window: String = chars[start..end]
        .iter()
        .map(|&c| if c == '\n' { ' ' } else { c })
        .collect();
    format!("...{window}...")
}
