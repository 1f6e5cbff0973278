use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::rank::ScoredPage;

/// Rough size estimate used against the token budget.
pub const CHARS_PER_TOKEN: f32 = 3.5;
pub const DEFAULT_TOKEN_BUDGET: f32 = 12_000.0;
/// Rendered in place of a context when nothing relevant was found.
pub const NO_CONTEXT_SENTINEL: &str = "Nenhum documento relevante encontrado.";

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, Serialize)]
pub struct ContextSegment {
    pub document: String,
    pub page: u32,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContextBlock {
    pub segments: Vec<ContextSegment>,
    pub estimated_tokens: f32,
}

impl ContextBlock {
    pub fn found(&self) -> bool {
        !self.segments.is_empty()
    }

    pub fn render(&self) -> String {
        if !self.found() {
            return NO_CONTEXT_SENTINEL.to_string();
        }
        self.segments
            .iter()
            .map(|seg| format!("{}{}", segment_header(&seg.document, seg.page), seg.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Packs full page texts into a block bounded by `token_budget`. Input
/// order is trusted (the ranking engine already sorted by relevance);
/// duplicate (document, page) pairs are skipped, and packing stops at
/// the first page that would overflow the budget.
pub fn assemble(pages: &[ScoredPage], token_budget: f32) -> ContextBlock {
    let mut seen: HashSet<(&str, u32)> = HashSet::new();
    let mut block = ContextBlock::default();
    for page in pages {
        if !seen.insert((page.document.as_str(), page.page)) {
            continue;
        }
        let cleaned = clean_page_text(&page.text);
        let header = segment_header(&page.document, page.page);
        let estimated = (header.chars().count() + cleaned.chars().count()) as f32 / CHARS_PER_TOKEN;
        if block.estimated_tokens + estimated > token_budget {
            break;
        }
        block.estimated_tokens += estimated;
        block.segments.push(ContextSegment {
            document: page.document.clone(),
            page: page.page,
            text: cleaned,
        });
    }
    block
}

fn segment_header(document: &str, page: u32) -> String {
    format!("\n--- [Documento: {document} | Página: {page}] ---\n")
}

fn clean_page_text(text: &str) -> String {
    let stripped = HTML_TAG.replace_all(text, "");
    WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(document: &str, page: u32, text: &str) -> ScoredPage {
        ScoredPage {
            document: document.to_string(),
            page,
            score: 1.0,
            matched_terms: vec![],
            text: text.to_string(),
            excerpt: String::new(),
            tier: String::new(),
        }
    }

    #[test]
    fn empty_input_renders_the_sentinel() {
        let block = assemble(&[], DEFAULT_TOKEN_BUDGET);
        assert!(!block.found());
        assert_eq!(block.render(), NO_CONTEXT_SENTINEL);
        assert_eq!(block.estimated_tokens, 0.0);
    }

    #[test]
    fn duplicate_pages_are_included_once() {
        let pages = vec![
            scored("a.pdf", 1, "texto da página"),
            scored("a.pdf", 1, "texto da página"),
            scored("a.pdf", 2, "outra página"),
        ];
        let block = assemble(&pages, DEFAULT_TOKEN_BUDGET);
        assert_eq!(block.segments.len(), 2);
    }

    #[test]
    fn same_page_number_in_different_documents_is_not_a_duplicate() {
        let pages = vec![scored("a.pdf", 1, "um"), scored("b.pdf", 1, "dois")];
        let block = assemble(&pages, DEFAULT_TOKEN_BUDGET);
        assert_eq!(block.segments.len(), 2);
    }

    #[test]
    fn strips_tags_and_collapses_whitespace() {
        let pages = vec![scored("a.pdf", 1, "um  <b>dois</b>\n\n três ")];
        let block = assemble(&pages, DEFAULT_TOKEN_BUDGET);
        assert_eq!(block.segments[0].text, "um dois três");
    }

    #[test]
    fn budget_is_a_strict_prefix_cutoff() {
        let text = "x".repeat(350);
        let pages: Vec<ScoredPage> = (1..=3).map(|p| scored("a.pdf", p, &text)).collect();
        let per_page = assemble(&pages[..1], f32::MAX).estimated_tokens;
        // room for two pages and half of a third: exactly two must land
        let block = assemble(&pages, per_page * 2.5);
        assert_eq!(block.segments.len(), 2);
        assert!(block.estimated_tokens <= per_page * 2.5);
    }

    #[test]
    fn render_tags_each_segment_with_its_source() {
        let pages = vec![scored("regulamento.pdf", 3, "Art. 15")];
        let rendered = assemble(&pages, DEFAULT_TOKEN_BUDGET).render();
        assert!(rendered.contains("[Documento: regulamento.pdf | Página: 3]"));
        assert!(rendered.contains("Art. 15"));
    }
}
