use std::collections::HashSet;

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::fold;
use crate::synonyms::{alternates, MAX_ALTERNATES};

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W").unwrap());

/// Interrogatives and connectors that carry no search signal.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "quais", "qual", "como", "quando", "onde", "porque", "que", "para", "com", "dos",
        "das", "pelo", "pela", "estou", "quero", "saber",
    ]
    .into_iter()
    .collect()
});

/// A fixed augmentation applied when its predicate matches the folded
/// question. Rules run in order, after tokenization and synonym
/// expansion.
struct AugmentRule {
    applies: fn(&str) -> bool,
    terms: &'static [&'static str],
}

static AUGMENT_RULES: &[AugmentRule] = &[
    AugmentRule {
        applies: |question| question.contains('6') || question.contains("sexto"),
        terms: &["6", "sexto", "nivel"],
    },
    AugmentRule {
        applies: |question| question.contains("grade") || question.contains("disciplina"),
        terms: &["componente", "curricular"],
    },
];

/// Turns a raw question into a deduplicated, insertion-ordered set of
/// search terms. Never fails; an empty question yields an empty set,
/// which callers must treat as "no results". When filtering discards
/// every token of a non-empty question, the raw tokens are used as-is
/// so the term set stays non-empty.
pub fn extract_terms(question: &str) -> IndexSet<String> {
    let mut terms = IndexSet::new();
    let mut raw_tokens = Vec::new();
    for word in question.to_lowercase().split_whitespace() {
        let cleaned = NON_WORD.replace_all(word, "").into_owned();
        if cleaned.is_empty() {
            continue;
        }
        raw_tokens.push(cleaned.clone());
        if cleaned.chars().count() <= 2 || STOP_WORDS.contains(cleaned.as_str()) {
            continue;
        }
        if let Some(alts) = alternates(&cleaned) {
            terms.insert(cleaned);
            for alt in alts.iter().take(MAX_ALTERNATES) {
                terms.insert((*alt).to_string());
            }
        } else {
            terms.insert(cleaned);
        }
    }
    let folded = fold(question);
    for rule in AUGMENT_RULES {
        if (rule.applies)(&folded) {
            for term in rule.terms {
                terms.insert((*term).to_string());
            }
        }
    }
    if terms.is_empty() {
        terms.extend(raw_tokens);
    }
    terms
}
