use anyhow::Result;
use gambot_search::{extract_terms, search_corpus, CorpusReader, ScoredPage};

use crate::logging;

pub fn run(data_dir: &str, question: &str, json: bool) -> Result<()> {
    let reader = CorpusReader::new(data_dir);
    let terms = extract_terms(question);
    if terms.is_empty() {
        println!("A pergunta não contém termos de busca.");
        return Ok(());
    }
    logging::verbose(format!("search terms: {terms:?}"));
    let results = search_corpus(&terms, &reader);
    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }
    print_results(&results);
    Ok(())
}

pub(crate) fn print_results(results: &[ScoredPage]) {
    if results.is_empty() {
        println!("Nenhum resultado encontrado.");
        return;
    }
    for (idx, page) in results.iter().enumerate() {
        println!(
            "{}. {} — página {} ({})",
            idx + 1,
            page.document,
            page.page,
            page.tier
        );
        println!("   {}", page.excerpt);
    }
}
