use anyhow::Result;
use gambot_llm::AnswerClient;
use gambot_search::{
    assemble, extract_terms, search_corpus, CorpusReader, DEFAULT_TOKEN_BUDGET,
};

use crate::config;
use crate::logging;
use crate::search::print_results;

pub fn run(
    data_dir: &str,
    question: &str,
    api_key: Option<String>,
    model: Option<String>,
    max_tokens: Option<u32>,
) -> Result<()> {
    let reader = CorpusReader::new(data_dir);
    let terms = extract_terms(question);
    let results = if terms.is_empty() {
        Vec::new()
    } else {
        search_corpus(&terms, &reader)
    };
    let context = assemble(&results, DEFAULT_TOKEN_BUDGET);

    let Some(mut cfg) = config::resolve(api_key) else {
        println!("Modo IA indisponível: nenhuma chave de API configurada.");
        println!();
        print_results(&results);
        return Ok(());
    };
    if let Some(model) = model {
        cfg.model = model;
    }
    if let Some(max_tokens) = max_tokens {
        cfg.max_tokens = max_tokens;
    }

    logging::stage(
        "ask",
        format!(
            "asking {} with {} context page(s), ~{:.0} tokens",
            cfg.model,
            context.segments.len(),
            context.estimated_tokens
        ),
    );
    match AnswerClient::new(&cfg.api_key, cfg.model, cfg.max_tokens) {
        Err(err) => println!("Erro de configuração da IA: {err}"),
        Ok(client) => match client.answer_blocking(question, &context.render()) {
            Ok(answer) => println!("{answer}"),
            Err(err) => println!("Erro na chamada da IA ({}): {err}", err.category()),
        },
    }
    println!();
    println!("Fontes:");
    print_results(&results);
    Ok(())
}
