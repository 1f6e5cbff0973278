use std::io::{self, BufRead, Write};

use anyhow::Result;
use gambot_llm::AnswerClient;
use gambot_search::{
    assemble, extract_terms, search_corpus, CorpusReader, SessionState, DEFAULT_TOKEN_BUDGET,
};

use crate::config;
use crate::search::print_results;

pub fn run(data_dir: &str) -> Result<()> {
    let reader = CorpusReader::new(data_dir);
    let mut session = SessionState::default();
    let stdin = io::stdin();
    println!("gambot — pergunta livre para buscar, :ask <pergunta>, :status, :clear, :quit");
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line {
            ":quit" | ":q" => break,
            ":clear" => {
                session.clear();
                println!("Sessão limpa.");
            }
            ":status" => {
                println!(
                    "Buscas: {} | Perguntas à IA: {}",
                    session.searches, session.ai_requests
                );
                if let Some(question) = &session.last_question {
                    println!("Última pergunta: {question}");
                }
            }
            ":ask" => println!("Uso: :ask <pergunta>"),
            _ => {
                if let Some(question) = line.strip_prefix(":ask ") {
                    run_ask(&reader, &mut session, question.trim());
                } else {
                    run_search(&reader, &mut session, line);
                }
            }
        }
    }
    Ok(())
}

fn run_search(reader: &CorpusReader, session: &mut SessionState, question: &str) {
    let terms = extract_terms(question);
    let results = if terms.is_empty() {
        Vec::new()
    } else {
        search_corpus(&terms, reader)
    };
    print_results(&results);
    session.record_search(question, results);
}

fn run_ask(reader: &CorpusReader, session: &mut SessionState, question: &str) {
    if question.is_empty() {
        println!("Uso: :ask <pergunta>");
        return;
    }
    let terms = extract_terms(question);
    let results = if terms.is_empty() {
        Vec::new()
    } else {
        search_corpus(&terms, reader)
    };
    let context = assemble(&results, DEFAULT_TOKEN_BUDGET);
    let answer = match config::resolve(None) {
        None => {
            println!("Modo IA indisponível: nenhuma chave de API configurada.");
            None
        }
        Some(cfg) => match AnswerClient::new(&cfg.api_key, cfg.model, cfg.max_tokens) {
            Err(err) => {
                println!("Erro de configuração da IA: {err}");
                None
            }
            Ok(client) => match client.answer_blocking(question, &context.render()) {
                Ok(answer) => {
                    println!("{answer}");
                    Some(answer)
                }
                Err(err) => {
                    println!("Erro na chamada da IA ({}): {err}", err.category());
                    None
                }
            },
        },
    };
    println!();
    println!("Fontes:");
    print_results(&results);
    session.record_ask(question, results, context, answer);
}
