use gambot_search::{
    assemble, extract_terms, rank, CorpusReader, DocumentPages, DEFAULT_TOKEN_BUDGET,
    NO_CONTEXT_SENTINEL,
};

fn regulation_corpus() -> Vec<DocumentPages> {
    vec![
        DocumentPages::from_texts(
            "regulamento.pdf",
            vec![
                "Art. 15. O trancamento de matrícula deve ser solicitado em até 30 dias."
                    .to_string(),
                "Art. 16. A frequência mínima exigida é de 75% das aulas.".to_string(),
            ],
        ),
        DocumentPages::from_texts(
            "calendario.pdf",
            vec!["O período letivo de 2024 começa em março.".to_string()],
        ),
    ]
}

#[test]
fn question_to_ranked_pages_end_to_end() {
    let terms = extract_terms("Qual o prazo para trancamento?");
    let results = rank(&terms, &regulation_corpus());
    assert_eq!(results.len(), 2);
    // "trancamento" hits page 1 of the regulation; the calendar page is
    // reached only through the "prazo" -> "período" expansion.
    assert_eq!(results[0].document, "regulamento.pdf");
    assert_eq!(results[0].page, 1);
    assert!(results[0].score > 0.0);
    assert!(results[0].excerpt.contains("trancamento"));
}

#[test]
fn ranked_pages_flow_into_a_bounded_context() {
    let terms = extract_terms("Como funciona o trancamento de matrícula?");
    let results = rank(&terms, &regulation_corpus());
    assert!(!results.is_empty());

    let context = assemble(&results, DEFAULT_TOKEN_BUDGET);
    assert!(context.found());
    assert!(context.estimated_tokens <= DEFAULT_TOKEN_BUDGET);
    let rendered = context.render();
    assert!(rendered.contains("[Documento: regulamento.pdf | Página: 1]"));
    assert!(rendered.contains("trancamento"));
}

#[test]
fn unanswerable_question_degrades_to_the_sentinel() {
    let terms = extract_terms("foguetes espaciais reutilizáveis");
    let results = rank(&terms, &regulation_corpus());
    assert!(results.is_empty());
    let context = assemble(&results, DEFAULT_TOKEN_BUDGET);
    assert!(!context.found());
    assert_eq!(context.render(), NO_CONTEXT_SENTINEL);
}

#[test]
fn empty_corpus_directory_yields_no_results() {
    let dir = tempfile::tempdir().unwrap();
    let reader = CorpusReader::new(dir.path());
    let terms = extract_terms("Qual o prazo para trancamento?");
    assert!(gambot_search::search_corpus(&terms, &reader).is_empty());
}

#[test]
fn corrupt_pdf_does_not_abort_the_corpus_scan() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.pdf"), b"%PDF-garbage").unwrap();
    let reader = CorpusReader::new(dir.path());
    let terms = extract_terms("Qual o prazo para trancamento?");
    // the broken file is skipped; the query still completes with an
    // empty result set instead of an error
    assert!(gambot_search::search_corpus(&terms, &reader).is_empty());
}
