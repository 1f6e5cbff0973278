use crate::context::ContextBlock;
use crate::rank::ScoredPage;

/// Transient state of one interactive session, passed explicitly
/// through the pipeline. Counters only ever grow; everything else is
/// overwritten wholesale on each new query.
#[derive(Debug, Default)]
pub struct SessionState {
    pub searches: u64,
    pub ai_requests: u64,
    pub last_question: Option<String>,
    pub last_results: Vec<ScoredPage>,
    pub last_context: Option<ContextBlock>,
    pub last_answer: Option<String>,
}

impl SessionState {
    pub fn record_search(&mut self, question: &str, results: Vec<ScoredPage>) {
        self.searches += 1;
        self.last_question = Some(question.to_string());
        self.last_results = results;
        self.last_context = None;
        self.last_answer = None;
    }

    pub fn record_ask(
        &mut self,
        question: &str,
        results: Vec<ScoredPage>,
        context: ContextBlock,
        answer: Option<String>,
    ) {
        self.searches += 1;
        self.ai_requests += 1;
        self.last_question = Some(question.to_string());
        self.last_results = results;
        self.last_context = Some(context);
        self.last_answer = answer;
    }

    /// Discards all per-query state; usage counters survive.
    pub fn clear(&mut self) {
        self.last_question = None;
        self.last_results.clear();
        self.last_context = None;
        self.last_answer = None;
    }
}
