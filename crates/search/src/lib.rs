mod context;
mod corpus;
mod error;
mod normalize;
mod query;
mod rank;
mod session;
mod synonyms;

pub use context::{
    assemble, ContextBlock, ContextSegment, CHARS_PER_TOKEN, DEFAULT_TOKEN_BUDGET,
    NO_CONTEXT_SENTINEL,
};
pub use corpus::{CorpusReader, DocumentPages, PageText};
pub use error::{Result, SearchError};
pub use normalize::fold;
pub use query::extract_terms;
pub use rank::{rank, search_corpus, ScoredPage, MAX_RESULTS};
pub use session::SessionState;
pub use synonyms::{alternates, MAX_ALTERNATES};
