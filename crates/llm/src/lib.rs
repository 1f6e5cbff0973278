use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tokio::runtime::Runtime;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_TOKENS: u32 = 800;

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const TEMPERATURE: f32 = 0.3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(45);
const DETAIL_LIMIT: usize = 200;

const SYSTEM_PROMPT_HEADER: &str = "\
Você é o Gambot, um assistente virtual especializado em regulamentos e \
procedimentos da Universidade Federal do Pará (UFPA).

SUA MISSÃO:
Responder dúvidas acadêmicas baseando-se ESTRITAMENTE nos documentos fornecidos no contexto.

REGRAS:
1. Contexto é a Verdade: use APENAS o texto fornecido abaixo.
2. Citação Obrigatória: para CADA afirmação, cite a fonte (Ex: \"Segundo o Regulamento, Art. 15...\").
3. Honestidade Intelectual: se a resposta não estiver EXPLICITAMENTE no contexto, diga: \
\"Não encontrei essa informação específica nos documentos fornecidos\". NÃO invente. \
Se a resposta puder ser inferida claramente a partir do texto, explique a inferência e cite o trecho usado.
4. Clareza: responda de forma direta, organizada e em tom profissional.

Contexto dos documentos (páginas extraídas dos PDFs):
";

static EMBEDDED_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"sk-[a-zA-Z0-9]{20,}").unwrap());

/// Failure taxonomy of the answer boundary. Diagnostics are truncated
/// so upstream errors can be shown to users verbatim.
#[derive(Error, Debug)]
pub enum AnswerError {
    #[error("api key is missing or invalid")]
    MissingKey,
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("service returned status {status}: {detail}")]
    Http { status: u16, detail: String },
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("network failure: {0}")]
    Network(String),
}

impl AnswerError {
    pub fn category(&self) -> &'static str {
        match self {
            AnswerError::MissingKey => "configuration",
            AnswerError::Timeout(_) => "timeout",
            AnswerError::Auth(_) => "auth",
            AnswerError::RateLimited(_) => "rate-limit",
            AnswerError::Http { .. } => "http",
            AnswerError::Malformed(_) => "malformed",
            AnswerError::Network(_) => "network",
        }
    }
}

/// Chat-completion client for the answer step. One bounded attempt per
/// call; every failure is classified, never propagated as a panic or a
/// raw transport error.
#[derive(Debug)]
pub struct AnswerClient {
    http: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl AnswerClient {
    pub fn new(
        api_key: &str,
        model: impl Into<String>,
        max_tokens: u32,
    ) -> Result<Self, AnswerError> {
        let api_key = sanitize_key(api_key).ok_or(AnswerError::MissingKey)?;
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| AnswerError::Network(truncate(err.to_string())))?;
        Ok(Self {
            http,
            api_key,
            model: model.into(),
            max_tokens,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn answer(&self, question: &str, context: &str) -> Result<String, AnswerError> {
        let payload = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": build_system_prompt(context) },
                { "role": "user", "content": build_user_prompt(question) },
            ],
            "temperature": TEMPERATURE,
            "max_tokens": self.max_tokens,
        });
        let response = self
            .http
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(classify_transport)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status, body));
        }
        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|err| AnswerError::Malformed(truncate(err.to_string())))?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AnswerError::Malformed("completion carried no choices".to_string()))
    }

    pub fn answer_blocking(&self, question: &str, context: &str) -> Result<String, AnswerError> {
        let rt = Runtime::new().map_err(|err| AnswerError::Network(truncate(err.to_string())))?;
        rt.block_on(self.answer(question, context))
    }
}

fn build_system_prompt(context: &str) -> String {
    format!("{SYSTEM_PROMPT_HEADER}{context}")
}

fn build_user_prompt(question: &str) -> String {
    format!(
        "Pergunta do usuário: {question}\n\nCom base APENAS no contexto acima, responda à \
         pergunta. Cite artigos, parágrafos e páginas sempre que possível."
    )
}

/// Accepts a well-formed `sk-` key as-is; otherwise tries to salvage a
/// key embedded in surrounding text (pasted with a label, quotes, etc).
fn sanitize_key(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("sk-") {
        return Some(trimmed.to_string());
    }
    EMBEDDED_KEY.find(trimmed).map(|hit| hit.as_str().to_string())
}

fn classify_transport(err: reqwest::Error) -> AnswerError {
    let detail = truncate(err.to_string());
    if err.is_timeout() {
        AnswerError::Timeout(detail)
    } else {
        AnswerError::Network(detail)
    }
}

fn classify_status(status: StatusCode, body: String) -> AnswerError {
    let detail = truncate(body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AnswerError::Auth(detail),
        StatusCode::TOO_MANY_REQUESTS => AnswerError::RateLimited(detail),
        _ => AnswerError::Http {
            status: status.as_u16(),
            detail,
        },
    }
}

fn truncate(detail: String) -> String {
    if detail.chars().count() <= DETAIL_LIMIT {
        detail
    } else {
        detail.chars().take(DETAIL_LIMIT).collect()
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}
