use std::env;
use std::fs;
use std::path::PathBuf;

use gambot_llm::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL};

use crate::logging;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Local configuration files probed after the environment, in order.
const CANDIDATE_FILES: &[&str] = &[".env", "api_key.env", "config/.env", ".env.local"];

#[derive(Debug, Clone)]
pub struct AnswerConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
}

#[derive(Debug, Default)]
struct PartialSettings {
    api_key: Option<String>,
    model: Option<String>,
    max_tokens: Option<u32>,
}

/// One step of the fallback chain. Each source either produces settings
/// or defers to the next one.
enum ConfigSource {
    Explicit(Option<String>),
    Environment,
    EnvFile(PathBuf),
}

impl ConfigSource {
    fn describe(&self) -> String {
        match self {
            ConfigSource::Explicit(_) => "explicit override".to_string(),
            ConfigSource::Environment => format!("env {API_KEY_VAR}"),
            ConfigSource::EnvFile(path) => format!("file {}", path.display()),
        }
    }

    fn load(&self) -> Option<PartialSettings> {
        match self {
            ConfigSource::Explicit(key) => key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(|key| PartialSettings {
                    api_key: Some(key.to_string()),
                    ..Default::default()
                }),
            ConfigSource::Environment => env::var(API_KEY_VAR)
                .ok()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .map(|value| PartialSettings {
                    api_key: Some(value),
                    ..Default::default()
                }),
            ConfigSource::EnvFile(path) => parse_env_file(&fs::read_to_string(path).ok()?),
        }
    }
}

/// Resolves the answer-service credential through the prioritized
/// source chain; the first source that yields a key wins, along with
/// whatever model/token settings it carried. `None` means AI mode is
/// unavailable, never an error.
pub fn resolve(explicit: Option<String>) -> Option<AnswerConfig> {
    let mut sources = vec![ConfigSource::Explicit(explicit), ConfigSource::Environment];
    sources.extend(
        CANDIDATE_FILES
            .iter()
            .map(|file| ConfigSource::EnvFile(PathBuf::from(file))),
    );
    resolve_from(&sources)
}

fn resolve_from(sources: &[ConfigSource]) -> Option<AnswerConfig> {
    for source in sources {
        let Some(partial) = source.load() else {
            continue;
        };
        if let Some(api_key) = partial.api_key {
            logging::verbose(format!("api key resolved from {}", source.describe()));
            return Some(AnswerConfig {
                api_key,
                model: partial.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                max_tokens: partial.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            });
        }
    }
    None
}

/// Parses simple `KEY=value` lines; blank lines and `#` comments are
/// ignored, surrounding quotes are stripped.
fn parse_env_file(content: &str) -> Option<PartialSettings> {
    let mut settings = PartialSettings::default();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().trim_matches('"').trim_matches('\'');
        if value.is_empty() {
            continue;
        }
        match key.trim() {
            API_KEY_VAR => settings.api_key = Some(value.to_string()),
            "MODEL" => settings.model = Some(value.to_string()),
            "MAX_TOKENS" => settings.max_tokens = value.parse().ok(),
            _ => {}
        }
    }
    if settings.api_key.is_none() && settings.model.is_none() && settings.max_tokens.is_none() {
        None
    } else {
        Some(settings)
    }
}
