use std::env;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_NEWS_SOURCE_URLS: [&str; 2] = [
    "https://economictimes.indiatimes.com/tech/artificial-intelligence",
    "https://economictimes.indiatimes.com/tech/artificial-intelligence/articlelist/msid-79872984,page-1.cms",
];

const REQUIRED_VARS: [&str; 3] = ["OPENAI_API_KEY", "SUPABASE_URL", "SUPABASE_KEY"];

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_api_base: String,
    pub openai_model: String,
    pub supabase_url: String,
    pub supabase_key: SecretString,
    pub quiz_table: String,
    pub snapshot_path: String,
    pub news_source_urls: Vec<String>,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Blank values count as missing. Every missing credential is reported
    /// in a single `AppError::MissingConfig`.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let missing: Vec<String> = REQUIRED_VARS
            .iter()
            .filter(|key| read(**key).is_none())
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(AppError::MissingConfig(missing));
        }

        let required = |key: &str| read(key).unwrap_or_default();

        Ok(Self {
            openai_api_key: SecretString::from(required("OPENAI_API_KEY")),
            openai_api_base: read("OPENAI_API_BASE")
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            openai_model: read("OPENAI_MODEL").unwrap_or_else(|| "gpt-4o".to_string()),
            supabase_url: required("SUPABASE_URL").trim_end_matches('/').to_string(),
            supabase_key: SecretString::from(required("SUPABASE_KEY")),
            quiz_table: read("QUIZ_TABLE").unwrap_or_else(|| "daily_genai_quiz".to_string()),
            snapshot_path: read("SNAPSHOT_PATH").unwrap_or_else(|| "questions.bson".to_string()),
            news_source_urls: read("NEWS_SOURCE_URLS")
                .map(|urls| {
                    urls.split(',')
                        .map(str::trim)
                        .filter(|u| !u.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_else(|| {
                    DEFAULT_NEWS_SOURCE_URLS
                        .iter()
                        .map(|u| u.to_string())
                        .collect()
                }),
            web_server_host: read("WEB_SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            web_server_port: read("WEB_SERVER_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("sk-test".to_string()),
            openai_api_base: "http://localhost:9999/v1".to_string(),
            openai_model: "gpt-4o".to_string(),
            supabase_url: "http://localhost:54321".to_string(),
            supabase_key: SecretString::from("supabase-test-key".to_string()),
            quiz_table: "daily_genai_quiz".to_string(),
            snapshot_path: "questions-test.bson".to_string(),
            news_source_urls: vec!["http://localhost/news".to_string()],
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
