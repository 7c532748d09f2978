use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Connection to the hosted Postgres REST endpoint that owns the quiz table.
#[derive(Clone)]
pub struct Database {
    client: reqwest::Client,
    base_url: String,
}

impl Database {
    pub fn connect(config: &Config) -> AppResult<Self> {
        let key = config.supabase_key.expose_secret();

        let mut api_key = HeaderValue::from_str(key)
            .map_err(|e| AppError::InternalError(format!("invalid SUPABASE_KEY: {}", e)))?;
        api_key.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", key))
            .map_err(|e| AppError::InternalError(format!("invalid SUPABASE_KEY: {}", e)))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("Configured remote table endpoint at {}", config.supabase_url);

        Ok(Self {
            client,
            base_url: config.supabase_url.clone(),
        })
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.client
            .get(format!("{}/rest/v1/", self.base_url))
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}
