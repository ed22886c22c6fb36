/// Job listing provider — fetches candidate postings for a search query.
///
/// The default backend is the JSearch API on RapidAPI. Failures are typed
/// errors; an unreachable provider never masquerades as "no jobs found".
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::Posting;

#[cfg(test)]
pub mod testing;

pub const DEFAULT_JSEARCH_URL: &str = "https://jsearch.p.rapidapi.com";
pub const DEFAULT_JSEARCH_HOST: &str = "jsearch.p.rapidapi.com";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// A search against the provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobQuery {
    pub query: String,
    pub country: Option<String>,
    pub date_posted: Option<String>,
}

impl JobQuery {
    /// Space-joined keywords, with the city appended when given.
    pub fn from_keywords(keywords: &[String], city: Option<&str>) -> Self {
        let mut query = keywords.join(" ");
        if let Some(city) = city.map(str::trim).filter(|c| !c.is_empty()) {
            query.push(' ');
            query.push_str(city);
        }
        Self {
            query,
            ..Default::default()
        }
    }
}

#[async_trait]
pub trait JobSource: Send + Sync {
    async fn search(&self, query: &JobQuery) -> Result<Vec<Posting>, ProviderError>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Posting>,
}

#[derive(Clone)]
pub struct JSearchClient {
    client: Client,
    base_url: String,
    host: String,
    api_key: String,
}

impl JSearchClient {
    pub fn new(base_url: String, host: String, api_key: String) -> Result<Self, ProviderError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            host,
            api_key,
        })
    }
}

#[async_trait]
impl JobSource for JSearchClient {
    async fn search(&self, query: &JobQuery) -> Result<Vec<Posting>, ProviderError> {
        let date_posted = non_blank(query.date_posted.as_deref()).unwrap_or("all");
        let country = non_blank(query.country.as_deref()).unwrap_or("in");

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.host)
            .query(&[
                ("query", query.query.as_str()),
                ("page", "1"),
                ("num_pages", "1"),
                ("date_posted", date_posted),
                ("country", country),
                ("language", "en"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("JSearch returned {}: {}", status, message);
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response.json().await?;
        debug!("JSearch returned {} postings for '{}'", body.data.len(), query.query);
        Ok(body.data)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
