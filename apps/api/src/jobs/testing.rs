//! In-memory job source for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{JobQuery, JobSource, ProviderError};
use crate::models::Posting;

/// Serves canned postings and remembers the last query.
pub struct StubSource {
    pub postings: Vec<Posting>,
    pub fail: bool,
    pub last_query: Mutex<Option<JobQuery>>,
}

impl StubSource {
    pub fn with(postings: Vec<Posting>) -> Self {
        Self {
            postings,
            fail: false,
            last_query: Mutex::new(None),
        }
    }
}

#[async_trait]
impl JobSource for StubSource {
    async fn search(&self, query: &JobQuery) -> Result<Vec<Posting>, ProviderError> {
        *self.last_query.lock().unwrap() = Some(query.clone());
        if self.fail {
            return Err(ProviderError::Api {
                status: 500,
                message: "provider down".to_string(),
            });
        }
        Ok(self.postings.clone())
    }
}
