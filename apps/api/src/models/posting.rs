use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Title key used by the listing provider.
pub const JOB_TITLE: &str = "job_title";

/// A job posting as an opaque JSON record.
///
/// jobscout only ever reads string fields by name; every key the caller or
/// provider sends (ids of any type, nulls, nested objects) is serialized back
/// out exactly as it arrived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Posting {
    pub fields: Map<String, Value>,
}

impl Posting {
    #[cfg(test)]
    pub fn titled(title: &str) -> Self {
        Self::default().with(JOB_TITLE, Value::from(title))
    }

    #[cfg(test)]
    pub fn with(mut self, field: &str, value: Value) -> Self {
        self.fields.insert(field.to_string(), value);
        self
    }

    #[cfg(test)]
    pub fn title(&self) -> &str {
        self.field_text(JOB_TITLE)
    }

    /// String value of `field`; `None` when absent, null or not a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Comparison text for ranking, or "" when the field holds no string.
    ///
    /// `"title"` falls back to the provider's `job_title` when the posting
    /// has no string `title` of its own.
    pub fn field_text(&self, field: &str) -> &str {
        match self.get_str(field) {
            Some(text) => text,
            None if field == "title" => self.get_str(JOB_TITLE).unwrap_or(""),
            None => "",
        }
    }
}

/// A posting with its relevance score attached. Serializes flat, with
/// `match_score` alongside the posting's own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPosting {
    #[serde(flatten)]
    pub posting: Posting,
    pub match_score: f64,
}
