use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::keywords::phrases::{PhraseOptions, StopWords};
use crate::keywords::{KeyphraseExtractor, KeywordError, NoiseWords};

/// Number of keywords returned when the caller does not ask for a count.
pub const DEFAULT_KEYWORD_COUNT: usize = 5;

/// Candidates requested per keyword wanted; the surplus absorbs noise rejections.
const OVERFETCH_FACTOR: usize = 4;

/// Turns free text into a short, deduplicated, noise-free list of search terms.
pub struct KeywordExtractor {
    phrases: Arc<dyn KeyphraseExtractor>,
    noise: NoiseWords,
}

impl KeywordExtractor {
    pub fn new(phrases: Arc<dyn KeyphraseExtractor>, noise: NoiseWords) -> Self {
        Self { phrases, noise }
    }

    /// Returns at most `top_n` keyphrases, most relevant first.
    ///
    /// Blank text yields an empty list without consulting the phrase extractor.
    /// Extractor failures propagate; they never degrade into an empty list.
    pub async fn extract_keywords(
        &self,
        text: &str,
        top_n: usize,
    ) -> Result<Vec<String>, KeywordError> {
        if text.trim().is_empty() || top_n == 0 {
            return Ok(Vec::new());
        }

        let options = PhraseOptions {
            ngram_range: (1, 2),
            stop_words: StopWords::English,
            top_n: top_n * OVERFETCH_FACTOR,
        };
        let candidates = self.phrases.extract(text, &options).await?;
        let fetched = candidates.len();

        let mut seen = HashSet::new();
        let keywords: Vec<String> = candidates
            .into_iter()
            .map(|c| c.phrase.trim().to_lowercase())
            .filter(|phrase| !phrase.is_empty() && !self.noise.rejects(phrase))
            .filter(|phrase| seen.insert(phrase.clone()))
            .take(top_n)
            .collect();

        debug!(
            "Extracted {} keywords from {} candidates: {:?}",
            keywords.len(),
            fetched,
            keywords
        );

        Ok(keywords)
    }
}
