//! Candidate keyphrase generation and embedding-based weighting.
//!
//! Candidates are the contiguous n-grams of the text after tokenizing and
//! stop-word removal. Each is weighted by cosine similarity between its
//! embedding and the embedding of the whole document.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::embedding::{cosine_similarity, Embedder};
use crate::keywords::KeywordError;

/// High-frequency English words that never make a useful search term.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
    "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
    "amongst", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below",
    "beside", "besides", "between", "beyond", "both", "but", "by", "can", "cannot", "could",
    "do", "done", "down", "due", "during", "each", "eg", "either", "else", "elsewhere",
    "enough", "even", "ever", "every", "everyone", "everything", "everywhere", "except",
    "few", "for", "former", "formerly", "from", "further", "get", "give", "go", "had",
    "has", "hasnt", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein",
    "hers", "herself", "him", "himself", "his", "how", "however", "i", "ie", "if", "in",
    "inc", "indeed", "into", "is", "it", "its", "itself", "just", "keep", "last", "latter",
    "least", "less", "ltd", "made", "many", "may", "me", "meanwhile", "might", "mine",
    "more", "moreover", "most", "mostly", "much", "must", "my", "myself", "namely",
    "neither", "never", "nevertheless", "next", "no", "nobody", "none", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
    "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "several", "she", "should", "since", "so", "some", "somehow",
    "someone", "something", "sometime", "sometimes", "somewhere", "still", "such", "than",
    "that", "the", "their", "them", "themselves", "then", "thence", "there", "thereafter",
    "thereby", "therefore", "therein", "thereupon", "these", "they", "this", "those",
    "though", "through", "throughout", "thru", "thus", "to", "together", "too", "toward",
    "towards", "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well",
    "were", "what", "whatever", "when", "whence", "whenever", "where", "whereafter",
    "whereas", "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while",
    "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without",
    "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Stop-word policy applied before candidates are formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopWords {
    #[allow(dead_code)]
    None,
    English,
}

/// Options passed to a `KeyphraseExtractor`.
#[derive(Debug, Clone, Copy)]
pub struct PhraseOptions {
    /// Inclusive (min, max) words per candidate.
    pub ngram_range: (usize, usize),
    pub stop_words: StopWords,
    pub top_n: usize,
}

/// A candidate keyphrase and its relevance weight (higher is more salient).
#[derive(Debug, Clone, PartialEq)]
pub struct CandidatePhrase {
    pub phrase: String,
    pub weight: f64,
}

/// Source of ranked candidate keyphrases. Implementations return at most
/// `options.top_n` candidates, most relevant first.
#[async_trait]
pub trait KeyphraseExtractor: Send + Sync {
    async fn extract(
        &self,
        text: &str,
        options: &PhraseOptions,
    ) -> Result<Vec<CandidatePhrase>, KeywordError>;
}

/// Weights candidates by embedding similarity to the whole document.
pub struct EmbeddingPhraseExtractor {
    embedder: Arc<dyn Embedder>,
}

impl EmbeddingPhraseExtractor {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }
}

#[async_trait]
impl KeyphraseExtractor for EmbeddingPhraseExtractor {
    async fn extract(
        &self,
        text: &str,
        options: &PhraseOptions,
    ) -> Result<Vec<CandidatePhrase>, KeywordError> {
        let candidates = candidate_phrases(text, options.ngram_range, options.stop_words);
        if candidates.is_empty() || options.top_n == 0 {
            return Ok(Vec::new());
        }

        let doc_vec = self.embedder.embed_one(text).await?;
        let cand_vecs = self.embedder.embed(&candidates).await?;
        if cand_vecs.len() != candidates.len() {
            return Err(KeywordError::Malformed(format!(
                "expected {} candidate vectors, got {}",
                candidates.len(),
                cand_vecs.len()
            )));
        }

        let mut weighted: Vec<CandidatePhrase> = candidates
            .into_iter()
            .zip(&cand_vecs)
            .map(|(phrase, vector)| CandidatePhrase {
                phrase,
                weight: (cosine_similarity(&doc_vec, vector) * 10_000.0).round() / 10_000.0,
            })
            .collect();

        weighted.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        weighted.truncate(options.top_n);

        debug!(
            "Weighted {} candidate phrases, kept {}",
            cand_vecs.len(),
            weighted.len()
        );

        Ok(weighted)
    }
}

/// Lowercased tokens of two or more word characters.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

/// Unique contiguous n-grams in first-seen order, shorter n-grams first.
pub fn candidate_phrases(
    text: &str,
    ngram_range: (usize, usize),
    stop_words: StopWords,
) -> Vec<String> {
    let (min_n, max_n) = ngram_range;
    let tokens: Vec<String> = tokenize(text)
        .into_iter()
        .filter(|t| stop_words == StopWords::None || !ENGLISH_STOP_WORDS.contains(&t.as_str()))
        .collect();

    let mut seen = HashSet::new();
    let mut phrases = Vec::new();
    for n in min_n.max(1)..=max_n {
        for window in tokens.windows(n) {
            let phrase = window.join(" ");
            if seen.insert(phrase.clone()) {
                phrases.push(phrase);
            }
        }
    }
    phrases
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::testing::{FailingEmbedder, VocabEmbedder};

    #[test]
    fn test_candidates_drop_stop_words_and_short_tokens() {
        let phrases = candidate_phrases("I am a Rust developer", (1, 2), StopWords::English);
        assert_eq!(phrases, vec!["rust", "developer", "rust developer"]);
    }

    #[test]
    fn test_candidates_bigrams_span_removed_stop_words() {
        let phrases = candidate_phrases("python with sql", (2, 2), StopWords::English);
        assert_eq!(phrases, vec!["python sql"]);
    }

    #[test]
    fn test_candidates_keep_stop_words_when_disabled() {
        let phrases = candidate_phrases("work with rust", (1, 1), StopWords::None);
        assert_eq!(phrases, vec!["work", "with", "rust"]);
    }

    #[test]
    fn test_candidates_are_unique() {
        let phrases = candidate_phrases("rust rust rust", (1, 2), StopWords::English);
        assert_eq!(phrases, vec!["rust", "rust rust"]);
    }

    #[tokio::test]
    async fn test_extract_orders_by_similarity() {
        let embedder = Arc::new(VocabEmbedder::new(&["rust", "backend", "kafka"]));
        let extractor = EmbeddingPhraseExtractor::new(embedder);
        let options = PhraseOptions {
            ngram_range: (1, 2),
            stop_words: StopWords::English,
            top_n: 10,
        };

        let phrases = extractor
            .extract("rust backend rust", &options)
            .await
            .unwrap();

        assert_eq!(phrases[0].phrase, "rust backend");
        assert!(phrases
            .windows(2)
            .all(|w| w[0].weight >= w[1].weight));
    }

    #[tokio::test]
    async fn test_extract_respects_top_n() {
        let embedder = Arc::new(VocabEmbedder::new(&["a1", "b2", "c3"]));
        let extractor = EmbeddingPhraseExtractor::new(embedder);
        let options = PhraseOptions {
            ngram_range: (1, 2),
            stop_words: StopWords::English,
            top_n: 2,
        };

        let phrases = extractor.extract("a1 b2 c3", &options).await.unwrap();
        assert_eq!(phrases.len(), 2);
    }

    #[tokio::test]
    async fn test_extract_no_candidates_skips_embedder() {
        let embedder = Arc::new(VocabEmbedder::new(&["rust"]));
        let extractor = EmbeddingPhraseExtractor::new(embedder.clone());
        let options = PhraseOptions {
            ngram_range: (1, 2),
            stop_words: StopWords::English,
            top_n: 5,
        };

        let phrases = extractor.extract("the and of", &options).await.unwrap();
        assert!(phrases.is_empty());
        assert_eq!(embedder.calls(), 0);
    }

    #[tokio::test]
    async fn test_extract_propagates_embedder_failure() {
        let extractor = EmbeddingPhraseExtractor::new(Arc::new(FailingEmbedder));
        let options = PhraseOptions {
            ngram_range: (1, 2),
            stop_words: StopWords::English,
            top_n: 5,
        };

        let err = extractor.extract("rust", &options).await.unwrap_err();
        assert!(matches!(err, KeywordError::Embedding(_)));
    }
}
