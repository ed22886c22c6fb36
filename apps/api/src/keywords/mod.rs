// Keyword extraction: free-text description -> short list of search terms.
// Candidate phrases come from a KeyphraseExtractor; the KeywordExtractor
// normalizes, filters noise words, dedups and truncates them.

pub mod extractor;
pub mod noise;
pub mod phrases;

use thiserror::Error;

use crate::embedding::EmbeddingError;

pub use extractor::{KeywordExtractor, DEFAULT_KEYWORD_COUNT};
pub use noise::NoiseWords;
pub use phrases::{EmbeddingPhraseExtractor, KeyphraseExtractor};

#[derive(Debug, Error)]
pub enum KeywordError {
    #[error("Embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("Malformed phrase extraction output: {0}")]
    Malformed(String),
}
