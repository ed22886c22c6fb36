use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

/// Generic career filler that pollutes a job-search query.
const DEFAULT_NOISE_WORDS: &[&str] = &[
    "know", "knowing", "knowledge", "familiar", "familiarity", "skilled", "skill",
    "skills", "ability", "abilities", "capable", "capability", "proficient",
    "proficiency", "expert", "expertise", "experienced", "experience", "working",
    "work", "worked", "works", "good", "strong", "excellent", "background",
    "understanding",
    // buzzwords
    "motivated", "driven", "passionate", "enthusiastic", "dedicated", "committed",
    "innovative", "creative", "responsible", "hardworking", "self", "learner",
    "learning", "adaptable", "flexible", "collaborative", "team", "player",
    "results", "oriented", "focused", "fast", "quick",
    // redundant
    "etc", "others", "things", "various",
];

/// Denylist of words that disqualify a keyphrase. Matching is per word and
/// case-insensitive.
#[derive(Debug, Clone)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl Default for NoiseWords {
    fn default() -> Self {
        Self::new(DEFAULT_NOISE_WORDS.iter().copied())
    }
}

impl NoiseWords {
    pub fn new<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            words: words
                .into_iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Loads a denylist file: one word per line, `#` starts a comment.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read noise word file {}", path.display()))?;

        let words = raw
            .lines()
            .map(|line| line.split('#').next().unwrap_or(""))
            .filter(|line| !line.trim().is_empty());

        Ok(Self::new(words))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// True when any whitespace-separated word of `phrase` is denylisted.
    pub fn rejects(&self, phrase: &str) -> bool {
        phrase.split_whitespace().any(|w| self.contains(w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_list_rejects_filler() {
        let noise = NoiseWords::default();
        assert!(noise.rejects("strong communication"));
        assert!(noise.rejects("Experienced"));
        assert!(!noise.rejects("python developer"));
    }

    #[test]
    fn test_matching_is_whole_word() {
        let noise = NoiseWords::default();
        // "teamcity" contains "team" but is not the word "team"
        assert!(!noise.rejects("teamcity"));
        assert!(noise.rejects("team lead"));
    }

    #[test]
    fn test_from_file_skips_comments_and_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# retuned for sales roles").unwrap();
        writeln!(file, "Closer").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "hunter  # trailing comment").unwrap();

        let noise = NoiseWords::from_file(file.path()).unwrap();
        assert_eq!(noise.len(), 2);
        assert!(noise.contains("closer"));
        assert!(noise.contains("HUNTER"));
        assert!(!noise.contains("experience"));
    }

    #[test]
    fn test_from_file_missing_is_error() {
        let err = NoiseWords::from_file(Path::new("/nonexistent/noise.txt")).unwrap_err();
        assert!(err.to_string().contains("noise word file"));
    }
}
