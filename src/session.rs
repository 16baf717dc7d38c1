//! Query Session
//!
//! Owns one store together with the vocabulary its vectors were built
//! from, so queries are always vectorized with the same term mapping.

use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, StoreResult, TextError};
use crate::metrics::{Metrics, Operation};
use crate::text::{self, Vocabulary};
use crate::vector::VectorStore;

/// Ingested corpus ready for similarity queries
#[derive(Debug)]
pub struct Session {
    config: Config,
    vocab: Vocabulary,
    store: VectorStore<String>,
    metrics: Metrics,
}

impl Session {
    /// Build the vocabulary from `paragraphs` and store one vector per
    /// paragraph, keyed by its text
    pub fn ingest<I, S>(paragraphs: I, config: Config) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let paragraphs: Vec<String> = paragraphs.into_iter().map(Into::into).collect();
        let vocab = Vocabulary::build(&paragraphs);
        let mut store = VectorStore::with_dimension(vocab.len());
        let metrics = Metrics::new();

        for paragraph in paragraphs.iter() {
            let start = Instant::now();
            let vector = vocab.vectorize(paragraph);
            store.add_vector(paragraph.clone(), vector)?;
            metrics.record(Operation::Add, start.elapsed());
        }

        info!(
            paragraphs = paragraphs.len(),
            stored = store.len(),
            vocabulary = vocab.len(),
            "Corpus ingested"
        );

        Ok(Self {
            config,
            vocab,
            store,
            metrics,
        })
    }

    /// Clean and split `raw` (restricted to `config.bounds` if set), then ingest
    pub fn from_text(raw: &str, config: Config) -> Result<Self> {
        let region = match &config.bounds {
            Some(bounds) => text::extract_within_bounds(raw, &bounds.start, &bounds.end)?,
            None => raw,
        };
        Self::from_region(region, config)
    }

    /// Read `path` (only the region within `config.bounds` if set) and
    /// build a session from it
    pub fn from_file(path: impl AsRef<Path>, config: Config) -> Result<Self> {
        let path = path.as_ref();
        let region = match &config.bounds {
            Some(bounds) => text::extract_file_within_bounds(path, &bounds.start, &bounds.end)?,
            None => std::fs::read_to_string(path).map_err(TextError::from)?,
        };
        info!(path = %path.display(), bytes = region.len(), "Loaded document");
        Self::from_region(&region, config)
    }

    fn from_region(region: &str, config: Config) -> Result<Self> {
        debug!(bytes = region.len(), "Preparing text");
        let paragraphs = text::prepare(region);
        Self::ingest(paragraphs, config)
    }

    /// Top `config.num_results` paragraphs most similar to `query`
    pub fn search(&self, query: &str) -> StoreResult<Vec<(String, f32)>> {
        self.search_with(query, self.config.num_results)
    }

    /// Top `num_results` paragraphs most similar to `query`
    ///
    /// Tokens outside the vocabulary are ignored; a query with no known
    /// tokens scores 0 against everything.
    pub fn search_with(&self, query: &str, num_results: usize) -> StoreResult<Vec<(String, f32)>> {
        let start = Instant::now();
        let query_vector = self.vocab.vectorize(query);
        let results = self.store.find_similar_vectors(&query_vector, num_results)?;
        self.metrics.record(Operation::Query, start.elapsed());
        Ok(results)
    }

    /// Number of stored paragraphs
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn store(&self) -> &VectorStore<String> {
        &self.store
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Bound, Error};
    use std::io::Write;

    const DICTIONARY: &str = "\
The Project Gutenberg eBook header, with license text.

ABBESS, or LADY ABBESS, A bawd, the mistress of a brothel.

ABEL-WACKETS. Blows given on the palm of the hand with a twisted handkerchief.

ABIGAIL. A lady's waiting-maid.

ABRAM. Naked. Cant.

*** END OF THE DICTIONARY ***
Trailing license text.";

    fn dictionary_config() -> Config {
        Config::default().with_bounds("ABBESS, or LADY ABBESS", "*** END OF THE DICTIONARY ***")
    }

    #[test]
    fn test_ingest_bounded_text() {
        let session = Session::from_text(DICTIONARY, dictionary_config()).unwrap();

        // Four entries plus the end marker paragraph.
        assert_eq!(session.len(), 5);
        assert!(session.store().contains("ABRAM Naked Cant"));
        assert!(!session
            .store()
            .ids()
            .any(|id| id.contains("Gutenberg") || id.contains("Trailing")));
        assert_eq!(session.metrics().ops(Operation::Add), 5);
        assert_eq!(
            session.store().dimension(),
            Some(session.vocabulary().len())
        );
    }

    #[test]
    fn test_search_ranks_best_match_first() {
        let session = Session::from_text(DICTIONARY, dictionary_config()).unwrap();

        let results = session.search("Ladys waitingmaid").unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, "ABIGAIL A ladys waitingmaid");
        for pair in results.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
        assert_eq!(session.metrics().ops(Operation::Query), 1);
    }

    #[test]
    fn test_search_case_insensitive() {
        let session = Session::ingest(["Naked Cant", "Blows given"], Config::default()).unwrap();
        let results = session.search_with("NAKED", 1).unwrap();
        assert_eq!(results[0].0, "Naked Cant");
        assert!(results[0].1 > 0.7);
    }

    #[test]
    fn test_search_unknown_tokens_score_zero() {
        let session = Session::ingest(["alpha beta", "gamma"], Config::default()).unwrap();
        let results = session.search("zeta eta").unwrap();

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|(_, score)| *score == 0.0));
        assert_eq!(results[0].0, "alpha beta");
    }

    #[test]
    fn test_duplicate_paragraphs_overwrite() {
        let session = Session::ingest(["same text", "other", "same text"], Config::default()).unwrap();
        assert_eq!(session.len(), 2);
        assert_eq!(session.metrics().ops(Operation::Add), 3);
    }

    #[test]
    fn test_empty_corpus() {
        let session = Session::from_text("", Config::default()).unwrap();
        assert!(session.is_empty());
        assert!(session.search("anything").unwrap().is_empty());
    }

    #[test]
    fn test_missing_bound() {
        let config = Config::default().with_bounds("NOT THERE", "*** END OF THE DICTIONARY ***");
        let err = Session::from_text(DICTIONARY, config).unwrap_err();
        assert!(matches!(
            err,
            Error::Text(TextError::BoundNotFound {
                which: Bound::Start,
                ..
            })
        ));
    }

    #[test]
    fn test_crlf_text_splits_into_paragraphs() {
        let raw = "ABBESS, a bawd.\r\n\r\nABIGAIL. A lady's waiting-maid.\r\n\r\nABRAM. Naked.\r\n";
        let session = Session::from_text(raw, Config::default()).unwrap();

        assert_eq!(session.len(), 3);
        assert!(session.store().contains("ABRAM Naked"));
        let results = session.search_with("naked", 1).unwrap();
        assert_eq!(results[0].0, "ABRAM Naked");
    }

    #[test]
    fn test_from_file_crlf_bounded() {
        let crlf = DICTIONARY.replace('\n', "\r\n");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(crlf.as_bytes()).unwrap();

        let session = Session::from_file(file.path(), dictionary_config()).unwrap();
        assert_eq!(session.len(), 5);
        assert!(session.store().contains("ABIGAIL A ladys waitingmaid"));
    }

    #[test]
    fn test_from_file_missing_bound() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DICTIONARY.as_bytes()).unwrap();

        let config = Config::default().with_bounds("ABBESS", "NO SUCH END");
        let err = Session::from_file(file.path(), config).unwrap_err();
        assert!(matches!(
            err,
            Error::Text(TextError::BoundNotFound {
                which: Bound::End,
                ..
            })
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DICTIONARY.as_bytes()).unwrap();

        let session = Session::from_file(file.path(), dictionary_config().with_num_results(1)).unwrap();
        let results = session.search("twisted handkerchief").unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].0.starts_with("ABELWACKETS"));
    }
}
