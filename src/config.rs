//! Session Configuration

/// Markers delimiting the region to ingest from a document
///
/// Markers are matched as substrings, not whole lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds {
    /// Marker where the region starts
    pub start: String,
    /// Marker where the region ends (included)
    pub end: String,
}

/// Session configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of results returned per query
    pub num_results: usize,

    /// Region of the source document to ingest (None = whole document)
    pub bounds: Option<Bounds>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_results: 3,
            bounds: None,
        }
    }
}

impl Config {
    /// Set number of results per query
    pub fn with_num_results(mut self, num_results: usize) -> Self {
        self.num_results = num_results;
        self
    }

    /// Restrict ingestion to the region between two markers
    pub fn with_bounds(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.bounds = Some(Bounds {
            start: start.into(),
            end: end.into(),
        });
        self
    }
}
