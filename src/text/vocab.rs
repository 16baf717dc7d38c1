//! Vocabulary and Bag-of-Words Vectorization
//!
//! Maps each distinct token to a fixed vector position. The mapping is
//! frozen once built so every vector it produces shares one dimension.

use hashbrown::HashMap;

/// Lowercase `text` and split it on whitespace
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_lowercase)
}

/// Token -> vector position mapping
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
    terms: Vec<String>,
}

impl Vocabulary {
    /// Build from a corpus, numbering tokens in first-seen order
    pub fn build<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = Self::default();
        for text in texts {
            for token in tokenize(text.as_ref()) {
                if !vocab.index.contains_key(&token) {
                    vocab.index.insert(token.clone(), vocab.terms.len());
                    vocab.terms.push(token);
                }
            }
        }
        vocab
    }

    /// Term-frequency vector of `text`. Unknown tokens are ignored.
    pub fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0; self.terms.len()];
        for token in tokenize(text) {
            if let Some(&i) = self.index.get(&token) {
                vector[i] += 1.0;
            }
        }
        vector
    }

    /// Position of `term`, if known
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Term at `position`, if in range
    pub fn term_at(&self, position: usize) -> Option<&str> {
        self.terms.get(position).map(String::as_str)
    }

    /// Number of distinct terms (the vector dimension)
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
