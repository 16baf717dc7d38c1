//! Vector Store
//!
//! Brute-force storage for term-frequency vectors keyed by id, with an
//! incrementally built pairwise similarity index.

use hashbrown::HashMap;
use std::borrow::Borrow;
use std::hash::Hash;
use tracing::debug;

use super::similarity::cosine_similarity;
use crate::error::{StoreError, StoreResult};

/// Pairwise similarity cache: `index[existing][added_later] = score`
pub type SimilarityIndex<K> = HashMap<K, HashMap<K, f32>>;

/// A stored vector with its id
#[derive(Debug, Clone)]
struct VectorEntry<K> {
    id: K,
    vector: Vec<f32>,
}

/// In-memory vector store
///
/// Entries keep the slot of their first insertion, so iteration (and
/// tie-breaking in [`VectorStore::find_similar_vectors`]) follows insertion
/// order even after an id is overwritten.
///
/// The similarity index is filled one direction only: adding `id` records
/// `index[other][id]` for every other stored id, never `index[id][other]`.
/// Queries never read it.
#[derive(Debug, Clone)]
pub struct VectorStore<K = String> {
    /// Vectors in insertion order
    entries: Vec<VectorEntry<K>>,
    /// Id -> position in `entries`
    slots: HashMap<K, usize>,
    /// Pairwise similarity cache
    similarity_index: SimilarityIndex<K>,
    /// Dimension fixed by the first stored vector
    dimension: Option<usize>,
}

impl<K> Default for VectorStore<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            slots: HashMap::new(),
            similarity_index: HashMap::new(),
            dimension: None,
        }
    }
}

impl<K: Eq + Hash + Clone> VectorStore<K> {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that only accepts vectors of `dimension`
    pub fn with_dimension(dimension: usize) -> Self {
        Self {
            dimension: Some(dimension),
            ..Self::default()
        }
    }

    /// Store a vector under `id`, overwriting any previous vector silently,
    /// then record its similarity to every other stored vector.
    ///
    /// Nothing is modified when the dimension does not match.
    pub fn add_vector(&mut self, id: K, vector: Vec<f32>) -> StoreResult<()> {
        self.check_dimension(vector.len())?;
        self.dimension.get_or_insert(vector.len());

        let slot = match self.slots.get(&id) {
            Some(&slot) => {
                debug!(slot, "Overwriting stored vector");
                self.entries[slot].vector = vector;
                slot
            }
            None => {
                let slot = self.entries.len();
                self.entries.push(VectorEntry {
                    id: id.clone(),
                    vector,
                });
                self.slots.insert(id, slot);
                slot
            }
        };

        self.update_index(slot);
        Ok(())
    }

    /// Record `index[existing][new] = cosine(new, existing)` for every other entry
    fn update_index(&mut self, slot: usize) {
        let added = &self.entries[slot];

        for (i, existing) in self.entries.iter().enumerate() {
            if i == slot {
                continue;
            }
            let similarity = cosine_similarity(&added.vector, &existing.vector);
            self.similarity_index
                .entry(existing.id.clone())
                .or_default()
                .insert(added.id.clone(), similarity);
        }

        debug!(
            slot,
            compared = self.entries.len() - 1,
            "Updated similarity index"
        );
    }

    /// Get the stored vector, or `None` if `id` is unknown
    pub fn get_vector<Q>(&self, id: &Q) -> Option<&[f32]>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots
            .get(id)
            .map(|&slot| self.entries[slot].vector.as_slice())
    }

    /// Check if `id` is stored
    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.contains_key(id)
    }

    /// Find the `num_results` stored vectors most similar to `query`
    ///
    /// Scores every stored vector, then sorts descending. The sort is
    /// stable, so equal scores keep insertion order. Returns fewer results
    /// when the store holds fewer vectors, and an empty list for an empty
    /// store.
    pub fn find_similar_vectors(
        &self,
        query: &[f32],
        num_results: usize,
    ) -> StoreResult<Vec<(K, f32)>> {
        if self.entries.is_empty() {
            return Ok(Vec::new());
        }
        self.check_dimension(query.len())?;

        let mut results: Vec<(K, f32)> = self
            .entries
            .iter()
            .map(|entry| (entry.id.clone(), cosine_similarity(query, &entry.vector)))
            .collect();

        // Sort by similarity (descending)
        results.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        // Take top K
        results.truncate(num_results);
        debug!(
            scanned = self.entries.len(),
            returned = results.len(),
            "Similarity search"
        );
        Ok(results)
    }

    /// Cached similarity recorded when `later` was added after `earlier`
    pub fn cached_similarity<Q>(&self, earlier: &Q, later: &Q) -> Option<f32>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.similarity_index.get(earlier)?.get(later).copied()
    }

    /// Read-only view of the pairwise similarity cache
    pub fn similarity_index(&self) -> &SimilarityIndex<K> {
        &self.similarity_index
    }

    /// Ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|entry| &entry.id)
    }

    /// Dimension of stored vectors, if fixed yet
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Get number of stored vectors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_dimension(&self, got: usize) -> StoreResult<()> {
        match self.dimension {
            Some(expected) if expected != got => {
                Err(StoreError::DimensionMismatch { expected, got })
            }
            _ => Ok(()),
        }
    }
}
