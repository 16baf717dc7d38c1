//! Shared Vector Store
//!
//! Thread-safe handle around [`VectorStore`]. Ingestion reads every stored
//! vector while writing the similarity index, so all operations go through
//! one mutex.

use parking_lot::Mutex;
use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;

use super::store::VectorStore;
use crate::error::StoreResult;

/// Cloneable handle to a store guarded by a single lock
#[derive(Debug)]
pub struct SharedVectorStore<K = String> {
    inner: Arc<Mutex<VectorStore<K>>>,
}

impl<K> Clone for SharedVectorStore<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K> Default for SharedVectorStore<K> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(VectorStore::default())),
        }
    }
}

impl<K: Eq + Hash + Clone> SharedVectorStore<K> {
    /// Create a new empty shared store
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing store
    pub fn from_store(store: VectorStore<K>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// See [`VectorStore::add_vector`]
    pub fn add_vector(&self, id: K, vector: Vec<f32>) -> StoreResult<()> {
        self.inner.lock().add_vector(id, vector)
    }

    /// Owned copy of the stored vector, or `None` if `id` is unknown
    pub fn get_vector<Q>(&self, id: &Q) -> Option<Vec<f32>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().get_vector(id).map(<[f32]>::to_vec)
    }

    /// See [`VectorStore::find_similar_vectors`]
    pub fn find_similar_vectors(
        &self,
        query: &[f32],
        num_results: usize,
    ) -> StoreResult<Vec<(K, f32)>> {
        self.inner.lock().find_similar_vectors(query, num_results)
    }

    /// Run `f` with the store locked, for inspection
    pub fn with_store<R>(&self, f: impl FnOnce(&VectorStore<K>) -> R) -> R {
        f(&*self.inner.lock())
    }

    /// Get number of stored vectors
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
