//! Vector Module
//!
//! Cosine similarity and brute-force vector storage.

mod shared;
mod similarity;
mod store;

pub use shared::SharedVectorStore;
pub use similarity::{cosine_similarity, dot_product, magnitude};
pub use store::{SimilarityIndex, VectorStore};
