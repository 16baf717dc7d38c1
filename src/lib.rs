//! bowstore - Brute-Force Bag-of-Words Vector Store
//!
//! Stores term-frequency vectors keyed by id and answers nearest-neighbor
//! queries by cosine similarity, with a small text pipeline to build
//! vectors from plain-text documents.

pub mod config;
pub mod error;
pub mod metrics;
pub mod session;
pub mod text;
pub mod vector;

pub use config::{Bounds, Config};
pub use error::{Error, Result, StoreError, TextError};
pub use metrics::{Metrics, Operation};
pub use session::Session;
pub use text::Vocabulary;
pub use vector::{cosine_similarity, SharedVectorStore, SimilarityIndex, VectorStore};
