//! Vector Similarity Functions
//!
//! Cosine similarity over term-frequency vectors, with degenerate inputs
//! (zero, NaN or infinite magnitude) resolving to a similarity of 0.

/// Compute dot product of two vectors
///
/// Uses unrolled loop for better CPU performance. Only the common prefix
/// is summed when lengths differ; callers validate dimensions upstream.
#[inline]
pub fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "Vector dimensions must match");

    let len = a.len().min(b.len());
    let (a, b) = (&a[..len], &b[..len]);
    let mut sum = 0.0f32;

    let mut a_chunks = a.chunks_exact(4);
    let mut b_chunks = b.chunks_exact(4);
    for (x, y) in a_chunks.by_ref().zip(b_chunks.by_ref()) {
        sum += x[0] * y[0];
        sum += x[1] * y[1];
        sum += x[2] * y[2];
        sum += x[3] * y[3];
    }

    for (x, y) in a_chunks.remainder().iter().zip(b_chunks.remainder()) {
        sum += x * y;
    }

    sum
}

/// Euclidean (L2) norm
#[inline]
pub fn magnitude(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// A norm can be divided by only if it is finite and non-zero.
#[inline]
fn is_usable_norm(norm: f32) -> bool {
    norm != 0.0 && norm.is_finite()
}

/// Compute cosine similarity between two vectors
///
/// Returns a value in [-1, 1] where 1 means identical direction. For the
/// non-negative term-frequency vectors built by this crate the range is
/// [0, 1].
///
/// Returns 0 when either magnitude is zero, NaN or infinite. Never panics
/// on degenerate input.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "Vector dimensions must match");

    let mag_a = magnitude(a);
    let mag_b = magnitude(b);

    if !is_usable_norm(mag_a) || !is_usable_norm(mag_b) {
        return 0.0;
    }

    let sim = dot_product(a, b) / (mag_a * mag_b);
    // The product of two finite norms can still overflow to infinity.
    if sim.is_finite() {
        sim
    } else {
        0.0
    }
}
