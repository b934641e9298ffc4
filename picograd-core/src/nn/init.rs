use crate::scalar::Scalar;
use rand::Rng;

/// Creates a leaf node with a value drawn uniformly from `[low, high)`.
///
/// The random source is an explicit parameter so initialization is
/// reproducible under a seeded RNG and independent of call order elsewhere.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> Scalar {
    Scalar::new(rng.gen_range(low..high))
}

/// Creates `n` leaf nodes with values drawn uniformly from `[low, high)`.
pub fn uniform_vec<R: Rng + ?Sized>(rng: &mut R, n: usize, low: f64, high: f64) -> Vec<Scalar> {
    (0..n).map(|_| uniform(rng, low, high)).collect()
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
