use super::vec_dataset::VecDataset;
use picograd_core::PicoGradError;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// A labelled sample: feature vector plus class index.
pub type LabelledSample = (Vec<f64>, usize);

/// Generates a labelled 2-D Gaussian-blob classification dataset.
///
/// For each entry of `centers`, `n_per_class` points are drawn from an
/// isotropic Gaussian of deviation `std_dev` around the center; the class
/// label is the center's index. Samples are laid out class by class; callers
/// that want a shuffled order can shuffle indices with the same RNG.
///
/// The random source is an explicit parameter, so a seeded RNG reproduces
/// the dataset exactly.
///
/// # Errors
/// Returns `PicoGradError::DomainError` if `std_dev` is not strictly
/// positive and finite.
pub fn gaussian_blobs<R: Rng + ?Sized>(
    rng: &mut R,
    n_per_class: usize,
    centers: &[(f64, f64)],
    std_dev: f64,
) -> Result<VecDataset<LabelledSample>, PicoGradError> {
    if !(std_dev.is_finite() && std_dev > 0.0) {
        return Err(PicoGradError::DomainError {
            operation: "gaussian_blobs".to_string(),
            value: std_dev,
        });
    }

    let mut samples = Vec::with_capacity(centers.len() * n_per_class);
    for (label, &(cx, cy)) in centers.iter().enumerate() {
        let dist_x = Normal::new(cx, std_dev)
            .map_err(|e| PicoGradError::InternalError(format!("gaussian_blobs: {e}")))?;
        let dist_y = Normal::new(cy, std_dev)
            .map_err(|e| PicoGradError::InternalError(format!("gaussian_blobs: {e}")))?;
        for _ in 0..n_per_class {
            let features = vec![dist_x.sample(rng), dist_y.sample(rng)];
            samples.push((features, label));
        }
    }
    Ok(VecDataset::new(samples))
}

#[cfg(test)]
#[path = "synthetic_test.rs"]
mod tests; // Link to the test file
