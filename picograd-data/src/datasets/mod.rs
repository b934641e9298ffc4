use picograd_core::PicoGradError;

pub mod synthetic;
pub mod vec_dataset;

/// Trait representing a dataset.
///
/// A dataset provides access to individual data samples (e.g. input
/// features and the corresponding target label) via an index.
///
/// `Item` is the type returned by accessing a single sample, often a tuple
/// like `(Vec<f64>, usize)`.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item;

    /// Returns the data sample at the given index.
    ///
    /// # Errors
    /// Returns `PicoGradError::IndexOutOfBounds` if the index is out of
    /// bounds.
    fn get(&self, index: usize) -> Result<Self::Item, PicoGradError>;

    /// Returns the total number of samples in the dataset.
    fn len(&self) -> usize;

    /// Returns true if the dataset contains no samples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
