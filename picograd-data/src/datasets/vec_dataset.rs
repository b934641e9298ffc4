use super::Dataset;
use picograd_core::PicoGradError;

/// A simple dataset that wraps a `Vec` of items.
///
/// Each item in the `Vec` corresponds to a sample in the dataset.
#[derive(Debug, Clone)]
pub struct VecDataset<T: Clone + Send + 'static> {
    data: Vec<T>,
}

impl<T: Clone + Send + 'static> VecDataset<T> {
    /// Creates a new `VecDataset` from a vector of items.
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Iterates over the samples in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Clone + Send + 'static> Dataset for VecDataset<T> {
    type Item = T;

    /// Returns the item at the given index, cloning it.
    ///
    /// # Errors
    /// Returns `PicoGradError::IndexOutOfBounds` if the index is out of
    /// bounds.
    fn get(&self, index: usize) -> Result<Self::Item, PicoGradError> {
        self.data
            .get(index)
            .cloned()
            .ok_or(PicoGradError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests; // Link to the test file
