pub mod datasets;

// Re-export main components
pub use datasets::synthetic::gaussian_blobs;
pub use datasets::vec_dataset::VecDataset;
pub use datasets::Dataset;
