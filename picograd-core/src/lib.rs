// Declare the main modules of the crate
pub mod autograd;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod scalar;
pub mod scalar_data;

// Re-export the node handle so it is accessible directly via `picograd_core::Scalar`
pub use scalar::Scalar;

pub mod error;
pub use error::PicoGradError;
