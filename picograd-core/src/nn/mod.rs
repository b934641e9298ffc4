pub mod init;
pub mod layers;
pub mod losses;
pub mod mlp;
pub mod module;

pub use layers::dense::{Dense, Neuron};
pub use losses::cross_entropy::cross_entropy;
pub use mlp::Mlp;
pub use module::Module;
