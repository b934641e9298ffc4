//! # Training a small MLP on synthetic blobs
//!
//! This example walks through the fundamental steps of training a scalar
//! MLP with `picograd-core`:
//!
//! 1.  **Data**: a labelled 3-class Gaussian-blob dataset from
//!     `picograd-data`, generated with a seeded RNG so runs are
//!     reproducible.
//! 2.  **Model**: `Mlp` (tanh neurons), built with the same explicit RNG.
//! 3.  **Loss**: summed softmax cross-entropy over the epoch.
//! 4.  **Training loop**: zero gradients, backward pass, SGD update.
//! 5.  **Evaluation**: argmax accuracy over the training set.
//!
//! ## Running
//! `cargo run --example train_mlp`

use picograd_core::nn::{cross_entropy, Mlp, Module};
use picograd_core::optim::{Optimizer, Sgd};
use picograd_core::{PicoGradError, Scalar};
use picograd_data::{gaussian_blobs, Dataset, VecDataset};
use rand::rngs::StdRng;
use rand::SeedableRng;

const N_CLASSES: usize = 3;
const N_PER_CLASS: usize = 30;
const EPOCHS: usize = 50;
const LEARNING_RATE: f64 = 0.05;

fn main() -> Result<(), PicoGradError> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(42);
    let centers = [(0.0, 0.0), (4.0, 4.0), (-4.0, 4.0)];
    let dataset = gaussian_blobs(&mut rng, N_PER_CLASS, &centers, 0.8)?;

    let net = Mlp::new(2, &[8, N_CLASSES], &mut rng);
    let mut opt = Sgd::new(net.parameters(), LEARNING_RATE);
    log::info!(
        "training on {} samples with {} parameters",
        dataset.len(),
        net.parameters().len()
    );

    for epoch in 0..EPOCHS {
        opt.zero_grad();

        let mut epoch_loss: Option<Scalar> = None;
        for (features, label) in dataset.iter() {
            let inputs: Vec<Scalar> = features.iter().map(|&v| Scalar::new(v)).collect();
            let outputs = net.forward(&inputs)?;
            let loss = cross_entropy(&outputs, *label)?;
            epoch_loss = Some(match epoch_loss {
                Some(acc) => &acc + &loss,
                None => loss,
            });
        }
        let epoch_loss = epoch_loss.ok_or(PicoGradError::EmptyScalarList)?;

        epoch_loss.backward()?;
        opt.step()?;

        println!(
            "[=== epoch {} ===] loss: {:.6}",
            epoch + 1,
            epoch_loss.value()
        );
    }

    let accuracy = evaluate(&net, &dataset)?;
    println!(
        "training accuracy: {:.1}%",
        100.0 * accuracy
    );
    Ok(())
}

/// Fraction of samples whose argmax output matches the label.
fn evaluate(
    net: &Mlp,
    dataset: &VecDataset<(Vec<f64>, usize)>,
) -> Result<f64, PicoGradError> {
    let mut correct = 0usize;
    for (features, label) in dataset.iter() {
        let inputs: Vec<Scalar> = features.iter().map(|&v| Scalar::new(v)).collect();
        let outputs = net.forward(&inputs)?;
        let predicted = outputs
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.value().total_cmp(&b.value()))
            .map(|(i, _)| i)
            .ok_or_else(|| PicoGradError::InternalError("network produced no outputs".to_string()))?;
        if predicted == *label {
            correct += 1;
        }
    }
    Ok(correct as f64 / dataset.len() as f64)
}
