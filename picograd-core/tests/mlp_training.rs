//! End-to-end training sanity check: a small tanh MLP trained with
//! cross-entropy and SGD on a fixed toy problem must reduce its loss and
//! fit the data.

use picograd_core::nn::{cross_entropy, Mlp, Module};
use picograd_core::optim::{Optimizer, Sgd};
use picograd_core::{PicoGradError, Scalar};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Four linearly separable 2-D points, two classes.
const SAMPLES: [([f64; 2], usize); 4] = [
    ([0.0, 0.0], 0),
    ([0.2, 0.1], 0),
    ([1.0, 1.0], 1),
    ([0.8, 0.9], 1),
];

fn epoch_loss(net: &Mlp) -> Result<Scalar, PicoGradError> {
    let mut total: Option<Scalar> = None;
    for (features, label) in &SAMPLES {
        let inputs: Vec<Scalar> = features.iter().map(|&v| Scalar::new(v)).collect();
        let outputs = net.forward(&inputs)?;
        let loss = cross_entropy(&outputs, *label)?;
        total = Some(match total {
            Some(acc) => &acc + &loss,
            None => loss,
        });
    }
    total.ok_or(PicoGradError::EmptyScalarList)
}

#[test]
fn training_reduces_loss_and_fits_toy_data() -> Result<(), PicoGradError> {
    let mut rng = StdRng::seed_from_u64(42);
    let net = Mlp::new(2, &[8, 2], &mut rng);
    let mut opt = Sgd::new(net.parameters(), 0.1);

    let initial_loss = epoch_loss(&net)?.value();

    let mut final_loss = initial_loss;
    for _ in 0..200 {
        opt.zero_grad();
        let loss = epoch_loss(&net)?;
        loss.backward()?;
        opt.step()?;
        final_loss = loss.value();
    }

    assert!(
        final_loss < initial_loss,
        "loss did not decrease: {} -> {}",
        initial_loss,
        final_loss
    );
    assert!(final_loss.is_finite());

    // Every sample classified correctly by argmax.
    for (features, label) in &SAMPLES {
        let inputs: Vec<Scalar> = features.iter().map(|&v| Scalar::new(v)).collect();
        let outputs = net.forward(&inputs)?;
        let predicted = outputs
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.value().total_cmp(&b.value()))
            .map(|(i, _)| i)
            .expect("network has outputs");
        assert_eq!(predicted, *label, "misclassified sample {:?}", features);
    }
    Ok(())
}

#[test]
fn gradients_accumulate_across_samples_until_reset() -> Result<(), PicoGradError> {
    // Two backward passes on losses sharing the same parameters add up;
    // the optimizer's zero_grad starts the next step cleanly.
    let mut rng = StdRng::seed_from_u64(7);
    let net = Mlp::new(2, &[2], &mut rng);
    let mut opt = Sgd::new(net.parameters(), 0.05);

    let inputs: Vec<Scalar> = vec![Scalar::new(0.3), Scalar::new(-0.7)];
    let loss_a = cross_entropy(&net.forward(&inputs)?, 0)?;
    let loss_b = cross_entropy(&net.forward(&inputs)?, 0)?;

    loss_a.backward()?;
    let after_one: Vec<f64> = net.parameters().iter().map(|p| p.grad()).collect();
    loss_b.backward()?;
    let after_two: Vec<f64> = net.parameters().iter().map(|p| p.grad()).collect();

    for (g1, g2) in after_one.iter().zip(&after_two) {
        assert!((g2 - 2.0 * g1).abs() < 1e-9);
    }

    opt.zero_grad();
    assert!(net.parameters().iter().all(|p| p.grad() == 0.0));
    Ok(())
}
