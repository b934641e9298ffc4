// picograd-core/src/nn/losses/cross_entropy.rs

use crate::error::PicoGradError;
use crate::scalar::Scalar;

/// Computes the softmax cross-entropy loss for one sample.
///
/// The predictions are treated as unnormalized class scores; the loss is
/// `-ln(softmax(predictions)[target_class])`, built entirely from engine
/// operations (`exp`, addition, division, `ln`, negation) so that a
/// backward pass from the returned node yields
/// `softmax(predictions) - one_hot(target_class)` on the prediction nodes.
///
/// The number of classes is the length of `predictions`.
///
/// # Errors
/// * `PicoGradError::EmptyScalarList` if `predictions` is empty.
/// * `PicoGradError::ClassIndexOutOfBounds` if `target_class` is not a
///   valid index into `predictions`.
pub fn cross_entropy(predictions: &[Scalar], target_class: usize) -> Result<Scalar, PicoGradError> {
    if predictions.is_empty() {
        return Err(PicoGradError::EmptyScalarList);
    }
    if target_class >= predictions.len() {
        return Err(PicoGradError::ClassIndexOutOfBounds {
            index: target_class,
            n_classes: predictions.len(),
        });
    }

    let exps: Vec<Scalar> = predictions.iter().map(|p| p.exp()).collect();
    let mut sum_exps = exps[0].clone();
    for e in &exps[1..] {
        sum_exps = &sum_exps + e;
    }

    // exp is strictly positive and so is the sum, hence ln cannot fail
    // here short of numeric over- or underflow in the exponentials.
    let softmax_target = &exps[target_class] / &sum_exps;
    Ok(-softmax_target.ln()?)
}

// --- Tests ---
#[cfg(test)]
#[path = "cross_entropy_test.rs"]
mod tests; // Link to the test file
