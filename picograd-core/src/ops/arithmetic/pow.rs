// picograd-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::PicoGradError;
use crate::scalar::Scalar;
use std::sync::Arc;

// --- Forward Operation ---

/// Raises a scalar node to a constant power: `base^exponent`.
///
/// Only plain-number exponents are supported; differentiating with respect
/// to the exponent is out of scope, and the signature makes a node exponent
/// unrepresentable.
///
/// # Domain Considerations
/// A negative base with a fractional exponent, or `0^-1`, follow
/// `f64::powf` semantics (NaN / infinity); the result is an ordinary value,
/// not an error, and propagates through subsequent operations.
pub fn pow_op(base: &Scalar, exponent: f64) -> Scalar {
    let value = base.value().powf(exponent);
    let grad_fn = PowBackward {
        input: base.clone(),
        exponent,
    };
    Scalar::from_op(value, "powf", Arc::new(grad_fn))
}

// --- Backward Operation ---

/// Backward record for the power rule: `z = a^n`, `dz/da = n * a^(n-1)`.
#[derive(Debug)]
struct PowBackward {
    input: Scalar,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, PicoGradError> {
        let local = self.exponent * self.input.value().powf(self.exponent - 1.0);
        Ok(vec![local * grad_output])
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.input.clone()]
    }
}

// --- Scalar Method ---

impl Scalar {
    /// Raise to a constant power: `self^exponent`.
    pub fn powf(&self, exponent: f64) -> Scalar {
        pow_op(self, exponent)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests; // Link to the test file
