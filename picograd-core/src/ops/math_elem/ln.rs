// picograd-core/src/ops/math_elem/ln.rs

use crate::autograd::BackwardOp;
use crate::error::PicoGradError;
use crate::scalar::Scalar;
use std::sync::Arc;

// --- Forward Operation ---

/// Natural logarithm (base e) of a scalar node.
///
/// # Errors
/// Returns `PicoGradError::DomainError` when the input value is zero or
/// negative. The check runs before any node is constructed, so a failed
/// call leaves the graph untouched.
///
/// # Domain Considerations
/// The gradient `1/x` is well-defined for every value the forward pass
/// accepts. Callers that cannot guarantee positivity should route the
/// input through `exp` (e.g. a softmax) first.
pub fn ln_op(a: &Scalar) -> Result<Scalar, PicoGradError> {
    let x = a.value();
    if x <= 0.0 {
        return Err(PicoGradError::DomainError {
            operation: "ln_op".to_string(),
            value: x,
        });
    }
    let grad_fn = LnBackward { input: a.clone() };
    Ok(Scalar::from_op(x.ln(), "ln", Arc::new(grad_fn)))
}

// --- Backward Operation ---

/// Backward record for the natural logarithm: `z = ln(a)`, `dz/da = 1/a`.
#[derive(Debug)]
struct LnBackward {
    input: Scalar,
}

impl BackwardOp for LnBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, PicoGradError> {
        Ok(vec![grad_output / self.input.value()])
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.input.clone()]
    }
}

// --- Scalar Method ---

impl Scalar {
    /// Computes the natural logarithm: `ln(self)`.
    ///
    /// # Errors
    /// Returns `PicoGradError::DomainError` for non-positive values.
    pub fn ln(&self) -> Result<Scalar, PicoGradError> {
        ln_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "ln_test.rs"]
mod tests; // Link to the test file
