use crate::error::PicoGradError;
use crate::scalar::Scalar;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(PicoGradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(PicoGradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` builds a scalar expression from freshly created leaf nodes; it is
/// evaluated once at `point` for the analytical gradients (forward +
/// backward) and twice per input at `point[i] ± epsilon` for the numerical
/// ones. An input passes when the two agree within `tolerance`, absolutely
/// or relatively.
pub fn check_grad<F>(
    func: F,
    point: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Scalar]) -> Result<Scalar, PicoGradError>,
{
    // --- 1. Analytical gradients: one forward + backward pass ---
    let leaves: Vec<Scalar> = point.iter().map(|&v| Scalar::new(v)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;

    // --- 2. Numerical gradient per input, from fresh graphs ---
    for (i, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let eval_at = |shifted: f64| -> Result<f64, GradCheckError> {
            let mut values = point.to_vec();
            values[i] = shifted;
            let perturbed: Vec<Scalar> = values.iter().map(|&v| Scalar::new(v)).collect();
            Ok(func(&perturbed)
                .map_err(GradCheckError::ForwardPassError)?
                .value())
        };

        let loss_plus = eval_at(point[i] + epsilon)?;
        let loss_minus = eval_at(point[i] - epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > tolerance
            && !relative_eq!(analytical_grad, numerical_grad, max_relative = tolerance)
        {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}
