use crate::error::PicoGradError;
use crate::optim::optimizer::Optimizer;
use crate::scalar::Scalar;

/// Implements plain stochastic gradient descent:
/// `value <- value - lr * grad` for every managed parameter.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Scalar>,
    lr: f64,
}

impl Sgd {
    /// Creates a new `Sgd` over the given parameter handles.
    ///
    /// # Arguments
    ///
    /// * `params`: The parameters to optimize (e.g. from
    ///   [`Module::parameters`](crate::nn::Module::parameters)).
    /// * `lr`: The learning rate.
    pub fn new(params: Vec<Scalar>, lr: f64) -> Self {
        Sgd { params, lr }
    }

    /// The current learning rate.
    pub fn lr(&self) -> f64 {
        self.lr
    }

    /// Changes the learning rate for subsequent steps.
    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) -> Result<(), PicoGradError> {
        for param in &self.params {
            let updated = param.value() - self.lr * param.grad();
            param.set_value(updated);
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests; // Link to the test file
