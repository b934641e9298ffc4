use crate::error::PicoGradError;
use crate::nn::init;
use crate::nn::module::Module;
use crate::scalar::Scalar;
use rand::Rng;

/// A single tanh neuron: `tanh(sum(w_i * x_i) + b)`.
///
/// Weights are initialized uniformly in (-1, 1), the bias at zero.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Scalar>,
    bias: Scalar,
}

impl Neuron {
    /// Creates a neuron for `in_features` inputs, drawing weights from the
    /// given RNG.
    pub fn new<R: Rng + ?Sized>(in_features: usize, rng: &mut R) -> Self {
        Neuron {
            weights: init::uniform_vec(rng, in_features, -1.0, 1.0),
            bias: Scalar::new(0.0),
        }
    }

    /// Number of inputs this neuron accepts.
    pub fn in_features(&self) -> usize {
        self.weights.len()
    }

    /// Computes the neuron's activation for the given inputs.
    ///
    /// # Errors
    /// Returns `PicoGradError::DimensionMismatch` if the number of inputs
    /// does not match the number of weights.
    pub fn forward(&self, inputs: &[Scalar]) -> Result<Scalar, PicoGradError> {
        if inputs.len() != self.weights.len() {
            return Err(PicoGradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let mut activation = self.bias.clone();
        for (w, x) in self.weights.iter().zip(inputs) {
            activation = &activation + &(w * x);
        }
        Ok(activation.tanh())
    }

    /// The neuron's weights followed by its bias.
    pub fn parameters(&self) -> Vec<Scalar> {
        let mut params: Vec<Scalar> = self.weights.to_vec();
        params.push(self.bias.clone());
        params
    }
}

/// A fully connected layer of tanh neurons.
#[derive(Debug)]
pub struct Dense {
    neurons: Vec<Neuron>,
    in_features: usize,
    out_features: usize,
}

impl Dense {
    /// Creates a new Dense layer.
    ///
    /// # Arguments
    ///
    /// * `in_features` - Size of each input sample.
    /// * `out_features` - Number of neurons, i.e. size of the output.
    /// * `rng` - Random source for weight initialization.
    pub fn new<R: Rng + ?Sized>(in_features: usize, out_features: usize, rng: &mut R) -> Self {
        let neurons = (0..out_features)
            .map(|_| Neuron::new(in_features, rng))
            .collect();
        Dense {
            neurons,
            in_features,
            out_features,
        }
    }

    /// Size of each input sample.
    pub fn in_features(&self) -> usize {
        self.in_features
    }

    /// Size of the output.
    pub fn out_features(&self) -> usize {
        self.out_features
    }
}

impl Module for Dense {
    fn forward(&self, inputs: &[Scalar]) -> Result<Vec<Scalar>, PicoGradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<Scalar> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "dense_test.rs"]
mod tests; // Link to the test file
