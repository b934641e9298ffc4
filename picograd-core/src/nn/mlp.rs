use crate::error::PicoGradError;
use crate::nn::layers::dense::Dense;
use crate::nn::module::Module;
use crate::scalar::Scalar;
use rand::Rng;

/// A multi-layer perceptron: a chain of [`Dense`] layers.
///
/// `Mlp::new(2, &[8, 3], rng)` builds a 2 -> 8 -> 3 network; the last entry
/// of `layer_sizes` is the output width. All layers use tanh neurons, the
/// output layer included, so raw outputs live in (-1, 1) and are typically
/// fed to a softmax-based loss.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Dense>,
}

impl Mlp {
    /// Creates a new MLP from the input width and the successive layer
    /// widths.
    pub fn new<R: Rng + ?Sized>(in_features: usize, layer_sizes: &[usize], rng: &mut R) -> Self {
        let mut widths = Vec::with_capacity(layer_sizes.len() + 1);
        widths.push(in_features);
        widths.extend_from_slice(layer_sizes);

        let layers = widths
            .windows(2)
            .map(|pair| Dense::new(pair[0], pair[1], rng))
            .collect();
        Mlp { layers }
    }

    /// The layers of this network, in forward order.
    pub fn layers(&self) -> &[Dense] {
        &self.layers
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Scalar]) -> Result<Vec<Scalar>, PicoGradError> {
        let mut current: Vec<Scalar> = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Scalar> {
        let mut params = Vec::new();
        for layer in &self.layers {
            params.extend(layer.parameters());
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mlp_layer_shapes() {
        let mut rng = StdRng::seed_from_u64(3);
        let mlp = Mlp::new(4, &[6, 6, 2], &mut rng);
        let dims: Vec<(usize, usize)> = mlp
            .layers()
            .iter()
            .map(|l| (l.in_features(), l.out_features()))
            .collect();
        assert_eq!(dims, vec![(4, 6), (6, 6), (6, 2)]);
    }

    #[test]
    fn test_mlp_parameter_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let mlp = Mlp::new(4, &[6, 2], &mut rng);
        // 6*(4+1) + 2*(6+1)
        assert_eq!(mlp.parameters().len(), 30 + 14);
    }

    #[test]
    fn test_mlp_forward_width() {
        let mut rng = StdRng::seed_from_u64(3);
        let mlp = Mlp::new(2, &[5, 3], &mut rng);
        let inputs = [Scalar::new(0.5), Scalar::new(-0.5)];
        let outputs = mlp.forward(&inputs).unwrap();
        assert_eq!(outputs.len(), 3);
        assert!(outputs.iter().all(|o| o.value().abs() <= 1.0));
    }

    #[test]
    fn test_mlp_rejects_wrong_input_width() {
        let mut rng = StdRng::seed_from_u64(3);
        let mlp = Mlp::new(3, &[2], &mut rng);
        let inputs = [Scalar::new(0.5)];
        assert!(mlp.forward(&inputs).is_err());
    }
}
