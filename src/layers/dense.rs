use rand::Rng;

use crate::{math::matrix::Matrix, activation::sigmoid::{sigmoid, sigmoid_derivative}};

/// A fully connected sigmoid layer.
///
/// `weights` has shape `(input_size, size)`: row `i` holds the connections
/// leaving input unit `i`.
#[derive(Debug, Clone)]
pub struct Layer{
    pub size: usize,
    pub weights: Matrix,
    pub biases: Vec<f64>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(size: usize, input_size: usize, init_range: f64, rng: &mut R) -> Layer {
        let mut layer = Layer {
            size,
            weights: Matrix::zeros(input_size, size),
            biases: vec![0.0; size],
        };
        layer.randomize(init_range, rng);
        layer
    }

    pub fn input_size(&self) -> usize {
        self.weights.rows
    }

    /// Re-draws all weights and biases from `[-init_range, init_range]`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, init_range: f64, rng: &mut R) {
        self.weights.randomize(init_range, rng);
        for bias in &mut self.biases {
            *bias = rng.gen_range(-init_range..=init_range);
        }
    }

    /// Forward pass: `σ(input · W + b)`.
    pub fn feed_from(&self, input: &[f64]) -> Vec<f64> {
        self.weights.vec_mul(input)
            .into_iter()
            .zip(&self.biases)
            .map(|(z, b)| sigmoid(z + b))
            .collect()
    }

    /// Pushes this layer's error terms back onto its inputs.
    ///
    /// `input_activations` are the sigmoid outputs that fed this layer; the
    /// result is `(W · δ) ⊙ a (1 - a)`, i.e. the error terms of the previous layer.
    pub fn propagate_back(&self, deltas: &[f64], input_activations: &[f64]) -> Vec<f64> {
        self.weights.mul_vec(deltas)
            .into_iter()
            .zip(input_activations)
            .map(|(err, &a)| err * sigmoid_derivative(a))
            .collect()
    }

    /// Moves weights along the error terms: `W[i][j] += lr * δ[j] * input[i]`, `b[j] += lr * δ[j]`.
    ///
    /// The deltas already point downhill (they are built from `expected - output`),
    /// hence the addition.
    pub fn apply_deltas(&mut self, deltas: &[f64], inputs: &[f64], lr: f64) {
        self.weights.add_outer(inputs, deltas, lr);
        for (bias, delta) in self.biases.iter_mut().zip(deltas) {
            *bias += lr * delta;
        }
    }

    pub fn is_finite(&self) -> bool {
        self.weights.is_finite() && self.biases.iter().all(|b| b.is_finite())
    }
}
