use crate::layers::dense::Layer;

/// Plain online gradient descent with a fixed step size.
#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one weight update to a layer from its error terms and the inputs it saw.
    pub fn step(&self, layer: &mut Layer, deltas: &[f64], inputs: &[f64]) {
        layer.apply_deltas(deltas, inputs, self.learning_rate);
    }
}
