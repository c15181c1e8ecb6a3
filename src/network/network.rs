use rand::{rngs::StdRng, SeedableRng};

use crate::error::{NetworkError, NetworkResult};
use crate::layers::dense::Layer;
use crate::math::matrix::Matrix;
use crate::network::example::Example;
use crate::network::topology::Topology;
use crate::optim::sgd::Sgd;
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;
use crate::train::train_report::TrainReport;

/// Feed-forward network with one sigmoid hidden layer and a sigmoid output layer.
///
/// The network owns its RNG so that weight resets draw from the same stream
/// (reproducible when `TrainConfig::seed` is set).
#[derive(Debug, Clone)]
pub struct Network {
    topology: Topology,
    config: TrainConfig,
    pub(crate) hidden: Layer,
    pub(crate) output: Layer,
    rng: StdRng,
}

impl Network {
    /// Builds a network with freshly randomized weights.
    pub fn new(topology: Topology, config: TrainConfig) -> NetworkResult<Network> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let hidden = Layer::new(topology.hidden_size(), topology.input_size(), config.init_range, &mut rng);
        let output = Layer::new(topology.output_size(), topology.hidden_size(), config.init_range, &mut rng);

        Ok(Network { topology, config, hidden, output, rng })
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Shape `input_size × hidden_size`.
    pub fn weights_input_hidden(&self) -> &Matrix {
        &self.hidden.weights
    }

    /// Shape `hidden_size × output_size`.
    pub fn weights_hidden_output(&self) -> &Matrix {
        &self.output.weights
    }

    pub fn bias_hidden(&self) -> &[f64] {
        &self.hidden.biases
    }

    pub fn bias_output(&self) -> &[f64] {
        &self.output.biases
    }

    /// Re-draws every weight and bias from `[-init_range, init_range]`.
    pub fn reset_weights(&mut self) {
        let range = self.config.init_range;
        self.hidden.randomize(range, &mut self.rng);
        self.output.randomize(range, &mut self.rng);
    }

    /// Forward pass. Every output lies strictly inside (0, 1); read `> 0.5` as class 1.
    ///
    /// Fails with `InvalidInput` when `input.len()` differs from the input layer size.
    pub fn predict(&self, input: &[f64]) -> NetworkResult<Vec<f64>> {
        if input.len() != self.topology.input_size() {
            return Err(NetworkError::dimension("predict", "inputs", self.topology.input_size(), input.len()));
        }
        Ok(self.forward(input).1)
    }

    /// Trains on `examples` in order, optionally starting from fresh random weights.
    ///
    /// With `reset_weights = false` the current weights are the starting point,
    /// which is how corrections and reinforcements build on earlier learning.
    ///
    /// Every example is checked against the topology before anything is
    /// touched: on `InvalidInput` (empty set or a length mismatch) the weights
    /// are exactly as they were, the reset included. Updates inside an epoch
    /// are applied per example, so there is no batch to roll back once
    /// training has begun.
    pub fn train(&mut self, examples: &[Example], reset_weights: bool) -> NetworkResult<TrainReport> {
        if examples.is_empty() {
            return Err(NetworkError::invalid_input("train", "example set is empty"));
        }
        for (i, example) in examples.iter().enumerate() {
            self.check_example(i, example)?;
        }

        if reset_weights {
            self.reset_weights();
        }

        let optimizer = Sgd::new(self.config.learning_rate);
        let config = self.config.clone();
        Ok(train_loop(self, examples, &optimizer, &config))
    }

    /// Returns `(hidden_activation, output)`; lengths are assumed valid.
    pub(crate) fn forward(&self, input: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let hidden_activation = self.hidden.feed_from(input);
        let output = self.output.feed_from(&hidden_activation);
        (hidden_activation, output)
    }

    pub fn is_finite(&self) -> bool {
        self.hidden.is_finite() && self.output.is_finite()
    }

    fn check_example(&self, index: usize, example: &Example) -> NetworkResult<()> {
        let context = format!("train, example {index}");
        if example.inputs().len() != self.topology.input_size() {
            return Err(NetworkError::dimension(
                context,
                "inputs",
                self.topology.input_size(),
                example.inputs().len(),
            ));
        }
        if example.expected().len() != self.topology.output_size() {
            return Err(NetworkError::dimension(
                context,
                "expected outputs",
                self.topology.output_size(),
                example.expected().len(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(seed: u64) -> Network {
        let topology = Topology::new(2, 3, 2).unwrap();
        Network::new(topology, TrainConfig::default().with_seed(seed)).unwrap()
    }

    #[test]
    fn weight_shapes_follow_topology() {
        let net = network(1);
        assert_eq!((net.weights_input_hidden().rows, net.weights_input_hidden().cols), (2, 3));
        assert_eq!((net.weights_hidden_output().rows, net.weights_hidden_output().cols), (3, 2));
        assert_eq!(net.bias_hidden().len(), 3);
        assert_eq!(net.bias_output().len(), 2);
    }

    #[test]
    fn initial_weights_lie_in_init_range() {
        let topology = Topology::new(4, 5, 3).unwrap();
        let config = TrainConfig { init_range: 0.3, ..TrainConfig::default() }.with_seed(5);
        let net = Network::new(topology, config).unwrap();
        let all = net.weights_input_hidden().data.iter().flatten()
            .chain(net.weights_hidden_output().data.iter().flatten())
            .chain(net.bias_hidden())
            .chain(net.bias_output());
        for w in all {
            assert!((-0.3..=0.3).contains(w));
        }
    }

    #[test]
    fn same_seed_gives_same_weights() {
        assert_eq!(network(11).weights_input_hidden(), network(11).weights_input_hidden());
        assert_ne!(network(11).weights_input_hidden(), network(12).weights_input_hidden());
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let topology = Topology::new(2, 2, 1).unwrap();
        let config = TrainConfig { learning_rate: -0.5, ..TrainConfig::default() };
        assert!(matches!(
            Network::new(topology, config),
            Err(NetworkError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn reset_weights_draws_new_values() {
        let mut net = network(3);
        let before = net.weights_hidden_output().clone();
        net.reset_weights();
        assert_ne!(&before, net.weights_hidden_output());
    }

    #[test]
    fn forward_matches_manual_computation() {
        use crate::activation::sigmoid::sigmoid;

        let net = network(21);
        let input = [0.3, -0.7];
        let out = net.predict(&input).unwrap();

        let w = net.weights_input_hidden();
        let hidden: Vec<f64> = (0..3)
            .map(|h| sigmoid(input[0] * w.data[0][h] + input[1] * w.data[1][h] + net.bias_hidden()[h]))
            .collect();
        let v = net.weights_hidden_output();
        for o in 0..2 {
            let z: f64 = (0..3).map(|h| hidden[h] * v.data[h][o]).sum::<f64>() + net.bias_output()[o];
            assert!((out[o] - sigmoid(z)).abs() < 1e-12);
        }
    }
}
