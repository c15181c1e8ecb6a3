use tracing::info;

use crate::error::{NetworkError, NetworkResult};
use crate::network::example::Example;
use crate::network::network::Network;
use crate::train::train_report::TrainReport;

/// One operator's teaching session: a network plus every example it has been shown.
///
/// The example set only ever grows after bootstrap. Corrections and
/// reinforcements both append and retrain the whole set on top of the
/// current weights; they differ only in where the label comes from.
#[derive(Debug, Clone)]
pub struct Session {
    network: Network,
    examples: Vec<Example>,
}

impl Session {
    pub fn new(network: Network) -> Session {
        Session { network, examples: Vec::new() }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Replaces the example set and trains from fresh random weights.
    ///
    /// On error the previous examples and weights are kept.
    pub fn bootstrap(&mut self, examples: Vec<Example>) -> NetworkResult<TrainReport> {
        let report = self.network.train(&examples, true)?;
        info!(examples = examples.len(), epochs = report.epochs, "session bootstrapped");
        self.examples = examples;
        Ok(report)
    }

    pub fn predict(&self, inputs: &[f64]) -> NetworkResult<Vec<f64>> {
        self.network.predict(inputs)
    }

    /// The operator disagreed with a prediction and supplied the right answer.
    pub fn correct(&mut self, inputs: Vec<f64>, expected: Vec<u8>) -> NetworkResult<TrainReport> {
        let example = Example::new(self.network.topology(), inputs, expected)?;
        self.learn(example)
    }

    /// The operator confirmed a prediction; its thresholded output becomes the label.
    pub fn reinforce(&mut self, inputs: Vec<f64>) -> NetworkResult<TrainReport> {
        let outputs = self.network.predict(&inputs)?;
        let expected = outputs.iter().map(|&o| u8::from(o > 0.5)).collect();
        let example = Example::new(self.network.topology(), inputs, expected)?;
        self.learn(example)
    }

    fn learn(&mut self, example: Example) -> NetworkResult<TrainReport> {
        self.examples.push(example);
        match self.network.train(&self.examples, false) {
            Ok(report) => Ok(report),
            Err(err) => {
                self.examples.pop();
                Err(err)
            }
        }
    }

    /// Current error of the network over the whole accumulated set, without training.
    pub fn total_error(&self) -> NetworkResult<f64> {
        if self.examples.is_empty() {
            return Err(NetworkError::invalid_input("total_error", "example set is empty"));
        }
        let mut total = 0.0;
        for example in &self.examples {
            let output = self.network.predict(example.inputs())?;
            total += crate::loss::sse::SquaredError::loss(&output, &example.targets());
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::topology::Topology;
    use crate::train::train_config::TrainConfig;

    fn session() -> Session {
        let topology = Topology::new(2, 2, 1).unwrap();
        Session::new(Network::new(topology, TrainConfig::default().with_seed(17)).unwrap())
    }

    fn and_examples(topology: &Topology) -> Vec<Example> {
        [([0.0, 0.0], 0), ([0.0, 1.0], 0), ([1.0, 0.0], 0), ([1.0, 1.0], 1)]
            .into_iter()
            .map(|(x, y)| Example::new(topology, x.to_vec(), vec![y]).unwrap())
            .collect()
    }

    #[test]
    fn bootstrap_with_no_examples_keeps_state() {
        let mut s = session();
        let before = s.network().weights_input_hidden().clone();
        assert!(s.bootstrap(Vec::new()).unwrap_err().is_invalid_input());
        assert!(s.examples().is_empty());
        assert_eq!(&before, s.network().weights_input_hidden());
    }

    #[test]
    fn correct_appends_and_retrains() {
        let mut s = session();
        let topology = *s.network().topology();
        s.bootstrap(and_examples(&topology)).unwrap();
        let report = s.correct(vec![1.0, 1.0], vec![1]).unwrap();
        assert_eq!(s.examples().len(), 5);
        assert!(report.epochs >= 1);
    }

    #[test]
    fn reinforce_labels_with_the_current_prediction() {
        let mut s = session();
        let topology = *s.network().topology();
        s.bootstrap(and_examples(&topology)).unwrap();
        s.reinforce(vec![1.0, 1.0]).unwrap();
        let last = s.examples().last().unwrap();
        assert_eq!(last.inputs(), &[1.0, 1.0]);
        assert_eq!(last.expected(), &[1]);
    }

    #[test]
    fn rejected_correction_leaves_set_unchanged() {
        let mut s = session();
        let topology = *s.network().topology();
        s.bootstrap(and_examples(&topology)).unwrap();
        assert!(s.correct(vec![1.0], vec![1]).is_err());
        assert!(s.correct(vec![1.0, 0.0], vec![3]).is_err());
        assert!(s.reinforce(vec![1.0, 0.0, 1.0]).is_err());
        assert_eq!(s.examples().len(), 4);
    }

    #[test]
    fn total_error_needs_examples() {
        let mut s = session();
        assert!(s.total_error().is_err());
        let topology = *s.network().topology();
        s.bootstrap(and_examples(&topology)).unwrap();
        assert!(s.total_error().unwrap() < 0.05);
    }
}
