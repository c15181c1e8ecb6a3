use crate::error::{NetworkError, NetworkResult};
use crate::network::topology::Topology;

/// One labeled observation: an input vector and the binary outputs it should produce.
///
/// Immutable once built. Lengths are checked against a [`Topology`] at
/// construction, so a malformed example never reaches the training loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    inputs: Vec<f64>,
    expected: Vec<u8>,
}

impl Example {
    pub fn new(topology: &Topology, inputs: Vec<f64>, expected: Vec<u8>) -> NetworkResult<Example> {
        if inputs.len() != topology.input_size() {
            return Err(NetworkError::dimension("example", "inputs", topology.input_size(), inputs.len()));
        }
        if expected.len() != topology.output_size() {
            return Err(NetworkError::dimension("example", "expected outputs", topology.output_size(), expected.len()));
        }
        if let Some(i) = inputs.iter().position(|x| !x.is_finite()) {
            return Err(NetworkError::invalid_input("example", format!("input {i} is not a finite number")));
        }
        if let Some(i) = expected.iter().position(|&v| v > 1) {
            return Err(NetworkError::invalid_input(
                "example",
                format!("expected output {i} is {}, must be 0 or 1", expected[i]),
            ));
        }
        Ok(Example { inputs, expected })
    }

    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    pub fn expected(&self) -> &[u8] {
        &self.expected
    }

    /// Expected outputs as training targets (0.0 / 1.0).
    pub fn targets(&self) -> Vec<f64> {
        self.expected.iter().map(|&v| f64::from(v)).collect()
    }
}
