use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, NetworkResult};

/// Layer sizes of a one-hidden-layer network.
///
/// Fields:
/// - `input_size`  — length of every input vector
/// - `hidden_size` — number of sigmoid units between input and output
/// - `output_size` — length of every output / expected vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    input_size: usize,
    hidden_size: usize,
    output_size: usize,
}

impl Topology {
    /// Rejects zero-sized layers. Operator-facing minimums (two inputs, two
    /// hidden units) are the console's business.
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize) -> NetworkResult<Topology> {
        for (name, size) in [
            ("input_size", input_size),
            ("hidden_size", hidden_size),
            ("output_size", output_size),
        ] {
            if size == 0 {
                return Err(NetworkError::invalid_config(name, size, "layer must have at least one unit"));
            }
        }
        Ok(Topology { input_size, hidden_size, output_size })
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }
}
