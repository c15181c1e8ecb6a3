use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, NetworkResult};

/// Hyperparameters for a [`Network`](crate::Network) and its training loop.
///
/// # Fields
/// - `learning_rate` — step size of every online update
/// - `max_epoch`     — hard cap on full passes over the example set
/// - `tolerance`     — training stops once an epoch's summed squared error drops below this
/// - `init_range`    — weights and biases are drawn uniformly from `[-init_range, init_range]`
/// - `seed`          — fixes the initialization RNG; `None` seeds from the OS
///
/// Missing fields in a JSON config fall back to [`TrainConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub max_epoch: usize,
    pub tolerance: f64,
    pub init_range: f64,
    pub seed: Option<u64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learning_rate: 0.5,
            max_epoch: 5000,
            tolerance: 0.01,
            init_range: 1.0,
            seed: None,
        }
    }
}

impl TrainConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> NetworkResult<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(NetworkError::invalid_config(
                "learning_rate",
                self.learning_rate,
                "must be a positive finite number",
            ));
        }
        if self.max_epoch == 0 {
            return Err(NetworkError::invalid_config("max_epoch", self.max_epoch, "must be at least 1"));
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(NetworkError::invalid_config(
                "tolerance",
                self.tolerance,
                "must be a non-negative finite number",
            ));
        }
        if !(self.init_range.is_finite() && self.init_range > 0.0) {
            return Err(NetworkError::invalid_config(
                "init_range",
                self.init_range,
                "must be a positive finite number",
            ));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a config from a JSON file previously written by `save_json`
    /// (or hand-written; absent fields take their defaults).
    pub fn load_json(path: &str) -> std::io::Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
