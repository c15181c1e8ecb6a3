use serde::{Serialize, Deserialize};

/// Outcome of one `Network::train` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    /// Number of epochs actually run (1-based; equals `max_epoch` when the cap was hit).
    pub epochs: usize,
    /// Summed squared error over all examples in the last epoch.
    pub final_error: f64,
    /// Whether `final_error` dropped below the tolerance before the cap.
    pub converged: bool,
}
