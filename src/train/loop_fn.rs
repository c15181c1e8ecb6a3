use tracing::{debug, info, warn};

use crate::activation::sigmoid::sigmoid_derivative;
use crate::loss::sse::SquaredError;
use crate::network::example::Example;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::train_config::TrainConfig;
use crate::train::train_report::TrainReport;

/// Epochs between `debug!` progress lines.
const PROGRESS_INTERVAL: usize = 500;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Runs online back-propagation over `examples` until the summed squared error
/// of an epoch drops below `config.tolerance`, or `config.max_epoch` epochs
/// have run.
///
/// Examples are visited in the given order and weights are updated after
/// every single example, so a freshly appended correction takes effect within
/// the first epoch.
///
/// Callers must have checked every example against the network's topology;
/// `Network::train` does this before calling in.
pub fn train_loop(
    network: &mut Network,
    examples: &[Example],
    optimizer: &Sgd,
    config: &TrainConfig,
) -> TrainReport {
    let targets: Vec<Vec<f64>> = examples.iter().map(Example::targets).collect();
    let mut last_error = 0.0;

    info!(
        examples = examples.len(),
        max_epoch = config.max_epoch,
        learning_rate = optimizer.learning_rate,
        "training started"
    );

    for epoch in 1..=config.max_epoch {
        let error = run_one_epoch(network, examples, &targets, optimizer);
        last_error = error;

        if epoch % PROGRESS_INTERVAL == 0 {
            debug!(epoch, error, "training progress");
        }

        if error < config.tolerance {
            info!(epoch, error, "training converged");
            return TrainReport { epochs: epoch, final_error: error, converged: true };
        }
    }

    warn!(
        epochs = config.max_epoch,
        error = last_error,
        tolerance = config.tolerance,
        "epoch cap reached before convergence"
    );
    TrainReport { epochs: config.max_epoch, final_error: last_error, converged: false }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One full pass over the examples with an update after each one.
/// Returns the summed squared error, measured on each example before its update.
fn run_one_epoch(
    network: &mut Network,
    examples: &[Example],
    targets: &[Vec<f64>],
    optimizer: &Sgd,
) -> f64 {
    let mut total_error = 0.0;

    for (example, target) in examples.iter().zip(targets) {
        let input = example.inputs();
        let (hidden_activation, output) = network.forward(input);

        total_error += SquaredError::loss(&output, target);

        // δ_out = (expected - output) · σ'(output)
        let output_deltas: Vec<f64> = SquaredError::residual(&output, target)
            .into_iter()
            .zip(&output)
            .map(|(r, &o)| r * sigmoid_derivative(o))
            .collect();

        // Hidden deltas must see the hidden→output weights before this step moves them.
        let hidden_deltas = network.output.propagate_back(&output_deltas, &hidden_activation);

        optimizer.step(&mut network.output, &output_deltas, &hidden_activation);
        optimizer.step(&mut network.hidden, &hidden_deltas, input);
    }

    total_error
}
