pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod session;
pub mod console;
pub mod error;
pub mod logging;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use layers::dense::Layer;
pub use network::{Example, Network, Topology};
pub use optim::sgd::Sgd;
pub use train::{TrainConfig, TrainReport};
pub use session::Session;
pub use error::{NetworkError, NetworkResult};
