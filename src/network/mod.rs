pub mod example;
pub mod network;
pub mod topology;

pub use example::Example;
pub use network::Network;
pub use topology::Topology;
