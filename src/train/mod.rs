pub mod train_config;
pub mod train_report;
pub mod loop_fn;

pub use train_config::TrainConfig;
pub use train_report::TrainReport;
pub use loop_fn::train_loop;
