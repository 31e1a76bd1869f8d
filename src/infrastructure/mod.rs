//! Infrastructure layer - External I/O: config files, log files, charts

pub mod chart;
pub mod config;
pub mod log_source;
pub mod logging;

pub use chart::ChartRenderer;
pub use config::Config;
pub use log_source::LogSource;
pub use logging::init_tracing;
