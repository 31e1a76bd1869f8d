//! Application layer - Use cases and orchestration

pub mod init_config;
pub mod list_days;
pub mod plot;
pub mod summarize;

pub use init_config::init_config;
pub use list_days::{list_days, DayListing};
pub use plot::PlotService;
pub use summarize::{SummarizeService, Summary};
