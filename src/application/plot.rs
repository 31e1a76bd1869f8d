//! Plot spending chart use case

use crate::application::summarize::{SummarizeService, Summary};
use crate::error::Result;
use crate::infrastructure::ChartRenderer;
use std::path::Path;

/// Service for rendering the spending chart of a log
pub struct PlotService {
    summarize: SummarizeService,
    renderer: ChartRenderer,
}

impl PlotService {
    pub fn new(summarize: SummarizeService, renderer: ChartRenderer) -> Self {
        PlotService {
            summarize,
            renderer,
        }
    }

    /// Summarize the log at `log` and write the chart to `output`
    pub fn execute(&self, log: &Path, output: &Path) -> Result<Summary> {
        let summary = self.summarize.execute(log)?;
        self.renderer.save(&summary.report, output)?;
        Ok(summary)
    }
}
