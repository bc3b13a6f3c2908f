use crate::core::Pipeline;
use crate::domain::model::ConversionSummary;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

#[derive(Debug, Clone)]
pub struct EtlOutcome {
    pub output_path: String,
    pub summary: ConversionSummary,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<EtlOutcome> {
        tracing::info!("Starting console conversion");

        // Extract
        let lines = self.pipeline.extract().await?;
        tracing::info!("Extracted {} lines", lines.len());
        self.monitor.log_stats("Extract");

        // Transform
        let result = self.pipeline.transform(lines).await?;
        let summary = result.summary.clone();
        tracing::info!(
            "Transformed {} lines into {} rows",
            summary.lines_read,
            summary.lines_written
        );
        self.monitor.log_stats("Transform");

        // Load
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(EtlOutcome {
            output_path,
            summary,
        })
    }
}
