use crate::core::aggregate::aggregate;
use crate::core::Pipeline;
use crate::domain::model::SummaryStats;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub rows: usize,
    pub stats: SummaryStats,
    pub outputs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The source yielded nothing; nothing was written.
    NoData,
    Completed(RunReport),
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("Starting ETL process");

        // Extract
        let raw_data = self.pipeline.extract().await;
        if raw_data.is_empty() {
            tracing::error!("No data fetched. Exiting program.");
            return Ok(RunOutcome::NoData);
        }
        tracing::info!("Extracted {} records", raw_data.len());

        // Transform
        let rows = self.pipeline.transform(raw_data).await;
        tracing::debug!("Transformed {} records", rows.len());

        let (table, stats) = aggregate(rows)?;
        log_summary(&stats);

        // Load
        let outputs = self.pipeline.load(&table).await?;
        tracing::info!("Data processed and saved successfully.");

        Ok(RunOutcome::Completed(RunReport {
            rows: table.len(),
            stats,
            outputs,
        }))
    }
}

fn log_summary(stats: &SummaryStats) {
    tracing::info!("Total time: {} seconds", stats.total);
    tracing::info!("Average time: {} seconds", stats.mean);
    tracing::info!("Minimum time: {} seconds", stats.min);
    tracing::info!("Maximum time: {} seconds", stats.max);
}
