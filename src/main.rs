use anyhow::Context;
use country_stats::utils::{logger, validation::Validate};
use country_stats::{CountryPipeline, EtlEngine, PipelineConfig, RunOutcome};
use tracing::Instrument;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 固定配置，無命令列參數
    let config = PipelineConfig::default();

    logger::init_logger(config.logging.format);

    config.validate().context("Built-in configuration is invalid")?;

    let span = tracing::info_span!("country_stats", endpoint = %config.source.endpoint);

    let pipeline = CountryPipeline::new(config).context("Failed to build HTTP client")?;
    let engine = EtlEngine::new(pipeline);

    let outcome = engine
        .run()
        .instrument(span)
        .await
        .context("ETL process failed")?;

    // 無資料時 engine 已記錄錯誤
    if let RunOutcome::Completed(report) = outcome {
        tracing::info!(
            "✅ Processed {} countries into {}",
            report.rows,
            report.outputs.join(", ")
        );
    }

    Ok(())
}
