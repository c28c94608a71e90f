pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{persist_to_database, persist_to_file, JsonLinesSink, SqliteSink};
pub use app::pipelines::CountryPipeline;
pub use config::PipelineConfig;
pub use core::{
    aggregate::aggregate,
    etl::{EtlEngine, RunOutcome, RunReport},
    transform::{language_hash, parse_record, transform_records},
};
pub use domain::model::{NormalizedRow, RawRecord, ResultTable, SummaryStats};
pub use utils::error::{EtlError, Result};
