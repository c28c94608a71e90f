use crate::adapters::http::{build_client, fetch_records};
use crate::adapters::{JsonLinesSink, SqliteSink};
use crate::core::transform::transform_records;
use crate::domain::model::{NormalizedRow, RawRecord, ResultTable};
use crate::domain::ports::{ConfigProvider, Pipeline, Sink};
use crate::utils::error::Result;
use reqwest::Client;

pub struct CountryPipeline<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> CountryPipeline<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = build_client(config.request_timeout())?;
        Ok(Self { config, client })
    }

    /// Database first, then the NDJSON file.
    fn sinks(&self) -> Vec<Box<dyn Sink>> {
        let database: Box<dyn Sink> = Box::new(SqliteSink::new(
            self.config.database_path(),
            self.config.table_name(),
        ));
        let file: Box<dyn Sink> = Box::new(JsonLinesSink::new(self.config.json_path()));
        vec![database, file]
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for CountryPipeline<C> {
    async fn extract(&self) -> Vec<RawRecord> {
        fetch_records(&self.client, self.config.api_endpoint()).await
    }

    async fn transform(&self, records: Vec<RawRecord>) -> Vec<NormalizedRow> {
        transform_records(&records)
    }

    async fn load(&self, table: &ResultTable) -> Result<Vec<String>> {
        let mut destinations = Vec::new();
        for sink in self.sinks() {
            tracing::debug!("Writing {} rows to {}", table.len(), sink.destination());
            sink.persist(table)?;
            destinations.push(sink.destination());
        }
        Ok(destinations)
    }
}
