use crate::domain::model::{NormalizedRow, RawRecord, ResultTable};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn database_path(&self) -> &str;
    fn table_name(&self) -> &str;
    fn json_path(&self) -> &str;
}

/// A destination the result table is written to.
pub trait Sink: Send + Sync {
    fn destination(&self) -> String;
    fn persist(&self, table: &ResultTable) -> Result<()>;
}

/// Extraction and transformation never fail: bad input degrades to empty
/// or defaulted output. Only loading reports errors.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Vec<RawRecord>;
    async fn transform(&self, records: Vec<RawRecord>) -> Vec<NormalizedRow>;
    async fn load(&self, table: &ResultTable) -> Result<Vec<String>>;
}
