pub mod aggregate;
pub mod etl;
pub mod transform;

pub use crate::domain::model::{NormalizedRow, RawRecord, ResultTable, SummaryStats};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Sink};
pub use crate::utils::error::Result;
