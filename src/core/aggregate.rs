use crate::domain::model::{NormalizedRow, ResultTable, SummaryStats};
use crate::utils::error::{EtlError, Result};

/// Packs rows into a [`ResultTable`] and summarises its Time column.
///
/// Statistics are undefined for an empty table, so empty input is rejected
/// with [`EtlError::EmptyInput`]. The engine never calls this without rows.
pub fn aggregate(rows: Vec<NormalizedRow>) -> Result<(ResultTable, SummaryStats)> {
    let table: ResultTable = rows.into_iter().collect();

    let stats = SummaryStats::from_times(table.times()).ok_or(EtlError::EmptyInput {
        stage: "aggregate",
    })?;

    Ok((table, stats))
}
