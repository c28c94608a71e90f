use serde::{Deserialize, Serialize};

/// One element of the upstream array, exactly as it arrived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(pub serde_json::Value);

impl From<serde_json::Value> for RawRecord {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRow {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Language_Hash")]
    pub language_hash: String,
    #[serde(rename = "Time")]
    pub processing_seconds: f64,
}

/// Borrowed view of a single row of a [`ResultTable`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableRow<'a> {
    #[serde(rename = "Country")]
    pub country: &'a str,
    #[serde(rename = "Language")]
    pub language: &'a str,
    #[serde(rename = "Language_Hash")]
    pub language_hash: &'a str,
    #[serde(rename = "Time")]
    pub processing_seconds: f64,
}

/// Column-oriented result of a run. Row order is ingestion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    countries: Vec<String>,
    languages: Vec<String>,
    language_hashes: Vec<String>,
    times: Vec<f64>,
}

impl ResultTable {
    pub const COLUMNS: [&'static str; 4] = ["Country", "Language", "Language_Hash", "Time"];

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            countries: Vec::with_capacity(capacity),
            languages: Vec::with_capacity(capacity),
            language_hashes: Vec::with_capacity(capacity),
            times: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, row: NormalizedRow) {
        self.countries.push(row.country);
        self.languages.push(row.language);
        self.language_hashes.push(row.language_hash);
        self.times.push(row.processing_seconds);
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn language_hashes(&self) -> &[String] {
        &self.language_hashes
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn row(&self, index: usize) -> Option<TableRow<'_>> {
        Some(TableRow {
            country: self.countries.get(index)?,
            language: self.languages.get(index)?,
            language_hash: self.language_hashes.get(index)?,
            processing_seconds: *self.times.get(index)?,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = TableRow<'_>> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }
}

impl FromIterator<NormalizedRow> for ResultTable {
    fn from_iter<I: IntoIterator<Item = NormalizedRow>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut table = Self::with_capacity(iter.size_hint().0);
        for row in iter {
            table.push(row);
        }
        table
    }
}

/// Aggregate over the Time column. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl SummaryStats {
    /// Returns `None` for an empty column: mean, min and max are undefined there.
    pub fn from_times(times: &[f64]) -> Option<Self> {
        let (&first, rest) = times.split_first()?;

        let (total, min, max) = rest
            .iter()
            .fold((first, first, first), |(total, min, max), &t| {
                (total + t, min.min(t), max.max(t))
            });

        Some(Self {
            total,
            mean: total / times.len() as f64,
            min,
            max,
        })
    }
}
