use crate::domain::model::{NormalizedRow, RawRecord};
use serde_json::Value;
use sha1::{Digest, Sha1};
use std::time::Instant;

pub const UNKNOWN: &str = "Unknown";

/// Fields pulled out of an untrusted upstream record, already defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryFields {
    pub country: String,
    pub language: String,
}

/// The only place that looks inside a [`RawRecord`]. Anything missing or of
/// the wrong type becomes [`UNKNOWN`].
pub fn parse_record(record: &RawRecord) -> CountryFields {
    let country = record
        .0
        .get("name")
        .and_then(|name| name.get("common"))
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN);

    // First entry in document order; relies on serde_json's preserve_order.
    let language = record
        .0
        .get("languages")
        .and_then(Value::as_object)
        .and_then(|languages| languages.values().next())
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN);

    CountryFields {
        country: country.to_string(),
        language: language.to_string(),
    }
}

/// Lowercase hex SHA-1 of the UTF-8 bytes of `language`.
pub fn language_hash(language: &str) -> String {
    hex::encode(Sha1::digest(language.as_bytes()))
}

pub fn normalize_record(record: &RawRecord) -> NormalizedRow {
    let CountryFields { country, language } = parse_record(record);

    // Only the hash is timed.
    let start = Instant::now();
    let language_hash = language_hash(&language);
    let processing_seconds = start.elapsed().as_secs_f64();

    NormalizedRow {
        country,
        language,
        language_hash,
        processing_seconds,
    }
}

pub fn transform_records(records: &[RawRecord]) -> Vec<NormalizedRow> {
    records.iter().map(normalize_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawRecord {
        RawRecord(value)
    }

    #[test]
    fn test_language_hash_known_digests() {
        assert_eq!(language_hash("English"), "649df08a448ee3fa90f3746baaf6b0907df42c91");
        assert_eq!(language_hash("Unknown"), "bc7819b34ff87570745fbe461e36a16f80e562ce");
        assert_eq!(language_hash("Español"), "2001ca082b2d2742765d8ac9182678bfe0374fbf");
        assert_eq!(language_hash(""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn test_transform_sample_country() {
        let records = vec![raw(json!({
            "name": {"common": "Test Country"},
            "languages": {"eng": "English"}
        }))];

        let rows = transform_records(&records);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].country, "Test Country");
        assert_eq!(rows[0].language, "English");
        assert_eq!(rows[0].language_hash, language_hash("English"));
        assert!(rows[0].processing_seconds >= 0.0);
    }

    #[test]
    fn test_transform_empty_record_uses_sentinels() {
        let rows = transform_records(&[raw(json!({}))]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].country, UNKNOWN);
        assert_eq!(rows[0].language, UNKNOWN);
        assert_eq!(rows[0].language_hash, language_hash("Unknown"));
    }

    #[test]
    fn test_first_language_in_document_order() {
        let record = raw(json!({
            "name": {"common": "Switzerland"},
            "languages": {"fra": "French", "gsw": "Swiss German", "ita": "Italian", "roh": "Romansh"}
        }));

        assert_eq!(parse_record(&record).language, "French");

        let reversed = raw(
            serde_json::from_str(
                r#"{"name": {"common": "X"}, "languages": {"zul": "Zulu", "afr": "Afrikaans"}}"#,
            )
            .unwrap(),
        );
        assert_eq!(parse_record(&reversed).language, "Zulu");
    }

    #[test]
    fn test_malformed_fields_fall_back() {
        let cases = vec![
            json!({"name": "Atlantis", "languages": []}),
            json!({"name": {"official": "No Common"}, "languages": {}}),
            json!({"name": {"common": 42}, "languages": {"xx": 7}}),
            json!({"name": null, "languages": null}),
            json!("not an object"),
            json!(null),
        ];
        let records: Vec<RawRecord> = cases.into_iter().map(RawRecord::from).collect();

        let rows = transform_records(&records);

        assert_eq!(rows.len(), records.len());
        for row in rows {
            assert_eq!(row.country, UNKNOWN);
            assert_eq!(row.language, UNKNOWN);
        }
    }

    #[test]
    fn test_no_rows_dropped_and_hash_matches_language() {
        let records: Vec<RawRecord> = vec![
            json!({"name": {"common": "Japan"}, "languages": {"jpn": "Japanese"}}),
            json!({}),
            json!({"name": {"common": "Japan"}, "languages": {"jpn": "Japanese"}}),
            json!({"name": {"common": "Peru"}, "languages": {"aym": "Aymara", "que": "Quechua", "spa": "Spanish"}}),
            json!({"languages": {"nld": "Dutch"}}),
        ]
        .into_iter()
        .map(RawRecord::from)
        .collect();

        let rows = transform_records(&records);

        assert_eq!(rows.len(), records.len());
        assert_eq!(rows[0].country, rows[2].country);
        assert_eq!(rows[0].language_hash, rows[2].language_hash);
        assert_eq!(rows[3].language, "Aymara");
        assert_eq!(rows[4].country, UNKNOWN);
        assert_eq!(rows[4].language, "Dutch");
        for row in &rows {
            let expected = hex::encode(Sha1::digest(row.language.as_bytes()));
            assert_eq!(row.language_hash, expected);
            assert!(row.processing_seconds >= 0.0);
        }
    }

    #[test]
    fn test_transform_empty_input() {
        assert!(transform_records(&[]).is_empty());
    }
}
