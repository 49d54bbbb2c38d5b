//! CSV loader for batch shipment requests
//!
//! Expected header (the `fragility` column may be omitted or left blank):
//! reference,length,width,height,weight,quantity,distance,fragility

use std::fs::File;
use std::io::Read;
use std::path::Path;

use haulplan_domain::model::ShipmentRequest;
use serde::Deserialize;
use thiserror::Error;

const REQUIRED_COLUMNS: [&str; 7] = [
    "reference",
    "length",
    "width",
    "height",
    "weight",
    "quantity",
    "distance",
];

#[derive(Error, Debug)]
pub enum ShipmentCsvError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid value in row {row}: {message}")]
    InvalidRow { row: usize, message: String },

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

impl From<ShipmentCsvError> for haulplan_types::Error {
    fn from(e: ShipmentCsvError) -> Self {
        haulplan_types::Error::Csv(e.to_string())
    }
}

/// One data row of the shipment file
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentRecord {
    /// 1-based line number in the file, header included
    pub row: usize,
    pub reference: String,
    /// Parsed request, or why the row could not be read
    pub request: Result<ShipmentRequest, String>,
}

#[derive(Debug, Deserialize)]
struct ShipmentRow {
    length: f64,
    width: f64,
    height: f64,
    weight: f64,
    quantity: i64,
    distance: f64,
    #[serde(default)]
    fragility: Option<String>,
}

/// Load shipment requests from a CSV file
pub fn load_shipments<P: AsRef<Path>>(path: P) -> Result<Vec<ShipmentRecord>, ShipmentCsvError> {
    let file = File::open(path)?;
    load_shipments_from_reader(file)
}

/// Load shipment requests from any CSV source
pub fn load_shipments_from_reader<R: Read>(
    source: R,
) -> Result<Vec<ShipmentRecord>, ShipmentCsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    validate_headers(&headers)?;
    let reference_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("reference"));

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        // +2: 0-based index and the header line
        let row = row_idx + 2;
        let raw = match result {
            Ok(raw) => raw,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                records.push(ShipmentRecord {
                    row,
                    reference: String::new(),
                    request: Err(row_error(row, &e)),
                });
                continue;
            }
        };

        let reference = reference_idx
            .and_then(|i| raw.get(i))
            .unwrap_or_default()
            .to_string();
        let request = raw
            .deserialize::<ShipmentRow>(Some(&headers))
            .map(|parsed| ShipmentRequest {
                length: parsed.length,
                width: parsed.width,
                height: parsed.height,
                weight: parsed.weight,
                quantity: parsed.quantity,
                distance_km: parsed.distance,
                fragility: parsed.fragility.unwrap_or_default(),
            })
            .map_err(|e| row_error(row, &e));

        records.push(ShipmentRecord {
            row,
            reference,
            request,
        });
    }

    Ok(records)
}

fn row_error(row: usize, e: &csv::Error) -> String {
    ShipmentCsvError::InvalidRow {
        row,
        message: e.to_string(),
    }
    .to_string()
}

fn validate_headers(headers: &csv::StringRecord) -> Result<(), ShipmentCsvError> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h.eq_ignore_ascii_case(column)) {
            return Err(ShipmentCsvError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = "\
reference,length,width,height,weight,quantity,distance,fragility
PO-1001, 2.0, 1.0, 1.0, 0.5, 10, 100, none
PO-1002, 13.0, 2.4, 3.0, 18, 1, 450,
PO-1003, 1.2, 0.8, 0.9, 0.3, 40, 60, fragile
";

    #[test]
    fn test_load_rows() {
        let records = load_shipments_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].reference, "PO-1001");
        assert_eq!(records[0].row, 2);
        let first = records[0].request.as_ref().unwrap();
        assert_eq!(first.quantity, 10);
        let second = records[1].request.as_ref().unwrap();
        assert!((second.length - 13.0).abs() < f64::EPSILON);
        assert_eq!(second.fragility, "");
        assert_eq!(records[2].request.as_ref().unwrap().fragility, "fragile");
    }

    #[test]
    fn test_fragility_column_optional() {
        let csv = "reference,length,width,height,weight,quantity,distance\nA,1,1,1,1,1,10\n";
        let records = load_shipments_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(records[0].request.as_ref().unwrap().fragility, "");
    }

    #[test]
    fn test_missing_column() {
        let csv = "reference,length,width,height,weight,distance\nA,1,1,1,1,10\n";
        let err = load_shipments_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ShipmentCsvError::MissingColumn(c) if c == "quantity"));
    }

    #[test]
    fn test_bad_row_rejected_others_kept() {
        let csv = "reference,length,width,height,weight,quantity,distance\n\
                   A,1,1,1,1,1,10\n\
                   B,1,1,1,1,,10\n\
                   C,2,1,1,1,3,10\n";
        let records = load_shipments_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].reference, "A");
        assert!(records[0].request.is_ok());

        assert_eq!(records[1].reference, "B");
        assert_eq!(records[1].row, 3);
        let err = records[1].request.as_ref().unwrap_err();
        assert!(err.starts_with("Invalid value in row 3"), "{}", err);

        assert_eq!(records[2].reference, "C");
        assert_eq!(records[2].request.as_ref().unwrap().quantity, 3);
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let csv = "reference,length,width,height,weight,quantity,distance\nA,x,1,1,1,1,10\n";
        let records = load_shipments_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(records[0].reference, "A");
        assert!(records[0].request.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shipments.csv");
        fs::write(&path, SAMPLE).unwrap();
        let records = load_shipments(&path).unwrap();
        assert_eq!(records.len(), 3);
    }
}
