use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::error::DatasetError;
use super::model::{LaunchDataset, LaunchRecord};

pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch records dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with `Launch Site`, `Payload Mass (kg)`, `class`
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., "class": ... }, ...]`
/// * `.parquet` – the same three columns
///
/// Any other columns are ignored.
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    };
    dataset.with_context(|| format!("loading {}", path.display()))
}

/// One row as it appears in CSV and records-oriented JSON.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    /// pandas writes `1.0` once the column has held a NaN.
    #[serde(rename = "class")]
    class: f64,
}

impl RawRecord {
    fn validate(self, row: usize) -> Result<LaunchRecord, DatasetError> {
        let class = integral_class(row, self.class)?;
        LaunchRecord::from_raw(row, &self.site, self.payload_mass_kg, class)
    }
}

/// A class flag read as a float must be a whole number; range checks happen in
/// [`LaunchRecord::from_raw`].
fn integral_class(row: usize, value: f64) -> Result<i64, DatasetError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(DatasetError::NonIntegralClass { row, value });
    }
    Ok(value as i64)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for required in [SITE_COLUMN, PAYLOAD_COLUMN, CLASS_COLUMN] {
        if !headers.iter().any(|h| h == required) {
            return Err(DatasetError::MissingColumn(required).into());
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(raw.validate(row_no)?);
    }

    Ok(LaunchDataset::from_records(records)?)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Launch Site": "CCAFS LC-40", "Payload Mass (kg)": 525.0, "class": 1 },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<LaunchDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let rows: Vec<RawRecord> = serde_json::from_str(&text).context("parsing JSON")?;

    let records = rows
        .into_iter()
        .enumerate()
        .map(|(i, raw)| raw.validate(i))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LaunchDataset::from_records(records)?)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file written by **Pandas** (`df.to_parquet()`) or
/// **Polars** (`df.write_parquet()`).
///
/// Accepted column types:
/// - `Launch Site`: Utf8 or LargeUtf8
/// - `Payload Mass (kg)`: Float64, Float32, Int64 or Int32
/// - `class`: Int64, Int32, integral Float64/Float32, or Boolean
fn load_parquet(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let site_col = required_column(&batch, SITE_COLUMN)?;
        let payload_col = required_column(&batch, PAYLOAD_COLUMN)?;
        let class_col = required_column(&batch, CLASS_COLUMN)?;

        for row in 0..batch.num_rows() {
            let index = records.len();
            let site = extract_string(site_col, row)
                .with_context(|| format!("Row {index}: failed to read '{SITE_COLUMN}'"))?;
            let payload = extract_f64(payload_col, row)
                .with_context(|| format!("Row {index}: failed to read '{PAYLOAD_COLUMN}'"))?;
            let class = extract_class(class_col, row, index)
                .with_context(|| format!("Row {index}: failed to read '{CLASS_COLUMN}'"))?;

            records.push(LaunchRecord::from_raw(index, &site, payload, class)?);
        }
    }

    Ok(LaunchDataset::from_records(records)?)
}

// -- Parquet / Arrow helpers --

fn required_column<'a>(batch: &'a RecordBatch, name: &'static str) -> Result<&'a ArrayRef> {
    batch
        .column_by_name(name)
        .ok_or_else(|| DatasetError::MissingColumn(name).into())
}

fn extract_string(col: &ArrayRef, row: usize) -> Result<String> {
    if col.is_null(row) {
        return Ok(String::new());
    }
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("expected a string column, got {other:?}"),
    }
}

fn extract_f64(col: &ArrayRef, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value in numeric column");
    }
    let value = match col.data_type() {
        DataType::Float64 => col.as_primitive::<Float64Type>().value(row),
        DataType::Float32 => col.as_primitive::<Float32Type>().value(row) as f64,
        DataType::Int64 => col.as_primitive::<Int64Type>().value(row) as f64,
        DataType::Int32 => col.as_primitive::<Int32Type>().value(row) as f64,
        other => bail!("expected a numeric column, got {other:?}"),
    };
    Ok(value)
}

fn extract_class(col: &ArrayRef, row: usize, index: usize) -> Result<i64> {
    if col.is_null(row) {
        bail!("null class flag");
    }
    match col.data_type() {
        DataType::Boolean => Ok(col.as_boolean().value(row) as i64),
        DataType::Int64 => Ok(col.as_primitive::<Int64Type>().value(row)),
        DataType::Int32 => Ok(col.as_primitive::<Int32Type>().value(row) as i64),
        DataType::Float64 | DataType::Float32 => Ok(integral_class(index, extract_f64(col, row)?)?),
        other => bail!("expected an integer or boolean column, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::array::{BooleanArray, Float64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use parquet::arrow::ArrowWriter;

    use super::*;
    use crate::data::model::Outcome;

    const CSV_WITH_EXTRAS: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version
1,CCAFS LC-40,0,0.0,F9 v1.0  B0003
2,CCAFS LC-40,1,525.0,F9 v1.0  B0005
3,VAFB SLC-4E,1,9600.0,F9 FT B1029.1
";

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn root_cause(err: &anyhow::Error) -> Option<&DatasetError> {
        err.chain().find_map(|e| e.downcast_ref::<DatasetError>())
    }

    #[test]
    fn csv_loads_required_columns_and_ignores_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "launches.csv", CSV_WITH_EXTRAS);

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(ds.records[1].payload_mass_kg, 525.0);
        assert_eq!(ds.records[1].outcome, Outcome::Success);
        assert_eq!(ds.max_payload, 9600.0);
    }

    #[test]
    fn csv_missing_column_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "launches.csv", "Launch Site,class\nCCAFS LC-40,1\n");

        let err = load_file(&path).unwrap_err();
        assert!(matches!(
            root_cause(&err),
            Some(DatasetError::MissingColumn(PAYLOAD_COLUMN))
        ));
    }

    #[test]
    fn csv_invalid_rows_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let header = "Launch Site,Payload Mass (kg),class\n";

        let bad_class = write_file(&dir, "class.csv", &format!("{header}A,10,1\nA,10,3\n"));
        let err = load_file(&bad_class).unwrap_err();
        assert!(matches!(
            root_cause(&err),
            Some(DatasetError::InvalidClass { row: 1, value: 3 })
        ));

        let negative = write_file(&dir, "payload.csv", &format!("{header}A,-5,1\n"));
        let err = load_file(&negative).unwrap_err();
        assert!(matches!(
            root_cause(&err),
            Some(DatasetError::InvalidPayload { row: 0, .. })
        ));

        let empty = write_file(&dir, "empty.csv", header);
        let err = load_file(&empty).unwrap_err();
        assert!(matches!(root_cause(&err), Some(DatasetError::Empty)));
    }

    #[test]
    fn integral_float_class_flags_load_in_every_format() {
        let dir = tempfile::tempdir().unwrap();

        let csv = write_file(
            &dir,
            "launches.csv",
            "Launch Site,Payload Mass (kg),class\nA,500,1.0\nA,900,0.0\n",
        );
        let ds = load_file(&csv).unwrap();
        assert_eq!(ds.records[0].outcome, Outcome::Success);
        assert_eq!(ds.records[1].outcome, Outcome::Failure);

        let json = write_file(
            &dir,
            "launches.json",
            r#"[{"Launch Site": "A", "Payload Mass (kg)": 500.0, "class": 1.0}]"#,
        );
        assert_eq!(load_file(&json).unwrap().records[0].outcome, Outcome::Success);

        let path = dir.path().join("launches.parquet");
        let schema = Arc::new(Schema::new(vec![
            Field::new(SITE_COLUMN, DataType::Utf8, false),
            Field::new(PAYLOAD_COLUMN, DataType::Float64, false),
            Field::new(CLASS_COLUMN, DataType::Float64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["A"])),
                Arc::new(Float64Array::from(vec![500.0])),
                Arc::new(Float64Array::from(vec![1.0])),
            ],
        )
        .unwrap();
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();
        assert_eq!(load_file(&path).unwrap().records[0].outcome, Outcome::Success);
    }

    #[test]
    fn fractional_class_flag_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "launches.csv",
            "Launch Site,Payload Mass (kg),class\nA,500,1\nA,900,0.5\n",
        );

        let err = load_file(&path).unwrap_err();
        assert!(matches!(
            root_cause(&err),
            Some(DatasetError::NonIntegralClass { row: 1, .. })
        ));
    }

    #[test]
    fn csv_unparseable_number_carries_row_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "launches.csv",
            "Launch Site,Payload Mass (kg),class\nA,heavy,1\n",
        );

        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("CSV row 0"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_file(&dir.path().join("absent.csv")).is_err());
    }

    #[test]
    fn json_records_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "launches.json",
            r#"[
                {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 2490.0, "class": 1, "Orbit": "LEO"},
                {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 5300, "class": 0}
            ]"#,
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.sites, vec!["KSC LC-39A"]);
        assert_eq!(ds.min_payload, 2490.0);
        assert_eq!(ds.records[1].outcome, Outcome::Failure);
    }

    #[test]
    fn parquet_records_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launches.parquet");

        let schema = Arc::new(Schema::new(vec![
            Field::new(SITE_COLUMN, DataType::Utf8, false),
            Field::new(PAYLOAD_COLUMN, DataType::Float64, false),
            Field::new(CLASS_COLUMN, DataType::Boolean, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["CCAFS SLC-40", "VAFB SLC-4E"])),
                Arc::new(Float64Array::from(vec![3600.0, 475.0])),
                Arc::new(BooleanArray::from(vec![true, false])),
            ],
        )
        .unwrap();

        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].site, "CCAFS SLC-40");
        assert_eq!(ds.records[0].outcome, Outcome::Success);
        assert_eq!(ds.records[1].outcome, Outcome::Failure);
        assert_eq!(ds.min_payload, 475.0);
    }

    #[test]
    fn unsupported_extension_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "launches.xlsx", "");

        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }
}
