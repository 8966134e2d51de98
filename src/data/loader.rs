use std::fs::File;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use super::error::{DataLoadError, Result, SchemaError};
use super::model::{CompetitorProfile, MarketShareRow, PlanRecord};

// ---------------------------------------------------------------------------
// SourceLoader – one static file → one typed collection
// ---------------------------------------------------------------------------

/// A loader bound to one source file.
///
/// Implementations read the whole file and either return every record in
/// source order or fail; a partial collection is never returned.
pub trait SourceLoader {
    type Record;

    /// The file this loader reads; also the cache key.
    fn path(&self) -> &Path;

    fn load(&self) -> Result<Vec<Self::Record>>;
}

/// `market_share.csv` → [`MarketShareRow`]s.
#[derive(Debug, Clone)]
pub struct MarketShareLoader {
    path: PathBuf,
}

impl MarketShareLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SourceLoader for MarketShareLoader {
    type Record = MarketShareRow;

    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<MarketShareRow>> {
        load_market_share(&self.path)
    }
}

/// `plans.json` → [`PlanRecord`]s.
#[derive(Debug, Clone)]
pub struct PlanLoader {
    path: PathBuf,
}

impl PlanLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SourceLoader for PlanLoader {
    type Record = PlanRecord;

    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<PlanRecord>> {
        load_plans(&self.path)
    }
}

/// `competitors.json` → [`CompetitorProfile`]s.
#[derive(Debug, Clone)]
pub struct CompetitorLoader {
    path: PathBuf,
}

impl CompetitorLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SourceLoader for CompetitorLoader {
    type Record = CompetitorProfile;

    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<CompetitorProfile>> {
        load_json_records(&self.path)
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

const MARKET_SHARE_COLUMNS: [&str; 2] = ["Carrier", "MarketShare"];

/// CSV layout: header row, then one row per carrier.
///
/// ```text
/// Carrier,MarketShare
/// Point32Health,22.5
/// ```
///
/// Other columns are ignored. Cells are trimmed before parsing.
pub fn load_market_share(path: &Path) -> Result<Vec<MarketShareRow>> {
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader.headers().map_err(|e| csv_error(path, None, e))?;
    for column in MARKET_SHARE_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(
                SchemaError::new(path, format!("missing required column `{column}`")).into(),
            );
        }
    }

    reader
        .deserialize::<MarketShareRow>()
        .enumerate()
        .map(|(row, result)| -> Result<MarketShareRow> {
            let record = result.map_err(|e| csv_error(path, Some(row), e))?;
            if !record.market_share.is_finite() {
                return Err(SchemaError::at_record(
                    path,
                    row,
                    format!("`MarketShare` must be a finite number, got {}", record.market_share),
                )
                .into());
            }
            Ok(record)
        })
        .collect()
}

/// Type mismatches inside a row are schema problems; everything else the
/// csv crate reports (I/O, bad UTF-8, ragged rows) is a malformed file.
fn csv_error(path: &Path, row: Option<usize>, err: csv::Error) -> DataLoadError {
    if let (Some(row), csv::ErrorKind::Deserialize { err: de, .. }) = (row, err.kind()) {
        return SchemaError::at_record(path, row, de.to_string()).into();
    }
    DataLoadError::Csv {
        path: path.to_path_buf(),
        source: err,
    }
}

// ---------------------------------------------------------------------------
// JSON loaders
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "carrier": "Point32Health",
///     "plan_name": "Flex",
///     "product_type": "HMO",
///     "segment": "Small Group",
///     "deductible_individual": 1000,
///     "oop_max_individual": 5000,
///     "premium_index": 0.95,
///     "network_breadth_index": 0.7
///   },
///   ...
/// ]
/// ```
pub fn load_plans(path: &Path) -> Result<Vec<PlanRecord>> {
    let plans: Vec<PlanRecord> = load_json_records(path)?;

    let unknown = plans
        .iter()
        .filter(|p| !p.segment.is_known() || !p.product_type.is_known())
        .count();
    if unknown > 0 {
        log::warn!(
            "{}: {unknown} plan(s) use a segment or product type outside the selector options; \
             they will never match a filter",
            path.display()
        );
    }

    Ok(plans)
}

/// Read a top-level JSON array and deserialize each element into `T`.
///
/// The first bad element aborts the whole load with a [`SchemaError`]
/// naming its index.
pub fn load_json_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root: JsonValue = serde_json::from_str(&text).map_err(|source| DataLoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let JsonValue::Array(records) = root else {
        return Err(SchemaError::new(path, "expected a top-level JSON array").into());
    };

    records
        .into_iter()
        .enumerate()
        .map(|(i, rec)| -> Result<T> {
            if !rec.is_object() {
                return Err(SchemaError::at_record(path, i, "not a JSON object").into());
            }
            serde_json::from_value::<T>(rec)
                .map_err(|e| SchemaError::at_record(path, i, e.to_string()).into())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{ProductType, Segment};
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn plan_json(carrier: &str, segment: &str, product_type: &str) -> String {
        format!(
            r#"{{"carrier": "{carrier}", "plan_name": "Plan {carrier}",
                "product_type": "{product_type}", "segment": "{segment}",
                "deductible_individual": 1000, "oop_max_individual": 5000,
                "premium_index": 0.95, "network_breadth_index": 0.7}}"#
        )
    }

    #[test]
    fn market_share_rows_load_in_order() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "market_share.csv",
            "Carrier,MarketShare\nP32H,22.5\nBCBS,43.0\nAetna, 8\n",
        );

        let rows = MarketShareLoader::new(&path).load().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].carrier, "P32H");
        assert_eq!(rows[0].market_share, 22.5);
        assert_eq!(rows[1].carrier, "BCBS");
        assert_eq!(rows[2].carrier, "Aetna");
        assert_eq!(rows[2].market_share, 8.0);
    }

    #[test]
    fn market_share_ignores_extra_columns() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "market_share.csv",
            "Year,Carrier,MarketShare\n2024,P32H,22.5\n",
        );

        let rows = load_market_share(&path).unwrap();
        assert_eq!(
            rows,
            vec![MarketShareRow {
                carrier: "P32H".into(),
                market_share: 22.5
            }]
        );
    }

    #[test]
    fn market_share_missing_column_is_schema_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "market_share.csv", "Carrier,Share\nP32H,22.5\n");

        let err = load_market_share(&path).unwrap_err();
        let schema = err.as_schema().expect("schema error");
        assert!(schema.reason.contains("MarketShare"));
        assert_eq!(schema.record, None);
    }

    #[test]
    fn market_share_non_numeric_is_schema_error() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "market_share.csv",
            "Carrier,MarketShare\nP32H,22.5\nBCBS,lots\n",
        );

        let err = load_market_share(&path).unwrap_err();
        assert_eq!(err.as_schema().and_then(|s| s.record), Some(1));
    }

    #[test]
    fn market_share_non_finite_is_schema_error() {
        let dir = TempDir::new().unwrap();
        for (value, row) in [("inf", 0), ("NaN", 0), ("-inf", 1)] {
            let body = if row == 0 {
                format!("Carrier,MarketShare\nA,{value}\nC,10\n")
            } else {
                format!("Carrier,MarketShare\nC,10\nA,{value}\n")
            };
            let path = write(&dir, "market_share.csv", &body);

            let err = load_market_share(&path).unwrap_err();
            let schema = err.as_schema().expect("schema error");
            assert_eq!(schema.record, Some(row), "value {value}");
            assert!(schema.reason.contains("finite"));
        }
    }

    #[test]
    fn market_share_ragged_row_is_csv_error() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "market_share.csv",
            "Carrier,MarketShare\nP32H,22.5,extra\n",
        );

        let err = load_market_share(&path).unwrap_err();
        assert!(matches!(err, DataLoadError::Csv { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.csv");

        assert!(matches!(
            load_market_share(&path),
            Err(DataLoadError::Io { .. })
        ));
        assert!(matches!(
            PlanLoader::new(dir.path().join("absent.json")).load(),
            Err(DataLoadError::Io { .. })
        ));
    }

    #[test]
    fn plans_load_in_order() {
        let dir = TempDir::new().unwrap();
        let body = format!(
            "[{}, {}]",
            plan_json("P32H", "Small Group", "HMO"),
            plan_json("BCBS", "Large Group", "PPO")
        );
        let path = write(&dir, "plans.json", &body);

        let plans = PlanLoader::new(&path).load().unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].carrier, "P32H");
        assert_eq!(plans[0].segment, Segment::SmallGroup);
        assert_eq!(plans[1].carrier, "BCBS");
        assert_eq!(plans[1].product_type, ProductType::Ppo);
    }

    #[test]
    fn plan_missing_field_is_schema_error() {
        let dir = TempDir::new().unwrap();
        let broken = r#"{"carrier": "BCBS", "plan_name": "Standard",
            "product_type": "PPO", "segment": "Large Group",
            "deductible_individual": 500, "oop_max_individual": 4000,
            "network_breadth_index": 0.9}"#;
        let body = format!("[{}, {broken}]", plan_json("P32H", "Small Group", "HMO"));
        let path = write(&dir, "plans.json", &body);

        let err = load_plans(&path).unwrap_err();
        let schema = err.as_schema().expect("schema error");
        assert_eq!(schema.record, Some(1));
        assert!(schema.reason.contains("premium_index"));
    }

    #[test]
    fn plan_mistyped_field_is_schema_error() {
        let dir = TempDir::new().unwrap();
        let body = plan_json("P32H", "Small Group", "HMO")
            .replace("\"premium_index\": 0.95", "\"premium_index\": \"high\"");
        let path = write(&dir, "plans.json", &format!("[{body}]"));

        let err = load_plans(&path).unwrap_err();
        assert_eq!(err.as_schema().and_then(|s| s.record), Some(0));
    }

    #[test]
    fn plans_with_unknown_enums_pass_through() {
        let dir = TempDir::new().unwrap();
        let body = format!("[{}]", plan_json("Tufts", "Individual", "EPO"));
        let path = write(&dir, "plans.json", &body);

        let plans = load_plans(&path).unwrap();
        assert_eq!(plans[0].segment, Segment::Other("Individual".into()));
        assert_eq!(plans[0].product_type, ProductType::Other("EPO".into()));
    }

    #[test]
    fn json_root_must_be_array_of_objects() {
        let dir = TempDir::new().unwrap();

        let path = write(&dir, "obj.json", r#"{"carrier": "P32H"}"#);
        let err = load_json_records::<CompetitorProfile>(&path).unwrap_err();
        assert_eq!(err.as_schema().map(|s| s.record), Some(None));

        let path = write(&dir, "nums.json", "[1, 2]");
        let err = load_json_records::<CompetitorProfile>(&path).unwrap_err();
        assert_eq!(err.as_schema().and_then(|s| s.record), Some(0));
    }

    #[test]
    fn invalid_json_syntax_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "competitors.json", "[{\"carrier\": ");

        let err = CompetitorLoader::new(&path).load().unwrap_err();
        assert!(matches!(err, DataLoadError::Json { .. }));
    }

    #[test]
    fn competitors_load_with_ordered_lists() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "competitors.json",
            r#"[
                {"carrier": "BCBS", "strengths": ["Brand", "Network"], "weaknesses": ["Price"]},
                {"carrier": "Aetna", "strengths": [], "weaknesses": ["Local presence"]}
            ]"#,
        );

        let profiles = CompetitorLoader::new(&path).load().unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].strengths, vec!["Brand", "Network"]);
        assert!(profiles[1].strengths.is_empty());
    }

    #[test]
    fn competitor_missing_weaknesses_is_schema_error() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "competitors.json",
            r#"[{"carrier": "BCBS", "strengths": ["Brand"]}]"#,
        );

        let err = CompetitorLoader::new(&path).load().unwrap_err();
        assert!(err.is_schema());
    }

    #[test]
    fn empty_sources_load_as_empty_collections() {
        let dir = TempDir::new().unwrap();
        let csv = write(&dir, "market_share.csv", "Carrier,MarketShare\n");
        let json = write(&dir, "plans.json", "[]");

        assert!(load_market_share(&csv).unwrap().is_empty());
        assert!(load_plans(&json).unwrap().is_empty());
    }
}
