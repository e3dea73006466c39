// Boundary row types + loaders
// The roster and registry are maintained independently, with no shared
// stable identifier and inconsistently named columns. Field access is
// normalized once here; the algorithms never see raw column names.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// ROSTER ROW (staff roster source)
// ============================================================================

/// One row per staff member. All scope fields are optional; rows missing
/// a required field are skipped by the Mapping Builder, never rejected.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct RosterRow {
    #[serde(rename = "Branch", default)]
    pub branch: Option<String>,

    #[serde(rename = "Town", default)]
    pub town: Option<String>,

    #[serde(rename = "Office", default)]
    pub office: Option<String>,
}

// ============================================================================
// REGISTRY ROW (official branch registry source)
// ============================================================================

/// One row per registered branch office.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct RegistryRow {
    #[serde(rename = "Branch Office", default)]
    pub branch_office: Option<String>,

    #[serde(rename = "Area", default)]
    pub area: Option<String>,

    #[serde(rename = "Town", default)]
    pub town: Option<String>,
}

// ============================================================================
// BUSINESS RECORD
// ============================================================================

/// A record to be filtered by scope. Only `branch` and `location` are
/// read; every other field rides along untouched in `extra` so filtering
/// never adds, removes, or modifies anything.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    pub fn new(branch: Option<&str>, location: Option<&str>) -> Self {
        Record {
            branch: branch.map(|s| s.to_string()),
            location: location.map(|s| s.to_string()),
            extra: serde_json::Map::new(),
        }
    }
}

// ============================================================================
// LOADERS
// ============================================================================

pub fn load_roster_csv(csv_path: &Path) -> Result<Vec<RosterRow>> {
    let mut rdr = csv::Reader::from_path(csv_path).context("Failed to open roster CSV")?;

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: RosterRow = result.context("Failed to deserialize roster row")?;
        rows.push(row);
    }

    Ok(rows)
}

pub fn load_registry_csv(csv_path: &Path) -> Result<Vec<RegistryRow>> {
    let mut rdr = csv::Reader::from_path(csv_path).context("Failed to open registry CSV")?;

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: RegistryRow = result.context("Failed to deserialize registry row")?;
        rows.push(row);
    }

    Ok(rows)
}

/// Load records from a JSON array file
pub fn load_records_json(json_path: &Path) -> Result<Vec<Record>> {
    let contents =
        std::fs::read_to_string(json_path).context("Failed to read records JSON file")?;
    let records: Vec<Record> =
        serde_json::from_str(&contents).context("Failed to parse records JSON")?;
    Ok(records)
}

// ============================================================================
// TESTS
// ============================================================================
