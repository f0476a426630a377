use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::model::{Champion, ChampionDataset, FieldValue};

/// File name of the dataset shipped next to the binary.
pub const DATASET_FILE: &str = "champions.csv";

/// Default dataset location: `champions.csv` next to the executable,
/// falling back to the working directory if the executable path is opaque.
pub fn default_dataset_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DATASET_FILE)))
        .unwrap_or_else(|| PathBuf::from(DATASET_FILE))
}

/// CSV layout: header row with column names.
///
/// Two header conventions are recognized:
/// * `Name` + `Tags` – `Tags` holds comma-separated role values
/// * `name` + `role` – `role` holds a single value
///
/// The identity column is required; a missing category column yields
/// champions with no roles. All columns are kept verbatim as typed
/// pass-through fields.
pub fn load_csv(path: &Path) -> Result<ChampionDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let name_idx = headers
        .iter()
        .position(|h| h == "Name" || h == "name")
        .context("CSV missing 'Name' column")?;
    let category = headers
        .iter()
        .position(|h| h == "Tags")
        .map(|i| (i, true))
        .or_else(|| headers.iter().position(|h| h == "role").map(|i| (i, false)));

    let mut champions = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        // An empty name cell is kept as-is; the row just never matches
        // exact lookups.
        let name = record.get(name_idx).unwrap_or("").trim().to_string();

        let roles = match category {
            Some((idx, multi)) => parse_roles(record.get(idx).unwrap_or(""), multi),
            None => Vec::new(),
        };

        let mut fields = BTreeMap::new();
        for (col_idx, value) in record.iter().enumerate() {
            fields.insert(headers[col_idx].clone(), guess_field_type(value));
        }

        let name_lower = name.to_lowercase();
        champions.push(Champion {
            fields,
            name,
            name_lower,
            roles,
        });
    }

    Ok(ChampionDataset::from_champions(champions))
}

/// Normalize a category cell into role values: lowercased, per-tag trimmed,
/// empty tags dropped. `multi` selects the comma-separated `Tags` form.
fn parse_roles(raw: &str, multi: bool) -> Vec<String> {
    if multi {
        raw.split(',')
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect()
    } else {
        let role = raw.trim().to_lowercase();
        if role.is_empty() { Vec::new() } else { vec![role] }
    }
}

fn guess_field_type(s: &str) -> FieldValue {
    if s.is_empty() {
        return FieldValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return FieldValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return FieldValue::Float(f);
    }
    if s == "true" || s == "false" {
        return FieldValue::Bool(s == "true");
    }
    FieldValue::String(s.to_string())
}
