use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::constants::OBJECT_TYPE_PAYLOAD;
use crate::error::Result;
use crate::json::render_grouped;
use crate::reader::{field, SatcatReader};
use crate::types::{DecayedRecord, GroupedDb};

/// Result of one extraction pass over the catalog.
#[derive(Debug)]
pub struct Extraction {
    pub grouped: GroupedDb,
    /// Non-blank data rows seen, before filtering.
    pub rows_read: u64,
    /// Rows surviving the decayed-payload filter.
    pub records_kept: u64,
}

/// Reads the catalog at `input` and groups the decayed payloads by
/// object name. A row is kept when DECAY_DATE is non-blank and
/// OBJECT_TYPE is "PAY" (case-insensitive).
pub fn extract(input: &Path) -> Result<Extraction> {
    let mut reader = SatcatReader::open(input)?;
    let cols = reader.columns();

    let mut grouped = GroupedDb::new();
    let mut rows_read = 0u64;
    let mut records_kept = 0u64;

    while let Some(row) = reader.next_row() {
        let row = row?;
        rows_read += 1;

        let decay_date = field(&row, cols.decay_date);
        if decay_date.is_empty() {
            continue;
        }

        // Payload filter: OBJECT_TYPE must be PAY
        let object_type = field(&row, cols.object_type);
        if !object_type.eq_ignore_ascii_case(OBJECT_TYPE_PAYLOAD) {
            continue;
        }

        let record = DecayedRecord {
            object_name: field(&row, cols.object_name).to_string(),
            object_id: field(&row, cols.object_id).to_string(),
            norad_cat_id: field(&row, cols.norad_cat_id).to_string(),
            object_type: object_type.to_string(),
            launch_date: field(&row, cols.launch_date).to_string(),
            launch_site: field(&row, cols.launch_site).to_string(),
            decay_date: decay_date.to_string(),
        };

        let key = record.group_key().to_string();
        debug!(object_name = %key, norad_cat_id = %record.norad_cat_id, "keeping record");
        grouped.entry(key).or_default().push(record);
        records_kept += 1;
    }

    info!(rows_read, records_kept, groups = grouped.len(), "extraction pass complete");
    Ok(Extraction {
        grouped,
        rows_read,
        records_kept,
    })
}

/// Full run: extract, render, and write the grouped JSON to the configured
/// output path. The JSON string is built in memory and written in one call,
/// so a failed run never leaves a partially written file.
pub fn run(config: &Config) -> Result<Extraction> {
    info!(input = %config.input_csv.display(), "starting extraction");
    let extraction = extract(&config.input_csv)?;

    if let Some(parent) = config.output_json.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = render_grouped(&extraction.grouped);
    fs::write(&config.output_json, json)?;

    info!(output = %config.output_json.display(), "wrote grouped database");
    Ok(extraction)
}
