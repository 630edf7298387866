use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use tracing::debug;

use crate::constants::{self, CSV_DELIMITER};
use crate::error::{ExtractorError, Result};
use crate::parser::split_delimited_line;

/// Resolved zero-based indices of the seven required SATCAT columns.
#[derive(Debug, Clone, Copy)]
pub struct Columns {
    pub object_name: usize,
    pub object_id: usize,
    pub norad_cat_id: usize,
    pub object_type: usize,
    pub launch_date: usize,
    pub launch_site: usize,
    pub decay_date: usize,
}

impl Columns {
    fn resolve(index: &HashMap<String, usize>) -> Result<Self> {
        let require = |name: &str| -> Result<usize> {
            index
                .get(&name.to_uppercase())
                .copied()
                .ok_or_else(|| ExtractorError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            object_name: require(constants::COL_OBJECT_NAME)?,
            object_id: require(constants::COL_OBJECT_ID)?,
            norad_cat_id: require(constants::COL_NORAD_CAT_ID)?,
            object_type: require(constants::COL_OBJECT_TYPE)?,
            launch_date: require(constants::COL_LAUNCH_DATE)?,
            launch_site: require(constants::COL_LAUNCH_SITE)?,
            decay_date: require(constants::COL_DECAY_DATE)?,
        })
    }
}

/// Trimmed cell at `index`, or `""` when the row is too short.
pub fn field(row: &[String], index: usize) -> &str {
    row.get(index).map(|s| s.trim()).unwrap_or("")
}

/// Line-by-line SATCAT CSV reader. Opening resolves the header; iteration
/// yields parsed data rows with blank lines skipped.
#[derive(Debug)]
pub struct SatcatReader {
    lines: Lines<BufReader<File>>,
    columns: Columns,
}

impl SatcatReader {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ExtractorError::MissingInput(path.to_path_buf()));
        }
        let file = File::open(path)?;
        let mut lines = BufReader::new(file).lines();

        let header_line = match lines.next() {
            Some(line) => line?,
            None => return Err(ExtractorError::EmptyInput(path.to_path_buf())),
        };
        if header_line.trim().is_empty() {
            return Err(ExtractorError::EmptyInput(path.to_path_buf()));
        }

        let header = split_delimited_line(&header_line, CSV_DELIMITER);
        let index: HashMap<String, usize> = header
            .iter()
            .enumerate()
            .map(|(i, name)| (name.trim().to_uppercase(), i))
            .collect();
        debug!("Header resolved: {} columns", header.len());

        let columns = Columns::resolve(&index)?;
        Ok(Self { lines, columns })
    }

    pub fn columns(&self) -> Columns {
        self.columns
    }

    /// Next non-blank data row. Blank lines are skipped without counting.
    pub fn next_row(&mut self) -> Option<Result<Vec<String>>> {
        loop {
            match self.lines.next()? {
                Err(e) => return Some(Err(e.into())),
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    return Some(Ok(split_delimited_line(&line, CSV_DELIMITER)));
                }
            }
        }
    }
}
