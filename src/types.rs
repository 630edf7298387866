use serde::Serialize;
use std::collections::BTreeMap;

use crate::constants;

/// One kept SATCAT row, projected onto the seven output columns.
/// Field declaration order is the order the columns appear in the output.
#[derive(Debug, Clone, Serialize)]
pub struct DecayedRecord {
    #[serde(rename = "OBJECT_NAME")]
    pub object_name: String,
    #[serde(rename = "OBJECT_ID")]
    pub object_id: String,
    #[serde(rename = "NORAD_CAT_ID")]
    pub norad_cat_id: String,
    #[serde(rename = "OBJECT_TYPE")]
    pub object_type: String,
    #[serde(rename = "LAUNCH_DATE")]
    pub launch_date: String,
    #[serde(rename = "LAUNCH_SITE")]
    pub launch_site: String,
    #[serde(rename = "DECAY_DATE")]
    pub decay_date: String,
}

impl DecayedRecord {
    /// Column-name/value pairs in declaration order.
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            (constants::COL_OBJECT_NAME, &self.object_name),
            (constants::COL_OBJECT_ID, &self.object_id),
            (constants::COL_NORAD_CAT_ID, &self.norad_cat_id),
            (constants::COL_OBJECT_TYPE, &self.object_type),
            (constants::COL_LAUNCH_DATE, &self.launch_date),
            (constants::COL_LAUNCH_SITE, &self.launch_site),
            (constants::COL_DECAY_DATE, &self.decay_date),
        ]
    }

    /// Group key for this record: trimmed OBJECT_NAME, or the unknown
    /// placeholder when blank. A satellite literally named
    /// `(UNKNOWN_OBJECT_NAME)` lands in the same group as the unnamed ones.
    pub fn group_key(&self) -> &str {
        let name = self.object_name.trim();
        if name.is_empty() {
            constants::UNKNOWN_OBJECT_NAME
        } else {
            name
        }
    }
}

/// Records grouped by object name. BTreeMap keeps keys in ascending
/// byte-wise order; each group keeps input row order.
pub type GroupedDb = BTreeMap<String, Vec<DecayedRecord>>;
