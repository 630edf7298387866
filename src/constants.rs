/// Column name constants to ensure consistency across the codebase.
/// These are the seven SATCAT columns the extractor projects into its output.

pub const COL_OBJECT_NAME: &str = "OBJECT_NAME";
pub const COL_OBJECT_ID: &str = "OBJECT_ID";
pub const COL_NORAD_CAT_ID: &str = "NORAD_CAT_ID";
pub const COL_OBJECT_TYPE: &str = "OBJECT_TYPE";
pub const COL_LAUNCH_DATE: &str = "LAUNCH_DATE";
pub const COL_LAUNCH_SITE: &str = "LAUNCH_SITE";
pub const COL_DECAY_DATE: &str = "DECAY_DATE";

/// All required columns, in record declaration order.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_OBJECT_NAME,
    COL_OBJECT_ID,
    COL_NORAD_CAT_ID,
    COL_OBJECT_TYPE,
    COL_LAUNCH_DATE,
    COL_LAUNCH_SITE,
    COL_DECAY_DATE,
];

/// Object-type classification for payloads in the SATCAT export.
pub const OBJECT_TYPE_PAYLOAD: &str = "PAY";

/// Group key used when a kept row has a blank OBJECT_NAME.
pub const UNKNOWN_OBJECT_NAME: &str = "(UNKNOWN_OBJECT_NAME)";

/// SATCAT is standard CSV with comma delimiter.
pub const CSV_DELIMITER: char = ',';

// Default paths, relative to the working directory
pub const DEFAULT_INPUT_CSV: &str = "json/satcat.csv";
pub const DEFAULT_OUTPUT_JSON: &str = "json/decayed/decayed.json";
