use std::fs;
use std::path::Path;

use tracing::{error, info};

use satcat_decayed::config::Config;
use satcat_decayed::extractor;
use satcat_decayed::logging;

/// Absolute form of `path` for the console report, falling back to the
/// path as given when it cannot be resolved.
fn absolute_display(path: &Path) -> String {
    fs::canonicalize(path)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.display().to_string())
}

fn main() {
    logging::init_logging();

    let result = Config::load().and_then(|config| {
        let extraction = extractor::run(&config)?;
        Ok((config, extraction))
    });

    match result {
        Ok((config, extraction)) => {
            info!("build-decayed-db complete");
            println!("build-decayed-db complete.");
            println!("Input file:  {}", absolute_display(&config.input_csv));
            println!("Output file: {}", absolute_display(&config.output_json));
            println!("Rows read:   {}", extraction.rows_read);
            println!(
                "Records kept (DECAY_DATE not empty AND OBJECT_TYPE=PAY): {}",
                extraction.records_kept
            );
        }
        Err(e) => {
            error!("build-decayed-db failed: {e}");
            eprintln!("ERROR: {e}");
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}
