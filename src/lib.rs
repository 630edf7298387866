pub mod config;
pub mod constants;
pub mod error;
pub mod extractor;
pub mod json;
pub mod logging;
pub mod parser;
pub mod reader;
pub mod types;
