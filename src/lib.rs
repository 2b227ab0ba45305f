pub mod config;
pub mod fetch;
pub mod ingest;
pub mod process;
