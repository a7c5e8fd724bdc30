//! Article storage and ingestion layer.

pub mod articles;
pub mod ingest;
