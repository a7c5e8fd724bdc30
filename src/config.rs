//! Runtime configuration utilities for newslens.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Directory scanned for raw article JSON files.
    pub articles_dir: PathBuf,
    /// Root folder for the persisted document store.
    pub data_dir: PathBuf,
    /// Root folder for exploration outputs (CSV tables, topic payloads).
    pub outputs_dir: PathBuf,
    /// Sentence-count threshold switching the summarizer to ranked mode.
    pub summary_threshold: usize,
    /// Maximum number of sentences emitted by the summarizer.
    pub summary_limit: usize,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let articles_dir = env::var("ARTICLES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./articles"));
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let outputs_dir = env::var("OUTPUTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./outputs"));
        let summary_threshold = env::var("SUMMARY_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);
        let summary_limit = env::var("SUMMARY_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        std::fs::create_dir_all(&data_dir).context("creating data dir")?;
        std::fs::create_dir_all(&outputs_dir).context("creating outputs dir")?;

        Ok(Self {
            articles_dir,
            data_dir,
            outputs_dir,
            summary_threshold,
            summary_limit,
        })
    }

    /// Convenience helper for derived path segments.
    pub fn join_data<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.data_dir.join(path)
    }

    /// Convenience helper for derived output path segments.
    pub fn join_output<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.outputs_dir.join(path)
    }
}
