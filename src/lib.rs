//! News article enrichment and topic exploration toolkit.

pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod nlp;
