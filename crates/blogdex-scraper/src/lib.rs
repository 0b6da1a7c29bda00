//! Extraction pipeline for blogdex.
//!
//! Crawls a blog's public surfaces (desktop list page, RSS feed, profile,
//! visitor counter, prologue, mobile page), extracts typed fields through
//! ordered fallback strategies, enriches recent posts with detail metrics
//! and search-exposure checks under a bounded worker pool, and attaches the
//! computed influence index.
//!
//! Extraction failures are contained where they happen: a pattern that does
//! not match leaves its field at the default, a page that cannot be fetched
//! contributes nothing, and a failing enrichment task is replaced by a
//! default-valued post. The pipeline itself never fails.

mod client;
mod content;
mod enrich;
mod error;
mod exposure;
mod image_seo;
mod parse_util;
mod pipeline;
mod post_detail;
mod stages;

pub use client::BlogClient;
pub use error::ScrapeError;
pub use exposure::extract_keyword;
pub use pipeline::Analyzer;
