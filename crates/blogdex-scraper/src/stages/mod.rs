//! Blog-level page stages.
//!
//! One module per crawled surface. Each stage exposes a pure `apply_*`
//! parser that writes only the fields it owns into the shared profile;
//! later stages fill gaps left by earlier ones and never raise. The
//! orchestrator runs them in a fixed order — the fill-only-if-default
//! rules make that order part of the contract.

pub(crate) mod main_page;
pub(crate) mod mobile;
pub(crate) mod profile_page;
pub(crate) mod rss;
pub(crate) mod visitors;
