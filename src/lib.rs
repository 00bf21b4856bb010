pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::article_file::ArticleFile;
pub use crate::core::{
    hint::CommandHint, preview::PayloadPrinter, probe::HttpHealthProbe, smoke::SmokeTest,
    ArticleDraft, ArticleStatus, HealthCheck,
};
pub use crate::utils::error::{ProbeError, Result};
