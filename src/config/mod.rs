pub mod article_file;

#[cfg(feature = "cli")]
use crate::core::hint::DEFAULT_API_KEY_VAR;
#[cfg(feature = "cli")]
use crate::core::ArticleDraft;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_env_var_name, validate_range, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use std::time::Duration;

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "publish-probe")]
#[command(about = "Check a blog API's health and print the command that would publish a test article")]
pub struct CliConfig {
    #[arg(long, env = "PUBLISH_BASE_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    #[arg(long, default_value = DEFAULT_API_KEY_VAR, help = "Environment variable holding the API key")]
    pub api_key_var: String,

    #[arg(long, default_value = "10")]
    pub timeout_secs: u64,

    #[arg(long, help = "TOML file describing the article (defaults to the built-in sample)")]
    pub article: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn load_article(&self) -> Result<ArticleDraft> {
        match &self.article {
            Some(path) => {
                tracing::info!("Loading article from {}", path.display());
                article_file::ArticleFile::from_file(path).map(|file| file.article)
            }
            None => Ok(ArticleDraft::sample()),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_env_var_name("api_key_var", &self.api_key_var)?;
        validate_range(
            "timeout_secs",
            self.timeout_secs,
            MIN_TIMEOUT_SECS,
            MAX_TIMEOUT_SECS,
        )?;
        Ok(())
    }
}
