use crate::core::ArticleDraft;
use crate::utils::error::{ProbeError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 文章檔案格式：
///
/// ```toml
/// [article]
/// title = "..."
/// slug = "..."
/// excerpt = "..."
/// content = '''...'''
/// categorySlug = "..."
/// tagSlugs = ["..."]
/// status = "draft"
/// generateCoverImage = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleFile {
    pub article: ArticleDraft,
}

impl ArticleFile {
    /// 從 TOML 檔案載入並驗證文章
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ProbeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let file: ArticleFile = toml::from_str(&processed_content)?;
        file.article.validate()?;
        Ok(file)
    }

    /// 替換環境變數 (例如 ${ARTICLE_YEAR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| {
            ProbeError::ConfigError {
                message: format!("Invalid substitution pattern: {}", e),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}
