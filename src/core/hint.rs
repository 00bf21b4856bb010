use crate::core::probe::join_path;

pub const CREATE_PATH: &str = "/api/articles/create";
pub const DEFAULT_API_KEY_VAR: &str = "SCHEDULED_TASK_API_KEY";

/// curl command an operator can paste to publish for real. Never executed here.
#[derive(Debug, Clone)]
pub struct CommandHint {
    create_url: String,
    api_key_var: String,
}

impl CommandHint {
    pub fn new(base_url: &str, api_key_var: &str) -> Self {
        Self {
            create_url: join_path(base_url, CREATE_PATH),
            api_key_var: api_key_var.to_string(),
        }
    }

    pub fn create_url(&self) -> &str {
        &self.create_url
    }

    pub fn api_key_var(&self) -> &str {
        &self.api_key_var
    }

    /// 只檢查變數是否存在，不讀出內容
    pub fn api_key_available(&self) -> bool {
        std::env::var_os(&self.api_key_var).is_some_and(|value| !value.is_empty())
    }

    pub fn render(&self) -> String {
        [
            format!("curl -X POST \"{}\" \\", self.create_url),
            "  -H \"Content-Type: application/json\" \\".to_string(),
            format!("  -H \"X-API-Key: ${}\" \\", self.api_key_var),
            "  -d '<article_json>'".to_string(),
        ]
        .join("\n")
    }
}
