use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// 完整的健康檢查 URL
    fn endpoint(&self) -> &str;

    /// 發出一次請求，成功時回傳解析後的 JSON 內容
    async fn check(&self) -> Result<serde_json::Value>;
}
