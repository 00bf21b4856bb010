pub mod hint;
pub mod preview;
pub mod probe;
pub mod smoke;

pub use crate::domain::model::{ArticleDraft, ArticleStatus};
pub use crate::domain::ports::HealthCheck;
pub use crate::utils::error::Result;
