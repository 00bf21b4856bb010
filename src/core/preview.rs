use crate::core::ArticleDraft;
use crate::utils::error::Result;

pub const PREVIEW_CHAR_BUDGET: usize = 500;
pub const ELLIPSIS: &str = "...";

/// 依字元（非位元組）截斷，不會切開多位元組字元
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

pub struct PayloadPrinter {
    budget: usize,
}

impl PayloadPrinter {
    pub fn new() -> Self {
        Self {
            budget: PREVIEW_CHAR_BUDGET,
        }
    }

    /// Pretty JSON with two-space indentation. Non-ASCII text is kept as-is.
    pub fn render(&self, article: &ArticleDraft) -> Result<String> {
        Ok(serde_json::to_string_pretty(article)?)
    }

    /// First `PREVIEW_CHAR_BUDGET` characters of the rendering, always followed by `...`.
    pub fn preview(&self, article: &ArticleDraft) -> Result<String> {
        let rendered = self.render(article)?;
        let mut preview = truncate_chars(&rendered, self.budget).to_string();
        preview.push_str(ELLIPSIS);
        Ok(preview)
    }
}

impl Default for PayloadPrinter {
    fn default() -> Self {
        Self::new()
    }
}
