use crate::core::hint::CommandHint;
use crate::core::preview::PayloadPrinter;
use crate::core::{ArticleDraft, HealthCheck};
use crate::utils::error::Result;
use std::io::Write;

/// Runs the publish smoke test: report the target, probe health, then print
/// the payload preview and the command hint. Nothing is ever submitted.
pub struct SmokeTest<H: HealthCheck> {
    probe: H,
    article: ArticleDraft,
    hint: CommandHint,
    printer: PayloadPrinter,
}

impl<H: HealthCheck> SmokeTest<H> {
    pub fn new(probe: H, article: ArticleDraft, hint: CommandHint) -> Self {
        Self {
            probe,
            article,
            hint,
            printer: PayloadPrinter::new(),
        }
    }

    pub async fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "=== ARTICLE PUBLISH TEST ===")?;
        writeln!(out, "URL: {}", self.hint.create_url())?;
        writeln!(out, "Title: {}", self.article.title)?;
        writeln!(
            out,
            "API key available: {}",
            if self.hint.api_key_available() { "yes" } else { "no" }
        )?;
        writeln!(out)?;

        tracing::info!("Checking health endpoint: {}", self.probe.endpoint());
        let health = match self.probe.check().await {
            Ok(health) => health,
            Err(e) => {
                tracing::warn!("Health check failed: {}", e);
                writeln!(out, "✗ {}", e.user_friendly_message())?;
                out.flush()?;
                return Err(e);
            }
        };
        writeln!(out, "✓ Server reachable: {}", serde_json::to_string(&health)?)?;

        writeln!(out)?;
        writeln!(out, "=== PUBLISHING ===")?;
        if self.article.generate_cover_image {
            writeln!(out, "(Cover image generation can take 10-20 seconds)")?;
        }

        writeln!(out)?;
        writeln!(out, "Request structure:")?;
        writeln!(out, "{}", self.printer.preview(&self.article)?)?;

        writeln!(out)?;
        writeln!(out, "✓ Test script prepared successfully!")?;
        writeln!(out)?;
        writeln!(out, "To run the real publication, use:")?;
        writeln!(out, "{}", self.hint.render())?;
        out.flush()?;

        tracing::debug!("Smoke test finished for slug {}", self.article.slug);
        Ok(())
    }
}
