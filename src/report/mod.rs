pub mod json;
pub mod md;
pub mod text;

use crate::error::CareerscopeError;
use crate::types::report::MatchReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Md,
    Json,
}

pub fn render(report: &MatchReport, format: OutputFormat) -> Result<String, CareerscopeError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report)),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Json => json::to_json(report).map_err(CareerscopeError::Json),
    }
}
