//! Format inspector reports as text or JSON.

use super::cli::FlagReport;
use crate::error::ToolError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

/// Format reports as a table.
pub fn format_report_text(reports: &[FlagReport]) -> String {
    if reports.is_empty() {
        return "No flags declared.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Flag", "Environment key", "Value", "Default", "Source"]);
    for row in reports {
        table.add_row(vec![
            row.name.clone(),
            row.key.clone(),
            row.value.clone(),
            row.default.clone(),
            row.source.as_str().to_string(),
        ]);
    }
    table.to_string()
}

/// Format reports as a JSON array.
pub fn format_report_json(reports: &[FlagReport]) -> Result<String, ToolError> {
    Ok(serde_json::to_string_pretty(reports)?)
}
