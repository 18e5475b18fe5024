// Copyright (C) 2025 practicalace. Licensed under the GNU AGPLv3.
use chrono::Local;
use std::error::Error;
use std::path::{Path, PathBuf};

/// What a site-improvement run did, for the end-of-run report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub pages_processed: usize,
    pub backup_dir: Option<PathBuf>,
    pub styles_extracted: usize,
    pub errors: Vec<String>,
}

impl RunSummary {
    pub fn record_error(&mut self, message: String) {
        log::error!("{message}");
        self.errors.push(message);
    }
}

/// Plain-text report body.
pub fn render_report(summary: &RunSummary) -> String {
    let divider = "=".repeat(60);
    let mut report = format!(
        "{divider}\nWORLD WAR Z SITE - PHASE 1 IMPROVEMENTS REPORT\nGenerated: {}\n{divider}\n\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    report.push_str(&format!("Pages Processed: {}\n", summary.pages_processed));
    report.push_str(&format!(
        "Backup Location: {}\n",
        summary
            .backup_dir
            .as_ref()
            .map_or_else(|| "none".to_owned(), |dir| dir.display().to_string())
    ));
    report.push_str(&format!(
        "Inline Styles Consolidated: {}\n\n",
        summary.styles_extracted
    ));

    if summary.errors.is_empty() {
        report.push_str("No errors encountered!\n");
    } else {
        report.push_str("ERRORS ENCOUNTERED:\n");
        for error in &summary.errors {
            report.push_str(&format!("  - {error}\n"));
        }
    }

    report.push_str(&format!(
        "\n{divider}\nNEXT STEPS (Phase 2):\n\
         1. Review the updated pages in a browser\n\
         2. Test mobile responsiveness\n\
         3. Verify all navigation links work\n\
         4. Check that Mermaid diagrams render correctly\n\
         5. Test JavaScript functionality (copy buttons, theme toggle)\n{divider}\n"
    ));
    report
}

/// Writes the report to `<dir>/phase1_report.txt` and returns its path.
pub async fn write_report(
    dir: &Path,
    summary: &RunSummary,
) -> Result<PathBuf, Box<dyn Error + Send + Sync>> {
    let report_path = dir.join("phase1_report.txt");
    tokio::fs::write(&report_path, render_report(summary)).await?;
    log::info!("Report saved to {}", report_path.display());
    Ok(report_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_report_without_errors() {
        let summary = RunSummary {
            pages_processed: 12,
            backup_dir: Some(PathBuf::from("/site/backup_20250101_120000")),
            styles_extracted: 4,
            errors: Vec::new(),
        };
        let report = render_report(&summary);

        assert!(report.contains("Pages Processed: 12"));
        assert!(report.contains("backup_20250101_120000"));
        assert!(report.contains("Inline Styles Consolidated: 4"));
        assert!(report.contains("No errors encountered!"));
        assert!(report.contains("NEXT STEPS"));
    }

    #[test]
    fn test_render_report_lists_errors() {
        let mut summary = RunSummary::default();
        summary.errors.push("index.html: no body tag found".to_owned());
        summary.errors.push("JS file not found: clipboard.js".to_owned());

        let report = render_report(&summary);
        assert!(report.contains("ERRORS ENCOUNTERED:"));
        assert!(report.contains("  - index.html: no body tag found"));
        assert!(report.contains("  - JS file not found: clipboard.js"));
        assert!(report.contains("Backup Location: none"));
    }

    #[tokio::test]
    async fn test_write_report_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let summary = RunSummary::default();

        let path = write_report(dir.path(), &summary).await.unwrap();
        assert_eq!(path, dir.path().join("phase1_report.txt"));
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("PHASE 1 IMPROVEMENTS REPORT"));
    }
}
