// Copyright (C) 2025 practicalace. Licensed under the GNU AGPLv3.
//! End-to-end site improvement: backup, shared JS copy, page
//! standardization, style consolidation, and the run report.
//!
//! All interactivity lives in the binaries; this module only sees resolved
//! flags. Extracted styles flow through return values, not shared state.
use crate::file_io;
use crate::report::{self, RunSummary};
use crate::standardize;
use crate::stylesheet::{self, ExtractedStyles};
use std::error::Error;
use std::path::PathBuf;

/// Resolved options for one improvement run.
#[derive(Debug, Clone)]
pub struct ImproveOptions {
    pub site_dir: PathBuf,
    /// Directory holding the shared `js/` assets. When `None`, the JS copy
    /// step is skipped (the caller already warned the user).
    pub template_dir: Option<PathBuf>,
}

/// Runs the whole improvement pass over a site directory.
///
/// A missing site directory or a failed backup aborts before anything is
/// mutated; per-page failures are recorded in the summary and processing
/// continues.
pub async fn improve_site(
    options: &ImproveOptions,
) -> Result<RunSummary, Box<dyn Error + Send + Sync>> {
    if !options.site_dir.is_dir() {
        return Err(format!(
            "site directory not found: {}",
            options.site_dir.display()
        )
        .into());
    }

    let mut summary = RunSummary::default();

    // Backup gates every destructive step below.
    let backup_dir = file_io::create_backup(&options.site_dir).await?;
    summary.backup_dir = Some(backup_dir);

    match &options.template_dir {
        Some(template_dir) => {
            let errors = file_io::copy_js_files(template_dir, &options.site_dir).await;
            summary.errors.extend(errors);
        }
        None => log::warn!("No course template directory; skipping JS copy"),
    }

    let files = file_io::list_html_files(&options.site_dir).await?;
    log::info!("Found {} HTML files to process", files.len());

    let mut extracted: Vec<ExtractedStyles> = Vec::new();
    for path in &files {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_owned();

        let html = match tokio::fs::read_to_string(path).await {
            Ok(html) => html,
            Err(e) => {
                summary.record_error(format!("Error reading {file_name}: {e}"));
                continue;
            }
        };

        match standardize::standardize_page(&file_name, &html) {
            Ok(page) => {
                if !page.styles.is_empty() {
                    extracted.push(ExtractedStyles::new(&file_name, &page.styles.join("\n")));
                }
                if let Err(e) = tokio::fs::write(path, page.html).await {
                    summary.record_error(format!("Error writing {file_name}: {e}"));
                    continue;
                }
                log::info!("Standardized {file_name}");
                summary.pages_processed += 1;
            }
            Err(e) => summary.record_error(format!("Error processing {file_name}: {e}")),
        }
    }
    summary.styles_extracted = extracted.len();

    if let Err(e) = consolidate_styles(&options.site_dir, &extracted).await {
        summary.record_error(format!("Error updating main.css: {e}"));
    }

    report::write_report(&options.site_dir, &summary).await?;
    Ok(summary)
}

/// Appends extracted styles plus the site chrome to `styles/main.css`,
/// creating the stylesheet if it does not exist yet.
async fn consolidate_styles(
    site_dir: &std::path::Path,
    extracted: &[ExtractedStyles],
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let css_path = site_dir.join("styles").join("main.css");

    let existing = if css_path.is_file() {
        tokio::fs::read_to_string(&css_path).await?
    } else {
        if let Some(parent) = css_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        log::info!("Created new main.css");
        String::new()
    };

    let consolidated = stylesheet::consolidate(&existing, extracted);
    tokio::fs::write(&css_path, consolidated).await?;
    log::info!("Consolidated {} style blocks into main.css", extracted.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn options_for(dir: &std::path::Path) -> ImproveOptions {
        ImproveOptions {
            site_dir: dir.to_path_buf(),
            template_dir: None,
        }
    }

    #[tokio::test]
    async fn test_missing_site_dir_is_fatal() {
        let options = options_for(std::path::Path::new("/nonexistent/wwz_site"));
        assert!(improve_site(&options).await.is_err());
    }

    #[tokio::test]
    async fn test_full_run_over_small_site() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("index.html"),
            "<html><head><title>Home</title><style>.hero { color: red; }</style></head>\
             <body><h1>Welcome</h1></body></html>",
        )
        .unwrap();
        fs::write(
            dir.path().join("broken.html"),
            "<html><head></head></html>",
        )
        .unwrap();

        let summary = improve_site(&options_for(dir.path())).await.unwrap();

        assert_eq!(summary.pages_processed, 1);
        assert_eq!(summary.styles_extracted, 1);
        assert_eq!(summary.errors.len(), 1);
        assert!(summary.errors[0].contains("broken.html"));

        // The page was rebuilt in place into the standard shell.
        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains("<h1>Welcome</h1>"));
        assert!(index.contains(r#"nav class="main-nav""#));
        assert!(!index.contains(".hero { color: red; }"));

        // Extracted styles landed in the stylesheet, with the site chrome.
        let css = fs::read_to_string(dir.path().join("styles/main.css")).unwrap();
        assert!(css.contains("/* Styles from index.html */"));
        assert!(css.contains(".hero { color: red; }"));
        assert!(css.contains(".main-nav"));

        // Backup holds the original page text.
        let backup_dir = summary.backup_dir.unwrap();
        let backed_up = fs::read_to_string(backup_dir.join("index.html")).unwrap();
        assert!(backed_up.contains(".hero { color: red; }"));

        assert!(dir.path().join("phase1_report.txt").is_file());
    }
}
