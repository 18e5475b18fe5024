// Copyright (C) 2025 practicalace. Licensed under the GNU AGPLv3.
use chrono::Local;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Template pages that are never rewritten.
pub const TEMPLATE_FILES: [&str; 2] = ["lesson_template.html", "index_template.html"];

/// Shared scripts copied from the course template.
pub const JS_FILES: [&str; 2] = ["clipboard.js", "course-enhancements.js"];

/// Every HTML page directly under `dir`, excluding template files, in
/// sorted order.
pub async fn list_html_files(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn Error + Send + Sync>> {
    let pattern = dir.join("*.html");
    let pattern = pattern
        .to_str()
        .ok_or_else(|| format!("directory path is not valid UTF-8: {}", dir.display()))?;

    let mut files = Vec::new();
    for path in glob::glob(pattern)?.flatten() {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        if TEMPLATE_FILES.contains(&name) {
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

/// Copies the whole site into a fresh `backup_<timestamp>` directory,
/// excluding earlier backups and VCS metadata. Returns the backup path.
///
/// Backup failure must abort the run before any destructive step, so every
/// error here propagates.
pub async fn create_backup(dir: &Path) -> Result<PathBuf, Box<dyn Error + Send + Sync>> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let backup_dir = dir.join(format!("backup_{timestamp}"));
    copy_tree(dir, &backup_dir).await?;
    log::info!("Backup created at {}", backup_dir.display());
    Ok(backup_dir)
}

/// Recursive copy of `src_root` into `dst_root`, skipping `backup_*`
/// directories and `.git`.
async fn copy_tree(src_root: &Path, dst_root: &Path) -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut pending = vec![src_root.to_path_buf()];

    while let Some(src_dir) = pending.pop() {
        let relative = src_dir.strip_prefix(src_root)?;
        let dst_dir = dst_root.join(relative);
        tokio::fs::create_dir_all(&dst_dir).await?;

        let mut entries = tokio::fs::read_dir(&src_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            let file_type = entry.file_type().await?;

            if file_type.is_dir() {
                if name.starts_with("backup_") || name == ".git" {
                    continue;
                }
                pending.push(entry.path());
            } else if file_type.is_file() {
                tokio::fs::copy(entry.path(), dst_dir.join(entry.file_name())).await?;
            }
        }
    }
    Ok(())
}

/// Copies the shared JS files from the course template into the site's
/// `js/` directory. Individual failures are recoverable: they are logged
/// and returned for the run report, and the remaining files still copy.
pub async fn copy_js_files(template_dir: &Path, site_dir: &Path) -> Vec<String> {
    let mut errors = Vec::new();
    let js_source = template_dir.join("js");
    let js_dest = site_dir.join("js");

    if !js_source.is_dir() {
        let message = format!("JS source directory not found: {}", js_source.display());
        log::warn!("{message}");
        errors.push(message);
        return errors;
    }

    if let Err(e) = tokio::fs::create_dir_all(&js_dest).await {
        let message = format!("Could not create JS directory: {e}");
        log::error!("{message}");
        errors.push(message);
        return errors;
    }

    for file_name in JS_FILES {
        let source = js_source.join(file_name);
        if !source.is_file() {
            let message = format!("JS file not found: {file_name}");
            log::warn!("{message}");
            errors.push(message);
            continue;
        }
        match tokio::fs::copy(&source, js_dest.join(file_name)).await {
            Ok(_) => log::info!("Copied {file_name}"),
            Err(e) => {
                let message = format!("Error copying {file_name}: {e}");
                log::error!("{message}");
                errors.push(message);
            }
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_list_html_files_skips_templates() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "index.html",
            "class_medic.html",
            "lesson_template.html",
            "notes.txt",
        ] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let files = list_html_files(dir.path()).await.unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_owned())
            .collect();
        assert_eq!(names, ["class_medic.html", "index.html"]);
    }

    #[tokio::test]
    async fn test_create_backup_excludes_prior_backups() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        fs::create_dir(dir.path().join("styles")).unwrap();
        fs::write(dir.path().join("styles/main.css"), "body {}").unwrap();
        fs::create_dir(dir.path().join("backup_20240101_000000")).unwrap();
        fs::write(dir.path().join("backup_20240101_000000/old.html"), "x").unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".git/HEAD"), "ref").unwrap();

        let backup = create_backup(dir.path()).await.unwrap();

        assert!(backup.join("index.html").is_file());
        assert!(backup.join("styles/main.css").is_file());
        assert!(!backup.join("backup_20240101_000000").exists());
        assert!(!backup.join(".git").exists());
    }

    #[tokio::test]
    async fn test_copy_js_files_records_missing_source() {
        let template = tempfile::tempdir().unwrap();
        let site = tempfile::tempdir().unwrap();

        let errors = copy_js_files(template.path(), site.path()).await;
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("JS source directory not found"));
    }

    #[tokio::test]
    async fn test_copy_js_files_copies_present_files() {
        let template = tempfile::tempdir().unwrap();
        let site = tempfile::tempdir().unwrap();
        fs::create_dir(template.path().join("js")).unwrap();
        fs::write(template.path().join("js/clipboard.js"), "// c").unwrap();

        let errors = copy_js_files(template.path(), site.path()).await;

        assert!(site.path().join("js/clipboard.js").is_file());
        // course-enhancements.js was absent and is reported.
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("course-enhancements.js"));
    }
}
