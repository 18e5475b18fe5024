// Copyright (C) 2025 practicalace. Licensed under the GNU AGPLv3.
//! Restyles the existing class guide pages in place: per-class header
//! gradient, refreshed skill tree styles, and the standard class header
//! markup. A full backup is taken before anything is touched.
use clap::Parser;
use std::path::PathBuf;
use wwz_core::file_io::create_backup;
use wwz_core::rewrite::{class_styles, restyle_class_page};

#[derive(Parser, Debug)]
#[command(author, version, about = "Restyle the WWZ class guide pages in place")]
struct Args {
    /// Directory holding the class pages. Defaults to the current working
    /// directory.
    directory: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    simple_logger::init_with_level(log::Level::Info)?;

    let args = Args::parse();
    let site_dir = args.directory.unwrap_or_else(|| PathBuf::from("."));

    if !site_dir.is_dir() {
        log::error!("Directory not found: {}", site_dir.display());
        return Err(format!("directory not found: {}", site_dir.display()).into());
    }

    // Pages are rewritten in place, so the backup failing is fatal.
    let backup_dir = create_backup(&site_dir).await?;
    log::info!("Backup saved to {}", backup_dir.display());

    let styles = class_styles();
    let mut updated = 0;
    for (key, style) in &styles {
        let page_path = site_dir.join(format!("class_{key}.html"));
        if !page_path.is_file() {
            log::warn!("Skipping class_{key}.html: file not found");
            continue;
        }

        let html = tokio::fs::read_to_string(&page_path).await?;
        let outcome = restyle_class_page(&html, style);

        for section in &outcome.skipped {
            log::warn!("class_{key}.html: could not update {section}");
        }

        tokio::fs::write(&page_path, &outcome.html).await?;
        if outcome.is_complete() {
            log::info!("Restyled class_{key}.html");
        } else {
            log::info!("Partially restyled class_{key}.html");
        }
        updated += 1;
    }

    log::info!("Complete! Updated {updated}/{} class pages", styles.len());
    Ok(())
}
