// Copyright (C) 2025 practicalace. Licensed under the GNU AGPLv3.
//! Reports which class guide pages still use the old skill tree layout.
//! Diagnostic only: pages are never modified, but a backup can be taken
//! with `--backup` before hand-editing the flagged files.
use clap::Parser;
use std::path::PathBuf;
use wwz_core::file_io::create_backup;
use wwz_core::rewrite::{Layout, class_styles, classify_layout};

#[derive(Parser, Debug)]
#[command(author, version, about = "Check which WWZ class pages need the new layout")]
struct Args {
    /// Directory holding the class pages. Defaults to the current working
    /// directory.
    directory: Option<PathBuf>,

    /// Create a backup of the site when any page needs updating.
    #[arg(long)]
    backup: bool,
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

    log::info!("Checking class page layouts in {}", site_dir.display());

    let mut needs_update = Vec::new();
    for key in class_styles().keys() {
        let file_name = format!("class_{key}.html");
        let page_path = site_dir.join(&file_name);
        if !page_path.is_file() {
            log::warn!("{file_name}: file not found");
            continue;
        }

        let html = tokio::fs::read_to_string(&page_path).await?;
        match classify_layout(&html) {
            Layout::New => log::info!("{file_name}: already uses the new layout"),
            Layout::Old => {
                log::info!("{file_name}: uses the old layout");
                needs_update.push(file_name);
            }
            Layout::Unknown => log::warn!("{file_name}: layout not recognized"),
        }
    }

    if needs_update.is_empty() {
        log::info!("All class pages use the new layout");
        return Ok(());
    }

    log::info!("{} pages need the new layout:", needs_update.len());
    for file_name in &needs_update {
        log::info!("  - {file_name}");
    }
    log::info!("Update them from the medic page's skill segment structure");

    if args.backup {
        let backup_dir = create_backup(&site_dir).await?;
        log::info!("Backup saved to {}", backup_dir.display());
    } else {
        log::info!("Run again with --backup to snapshot the site before editing");
    }

    Ok(())
}
