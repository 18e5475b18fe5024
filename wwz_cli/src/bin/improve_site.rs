// Copyright (C) 2025 practicalace. Licensed under the GNU AGPLv3.
//! Runs the phase 1 site improvements over a wiki directory: backup,
//! shared JS copy, page standardization into the common shell, style
//! consolidation, and the end-of-run report.
use clap::Parser;
use std::path::PathBuf;
use wwz_core::pipeline::{ImproveOptions, improve_site};

#[derive(Parser, Debug)]
#[command(author, version, about = "Apply phase 1 improvements to the WWZ site")]
struct Args {
    /// Site directory to improve. Defaults to the current working directory.
    directory: Option<PathBuf>,

    /// Course template directory holding the shared `js/` assets.
    /// Defaults to `<directory>/../course_template`.
    #[arg(long)]
    template_dir: Option<PathBuf>,

    /// Continue without the JS copy when the course template is missing.
    #[arg(long)]
    yes: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    simple_logger::init_with_level(log::Level::Info)?;

    let args = Args::parse();
    let site_dir = args.directory.unwrap_or_else(|| PathBuf::from("."));

    if !site_dir.is_dir() {
        log::error!("Site directory not found: {}", site_dir.display());
        return Err(format!("site directory not found: {}", site_dir.display()).into());
    }

    let template_dir = args
        .template_dir
        .unwrap_or_else(|| site_dir.join("..").join("course_template"));

    let template_dir = if template_dir.is_dir() {
        Some(template_dir)
    } else {
        log::warn!(
            "Course template directory not found: {}",
            template_dir.display()
        );
        if !args.yes {
            return Err(
                "course template not found; pass --yes to continue without the JS copy".into(),
            );
        }
        None
    };

    log::info!("Starting phase 1 improvements");
    log::info!("Site directory: {}", site_dir.display());

    let options = ImproveOptions {
        site_dir,
        template_dir,
    };
    let summary = improve_site(&options).await?;

    log::info!("Phase 1 improvements complete!");
    log::info!("Pages processed: {}", summary.pages_processed);
    log::info!("Style blocks consolidated: {}", summary.styles_extracted);
    if let Some(backup_dir) = &summary.backup_dir {
        log::info!("Backup saved to {}", backup_dir.display());
    }
    if !summary.errors.is_empty() {
        log::warn!(
            "{} errors encountered; see phase1_report.txt",
            summary.errors.len()
        );
    }
    Ok(())
}
