// Copyright (C) 2025 practicalace. Licensed under the GNU AGPLv3.
//! Generates the eight class guide pages from the static data table.
//! One `class_<key>.html` file is written per class, in canonical order.
use clap::Parser;
use std::path::PathBuf;
use wwz_core::classes::class_table;
use wwz_core::render::render_class_page;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate WWZ: Aftermath class guide pages")]
struct Args {
    /// Directory to write the generated pages into. Defaults to the current
    /// working directory.
    directory: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::init_with_level(log::Level::Info)?;

    let args = Args::parse();
    let output_dir = args.directory.unwrap_or_else(|| PathBuf::from("."));

    if !output_dir.is_dir() {
        log::error!("Directory not found: {}", output_dir.display());
        return Err(format!("directory not found: {}", output_dir.display()).into());
    }

    log::info!("Generating class guide pages...");
    log::info!("Output directory: {}", output_dir.display());

    let table = class_table();
    let mut generated = 0;
    for (key, record) in &table {
        log::info!("Generating {} page...", record.name);
        match render_class_page(record, &table) {
            Ok(html) => {
                let output_file = output_dir.join(format!("class_{key}.html"));
                tokio::fs::write(&output_file, html).await?;
                log::info!("Created class_{key}.html");
                generated += 1;
            }
            Err(e) => {
                log::error!("Error rendering class_{key}.html: {e}");
            }
        }
    }

    log::info!("Complete! Generated {generated} class pages");
    Ok(())
}
