use anyhow::{Context, Result};
use dataset_clean::{CleanerConfig, DatasetCleaner};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    // Roots from the command line, otherwise the default splits
    let args: Vec<String> = env::args().skip(1).collect();
    let config = if args.is_empty() {
        CleanerConfig::default()
    } else {
        CleanerConfig::new(args)
    };

    println!("Cleaning {} split(s):", config.roots.len());
    for root in &config.roots {
        println!("  {}", root.display());
    }

    let report = DatasetCleaner::new(config)
        .run()
        .context("dataset cleaning aborted")?;

    println!("--------------------------------");
    println!("Kept images:     {}", report.kept);
    println!("Removed files:   {}", report.removed_count());
    println!("Skipped files:   {}", report.skipped);
    let extensions: Vec<&str> = report.seen_extensions.iter().map(String::as_str).collect();
    println!("Extensions seen: {}", extensions.join(", "));

    Ok(())
}
