mod parser;
mod record;
mod scraper;
mod sources;
mod table;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

#[derive(Parser)]
#[command(name = "geo_scraper", about = "Batch scraper for GEO series metadata pages")]
struct Cli {
    /// Text file with one GEO series URL per line
    #[arg(short, long, default_value = "GEO_urls.txt")]
    input: PathBuf,

    /// Output TSV path (overwritten if it exists)
    #[arg(short, long, default_value = "geo_metadata_summary.tsv")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let urls = sources::load_urls(&cli.input)?;
    println!("Scraping {} pages...", urls.len());

    let (records, stats) = scraper::scrape_all(&urls).await?;
    table::write_table(&cli.output, &records)?;

    println!(
        "Done: {} pages ({} ok, {} errors).",
        stats.total, stats.ok, stats.errors
    );
    println!("Metadata summary saved to {}", cli.output.display());

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
