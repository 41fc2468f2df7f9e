mod fetch;
mod model;
mod parser;
mod settings;
mod store;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use fetch::Fetcher;
use model::GigSnapshot;
use settings::Settings;
use store::SnapshotStore;

#[derive(Parser)]
#[command(name = "gig_snapshot", about = "Capture point-in-time snapshots of a gig listing")]
struct Cli {
    /// Snapshot store file (overrides GIG_STORE_PATH)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a gig page and print its snapshot as JSON
    Show {
        url: String,
    },
    /// Fetch a gig page and append its snapshot to the store
    Save {
        url: String,
        /// Also print the snapshot
        #[arg(long)]
        print: bool,
    },
    /// Extract a snapshot from a saved HTML file (no network)
    Parse {
        file: PathBuf,
        /// Append the snapshot to the store
        #[arg(long)]
        save: bool,
    },
    /// List stored snapshots, most recent last
    History {
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let mut settings = Settings::load()?;
    if let Some(path) = cli.store {
        settings.store_path = path;
    }
    let store = SnapshotStore::new(settings.store_path.clone());

    let result = match cli.command {
        Commands::Show { url } => {
            let snapshot = capture(&settings, &url).await?;
            print_snapshot(&snapshot)
        }
        Commands::Save { url, print } => {
            let snapshot = capture(&settings, &url).await?;
            if print {
                print_snapshot(&snapshot)?;
            }
            let total = store.append(&snapshot)?;
            println!(
                "Saved snapshot of {} to {} ({} total)",
                snapshot.url.as_deref().unwrap_or(&url),
                store.path().display(),
                total
            );
            Ok(())
        }
        Commands::Parse { file, save } => {
            let html = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let snapshot = parser::snapshot_from_html(&html);
            print_snapshot(&snapshot)?;
            if save {
                let total = store.append(&snapshot)?;
                println!("Saved to {} ({} total)", store.path().display(), total);
            }
            Ok(())
        }
        Commands::History { limit } => {
            let snapshots = store.load()?;
            if snapshots.is_empty() {
                println!("No snapshots in {}.", store.path().display());
                return Ok(());
            }
            print_history(&snapshots, limit);
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }

    result
}

/// Fetch `url` and extract its snapshot.
async fn capture(settings: &Settings, url: &str) -> anyhow::Result<GigSnapshot> {
    let html = Fetcher::new(settings)?.fetch(url).await?;
    Ok(parser::snapshot_from_html(&html))
}

fn print_snapshot(snapshot: &GigSnapshot) -> anyhow::Result<()> {
    println!("{}", snapshot.to_pretty_json()?);
    Ok(())
}

fn print_history(snapshots: &[GigSnapshot], limit: usize) {
    println!(
        "{:>3} | {:<19} | {:<16} | {:>6} | {:>7} | {:>5} | {:<40}",
        "#", "Captured", "Level", "Rating", "Reviews", "Queue", "Url"
    );
    println!("{}", "-".repeat(112));

    let skip = snapshots.len().saturating_sub(limit);
    for (i, s) in snapshots.iter().enumerate().skip(skip) {
        let rating = s.rating.map(|r| format!("{:.1}", r)).unwrap_or_else(|| "-".into());
        let reviews = s.review_count.map(|r| r.to_string()).unwrap_or_else(|| "-".into());
        let queue = s.orders_in_queue.map(|q| q.to_string()).unwrap_or_else(|| "-".into());
        let url = truncate(s.url.as_deref().unwrap_or("-"), 40);

        println!(
            "{:>3} | {:<19} | {:<16} | {:>6} | {:>7} | {:>5} | {:<40}",
            i + 1,
            s.snapshot_time,
            truncate(&s.seller_level, 16),
            rating,
            reviews,
            queue,
            url
        );
    }

    println!("\n{} snapshots", snapshots.len());
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
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
