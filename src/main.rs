//! Collects `./images` into `screentime-collection.pdf`.

use clap::Parser;
use screentime_pdf::Collection;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Put every image in ./images on its own US Letter page of screentime-collection.pdf
#[derive(Parser)]
#[command(name = "screentime-pdf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log more detail (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let collection = Collection::default();
    collection.write()?;

    Ok(())
}
