use std::path::PathBuf;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::info;

use dump_splitter::run_split;

#[derive(Parser)]
#[command(
    name = "dump_splitter",
    about = "Split an interleaved JSON/HTML scrape dump into per-record files"
)]
struct Cli {
    /// Dump file: single-line JSON records and HTML documents interleaved
    input: PathBuf,
    /// Output root; json/ and html/ subdirectories are created inside
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Missing arguments exit 1; --help still prints to stdout and exits 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let t0 = Instant::now();
    println!("Scrape Dump Splitter");
    println!("====================\n");
    println!("Input:  {}", cli.input.display());
    println!("Output: {}\n", cli.output_dir.display());
    info!(input = %cli.input.display(), output = %cli.output_dir.display(), "starting split");

    let counts = run_split(&cli.input, &cli.output_dir)?;
    counts.print_summary(&cli.output_dir);

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}
