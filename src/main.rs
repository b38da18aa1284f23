use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use concord::prompt::{file_is_readable, prompt_for_path};
use concord::{AbbreviationSet, DocumentReader, OutputFormat, ReaderConfig, RunStats};

#[derive(Parser, Debug)]
#[command(name = "concord")]
#[command(about = "Alphabetical word concordance with occurrence counts and sentence numbers")]
#[command(version)]
struct Args {
    /// Text document to index; prompts for a file name when omitted
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the concordance to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Extra abbreviation that keeps its period and never ends a sentence (repeatable)
    #[arg(long = "abbreviation", value_name = "ABBR")]
    abbreviations: Vec<String>,

    /// Stats output file path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Read buffer size in bytes
    #[arg(
        long,
        default_value_t = 8192,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    buffer_size: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: stdout carries the concordance, so structured logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let path = match args.file.clone() {
        Some(path) => {
            if !path.is_file() {
                anyhow::bail!("Input file does not exist or is not a file: {}", path.display());
            }
            path
        }
        None => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            writeln!(stdout, "{}", std::env::current_dir()?.display())?;
            match prompt_for_path(stdin.lock(), &mut stdout, file_is_readable)? {
                Some(path) => path,
                None => return Ok(()),
            }
        }
    };

    let abbreviations = AbbreviationSet::with_extra(&args.abbreviations);
    let reader = DocumentReader::new(ReaderConfig {
        buffer_size: args.buffer_size,
    });
    let (concordance, read_stats) = reader.read_concordance(&path, &abbreviations).await?;

    let renderer = args.format.renderer();
    match &args.output {
        Some(output_path) => {
            let mut file = std::fs::File::create(output_path)
                .with_context(|| format!("Failed to create output file {}", output_path.display()))?;
            renderer.render(&concordance, &mut file)?;
            info!("Wrote concordance to {}", output_path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = std::io::BufWriter::new(stdout.lock());
            if args.format == OutputFormat::Text {
                writeln!(out, "Concordance for {}: ", path.display())?;
            }
            renderer.render(&concordance, &mut out)?;
            out.flush()?;
        }
    }

    if let Some(stats_path) = &args.stats_out {
        let stats = RunStats::from_read(&read_stats, &concordance);
        stats.write_json(stats_path).await?;
        info!("Wrote run stats to {}", stats_path.display());
    }

    info!(
        words = concordance.len(),
        sentences = concordance.sentence_count(),
        "Concordance complete"
    );
    Ok(())
}
