use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use flate2::write::GzEncoder;
use flate2::Compression;

use contact_seed::error::Result;
use contact_seed::types::{GeneratorConfig, Schema};
use contact_seed::writer::DatasetWriter;

#[cfg(feature = "mimalloc-allocator")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser, Debug)]
#[command(name = "contact_seed", version, about = "Synthetic contact dataset generator")]
struct Args {
    /// Number of data rows to generate
    #[arg(short = 'n', long, default_value_t = 1_000_000)]
    rows: u64,

    /// Output file path
    #[arg(short, long, default_value = "1m_data.csv")]
    output: PathBuf,

    /// Dataset schema (basic, extended)
    #[arg(short, long, default_value = "basic")]
    schema: String,

    /// Log a progress line every N rows (0 disables)
    #[arg(long, default_value_t = 100_000)]
    progress_every: u64,

    /// Gzip-compress the output stream
    #[arg(long)]
    gzip: bool,
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("contact_seed error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let schema: Schema = args.schema.parse()?;

    let config = GeneratorConfig {
        rows: args.rows,
        schema,
        progress_every: args.progress_every,
    };
    let mut writer = DatasetWriter::new(config);

    let file = File::create(&args.output)?;
    if args.gzip {
        let mut encoder = GzEncoder::new(file, Compression::default());
        writer.write(&mut encoder)?;
        encoder.try_finish()?;
    } else {
        writer.write(file)?;
    }

    println!(
        "CSV file '{}' with {} rows generated successfully.",
        args.output.display(),
        args.rows
    );
    Ok(())
}
