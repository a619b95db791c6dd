use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sheetmatch::{
    ColumnRef, DecileProgress, OutputFormat, SheetmatchConfig, TableOptions, list_columns,
    match_columns, write_csv, write_json,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Default log filter when RUST_LOG is unset
    #[arg(long, global = true, env = "SHEETMATCH_LOG", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Match one column against another and export the pairs above the threshold
    Run(RunArgs),
    /// Print the header row of a table
    Columns {
        file: PathBuf,

        /// Field delimiter
        #[arg(long, default_value_t = ',')]
        delimiter: char,
    },
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Table holding the labels to look up
    #[arg(long)]
    source: PathBuf,

    #[arg(long)]
    source_column: String,

    /// Table holding the candidate labels
    #[arg(long)]
    target: PathBuf,

    #[arg(long)]
    target_column: String,

    /// Minimum score (0-100) for a reported match
    #[arg(long, env = "SHEETMATCH_THRESHOLD")]
    threshold: Option<u8>,

    /// Output file; stdout when omitted
    #[arg(long, short)]
    output: Option<PathBuf>,

    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// YAML configuration file
    #[arg(long, env = "SHEETMATCH_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr);
    if args.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(args: &RunArgs) -> Result<SheetmatchConfig> {
    let mut config = match &args.config {
        Some(path) => SheetmatchConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SheetmatchConfig::default(),
    };
    if let Some(threshold) = args.threshold {
        config.matcher.threshold = threshold;
    }
    if let Some(format) = args.format {
        config.output.format = format.into();
    }
    config.validate()?;
    Ok(config)
}

fn run(args: RunArgs) -> Result<()> {
    let config = load_config(&args)?;
    info!(
        name = config.name.as_deref().unwrap_or(""),
        threshold = config.matcher.threshold,
        "starting match run"
    );

    let source = ColumnRef::new(&args.source, &args.source_column);
    let target = ColumnRef::new(&args.target, &args.target_column);
    let report = match_columns(&source, &target, &config, &mut DecileProgress::new())?;

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);
    match config.output.format {
        OutputFormat::Csv => write_csv(&mut writer, &report.results, &config.output)?,
        OutputFormat::Json => write_json(&mut writer, &report.results, &config.output)?,
    }
    writer.flush()?;

    info!(
        matches = report.summary.matched,
        sources = report.summary.sources,
        "found {} matches",
        report.summary.matched
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args);

    match args.command {
        Command::Run(run_args) => run(run_args),
        Command::Columns { file, delimiter } => {
            anyhow::ensure!(delimiter.is_ascii(), "delimiter must be ASCII");
            let opts = TableOptions {
                delimiter: delimiter as u8,
            };
            for column in list_columns(&file, &opts)? {
                println!("{column}");
            }
            Ok(())
        }
    }
}
