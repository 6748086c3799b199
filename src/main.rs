use clap::Parser;
use cockroachdb_metrics_gen::config::Config;
use cockroachdb_metrics_gen::{logging, pipeline, GenerateOptions, GeneratorError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(name = "cockroachdb-metrics-gen")]
#[command(about = "Generate the metadata.csv and metric name mapping required by the cockroachdb integration")]
#[command(version = "0.1.0")]
struct Cli {
    /// CockroachDB metrics.html file (docs/generated/metrics/metrics.html)
    #[arg(value_name = "METRICS")]
    metrics: PathBuf,

    /// File to write the metadata.csv content to [default: metadata.csv]
    #[arg(value_name = "METADATA")]
    metadata: Option<PathBuf>,

    /// File to write the metric name mapping content to [default: mapping.txt]
    #[arg(value_name = "METRIC_MAP")]
    metric_map: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

/// Apply `-v`/`-q` on top of the configured log level.
fn apply_verbosity(cli: &Cli, config: &mut Config) {
    if cli.verbose {
        config.logging.level = "debug".to_string();
    } else if cli.quiet {
        config.logging.level = "warn".to_string();
    }
}

/// Positional output paths win over `[output]` in the config file.
fn options(cli: &Cli, config: &Config) -> GenerateOptions {
    GenerateOptions {
        input: cli.metrics.clone(),
        metadata_output: cli.metadata.clone().unwrap_or_else(|| config.output.metadata.clone()),
        mapping_output: cli.metric_map.clone().unwrap_or_else(|| config.output.mapping.clone()),
    }
}

/// Attach the failing stage as context, e.g. `failed parsing metrics: ...`.
fn with_stage(err: GeneratorError) -> anyhow::Error {
    let stage = err.stage();
    anyhow::Error::new(err).context(stage)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(cli.config.as_deref()).map_err(with_stage)?;
    apply_verbosity(&cli, &mut config);

    // Held until exit so the file appender flushes
    let _guard = logging::init_logging(&config.logging).map_err(with_stage)?;
    debug!("Loaded configuration: {:?}", config);

    let options = options(&cli, &config);
    let summary = pipeline::run(&options).map_err(with_stage)?;

    println!(
        "Generated {} metadata rows and {} mapping entries from {} metrics ({} histograms): {}, {}",
        summary.metadata_rows,
        summary.mapping_entries,
        summary.metrics,
        summary.histograms,
        summary.metadata_output.display(),
        summary.mapping_output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
