use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed opening input file '{}': {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed writing output file '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid record: unexpected number of td elements ({cells}): {row}")]
    MalformedRow { cells: usize, row: String },

    #[error("invalid record: empty metric name: {row}")]
    EmptyMetricName { row: String },

    #[error("found duplicate metrics:\n{}", names.join("\n"))]
    DuplicateMetrics { names: Vec<String> },

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GeneratorError {
    /// Short description of the generator stage that failed, used as error
    /// context by the CLI.
    pub fn stage(&self) -> &'static str {
        match self {
            GeneratorError::Input { .. } => "failed reading metrics",
            GeneratorError::MalformedRow { .. } | GeneratorError::EmptyMetricName { .. } => {
                "failed parsing metrics"
            }
            GeneratorError::DuplicateMetrics { .. } => "failed validating metrics",
            GeneratorError::Csv(_) | GeneratorError::Io(_) => "failed rendering integration files",
            GeneratorError::Output { .. } => "failed writing integration files",
            GeneratorError::Config(_) | GeneratorError::Toml(_) => "failed loading config",
        }
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
