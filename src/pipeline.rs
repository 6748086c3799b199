use crate::catalog::parser::{CatalogParser, MetricsHtmlV1Parser};
use crate::catalog::Catalog;
use crate::error::{GeneratorError, Result};
use crate::writers::{write_mapping, write_metadata};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Input and output locations for one generator run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub input: PathBuf,
    pub metadata_output: PathBuf,
    pub mapping_output: PathBuf,
}

/// Result of a complete generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub metrics: usize,
    pub histograms: usize,
    pub metadata_rows: usize,
    pub mapping_entries: usize,
    pub metadata_output: PathBuf,
    pub mapping_output: PathBuf,
}

/// Both artifacts, fully rendered but not yet written.
#[derive(Debug, Clone)]
pub struct RenderedArtifacts {
    pub metadata: Vec<u8>,
    pub metadata_rows: usize,
    pub mapping: Vec<u8>,
    pub mapping_entries: usize,
}

/// Extract, augment, validate and sort the catalog contained in `bytes`.
pub fn build_catalog(parser: &dyn CatalogParser, bytes: &[u8]) -> Result<Catalog> {
    let extracted = Catalog::new(parser.parse(bytes)?);
    let extracted_len = extracted.len();

    let catalog = extracted.augment();
    catalog.validate()?;
    let catalog = catalog.sorted();

    info!(
        "Catalog ready: {} metrics ({} extracted, {} overlay, {} histograms)",
        catalog.len(),
        extracted_len,
        catalog.len() - extracted_len,
        catalog.histogram_count()
    );
    Ok(catalog)
}

/// Render both artifacts from a validated, sorted catalog.
pub fn render(catalog: &Catalog) -> Result<RenderedArtifacts> {
    let mut metadata = Vec::new();
    let metadata_rows = write_metadata(&mut metadata, catalog.metrics())?;

    let mut mapping = Vec::new();
    let mapping_entries = write_mapping(&mut mapping, catalog.metrics())?;

    Ok(RenderedArtifacts {
        metadata,
        metadata_rows,
        mapping,
        mapping_entries,
    })
}

/// Run the complete generator: nothing is written unless the whole catalog
/// parses, validates and renders.
#[instrument(skip(options), fields(input = %options.input.display()))]
pub fn run(options: &GenerateOptions) -> Result<GenerateSummary> {
    let bytes = fs::read(&options.input).map_err(|source| GeneratorError::Input {
        path: options.input.clone(),
        source,
    })?;
    info!("Read {} bytes from {}", bytes.len(), options.input.display());

    let catalog = build_catalog(&MetricsHtmlV1Parser::new(), &bytes)?;
    let artifacts = render(&catalog)?;

    write_output(&options.metadata_output, &artifacts.metadata)?;
    write_output(&options.mapping_output, &artifacts.mapping)?;

    Ok(GenerateSummary {
        metrics: catalog.len(),
        histograms: catalog.histogram_count(),
        metadata_rows: artifacts.metadata_rows,
        mapping_entries: artifacts.mapping_entries,
        metadata_output: options.metadata_output.clone(),
        mapping_output: options.mapping_output.clone(),
    })
}

fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|source| GeneratorError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
