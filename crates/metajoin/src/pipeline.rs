//! Enrichment pipeline and public entry points.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::config::EnrichConfig;
use crate::error::{MetajoinError, Result};
use crate::input::{Dataset, Fetch, Parser, ReferenceSource, SourceSummary, Table};
use crate::join::{JoinStats, left_join_with_stats};
use crate::output::serialize;
use crate::transform::{KeyTransform, normalize_keys, project};

/// Result of enriching a KWIC export.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichOutcome {
    /// The merged table.
    #[serde(skip)]
    pub table: Table,
    /// The merged table as tab-separated text.
    #[serde(skip)]
    pub output: String,
    /// Provenance of the three inputs, primary first.
    pub sources: Vec<SourceSummary>,
    /// Match counts for the corpus metadata join.
    pub corpus_join: JoinStats,
    /// Match counts for the author metadata join.
    pub author_join: JoinStats,
}

/// Parses, normalizes and joins a KWIC export with its two metadata tables.
pub struct Pipeline {
    config: EnrichConfig,
    parser: Parser,
}

impl Pipeline {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(EnrichConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: EnrichConfig) -> Self {
        Self {
            config,
            parser: Parser::new(),
        }
    }

    pub fn config(&self) -> &EnrichConfig {
        &self.config
    }

    /// Reference sources for the configured corpus and author locations.
    pub fn reference_sources(&self) -> Result<(ReferenceSource, ReferenceSource)> {
        Ok((
            ReferenceSource::from_location(Dataset::CorpusMetadata, &self.config.corpus.location)?,
            ReferenceSource::from_location(Dataset::AuthorMetadata, &self.config.author.location)?,
        ))
    }

    /// Enrich `primary_text`, fetching both reference tables concurrently,
    /// and return the merged table as tab-separated text.
    pub async fn run(
        &self,
        primary_text: &str,
        corpus: &impl Fetch,
        author: &impl Fetch,
    ) -> Result<String> {
        Ok(self.execute(primary_text, corpus, author).await?.output)
    }

    /// Like [`Pipeline::run`], keeping the merged table and statistics.
    #[instrument(skip_all)]
    pub async fn execute(
        &self,
        primary_text: &str,
        corpus: &impl Fetch,
        author: &impl Fetch,
    ) -> Result<EnrichOutcome> {
        info!("starting enrichment");
        self.config.validate()?;

        let (primary, primary_source) = self.parse_primary(primary_text)?;
        debug!(
            corpus = %corpus.dataset(),
            author = %author.dataset(),
            "fetching reference tables"
        );
        let (corpus_text, author_text) = tokio::try_join!(corpus.fetch(), author.fetch())?;

        self.merge(primary, primary_source, &corpus_text, &author_text)
    }

    /// Enrich from three texts already in memory.
    pub fn enrich(
        &self,
        primary_text: &str,
        corpus_text: &str,
        author_text: &str,
    ) -> Result<EnrichOutcome> {
        self.config.validate()?;
        let (primary, primary_source) = self.parse_primary(primary_text)?;
        self.merge(primary, primary_source, corpus_text, author_text)
    }

    fn parse_primary(&self, text: &str) -> Result<(Table, SourceSummary)> {
        if text.trim().is_empty() {
            return Err(MetajoinError::InputMissing(format!(
                "no {} supplied",
                Dataset::Kwic
            )));
        }
        self.parse_source(text, self.config.primary.expected_columns, Dataset::Kwic)
    }

    fn parse_source(
        &self,
        text: &str,
        expected_columns: usize,
        dataset: Dataset,
    ) -> Result<(Table, SourceSummary)> {
        let table = self.parser.parse(text, Some(expected_columns), dataset)?;
        let summary = SourceSummary::new(dataset, text, &table);
        debug!(
            %dataset,
            hash = %summary.hash,
            rows = summary.row_count,
            "loaded source"
        );
        Ok((table, summary))
    }

    fn merge(
        &self,
        primary: Table,
        primary_source: SourceSummary,
        corpus_text: &str,
        author_text: &str,
    ) -> Result<EnrichOutcome> {
        let config = &self.config;

        let (corpus, corpus_source) = self.parse_source(
            corpus_text,
            config.corpus.expected_columns,
            Dataset::CorpusMetadata,
        )?;
        let (author, author_source) = self.parse_source(
            author_text,
            config.author.expected_columns,
            Dataset::AuthorMetadata,
        )?;

        let kwic_context = Dataset::Kwic.to_string();
        primary.require_column(&config.primary.identifier_column, &kwic_context)?;
        primary.require_column(&config.primary.text_column, &kwic_context)?;

        let strip = KeyTransform::StripSuffix {
            chars: config.primary.strip_suffix,
        };
        let primary = normalize_keys(&primary, &config.primary.identifier_column, |v| {
            strip.apply(v)
        })?;
        let primary = normalize_keys(&primary, &config.primary.text_column, |v| {
            KeyTransform::Trim.apply(v)
        })?;

        let corpus = project(&corpus, &config.corpus.keep_columns)?;

        let (joined, corpus_join) = left_join_with_stats(&primary, &corpus, &config.corpus.join_on)?;
        report_join(Dataset::CorpusMetadata, &corpus_join);

        let (joined, author_join) = left_join_with_stats(&joined, &author, &config.author.join_on)?;
        report_join(Dataset::AuthorMetadata, &author_join);

        let output = serialize(&joined)?;

        info!(
            rows = joined.row_count(),
            columns = joined.column_count(),
            "enrichment complete"
        );

        Ok(EnrichOutcome {
            table: joined,
            output,
            sources: vec![primary_source, corpus_source, author_source],
            corpus_join,
            author_join,
        })
    }
}

/// Warn about hits left without metadata and about ambiguous reference keys.
fn report_join(dataset: Dataset, stats: &JoinStats) {
    if stats.unmatched > 0 {
        warn!(rows = stats.unmatched, "{} rows without {}", Dataset::Kwic, dataset);
    }
    if stats.duplicate_keys > 0 {
        warn!(
            keys = stats.duplicate_keys,
            "{dataset} has duplicate join keys; first row used"
        );
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
