//! Enrichment configuration.
//!
//! Every value defaults to the layout of the C-CLAMP KWIC export and its
//! metadata tables, so an empty config file (or none at all) works as-is.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MetajoinError, Result};

/// Top-level configuration, deserialized from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichConfig {
    /// The user-supplied KWIC export.
    #[serde(default)]
    pub primary: PrimaryConfig,

    /// Corpus metadata, joined on the file identifier.
    #[serde(default)]
    pub corpus: CorpusConfig,

    /// Author metadata, joined on the corpus link.
    #[serde(default)]
    pub author: AuthorConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[primary]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryConfig {
    #[serde(default = "default_primary_columns")]
    pub expected_columns: usize,

    /// File identifier column, also the corpus join key.
    #[serde(default = "default_identifier_column")]
    pub identifier_column: String,

    /// Free-text column whose values are trimmed.
    #[serde(default = "default_text_column")]
    pub text_column: String,

    /// Characters removed from the end of each identifier.
    #[serde(default = "default_strip_suffix")]
    pub strip_suffix: usize,
}

impl Default for PrimaryConfig {
    fn default() -> Self {
        Self {
            expected_columns: default_primary_columns(),
            identifier_column: default_identifier_column(),
            text_column: default_text_column(),
            strip_suffix: default_strip_suffix(),
        }
    }
}

/// `[corpus]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// URL or path of the corpus metadata table.
    #[serde(default = "default_corpus_location")]
    pub location: String,

    #[serde(default = "default_corpus_columns")]
    pub expected_columns: usize,

    /// Columns retained before joining.
    #[serde(default = "default_keep_columns")]
    pub keep_columns: Vec<String>,

    #[serde(default = "default_identifier_column")]
    pub join_on: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            location: default_corpus_location(),
            expected_columns: default_corpus_columns(),
            keep_columns: default_keep_columns(),
            join_on: default_identifier_column(),
        }
    }
}

/// `[author]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorConfig {
    /// URL or path of the author metadata table.
    #[serde(default = "default_author_location")]
    pub location: String,

    #[serde(default = "default_author_columns")]
    pub expected_columns: usize,

    #[serde(default = "default_link_column")]
    pub join_on: String,
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            location: default_author_location(),
            expected_columns: default_author_columns(),
            join_on: default_link_column(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

fn default_primary_columns() -> usize {
    4
}
fn default_identifier_column() -> String {
    "File".into()
}
fn default_text_column() -> String {
    "Hit".into()
}
fn default_strip_suffix() -> usize {
    ".txt".len()
}
fn default_corpus_location() -> String {
    "./C-CLAMP_metadata.txt".into()
}
fn default_corpus_columns() -> usize {
    9
}
fn default_keep_columns() -> Vec<String> {
    vec!["File".into(), "Year".into(), "Link".into()]
}
fn default_author_location() -> String {
    "./author_metadata_hisclass_final.txt".into()
}
fn default_author_columns() -> usize {
    21
}
fn default_link_column() -> String {
    "Link".into()
}
fn default_file_name() -> String {
    "merged_dataset.txt".into()
}

impl EnrichConfig {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| MetajoinError::Config(e.to_string()))
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| MetajoinError::ReadFailure {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&text)
            .map_err(|e| MetajoinError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Render as a TOML document.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| MetajoinError::Config(e.to_string()))
    }

    /// Check that the configured joins can work at all.
    pub fn validate(&self) -> Result<()> {
        if !self
            .corpus
            .keep_columns
            .iter()
            .any(|c| c == &self.corpus.join_on)
        {
            return Err(MetajoinError::Config(format!(
                "corpus keep_columns must include the join key '{}'",
                self.corpus.join_on
            )));
        }
        if !self
            .corpus
            .keep_columns
            .iter()
            .any(|c| c == &self.author.join_on)
        {
            return Err(MetajoinError::Config(format!(
                "corpus keep_columns must include the author join key '{}'",
                self.author.join_on
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EnrichConfig::default();
        assert_eq!(config.primary.expected_columns, 4);
        assert_eq!(config.primary.identifier_column, "File");
        assert_eq!(config.primary.text_column, "Hit");
        assert_eq!(config.primary.strip_suffix, 4);
        assert_eq!(config.corpus.expected_columns, 9);
        assert_eq!(config.corpus.keep_columns, ["File", "Year", "Link"]);
        assert_eq!(config.author.expected_columns, 21);
        assert_eq!(config.author.join_on, "Link");
        assert_eq!(config.output.file_name, "merged_dataset.txt");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(EnrichConfig::from_toml("").unwrap(), EnrichConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = EnrichConfig::from_toml(
            r#"
            [corpus]
            location = "https://example.org/corpus.tsv"

            [output]
            file_name = "out.tsv"
            "#,
        )
        .unwrap();

        assert_eq!(config.corpus.location, "https://example.org/corpus.tsv");
        assert_eq!(config.corpus.expected_columns, 9);
        assert_eq!(config.output.file_name, "out.tsv");
        assert_eq!(config.primary, PrimaryConfig::default());
    }

    #[test]
    fn test_to_toml_parses_back() {
        let mut config = EnrichConfig::default();
        config.author.location = "https://example.org/authors.tsv".into();
        let text = config.to_toml().unwrap();
        assert_eq!(EnrichConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml() {
        let err = EnrichConfig::from_toml("[primary]\nexpected_columns = \"four\"").unwrap_err();
        assert!(matches!(err, MetajoinError::Config(_)));
    }

    #[test]
    fn test_validate_requires_join_keys_kept() {
        let mut config = EnrichConfig::default();
        config.corpus.keep_columns = vec!["File".into(), "Year".into()];
        assert!(config.validate().is_err());
    }
}
