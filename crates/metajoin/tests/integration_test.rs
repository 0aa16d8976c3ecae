//! Integration tests for metajoin.

use std::io::Write;
use tempfile::NamedTempFile;

use metajoin::{
    Dataset, EnrichConfig, MetajoinError, Pipeline, ReferenceSource, StaticSource, read_primary,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

const KWIC: &str = "Left\tHit\tRight\tFile\n\
                    the\t hello \tworld\tdoc1.txt\n\
                    a\tgoodbye \tfriend\tdoc2.txt\n\
                    no\t hello\tmetadata\tdoc404.txt\n";

/// Nine-column corpus metadata; only File, Year and Link survive projection.
fn corpus_metadata() -> String {
    let header = "File\tTitle\tYear\tPeriod\tGenre\tSubgenre\tWords\tSource\tLink";
    let rows = [
        "doc1\tFirst\t1920\tP3\tprose\tnovel\t1000\tDBNL\tL1",
        "doc2\tSecond\t1871\tP2\tprose\tletters\t500\tDBNL\tL2",
        "doc1\tDuplicate\t1999\tP4\tprose\tnovel\t10\tDBNL\tL9",
    ];
    format!("{}\n{}\n", header, rows.join("\n"))
}

/// Twenty-one-column author metadata keyed on Link.
fn author_metadata() -> String {
    let mut header = vec!["Link".to_string(), "Author".to_string(), "Title".to_string()];
    header.extend((4..=21).map(|i| format!("Field{}", i)));

    let row = |link: &str, author: &str| {
        let mut fields = vec![link.to_string(), author.to_string(), "Author title".to_string()];
        fields.extend((4..=21).map(|i| format!("v{}", i)));
        fields.join("\t")
    };

    format!(
        "{}\n{}\n{}\n",
        header.join("\t"),
        row("L1", "Jane"),
        row("L2", "John")
    )
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn test_enrich_full_shapes() {
    let pipeline = Pipeline::new();
    let outcome = pipeline
        .enrich(KWIC, &corpus_metadata(), &author_metadata())
        .expect("Enrichment failed");

    let table = &outcome.table;
    // 4 KWIC + Year, Link + 20 author columns (Link already present)
    assert_eq!(table.column_count(), 4 + 2 + 20);
    assert_eq!(&table.columns()[..6], ["Left", "Hit", "Right", "File", "Year", "Link"]);
    assert_eq!(table.row_count(), 3);

    assert_eq!(table.get(0, "File"), Some("doc1"));
    assert_eq!(table.get(0, "Hit"), Some("hello"));
    assert_eq!(table.get(0, "Year"), Some("1920"));
    assert_eq!(table.get(0, "Author"), Some("Jane"));
    assert_eq!(table.get(0, "Title"), Some("Author title"));

    assert_eq!(table.get(1, "Hit"), Some("goodbye"));
    assert_eq!(table.get(1, "Author"), Some("John"));

    assert_eq!(table.get(2, "File"), Some("doc404"));
    assert_eq!(table.get(2, "Year"), None);
    assert_eq!(table.get(2, "Author"), None);
    assert_eq!(table.rows()[2].len(), 4);

    assert_eq!(outcome.corpus_join.matched, 2);
    assert_eq!(outcome.corpus_join.unmatched, 1);
    assert_eq!(outcome.corpus_join.duplicate_keys, 1);
    assert_eq!(outcome.author_join.matched, 2);
}

#[test]
fn test_scenario_single_hit() {
    let mut config = EnrichConfig::default();
    config.primary.expected_columns = 2;
    config.corpus.expected_columns = 3;
    config.author.expected_columns = 2;

    let pipeline = Pipeline::with_config(config);
    let outcome = pipeline
        .enrich(
            "File\tHit\n\"doc1.txt\"\t\" hello \"\n",
            "File\tYear\tLink\ndoc1\t1920\tL1\n",
            "Link\tAuthor\nL1\tJane\n",
        )
        .unwrap();

    assert_eq!(
        outcome.output,
        "File\tHit\tYear\tLink\tAuthor\ndoc1\thello\t1920\tL1\tJane\n"
    );
}

#[tokio::test]
async fn test_run_with_file_sources() {
    let corpus_file = create_test_file(&corpus_metadata());
    let author_file = create_test_file(&author_metadata());
    let kwic_file = create_test_file(KWIC);

    let mut config = EnrichConfig::default();
    config.corpus.location = corpus_file.path().display().to_string();
    config.author.location = author_file.path().display().to_string();

    let pipeline = Pipeline::with_config(config);
    let (corpus, authors) = pipeline.reference_sources().unwrap();
    assert!(matches!(corpus, ReferenceSource::File { .. }));

    let kwic = read_primary(kwic_file.path()).unwrap();
    let output = pipeline.run(&kwic, &corpus, &authors).await.unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Left\tHit\tRight\tFile\tYear\tLink\tAuthor\t"));
    assert!(lines[1].starts_with("the\thello\tworld\tdoc1\t1920\tL1\tJane\t"));
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn test_corpus_shape_mismatch_aborts() {
    // eight header columns instead of nine
    let corpus = "File\tTitle\tYear\tPeriod\tGenre\tWords\tSource\tLink\n\
                  doc1\tFirst\t1920\tP3\tprose\t1000\tDBNL\tL1\n";
    let pipeline = Pipeline::new();

    let err = pipeline
        .run(
            KWIC,
            &StaticSource::new(Dataset::CorpusMetadata, corpus),
            &StaticSource::new(Dataset::AuthorMetadata, author_metadata()),
        )
        .await
        .unwrap_err();

    match err {
        MetajoinError::ShapeMismatch {
            dataset,
            actual,
            expected,
        } => {
            assert_eq!(dataset, Dataset::CorpusMetadata);
            assert_eq!(actual, 8);
            assert_eq!(expected, 9);
        }
        other => panic!("expected ShapeMismatch, got {other}"),
    }
}

#[test]
fn test_author_shape_mismatch_aborts() {
    let err = Pipeline::new()
        .enrich(KWIC, &corpus_metadata(), "Link\tAuthor\nL1\tJane\n")
        .unwrap_err();

    assert!(matches!(
        err,
        MetajoinError::ShapeMismatch {
            dataset: Dataset::AuthorMetadata,
            actual: 2,
            expected: 21,
        }
    ));
}

#[test]
fn test_primary_shape_mismatch() {
    let err = Pipeline::new()
        .enrich("File\tHit\ndoc1.txt\thi\n", &corpus_metadata(), &author_metadata())
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid number of columns in KWIC results (2, should be 4)"
    );
}

#[test]
fn test_primary_without_file_column() {
    let kwic = "Left\tHit\tRight\tDocument\nthe\thello\tworld\tdoc1.txt\n";
    let err = Pipeline::new()
        .enrich(kwic, &corpus_metadata(), &author_metadata())
        .unwrap_err();

    assert!(matches!(err, MetajoinError::MissingColumn { ref column, .. } if column == "File"));
    assert_eq!(err.to_string(), "No 'File' column in KWIC results");
}

#[test]
fn test_corpus_without_kept_column() {
    let corpus = corpus_metadata().replacen("Year", "Jaar", 1);
    let err = Pipeline::new()
        .enrich(KWIC, &corpus, &author_metadata())
        .unwrap_err();

    assert!(matches!(err, MetajoinError::MissingColumn { ref column, .. } if column == "Year"));
}

#[tokio::test]
async fn test_unreachable_reference_is_fetch_failure() {
    let mut config = EnrichConfig::default();
    config.corpus.location = "/nonexistent/metajoin/C-CLAMP_metadata.txt".into();
    let pipeline = Pipeline::with_config(config);
    let (corpus, _) = pipeline.reference_sources().unwrap();

    let err = pipeline
        .run(
            KWIC,
            &corpus,
            &StaticSource::new(Dataset::AuthorMetadata, author_metadata()),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        MetajoinError::FetchFailure {
            dataset: Dataset::CorpusMetadata,
            ..
        }
    ));
}

#[test]
fn test_blank_location_is_input_missing() {
    let mut config = EnrichConfig::default();
    config.author.location = String::new();

    let err = Pipeline::with_config(config).reference_sources().unwrap_err();
    assert!(matches!(err, MetajoinError::InputMissing(_)));
}

#[test]
fn test_config_file_roundtrip() {
    let file = create_test_file("[output]\nfile_name = \"enriched.tsv\"\n");
    let config = EnrichConfig::load(file.path()).unwrap();

    assert_eq!(config.output.file_name, "enriched.tsv");
    assert_eq!(config.primary.expected_columns, 4);
}
