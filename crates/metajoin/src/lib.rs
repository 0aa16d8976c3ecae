//! Metajoin: enrich keyword-in-context concordance exports with metadata.
//!
//! A KWIC export (one row per hit, with the corpus `File` it came from) is
//! left-joined with corpus metadata on the file identifier and then with
//! author metadata on the corpus `Link`. Every hit row survives the joins,
//! in order; rows without a match simply gain no new fields.
//!
//! # Example
//!
//! ```no_run
//! use metajoin::Pipeline;
//!
//! # async fn demo() -> metajoin::Result<()> {
//! let kwic = metajoin::read_primary("kwic_results.txt")?;
//! let pipeline = Pipeline::new();
//! let (corpus, authors) = pipeline.reference_sources()?;
//!
//! let merged = pipeline.run(&kwic, &corpus, &authors).await?;
//! std::fs::write(&pipeline.config().output.file_name, merged).unwrap();
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod join;
pub mod output;
pub mod transform;

mod pipeline;

pub use crate::pipeline::{EnrichOutcome, Pipeline};
pub use config::EnrichConfig;
pub use error::{MetajoinError, Result};
pub use input::{
    Dataset, Fetch, Parser, ReferenceSource, Row, SourceSummary, StaticSource, Table, read_primary,
};
pub use join::{JoinStats, Lookup, left_join, left_join_with_stats};
pub use output::{Serializer, serialize, to_json};
pub use transform::{KeyTransform, normalize_keys, project};
