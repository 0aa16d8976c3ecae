//! Input parsing, data sources and the in-memory table model.

mod fetch;
mod parser;
mod source;
mod table;

pub use fetch::{Fetch, ReferenceSource, StaticSource, read_primary};
pub use parser::{Parser, ParserConfig};
pub use source::{Dataset, SourceSummary};
pub use table::{Row, Table};
