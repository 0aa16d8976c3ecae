//! Rendering tables back to text.

mod serializer;

pub use serializer::{Serializer, serialize, to_json};
