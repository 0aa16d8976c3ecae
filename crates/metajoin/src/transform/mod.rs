//! Table transformations applied ahead of joining.

mod normalize;
mod operations;
mod project;

pub use normalize::normalize_keys;
pub use operations::KeyTransform;
pub use project::project;
