//! Key transformations that make join keys comparable.

/// A per-value transformation applied to one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyTransform {
    /// Drop the last `chars` characters (e.g. a `.txt` extension).
    ///
    /// Values shorter than `chars` become empty.
    StripSuffix { chars: usize },

    /// Remove leading and trailing whitespace.
    Trim,
}

impl KeyTransform {
    /// Apply the transformation to a single value.
    pub fn apply(&self, value: &str) -> String {
        match self {
            KeyTransform::StripSuffix { chars } => {
                let keep = value.chars().count().saturating_sub(*chars);
                value.chars().take(keep).collect()
            }
            KeyTransform::Trim => value.trim().to_string(),
        }
    }

    /// Get a human-readable description of the transformation.
    pub fn description(&self) -> String {
        match self {
            KeyTransform::StripSuffix { chars } => {
                format!("Strip last {} characters", chars)
            }
            KeyTransform::Trim => "Trim surrounding whitespace".to_string(),
        }
    }
}
