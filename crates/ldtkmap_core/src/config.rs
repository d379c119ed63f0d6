//! Decode configuration.

use serde::{Deserialize, Serialize};

/// How `FieldInstance` values are handled during a document decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValuePolicy {
    /// Keep `__value` as raw JSON. New value shapes from newer editors still
    /// decode; type them later with `FieldInstance::typed_value`.
    #[default]
    Deferred,
    /// Type every value against its `__type` tag and fail the decode on the
    /// first mismatch.
    Eager,
}

/// Options for the document entry points.
///
/// # Example
///
/// ```
/// use ldtkmap_core::config::{DecodeConfig, FieldValuePolicy};
///
/// let config = DecodeConfig::default()
///     .with_field_values(FieldValuePolicy::Eager)
///     .with_check_conventions(false);
/// assert_eq!(config.field_values, FieldValuePolicy::Eager);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DecodeConfig {
    /// Field value typing (default: deferred)
    pub field_values: FieldValuePolicy,

    /// Log format conventions the decoder does not enforce, such as duplicate
    /// UIDs (default: true)
    pub check_conventions: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            field_values: FieldValuePolicy::Deferred,
            check_conventions: true,
        }
    }
}

impl DecodeConfig {
    pub fn with_field_values(mut self, policy: FieldValuePolicy) -> Self {
        self.field_values = policy;
        self
    }

    pub fn with_check_conventions(mut self, enabled: bool) -> Self {
        self.check_conventions = enabled;
        self
    }

    pub fn is_eager(&self) -> bool {
        self.field_values == FieldValuePolicy::Eager
    }
}
