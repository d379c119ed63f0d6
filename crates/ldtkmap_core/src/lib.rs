//! # `ldtkmap_core`
//!
//! Decoding backbone for `ldtkmap`. Turns an LDtk project document (`.ldtk`)
//! or an externalized level (`.ldtkl`) into a strongly-typed model, failing
//! with a path-carrying [`DecodeError`](error::DecodeError) on anything the
//! format does not allow.
//!
//! **This crate does NOT render, evaluate auto-layer rules or resolve
//! references** - UIDs and IIDs are kept as opaque keys for the consumer.
//!
//! ## What it checks
//!
//! 1. **Structure**: required keys, JSON kinds, fixed-size tuples such as `px`
//! 2. **String unions**: closed sets like `worldLayout` or `tileRenderMode`,
//!    matched exactly
//! 3. **Field values** (opt-in): every `__value` typed against its `__type` tag
//!
//! Unknown keys are ignored so files from newer editor versions still load.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ldtkmap_core::prelude::*;
//!
//! let text = std::fs::read_to_string("assets/world.ldtk").unwrap();
//! let config = DecodeConfig::default().with_field_values(FieldValuePolicy::Eager);
//!
//! match LdtkProject::from_json_str_with(&text, &config) {
//!     Ok(project) => {
//!         for level in project.all_levels() {
//!             println!("{}: {}x{}", level.identifier, level.px_wid, level.px_hei);
//!         }
//!     }
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod field_value;
pub mod json;
pub mod model;
pub mod project;
pub mod unions;

#[cfg(test)]
mod test_fixtures;

pub mod prelude {
    //! Common imports for `ldtkmap_core` users.

    pub use crate::config::{DecodeConfig, FieldValuePolicy};
    pub use crate::error::{DecodeError, LdtkError};
    pub use crate::field_value::{EnumSource, FieldScalar, FieldType, FieldValue};
    pub use crate::json::{FromLdtkJson, JsonPath, PathSegment, StringUnion, ToLdtkJson};
    pub use crate::model::*;
    pub use crate::project::LdtkProject;
    pub use crate::unions::*;

    // Re-export the LdtkJson derive macro
    pub use ldtkmap_macros::LdtkJson;
}

// Re-export the entry types at crate root for convenience
pub use config::{DecodeConfig, FieldValuePolicy};
pub use error::{DecodeError, LdtkError};
pub use project::LdtkProject;
