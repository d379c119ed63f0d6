//! # ldtkmap
//!
//! Typed, validated loading of LDtk level-editor projects.
//!
//! This is a meta-crate that re-exports the `ldtkmap_*` sub-crates behind one
//! dependency.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ldtkmap::prelude::*;
//!
//! let text = std::fs::read_to_string("assets/world.ldtk").unwrap();
//! let project = LdtkProject::from_json_str(&text).unwrap();
//!
//! let collisions = project
//!     .all_levels()
//!     .flat_map(|level| level.layers())
//!     .filter(|layer| layer.layer_type == LayerType::IntGrid);
//!
//! for layer in collisions {
//!     println!("{}: {} cells", layer.identifier, layer.int_grid_csv.len());
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: the data model, decoder, union validators and field-value typing
//! - `ldtkmap_macros`: the `#[derive(LdtkJson)]` macro the model is built with,
//!   also usable for your own records embedded in LDtk JSON
//!
//! ## Deriving your own records
//!
//! ```rust
//! use ldtkmap::prelude::*;
//! use serde_json::json;
//!
//! #[derive(Debug, PartialEq, LdtkJson)]
//! struct SpawnPoint {
//!     cx: i64,
//!     cy: i64,
//!     #[ldtk(rename = "__facing")]
//!     facing: Facing,
//! }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, LdtkJson)]
//! enum Facing {
//!     Left,
//!     Right,
//! }
//!
//! let point = SpawnPoint::from_json(&json!({ "cx": 3, "cy": 4, "__facing": "Left" })).unwrap();
//! assert_eq!(point.facing, Facing::Left);
//!
//! let err = SpawnPoint::from_json(&json!({ "cx": 3, "cy": 4, "__facing": "Up" })).unwrap_err();
//! assert_eq!(err.path().to_string(), "__facing");
//! ```

// Re-export sub-crates for advanced usage
pub use ldtkmap_core as core;

pub use serde_json;

/// Unified prelude for ldtkmap
///
/// Re-exports the model, the entry points and the derive macro.
pub mod prelude {
    pub use crate::core::prelude::*;
}
