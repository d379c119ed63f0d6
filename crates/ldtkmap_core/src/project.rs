//! LDtk project documents (`.ldtk`) and externalized levels (`.ldtkl`).
//!
//! The entry points here decode a whole document, then apply the steps that
//! depend on [`DecodeConfig`]: eager field typing and convention checks.
//!
//! # Example
//!
//! ```rust,no_run
//! use ldtkmap_core::project::LdtkProject;
//!
//! let text = std::fs::read_to_string("assets/world.ldtk").unwrap();
//! let project = LdtkProject::from_json_str(&text).unwrap();
//!
//! for level in project.all_levels() {
//!     println!("{} ({} layers)", level.identifier, level.layers().len());
//! }
//! ```

use ldtkmap_macros::LdtkJson;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::config::DecodeConfig;
use crate::error::{DecodeError, LdtkError};
use crate::json::{FromLdtkJson, JsonPath, PathSegment, ToLdtkJson};
use crate::model::{CustomCommand, Definitions, Level, TableOfContentEntry, World};
use crate::unions::{Flag, IdentifierStyle, ImageExportMode, WorldLayout};

/// Root of an LDtk project file.
///
/// In single-world projects `levels` and the `world*` keys at the root are
/// authoritative and `worlds` is empty. In multi-world projects the levels
/// live in `worlds`. Both shapes are kept exactly as written.
#[derive(Debug, Clone, PartialEq, LdtkJson)]
pub struct LdtkProject {
    /// Editor build that wrote the file.
    pub app_build_id: f64,
    pub backup_limit: i64,
    pub backup_on_save: bool,
    pub backup_rel_path: Option<String>,
    pub bg_color: String,
    #[ldtk(default)]
    pub custom_commands: Vec<CustomCommand>,
    pub default_entity_height: i64,
    pub default_entity_width: i64,
    pub default_grid_size: i64,
    pub default_level_bg_color: String,
    pub default_level_height: Option<i64>,
    pub default_level_width: Option<i64>,
    pub default_pivot_x: f64,
    pub default_pivot_y: f64,
    pub defs: Definitions,
    #[ldtk(default)]
    pub dummy_world_iid: String,
    pub export_level_bg: bool,
    /// Deprecated, replaced by `image_export_mode`.
    pub export_png: Option<bool>,
    pub export_tiled: bool,
    /// Whether levels are stored in separate `.ldtkl` files.
    pub external_levels: bool,
    pub flags: Vec<Flag>,
    pub identifier_style: IdentifierStyle,
    pub iid: String,
    pub image_export_mode: ImageExportMode,
    pub json_version: String,
    pub level_name_pattern: String,
    pub levels: Vec<Level>,
    pub minify_json: bool,
    pub next_uid: i64,
    pub png_file_pattern: Option<String>,
    pub simplified_export: bool,
    #[ldtk(default)]
    pub toc: Vec<TableOfContentEntry>,
    pub tutorial_desc: Option<String>,
    pub world_grid_height: Option<i64>,
    pub world_grid_width: Option<i64>,
    pub world_layout: Option<WorldLayout>,
    pub worlds: Vec<World>,
}

impl LdtkProject {
    /// Parse and decode a project from JSON text with the default configuration.
    pub fn from_json_str(text: &str) -> Result<Self, LdtkError> {
        Self::from_json_str_with(text, &DecodeConfig::default())
    }

    pub fn from_json_str_with(text: &str, config: &DecodeConfig) -> Result<Self, LdtkError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_json_value_with(&value, config)?)
    }

    /// Decode a project from an already-parsed JSON tree.
    pub fn from_json_value(value: &Value) -> Result<Self, DecodeError> {
        Self::from_json_value_with(value, &DecodeConfig::default())
    }

    pub fn from_json_value_with(value: &Value, config: &DecodeConfig) -> Result<Self, DecodeError> {
        let project = <Self as FromLdtkJson>::from_json(value)?;

        if config.is_eager() {
            project.validate_field_values()?;
        }

        for (path, level) in project.levels_with_paths() {
            trace!(
                level = %level.identifier,
                path = %path,
                layers = level.layers().len(),
                entities = level.entity_count(),
                external = level.is_external(),
                "decoded level"
            );
            if config.check_conventions {
                check_level_conventions(level, &path);
            }
        }

        if config.check_conventions {
            for (registry, uid) in project.defs.duplicate_uids() {
                warn!(registry, uid, "duplicate UID in definitions");
            }
        }

        debug!(
            json_version = %project.json_version,
            worlds = project.worlds.len(),
            levels = project.all_levels().count(),
            entity_defs = project.defs.entities.len(),
            layer_defs = project.defs.layers.len(),
            tilesets = project.defs.tilesets.len(),
            "decoded LDtk project"
        );

        Ok(project)
    }

    /// Type every field instance value in the project against its tag.
    pub fn validate_field_values(&self) -> Result<(), DecodeError> {
        for (path, level) in self.levels_with_paths() {
            level
                .validate_field_values()
                .map_err(|err| prefix_path(err, &path))?;
        }
        Ok(())
    }

    /// Every level with its path from the document root, top-level levels first.
    fn levels_with_paths(&self) -> impl Iterator<Item = (JsonPath, &Level)> {
        let top_level = self.levels.iter().enumerate().map(|(index, level)| {
            let path: JsonPath = [PathSegment::from("levels"), PathSegment::from(index)]
                .into_iter()
                .collect();
            (path, level)
        });

        let in_worlds = self
            .worlds
            .iter()
            .enumerate()
            .flat_map(|(world_index, world)| {
                world.levels.iter().enumerate().map(move |(index, level)| {
                    let path: JsonPath = [
                        PathSegment::from("worlds"),
                        PathSegment::from(world_index),
                        PathSegment::from("levels"),
                        PathSegment::from(index),
                    ]
                    .into_iter()
                    .collect();
                    (path, level)
                })
            });

        top_level.chain(in_worlds)
    }

    /// True when the `MultiWorlds` flag is set or the document carries worlds.
    pub fn is_multi_worlds(&self) -> bool {
        self.has_flag(Flag::MultiWorlds) || !self.worlds.is_empty()
    }

    /// Levels of every world in a multi-world project, the top-level levels
    /// otherwise.
    pub fn all_levels(&self) -> impl Iterator<Item = &Level> {
        let (levels, worlds): (&[Level], &[World]) = if self.is_multi_worlds() {
            (&[], self.worlds.as_slice())
        } else {
            (self.levels.as_slice(), &[])
        };
        levels
            .iter()
            .chain(worlds.iter().flat_map(|world| &world.levels))
    }

    pub fn level_by_iid(&self, iid: &str) -> Option<&Level> {
        self.all_levels().find(|level| level.iid == iid)
    }

    pub fn level_by_identifier(&self, identifier: &str) -> Option<&Level> {
        self.all_levels().find(|level| level.identifier == identifier)
    }

    pub fn world_by_iid(&self, iid: &str) -> Option<&World> {
        self.worlds.iter().find(|world| world.iid == iid)
    }

    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn to_json_value(&self) -> Value {
        self.to_json()
    }

    pub fn to_json_string(&self) -> Result<String, LdtkError> {
        Ok(serde_json::to_string(&self.to_json())?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String, LdtkError> {
        Ok(serde_json::to_string_pretty(&self.to_json())?)
    }
}

impl Level {
    /// Parse and decode a standalone level (`.ldtkl`) from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, LdtkError> {
        Self::from_json_str_with(text, &DecodeConfig::default())
    }

    pub fn from_json_str_with(text: &str, config: &DecodeConfig) -> Result<Self, LdtkError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_json_value_with(&value, config)?)
    }

    pub fn from_json_value(value: &Value) -> Result<Self, DecodeError> {
        Self::from_json_value_with(value, &DecodeConfig::default())
    }

    pub fn from_json_value_with(value: &Value, config: &DecodeConfig) -> Result<Self, DecodeError> {
        let level = <Self as FromLdtkJson>::from_json(value)?;

        if config.is_eager() {
            level.validate_field_values()?;
        }
        if config.check_conventions {
            check_level_conventions(&level, &JsonPath::root());
        }

        debug!(
            level = %level.identifier,
            layers = level.layers().len(),
            entities = level.entity_count(),
            "decoded LDtk level"
        );

        Ok(level)
    }

    pub fn to_json_value(&self) -> Value {
        self.to_json()
    }

    pub fn to_json_string(&self) -> Result<String, LdtkError> {
        Ok(serde_json::to_string(&self.to_json())?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String, LdtkError> {
        Ok(serde_json::to_string_pretty(&self.to_json())?)
    }
}

fn prefix_path(err: DecodeError, prefix: &JsonPath) -> DecodeError {
    prefix
        .segments()
        .iter()
        .rev()
        .fold(err, |err, segment| err.within(segment.clone()))
}

/// Externalized levels carry no inline layers; inline levels always do.
/// Violations are logged, never rejected.
fn check_level_conventions(level: &Level, path: &JsonPath) {
    match (&level.external_rel_path, &level.layer_instances) {
        (Some(external), Some(layers)) if !layers.is_empty() => {
            warn!(
                level = %level.identifier,
                path = %path,
                external = %external,
                layers = layers.len(),
                "externalized level also has inline layer instances"
            );
        }
        (None, None) => {
            warn!(
                level = %level.identifier,
                path = %path,
                "inline level has no layer instances and no external file"
            );
        }
        _ => {}
    }
}

// serde bridges: both directions go through the LDtk decoder and encoder so
// `serde_json::from_str::<LdtkProject>` reports the same errors.
macro_rules! serde_bridge {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.to_json().serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = Value::deserialize(deserializer)?;
                <$ty>::from_json_value(&value).map_err(serde::de::Error::custom)
            }
        }
    };
}

serde_bridge!(LdtkProject);
serde_bridge!(Level);
