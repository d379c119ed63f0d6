//! Worlds and the project-level auxiliary records.

use ldtkmap_macros::LdtkJson;
use serde_json::Value;

use super::common::EntityReferenceInfos;
use super::instances::Level;
use crate::unions::{CustomCommandTrigger, WorldLayout};

/// A named container of levels, used when the project has multiple worlds.
#[derive(Debug, Clone, PartialEq, LdtkJson)]
pub struct World {
    pub default_level_height: i64,
    pub default_level_width: i64,
    pub identifier: String,
    pub iid: String,
    pub levels: Vec<Level>,
    /// Only meaningful in the `GridVania` layout.
    pub world_grid_height: i64,
    pub world_grid_width: i64,
    pub world_layout: Option<WorldLayout>,
}

impl World {
    pub fn level_by_iid(&self, iid: &str) -> Option<&Level> {
        self.levels.iter().find(|level| level.iid == iid)
    }
}

/// A shell command the editor runs around save and load.
#[derive(Debug, Clone, PartialEq, Eq, LdtkJson)]
pub struct CustomCommand {
    pub command: String,
    pub when: CustomCommandTrigger,
}

/// All instances of one entity kind flagged for the table of contents.
#[derive(Debug, Clone, PartialEq, LdtkJson)]
pub struct TableOfContentEntry {
    pub identifier: String,
    /// Deprecated, replaced by `instances_data`.
    pub instances: Option<Vec<EntityReferenceInfos>>,
    pub instances_data: Vec<TocInstanceData>,
}

#[derive(Debug, Clone, PartialEq, LdtkJson)]
pub struct TocInstanceData {
    /// Exported field values, keyed by field identifier.
    pub fields: Value,
    pub hei_px: i64,
    pub iids: EntityReferenceInfos,
    pub wid_px: i64,
    pub world_x: i64,
    pub world_y: i64,
}
