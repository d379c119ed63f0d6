//! Per-level data: levels, layer instances, entities, tiles and field values.
//!
//! Keys prefixed with `__` are convenience copies of definition data written by
//! the editor. They are kept as separate members and never re-derived.

use ldtkmap_macros::LdtkJson;
use serde_json::Value;

use super::common::{LevelBackgroundPosition, NeighbourLevel, TilesetRect};
use crate::error::DecodeError;
use crate::field_value::{FieldType, FieldValue};
use crate::unions::{BgPos, LayerType};

/// One level, either inline in the project or loaded from a `.ldtkl` file.
#[derive(Debug, Clone, PartialEq, LdtkJson)]
pub struct Level {
    /// Background color, resolved from the project default when unset.
    #[ldtk(rename = "__bgColor")]
    pub resolved_bg_color: String,
    #[ldtk(rename = "__bgPos")]
    pub bg_position: Option<LevelBackgroundPosition>,
    #[ldtk(rename = "__neighbours")]
    pub neighbours: Vec<NeighbourLevel>,
    #[ldtk(rename = "__smartColor")]
    pub smart_color: String,
    pub bg_color: Option<String>,
    pub bg_pivot_x: f64,
    pub bg_pivot_y: f64,
    pub bg_pos: Option<BgPos>,
    pub bg_rel_path: Option<String>,
    /// Set when the level's layers live in a separate file.
    pub external_rel_path: Option<String>,
    pub field_instances: Vec<FieldInstance>,
    pub identifier: String,
    pub iid: String,
    /// `None` when the level is stored in a separate file.
    pub layer_instances: Option<Vec<LayerInstance>>,
    pub px_hei: i64,
    pub px_wid: i64,
    pub uid: i64,
    pub use_auto_identifier: bool,
    pub world_depth: i64,
    /// `-1` in `LinearHorizontal` and `LinearVertical` world layouts.
    pub world_x: i64,
    pub world_y: i64,
}

impl Level {
    pub fn is_external(&self) -> bool {
        self.external_rel_path.is_some()
    }

    /// Inline layer instances, topmost first. Empty when externalized.
    pub fn layers(&self) -> &[LayerInstance] {
        self.layer_instances.as_deref().unwrap_or_default()
    }

    pub fn layer(&self, identifier: &str) -> Option<&LayerInstance> {
        self.layers()
            .iter()
            .find(|layer| layer.identifier == identifier)
    }

    pub fn field(&self, identifier: &str) -> Option<&FieldInstance> {
        find_field(&self.field_instances, identifier)
    }

    /// Type every field value of this level and of its entities against its tag.
    ///
    /// The error path is relative to the level object.
    pub fn validate_field_values(&self) -> Result<(), DecodeError> {
        validate_fields(&self.field_instances).map_err(|err| err.within_key("fieldInstances"))?;

        for (layer_index, layer) in self.layers().iter().enumerate() {
            for (entity_index, entity) in layer.entity_instances.iter().enumerate() {
                validate_fields(&entity.field_instances).map_err(|err| {
                    err.within_key("fieldInstances")
                        .within_index(entity_index)
                        .within_key("entityInstances")
                        .within_index(layer_index)
                        .within_key("layerInstances")
                })?;
            }
        }

        Ok(())
    }

    pub(crate) fn entity_count(&self) -> usize {
        self.layers()
            .iter()
            .map(|layer| layer.entity_instances.len())
            .sum()
    }
}

fn find_field<'a>(fields: &'a [FieldInstance], identifier: &str) -> Option<&'a FieldInstance> {
    fields.iter().find(|field| field.identifier == identifier)
}

fn validate_fields(fields: &[FieldInstance]) -> Result<(), DecodeError> {
    for (index, field) in fields.iter().enumerate() {
        field.typed_value().map_err(|err| err.within_index(index))?;
    }
    Ok(())
}

/// One layer of one level.
#[derive(Debug, Clone, PartialEq, LdtkJson)]
pub struct LayerInstance {
    #[ldtk(rename = "__cHei")]
    pub c_hei: i64,
    #[ldtk(rename = "__cWid")]
    pub c_wid: i64,
    #[ldtk(rename = "__gridSize")]
    pub grid_size: i64,
    #[ldtk(rename = "__identifier")]
    pub identifier: String,
    #[ldtk(rename = "__opacity")]
    pub opacity: f64,
    #[ldtk(rename = "__pxTotalOffsetX")]
    pub px_total_offset_x: i64,
    #[ldtk(rename = "__pxTotalOffsetY")]
    pub px_total_offset_y: i64,
    #[ldtk(rename = "__tilesetDefUid")]
    pub tileset_def_uid: Option<i64>,
    #[ldtk(rename = "__tilesetRelPath")]
    pub tileset_rel_path: Option<String>,
    #[ldtk(rename = "__type")]
    pub layer_type: LayerType,
    pub auto_layer_tiles: Vec<TileInstance>,
    pub entity_instances: Vec<EntityInstance>,
    pub grid_tiles: Vec<TileInstance>,
    pub iid: String,
    /// Deprecated pre-CSV IntGrid format.
    pub int_grid: Option<Vec<IntGridValueInstance>>,
    /// Row-major cell values, `0` for empty cells.
    pub int_grid_csv: Vec<i64>,
    pub layer_def_uid: i64,
    pub level_id: i64,
    #[ldtk(default)]
    pub optional_rules: Vec<i64>,
    pub override_tileset_uid: Option<i64>,
    pub px_offset_x: i64,
    pub px_offset_y: i64,
    pub seed: i64,
    pub visible: bool,
}

/// The part of a layer instance that its type uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayerPayload<'a> {
    /// IntGrid layers may also carry auto-layer tiles.
    IntGrid {
        csv: &'a [i64],
        auto_tiles: &'a [TileInstance],
    },
    Entities(&'a [EntityInstance]),
    Tiles(&'a [TileInstance]),
    AutoLayer(&'a [TileInstance]),
}

impl LayerInstance {
    pub fn payload(&self) -> LayerPayload<'_> {
        match self.layer_type {
            LayerType::IntGrid => LayerPayload::IntGrid {
                csv: &self.int_grid_csv,
                auto_tiles: &self.auto_layer_tiles,
            },
            LayerType::Entities => LayerPayload::Entities(&self.entity_instances),
            LayerType::Tiles => LayerPayload::Tiles(&self.grid_tiles),
            LayerType::AutoLayer => LayerPayload::AutoLayer(&self.auto_layer_tiles),
        }
    }

    /// Value of the IntGrid cell at `(cx, cy)`, or `None` outside the grid.
    pub fn int_grid_value(&self, cx: i64, cy: i64) -> Option<i64> {
        if cx < 0 || cy < 0 || cx >= self.c_wid || cy >= self.c_hei {
            return None;
        }
        let index = cy.checked_mul(self.c_wid)?.checked_add(cx)?;
        let index = usize::try_from(index).ok()?;
        self.int_grid_csv.get(index).copied()
    }

    pub fn entity(&self, iid: &str) -> Option<&EntityInstance> {
        self.entity_instances.iter().find(|entity| entity.iid == iid)
    }
}

/// Legacy IntGrid cell, replaced by `intGridCsv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, LdtkJson)]
pub struct IntGridValueInstance {
    pub coord_id: i64,
    pub v: i64,
}

/// A placed tile.
#[derive(Debug, Clone, PartialEq, LdtkJson)]
pub struct TileInstance {
    /// Alpha, `0..=1`.
    pub a: f64,
    /// Internal editor data.
    pub d: Vec<i64>,
    /// Flip bits: bit 0 is X, bit 1 is Y.
    pub f: i64,
    pub px: [i64; 2],
    pub src: [i64; 2],
    pub t: i64,
}

impl TileInstance {
    pub fn flip_x(&self) -> bool {
        self.f & 1 != 0
    }

    pub fn flip_y(&self) -> bool {
        self.f & 2 != 0
    }
}

/// A placed entity.
#[derive(Debug, Clone, PartialEq, LdtkJson)]
pub struct EntityInstance {
    #[ldtk(rename = "__grid")]
    pub grid: [i64; 2],
    #[ldtk(rename = "__identifier")]
    pub identifier: String,
    #[ldtk(rename = "__pivot")]
    pub pivot: [f64; 2],
    #[ldtk(rename = "__smartColor")]
    pub smart_color: String,
    #[ldtk(rename = "__tags")]
    pub tags: Vec<String>,
    #[ldtk(rename = "__tile")]
    pub tile: Option<TilesetRect>,
    #[ldtk(rename = "__worldX")]
    pub world_x: Option<i64>,
    #[ldtk(rename = "__worldY")]
    pub world_y: Option<i64>,
    pub def_uid: i64,
    pub field_instances: Vec<FieldInstance>,
    pub height: i64,
    pub iid: String,
    pub px: [i64; 2],
    pub width: i64,
}

impl EntityInstance {
    pub fn field(&self, identifier: &str) -> Option<&FieldInstance> {
        find_field(&self.field_instances, identifier)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A custom field value on an entity or a level.
///
/// The value is kept as raw JSON; use [`FieldInstance::typed_value`] to read
/// it according to its type tag.
#[derive(Debug, Clone, PartialEq, LdtkJson)]
pub struct FieldInstance {
    #[ldtk(rename = "__identifier")]
    pub identifier: String,
    #[ldtk(rename = "__tile")]
    pub tile: Option<TilesetRect>,
    #[ldtk(rename = "__type")]
    pub type_tag: String,
    #[ldtk(rename = "__value")]
    pub value: Value,
    pub def_uid: i64,
    /// Editor-internal representation of the value.
    pub real_editor_values: Vec<Value>,
}

impl FieldInstance {
    pub fn field_type(&self) -> Result<FieldType, DecodeError> {
        self.type_tag
            .parse::<FieldType>()
            .map_err(|err| err.within_key("__type"))
    }

    pub fn typed_value(&self) -> Result<FieldValue, DecodeError> {
        let field_type = self.field_type()?;
        FieldValue::decode(&field_type, &self.value).map_err(|err| err.within_key("__value"))
    }
}
