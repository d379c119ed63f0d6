//! Project definitions: the templates that instances reference by UID.
//!
//! Most of these fields are editor metadata with no effect on instance
//! decoding. They are still captured so consumers can read them.

use ldtkmap_macros::LdtkJson;
use serde_json::Value;

use super::common::{EnumTagValue, TileCustomMetadata, TilesetRect};
use crate::unions::{
    AllowedRefs, BiomeRequirementMode, Checker, EditorDisplayMode, EditorDisplayPos,
    EditorLinkStyle, EmbedAtlas, EntityRenderMode, LayerType, LimitBehavior, LimitScope,
    TextLanguageMode, TileMode, TileRenderMode,
};

/// Every template registry of a project.
#[derive(Debug, Clone, Default, PartialEq, LdtkJson)]
pub struct Definitions {
    pub entities: Vec<EntityDefinition>,
    pub enums: Vec<EnumDefinition>,
    /// Enums imported from an external file, kept apart from the internal ones.
    pub external_enums: Vec<EnumDefinition>,
    pub layers: Vec<LayerDefinition>,
    /// Fields every level carries.
    pub level_fields: Vec<FieldDefinition>,
    pub tilesets: Vec<TilesetDefinition>,
}

impl Definitions {
    pub fn entity(&self, uid: i64) -> Option<&EntityDefinition> {
        self.entities.iter().find(|def| def.uid == uid)
    }

    pub fn entity_by_identifier(&self, identifier: &str) -> Option<&EntityDefinition> {
        self.entities.iter().find(|def| def.identifier == identifier)
    }

    pub fn layer(&self, uid: i64) -> Option<&LayerDefinition> {
        self.layers.iter().find(|def| def.uid == uid)
    }

    pub fn layer_by_identifier(&self, identifier: &str) -> Option<&LayerDefinition> {
        self.layers.iter().find(|def| def.identifier == identifier)
    }

    pub fn tileset(&self, uid: i64) -> Option<&TilesetDefinition> {
        self.tilesets.iter().find(|def| def.uid == uid)
    }

    /// Looks in both internal and external enums.
    pub fn enum_def(&self, uid: i64) -> Option<&EnumDefinition> {
        self.enums
            .iter()
            .chain(&self.external_enums)
            .find(|def| def.uid == uid)
    }

    /// UIDs that appear more than once within the same registry, as
    /// `(registry, uid)` pairs in registry order.
    ///
    /// Uniqueness is a format convention the decoder does not enforce.
    pub fn duplicate_uids(&self) -> Vec<(&'static str, i64)> {
        let mut duplicates = Vec::new();
        let mut check = |registry: &'static str, uids: &mut dyn Iterator<Item = i64>| {
            let mut seen = std::collections::HashSet::new();
            for uid in uids {
                if !seen.insert(uid) && !duplicates.contains(&(registry, uid)) {
                    duplicates.push((registry, uid));
                }
            }
        };

        check("entities", &mut self.entities.iter().map(|def| def.uid));
        check(
            "enums",
            &mut self
                .enums
                .iter()
                .chain(&self.external_enums)
                .map(|def| def.uid),
        );
        check("layers", &mut self.layers.iter().map(|def| def.uid));
        check("levelFields", &mut self.level_fields.iter().map(|def| def.uid));
        check("tilesets", &mut self.tilesets.iter().map(|def| def.uid));
        for entity in &self.entities {
            check("fieldDefs", &mut entity.field_defs.iter().map(|def| def.uid));
        }

        duplicates
    }
}

/// Template of an entity kind.
#[derive(Debug, Clone, PartialEq, LdtkJson)]
pub struct EntityDefinition {
    #[ldtk(default)]
    pub allow_out_of_bounds: bool,
    /// Base entity color, `#rrggbb`.
    pub color: String,
    pub doc: Option<String>,
    #[ldtk(default)]
    pub export_to_toc: bool,
    pub field_defs: Vec<FieldDefinition>,
    pub fill_opacity: f64,
    pub height: i64,
    pub hollow: bool,
    pub identifier: String,
    pub keep_aspect_ratio: bool,
    pub limit_behavior: LimitBehavior,
    pub limit_scope: LimitScope,
    pub line_opacity: f64,
    /// `0` means unlimited.
    pub max_count: i64,
    pub max_height: Option<i64>,
    pub max_width: Option<i64>,
    pub min_height: Option<i64>,
    pub min_width: Option<i64>,
    /// Borders for the `NineSlice` tile render mode, `[top, right, bottom, left]`.
    pub nine_slice_borders: Vec<i64>,
    pub pivot_x: f64,
    pub pivot_y: f64,
    pub render_mode: EntityRenderMode,
    pub resizable_x: bool,
    pub resizable_y: bool,
    pub show_name: bool,
    pub tags: Vec<String>,
    /// Deprecated, replaced by `tile_rect`.
    pub tile_id: Option<i64>,
    pub tile_opacity: f64,
    pub tile_rect: Option<TilesetRect>,
    pub tile_render_mode: TileRenderMode,
    pub tileset_id: Option<i64>,
    /// Tile shown in the editor UI, overriding `tile_rect` there.
    pub ui_tile_rect: Option<TilesetRect>,
    pub uid: i64,
    pub width: i64,
}

/// Template of a custom field, on entities or levels.
#[derive(Debug, Clone, PartialEq, LdtkJson)]
pub struct FieldDefinition {
    /// Human readable type, such as `Int`, `Enum(Weapons)` or `Array<Point>`.
    #[ldtk(rename = "__type")]
    pub field_type: String,
    /// Extensions accepted by `FilePath` fields, or `None` for any.
    pub accept_file_types: Option<Vec<String>>,
    pub allow_out_of_level_ref: bool,
    pub allowed_refs: AllowedRefs,
    pub allowed_refs_entity_uid: Option<i64>,
    pub allowed_ref_tags: Vec<String>,
    pub array_max_length: Option<i64>,
    pub array_min_length: Option<i64>,
    pub auto_chain_ref: bool,
    pub can_be_null: bool,
    /// Default value, shape depends on the field type.
    pub default_override: Option<Value>,
    pub doc: Option<String>,
    pub editor_always_show: bool,
    pub editor_cut_long_values: bool,
    pub editor_display_color: Option<String>,
    pub editor_display_mode: EditorDisplayMode,
    pub editor_display_pos: EditorDisplayPos,
    pub editor_display_scale: f64,
    pub editor_link_style: EditorLinkStyle,
    pub editor_show_in_world: bool,
    pub editor_text_prefix: Option<String>,
    pub editor_text_suffix: Option<String>,
    #[ldtk(default)]
    pub export_to_toc: bool,
    pub identifier: String,
    pub is_array: bool,
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub regex: Option<String>,
    pub searchable: bool,
    pub symmetrical_ref: bool,
    pub text_language_mode: Option<TextLanguageMode>,
    pub tileset_uid: Option<i64>,
    /// Internal editor type name, such as `F_Int`.
    #[ldtk(rename = "type")]
    pub internal_type: String,
    pub uid: i64,
    pub use_for_smart_color: bool,
}

/// Template of an enum, internal or imported from an external file.
#[derive(Debug, Clone, PartialEq, LdtkJson)]
pub struct EnumDefinition {
    pub external_file_checksum: Option<String>,
    pub external_rel_path: Option<String>,
    pub icon_tileset_uid: Option<i64>,
    pub identifier: String,
    pub tags: Vec<String>,
    pub uid: i64,
    pub values: Vec<EnumValueDefinition>,
}

impl EnumDefinition {
    pub fn is_external(&self) -> bool {
        self.external_rel_path.is_some()
    }

    pub fn value(&self, id: &str) -> Option<&EnumValueDefinition> {
        self.values.iter().find(|value| value.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, LdtkJson)]
pub struct EnumValueDefinition {
    /// Deprecated, replaced by `tile_rect`. `[x, y, width, height]`.
    #[ldtk(rename = "__tileSrcRect")]
    pub tile_src_rect: Option<[i64; 4]>,
    /// Color as a `0xRRGGBB` integer.
    pub color: i64,
    pub id: String,
    /// Deprecated, replaced by `tile_rect`.
    pub tile_id: Option<i64>,
    pub tile_rect: Option<TilesetRect>,
}

/// Template of a layer.
#[derive(Debug, Clone, PartialEq, LdtkJson)]
pub struct LayerDefinition {
    #[ldtk(rename = "__type")]
    pub layer_type: LayerType,
    pub auto_rule_groups: Vec<AutoLayerRuleGroup>,
    pub auto_source_layer_def_uid: Option<i64>,
    /// Deprecated, replaced by `tileset_def_uid`.
    pub auto_tileset_def_uid: Option<i64>,
    pub auto_tiles_killed_by_other_layer_uid: Option<i64>,
    pub biome_field_uid: Option<i64>,
    #[ldtk(default)]
    pub can_select_when_inactive: bool,
    pub display_opacity: f64,
    pub doc: Option<String>,
    pub excluded_tags: Vec<String>,
    pub grid_size: i64,
    pub guide_grid_hei: i64,
    pub guide_grid_wid: i64,
    pub hide_fields_when_inactive: bool,
    pub hide_in_list: bool,
    pub identifier: String,
    pub inactive_opacity: f64,
    pub int_grid_values: Vec<IntGridValueDefinition>,
    #[ldtk(default)]
    pub int_grid_values_groups: Vec<IntGridValueGroupDefinition>,
    pub parallax_factor_x: f64,
    pub parallax_factor_y: f64,
    pub parallax_scaling: bool,
    pub px_offset_x: i64,
    pub px_offset_y: i64,
    #[ldtk(default)]
    pub render_in_world_view: bool,
    pub required_tags: Vec<String>,
    pub tile_pivot_x: f64,
    pub tile_pivot_y: f64,
    pub tileset_def_uid: Option<i64>,
    /// Same as `layer_type`; both are written by the editor.
    #[ldtk(rename = "type")]
    pub kind: LayerType,
    pub ui_color: Option<String>,
    pub uid: i64,
    #[ldtk(default)]
    pub ui_filter_tags: Vec<String>,
    #[ldtk(default)]
    pub use_async_render: bool,
}

impl LayerDefinition {
    pub fn int_grid_value(&self, value: i64) -> Option<&IntGridValueDefinition> {
        self.int_grid_values.iter().find(|def| def.value == value)
    }
}

/// One value an IntGrid layer may hold.
#[derive(Debug, Clone, PartialEq, LdtkJson)]
pub struct IntGridValueDefinition {
    pub color: String,
    /// `0` when the value is not in a group.
    pub group_uid: i64,
    pub identifier: Option<String>,
    pub tile: Option<TilesetRect>,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, LdtkJson)]
pub struct IntGridValueGroupDefinition {
    pub color: Option<String>,
    pub identifier: Option<String>,
    pub uid: i64,
}

/// A named group of auto-layer rules.
#[derive(Debug, Clone, PartialEq, LdtkJson)]
pub struct AutoLayerRuleGroup {
    pub active: bool,
    #[ldtk(default)]
    pub biome_requirement_mode: BiomeRequirementMode,
    /// Deprecated editor UI state.
    pub collapsed: Option<bool>,
    pub color: Option<String>,
    pub icon: Option<TilesetRect>,
    #[ldtk(default)]
    pub is_optional: bool,
    pub name: String,
    #[ldtk(default)]
    pub required_biome_values: Vec<String>,
    pub rules: Vec<AutoLayerRuleDefinition>,
    pub uid: i64,
    pub uses_wizard: bool,
}

/// A single auto-layer rule. Rules are captured, never evaluated.
#[derive(Debug, Clone, PartialEq, LdtkJson)]
pub struct AutoLayerRuleDefinition {
    pub active: bool,
    pub alpha: f64,
    pub break_on_match: bool,
    /// Chance in `0..=1` for the rule to apply.
    pub chance: f64,
    pub checker: Checker,
    pub flip_x: bool,
    pub flip_y: bool,
    pub invalidated: bool,
    pub out_of_bounds_value: Option<i64>,
    /// `size * size` cell pattern.
    pub pattern: Vec<i64>,
    pub perlin_active: bool,
    pub perlin_octaves: f64,
    pub perlin_scale: f64,
    pub perlin_seed: f64,
    pub pivot_x: f64,
    pub pivot_y: f64,
    pub size: i64,
    /// Deprecated, replaced by `tile_rects_ids`.
    pub tile_ids: Option<Vec<i64>>,
    pub tile_mode: TileMode,
    pub tile_random_x_max: i64,
    pub tile_random_x_min: i64,
    pub tile_random_y_max: i64,
    pub tile_random_y_min: i64,
    pub tile_rects_ids: Vec<Vec<i64>>,
    pub tile_x_offset: i64,
    pub tile_y_offset: i64,
    pub uid: i64,
    pub x_modulo: i64,
    pub x_offset: i64,
    pub y_modulo: i64,
    pub y_offset: i64,
}

/// A tileset image and its metadata.
#[derive(Debug, Clone, PartialEq, LdtkJson)]
pub struct TilesetDefinition {
    #[ldtk(rename = "__cHei")]
    pub c_hei: i64,
    #[ldtk(rename = "__cWid")]
    pub c_wid: i64,
    /// Deprecated editor cache.
    pub cached_pixel_data: Option<Value>,
    pub custom_data: Vec<TileCustomMetadata>,
    pub embed_atlas: Option<EmbedAtlas>,
    pub enum_tags: Vec<EnumTagValue>,
    pub identifier: String,
    pub padding: i64,
    pub px_hei: i64,
    pub px_wid: i64,
    /// Image path relative to the project file; `None` for embedded atlases.
    pub rel_path: Option<String>,
    pub saved_selections: Vec<Value>,
    pub spacing: i64,
    pub tags: Vec<String>,
    pub tags_source_enum_uid: Option<i64>,
    pub tile_grid_size: i64,
    pub uid: i64,
}

impl TilesetDefinition {
    /// Pixel position of the top-left corner of tile `tile_id` in the image.
    pub fn tile_px(&self, tile_id: i64) -> Option<[i64; 2]> {
        let count = self.c_wid.checked_mul(self.c_hei)?;
        if self.c_wid <= 0 || tile_id < 0 || tile_id >= count {
            return None;
        }
        let step = self.tile_grid_size.checked_add(self.spacing)?;
        let x = (tile_id % self.c_wid).checked_mul(step)?;
        let y = (tile_id / self.c_wid).checked_mul(step)?;
        Some([
            self.padding.checked_add(x)?,
            self.padding.checked_add(y)?,
        ])
    }

    pub fn custom_data_for(&self, tile_id: i64) -> Option<&str> {
        self.custom_data
            .iter()
            .find(|meta| meta.tile_id == tile_id)
            .map(|meta| meta.data.as_str())
    }
}
