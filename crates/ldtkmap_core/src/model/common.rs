//! Small fixed-shape records shared by definitions and instances.

use ldtkmap_macros::LdtkJson;

/// A rectangle inside a tileset image, in pixels.
///
/// No validation is performed on the size; a zero or negative rectangle decodes
/// as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LdtkJson)]
pub struct TilesetRect {
    pub h: i64,
    pub tileset_uid: i64,
    pub w: i64,
    pub x: i64,
    pub y: i64,
}

/// A grid-based coordinate, used by `Point` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LdtkJson)]
pub struct GridPoint {
    pub cx: i64,
    pub cy: i64,
}

/// Identifies an entity instance anywhere in the project, used by `EntityRef`
/// fields and the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, LdtkJson)]
pub struct EntityReferenceInfos {
    pub entity_iid: String,
    pub layer_iid: String,
    pub level_iid: String,
    pub world_iid: String,
}

/// Free-form data attached to a single tile of a tileset.
#[derive(Debug, Clone, PartialEq, Eq, LdtkJson)]
pub struct TileCustomMetadata {
    pub data: String,
    pub tile_id: i64,
}

/// Tiles of a tileset tagged with one enum value.
#[derive(Debug, Clone, PartialEq, Eq, LdtkJson)]
pub struct EnumTagValue {
    pub enum_value_id: String,
    pub tile_ids: Vec<i64>,
}

/// Computed placement of a level background image.
#[derive(Debug, Clone, PartialEq, LdtkJson)]
pub struct LevelBackgroundPosition {
    /// `[x, y, width, height]` of the cropped sub-rectangle of the image.
    pub crop_rect: [f64; 4],
    /// `[scale_x, scale_y]`
    pub scale: [f64; 2],
    /// `[x, y]` of the image's top-left corner relative to the level.
    pub top_left_px: [i64; 2],
}

/// A level touching another level.
#[derive(Debug, Clone, PartialEq, Eq, LdtkJson)]
pub struct NeighbourLevel {
    /// `n`, `s`, `w`, `e`, `<` (lower depth), `>` (greater depth), `o` (overlap),
    /// or a corner such as `ne`.
    pub dir: String,
    pub level_iid: String,
    /// Deprecated, use `level_iid`.
    pub level_uid: Option<i64>,
}
