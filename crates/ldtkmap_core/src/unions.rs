//! Closed string enumerations of the LDtk format.
//!
//! Each enum maps one variant to one wire literal. Decoding is exact-match and
//! case-sensitive; any other string fails with
//! [`DecodeError::InvalidUnionLiteral`](crate::error::DecodeError::InvalidUnionLiteral).

use ldtkmap_macros::LdtkJson;

/// How levels are arranged in a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LdtkJson)]
pub enum WorldLayout {
    Free,
    GridVania,
    LinearHorizontal,
    LinearVertical,
}

/// How an entity tile is drawn inside the entity bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LdtkJson)]
pub enum TileRenderMode {
    Cover,
    FitInside,
    FullSizeCropped,
    FullSizeUncropped,
    NineSlice,
    Repeat,
    Stretch,
}

/// Editor shape of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LdtkJson)]
pub enum EntityRenderMode {
    Cross,
    Ellipse,
    Rectangle,
    Tile,
}

/// Scope in which an entity's `maxCount` applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LdtkJson)]
pub enum LimitScope {
    PerLayer,
    PerLevel,
    PerWorld,
}

/// What the editor does once `maxCount` is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LdtkJson)]
pub enum LimitBehavior {
    DiscardOldOnes,
    MoveLastOne,
    PreventAdding,
}

/// Which entities an `EntityRef` field may point to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LdtkJson)]
pub enum AllowedRefs {
    Any,
    OnlySame,
    OnlySpecificEntity,
    OnlyTags,
}

/// How a field value is displayed in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LdtkJson)]
pub enum EditorDisplayMode {
    ArrayCountNoLabel,
    ArrayCountWithLabel,
    EntityTile,
    Hidden,
    LevelTile,
    NameAndValue,
    PointPath,
    PointPathLoop,
    PointStar,
    Points,
    RadiusGrid,
    RadiusPx,
    RefLinkBetweenCenters,
    RefLinkBetweenPivots,
    ValueOnly,
}

/// Where a field value is displayed relative to its entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LdtkJson)]
pub enum EditorDisplayPos {
    Above,
    Beneath,
    Center,
}

/// Line style for reference and point fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LdtkJson)]
pub enum EditorLinkStyle {
    ArrowsLine,
    CurvedArrow,
    DashedLine,
    StraightArrow,
    ZigZag,
}

/// Syntax highlighting of multiline text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LdtkJson)]
pub enum TextLanguageMode {
    LangC,
    LangHaxe,
    #[ldtk(rename = "LangJS")]
    LangJs,
    LangJson,
    LangLog,
    LangLua,
    LangMarkdown,
    LangPython,
    LangRuby,
    LangXml,
}

/// Checker pattern of an auto-layer rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LdtkJson)]
pub enum Checker {
    Horizontal,
    None,
    Vertical,
}

/// Whether an auto-layer rule paints single tiles or whole stamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LdtkJson)]
pub enum TileMode {
    Single,
    Stamp,
}

/// How a rule group's required biome values combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, LdtkJson)]
pub enum BiomeRequirementMode {
    #[default]
    MatchAll,
    MatchAny,
}

/// Project-wide feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LdtkJson)]
pub enum Flag {
    DiscardPreCsvIntGrid,
    ExportOldTableOfContentData,
    ExportPreCsvIntGridFormat,
    IgnoreBackupSuggest,
    MultiWorlds,
    PrependIndexToLevelFileNames,
    UseMultilinesType,
}

/// Naming convention enforced on identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LdtkJson)]
pub enum IdentifierStyle {
    Capitalize,
    Free,
    Lowercase,
    Uncapitalize,
}

/// PNG export mode of the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LdtkJson)]
pub enum ImageExportMode {
    LayersAndLevels,
    None,
    OneImagePerLayer,
    OneImagePerLevel,
}

/// Placement of a level background image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LdtkJson)]
pub enum BgPos {
    Contain,
    Cover,
    CoverDirty,
    Repeat,
    Unscaled,
}

/// Atlases embedded in the editor itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LdtkJson)]
pub enum EmbedAtlas {
    LdtkIcons,
}

/// Kind of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LdtkJson)]
pub enum LayerType {
    AutoLayer,
    Entities,
    IntGrid,
    Tiles,
}

/// When a project custom command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LdtkJson)]
pub enum CustomCommandTrigger {
    AfterLoad,
    AfterSave,
    BeforeSave,
    Manual,
}
