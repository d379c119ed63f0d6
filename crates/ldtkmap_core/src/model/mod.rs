//! Typed records of an LDtk project document.

mod common;
mod definitions;
mod instances;
mod world;

pub use common::{
    EntityReferenceInfos, EnumTagValue, GridPoint, LevelBackgroundPosition, NeighbourLevel,
    TileCustomMetadata, TilesetRect,
};
pub use definitions::{
    AutoLayerRuleDefinition, AutoLayerRuleGroup, Definitions, EntityDefinition, EnumDefinition,
    EnumValueDefinition, FieldDefinition, IntGridValueDefinition, IntGridValueGroupDefinition,
    LayerDefinition, TilesetDefinition,
};
pub use instances::{
    EntityInstance, FieldInstance, IntGridValueInstance, LayerInstance, LayerPayload, Level,
    TileInstance,
};
pub use world::{CustomCommand, TableOfContentEntry, TocInstanceData, World};
