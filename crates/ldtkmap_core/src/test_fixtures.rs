//! Complete JSON documents for tests, shaped like LDtk 1.5 output.
//!
//! Large objects are assembled from several `json!` chunks to stay under the
//! macro recursion limit.

use serde_json::{Map, Value, json};

/// Merge the members of several JSON objects into one.
fn merge<const N: usize>(parts: [Value; N]) -> Value {
    let mut object = Map::new();
    for part in parts {
        if let Value::Object(members) = part {
            object.extend(members);
        }
    }
    Value::Object(object)
}

pub fn field_definition(uid: i64, identifier: &str, tag: &str) -> Value {
    let internal = tag
        .trim_start_matches("Array<")
        .trim_end_matches('>')
        .split('.')
        .next()
        .unwrap_or(tag);
    merge([
        json!({
            "__type": tag,
            "acceptFileTypes": null,
            "allowOutOfLevelRef": true,
            "allowedRefs": "OnlySame",
            "allowedRefsEntityUid": null,
            "allowedRefTags": [],
            "arrayMaxLength": null,
            "arrayMinLength": null,
            "autoChainRef": true,
            "canBeNull": false,
            "defaultOverride": null,
            "doc": null,
            "editorAlwaysShow": false,
        }),
        json!({
            "editorCutLongValues": true,
            "editorDisplayColor": null,
            "editorDisplayMode": "Hidden",
            "editorDisplayPos": "Above",
            "editorDisplayScale": 1,
            "editorLinkStyle": "StraightArrow",
            "editorShowInWorld": true,
            "editorTextPrefix": null,
            "editorTextSuffix": null,
            "exportToToc": false,
            "identifier": identifier,
            "isArray": tag.starts_with("Array<"),
        }),
        json!({
            "max": null,
            "min": null,
            "regex": null,
            "searchable": false,
            "symmetricalRef": false,
            "textLanguageMode": null,
            "tilesetUid": null,
            "type": format!("F_{internal}"),
            "uid": uid,
            "useForSmartColor": false,
        }),
    ])
}

pub fn entity_definition(uid: i64, identifier: &str) -> Value {
    merge([
        json!({
            "allowOutOfBounds": false,
            "color": "#BE4A2F",
            "doc": null,
            "exportToToc": false,
            "fieldDefs": [field_definition(uid * 100, "hp", "Int")],
            "fillOpacity": 0.08,
            "height": 16,
            "hollow": false,
            "identifier": identifier,
            "keepAspectRatio": false,
            "limitBehavior": "MoveLastOne",
            "limitScope": "PerLevel",
        }),
        json!({
            "lineOpacity": 0,
            "maxCount": 0,
            "maxHeight": null,
            "maxWidth": null,
            "minHeight": null,
            "minWidth": null,
            "nineSliceBorders": [],
            "pivotX": 0.5,
            "pivotY": 1,
            "renderMode": "Rectangle",
            "resizableX": false,
            "resizableY": false,
        }),
        json!({
            "showName": true,
            "tags": ["actor"],
            "tileId": null,
            "tileOpacity": 1,
            "tileRect": null,
            "tileRenderMode": "FitInside",
            "tilesetId": null,
            "uiTileRect": null,
            "uid": uid,
            "width": 16,
        }),
    ])
}

pub fn enum_definition(uid: i64, identifier: &str, values: &[&str]) -> Value {
    let values: Vec<Value> = values
        .iter()
        .map(|id| {
            json!({
                "__tileSrcRect": null,
                "color": 0,
                "id": id,
                "tileId": null,
                "tileRect": null,
            })
        })
        .collect();
    json!({
        "externalFileChecksum": null,
        "externalRelPath": null,
        "iconTilesetUid": null,
        "identifier": identifier,
        "tags": [],
        "uid": uid,
        "values": values,
    })
}

fn auto_rule(uid: i64) -> Value {
    merge([
        json!({
            "active": true,
            "alpha": 1,
            "breakOnMatch": true,
            "chance": 1,
            "checker": "None",
            "flipX": false,
            "flipY": false,
            "invalidated": false,
            "outOfBoundsValue": null,
            "pattern": [0, 0, 0, 0, 1, 0, 0, 0, 0],
            "perlinActive": false,
            "perlinOctaves": 2,
        }),
        json!({
            "perlinScale": 0.2,
            "perlinSeed": 2904582,
            "pivotX": 0,
            "pivotY": 0,
            "size": 3,
            "tileIds": null,
            "tileMode": "Single",
            "tileRandomXMax": 0,
            "tileRandomXMin": 0,
            "tileRandomYMax": 0,
            "tileRandomYMin": 0,
            "tileRectsIds": [[0]],
        }),
        json!({
            "tileXOffset": 0,
            "tileYOffset": 0,
            "uid": uid,
            "xModulo": 1,
            "xOffset": 0,
            "yModulo": 1,
            "yOffset": 0,
        }),
    ])
}

pub fn layer_definition(uid: i64, identifier: &str, kind: &str) -> Value {
    let rule_groups = if kind == "AutoLayer" {
        json!([{
            "active": true,
            "biomeRequirementMode": "MatchAll",
            "collapsed": null,
            "color": null,
            "icon": null,
            "isOptional": false,
            "name": "Walls",
            "requiredBiomeValues": [],
            "rules": [auto_rule(uid * 10)],
            "uid": uid * 10 + 1,
            "usesWizard": false,
        }])
    } else {
        json!([])
    };
    let int_grid_values = if kind == "IntGrid" {
        json!([{
            "color": "#000000",
            "groupUid": 0,
            "identifier": "wall",
            "tile": null,
            "value": 1,
        }])
    } else {
        json!([])
    };

    merge([
        json!({
            "__type": kind,
            "autoRuleGroups": rule_groups,
            "autoSourceLayerDefUid": null,
            "autoTilesetDefUid": null,
            "autoTilesKilledByOtherLayerUid": null,
            "biomeFieldUid": null,
            "canSelectWhenInactive": true,
            "displayOpacity": 1,
            "doc": null,
            "excludedTags": [],
            "gridSize": 16,
            "guideGridHei": 0,
        }),
        json!({
            "guideGridWid": 0,
            "hideFieldsWhenInactive": true,
            "hideInList": false,
            "identifier": identifier,
            "inactiveOpacity": 0.6,
            "intGridValues": int_grid_values,
            "intGridValuesGroups": [],
            "parallaxFactorX": 0,
            "parallaxFactorY": 0,
            "parallaxScaling": true,
            "pxOffsetX": 0,
            "pxOffsetY": 0,
        }),
        json!({
            "renderInWorldView": true,
            "requiredTags": [],
            "tilePivotX": 0,
            "tilePivotY": 0,
            "tilesetDefUid": null,
            "type": kind,
            "uiColor": null,
            "uid": uid,
            "uiFilterTags": [],
            "useAsyncRender": false,
        }),
    ])
}

pub fn tileset_definition(uid: i64, identifier: &str) -> Value {
    merge([
        json!({
            "__cHei": 4,
            "__cWid": 4,
            "cachedPixelData": null,
            "customData": [{ "data": "solid", "tileId": 3 }],
            "embedAtlas": null,
            "enumTags": [{ "enumValueId": "Water", "tileIds": [1, 2] }],
            "identifier": identifier,
            "padding": 1,
            "pxHei": 72,
        }),
        json!({
            "pxWid": 72,
            "relPath": "atlas/world.png",
            "savedSelections": [],
            "spacing": 2,
            "tags": [],
            "tagsSourceEnumUid": null,
            "tileGridSize": 16,
            "uid": uid,
        }),
    ])
}

pub fn definitions() -> Value {
    json!({
        "entities": [
            entity_definition(1, "Player"),
            entity_definition(4, "Chest"),
            entity_definition(5, "Door"),
        ],
        "enums": [
            enum_definition(10, "Biome", &["Forest", "Desert"]),
            enum_definition(11, "Item", &["Sword", "Bow"]),
        ],
        "externalEnums": [],
        "layers": [
            layer_definition(2, "Collisions", "IntGrid"),
            layer_definition(3, "Entities", "Entities"),
            layer_definition(6, "Ground", "AutoLayer"),
        ],
        "levelFields": [field_definition(20, "biome", "LocalEnum.Biome")],
        "tilesets": [tileset_definition(7, "World")],
    })
}

pub fn field_instance(identifier: &str, tag: &str, value: Value) -> Value {
    json!({
        "__identifier": identifier,
        "__tile": null,
        "__type": tag,
        "__value": value,
        "defUid": 100,
        "realEditorValues": [],
    })
}

pub fn entity_instance(iid: &str, identifier: &str, fields: Vec<Value>) -> Value {
    merge([
        json!({
            "__grid": [1, 2],
            "__identifier": identifier,
            "__pivot": [0.5, 1],
            "__smartColor": "#BE4A2F",
            "__tags": ["actor"],
            "__tile": null,
            "__worldX": 16,
            "__worldY": 40,
        }),
        json!({
            "defUid": 1,
            "fieldInstances": fields,
            "height": 16,
            "iid": iid,
            "px": [16, 40],
            "width": 16,
        }),
    ])
}

fn layer_instance(kind: &str, identifier: &str, layer_def_uid: i64, c_wid: i64, c_hei: i64) -> Value {
    merge([
        json!({
            "__cHei": c_hei,
            "__cWid": c_wid,
            "__gridSize": 16,
            "__identifier": identifier,
            "__opacity": 1,
            "__pxTotalOffsetX": 0,
            "__pxTotalOffsetY": 0,
            "__tilesetDefUid": null,
            "__tilesetRelPath": null,
            "__type": kind,
        }),
        json!({
            "autoLayerTiles": [],
            "entityInstances": [],
            "gridTiles": [],
            "iid": format!("layer-{}", identifier.to_lowercase()),
            "intGridCsv": [],
            "layerDefUid": layer_def_uid,
            "levelId": 0,
            "optionalRules": [],
            "overrideTilesetUid": null,
            "pxOffsetX": 0,
            "pxOffsetY": 0,
            "seed": 123,
            "visible": true,
        }),
    ])
}

pub fn int_grid_layer(c_wid: i64, c_hei: i64, csv: &[i64]) -> Value {
    let mut layer = layer_instance("IntGrid", "Collisions", 2, c_wid, c_hei);
    layer["intGridCsv"] = json!(csv);
    layer
}

pub fn entities_layer(entities: Vec<Value>) -> Value {
    let mut layer = layer_instance("Entities", "Entities", 3, 2, 2);
    layer["entityInstances"] = Value::Array(entities);
    layer
}

pub fn tiles_layer() -> Value {
    let mut layer = layer_instance("Tiles", "Decor", 8, 2, 2);
    layer["__tilesetDefUid"] = json!(7);
    layer["__tilesetRelPath"] = json!("atlas/world.png");
    layer["gridTiles"] = json!([
        { "a": 1, "d": [0], "f": 0, "px": [0, 0], "src": [0, 0], "t": 0 },
        { "a": 0.5, "d": [3], "f": 1, "px": [16, 16], "src": [18, 0], "t": 1 },
    ]);
    layer
}

fn level(identifier: &str, index: i64) -> Value {
    merge([
        json!({
            "__bgColor": "#40465B",
            "__bgPos": null,
            "__neighbours": [
                { "dir": "e", "levelIid": format!("level-{}", index + 1), "levelUid": null }
            ],
            "__smartColor": "#ADADB5",
            "bgColor": null,
            "bgPivotX": 0.5,
            "bgPivotY": 0.5,
            "bgPos": null,
            "bgRelPath": null,
            "externalRelPath": null,
        }),
        json!({
            "fieldInstances": [field_instance("biome", "LocalEnum.Biome", json!("Forest"))],
            "identifier": identifier,
            "iid": format!("level-{index}"),
            "layerInstances": [],
            "pxHei": 32,
            "pxWid": 32,
            "uid": index,
            "useAutoIdentifier": true,
            "worldDepth": 0,
            "worldX": index * 32,
            "worldY": 0,
        }),
    ])
}

/// An inline level with an IntGrid layer and an Entities layer holding one
/// `Player` entity.
pub fn inline_level(identifier: &str, index: i64) -> Value {
    let player = entity_instance(
        &format!("e-{index}-0"),
        "Player",
        vec![
            field_instance("hp", "Int", json!(10)),
            field_instance("inventory", "Array<LocalEnum.Item>", json!(["Sword", null])),
        ],
    );

    let mut level = level(identifier, index);
    level["layerInstances"] = json!([int_grid_layer(2, 2, &[1, 0, 0, 1]), entities_layer(vec![player])]);
    level
}

/// A level whose layers live in a separate `.ldtkl` file.
pub fn external_level(identifier: &str, index: i64) -> Value {
    let mut level = level(identifier, index);
    level["externalRelPath"] = json!(format!("project/{identifier}.ldtkl"));
    level["layerInstances"] = Value::Null;
    level
}

pub fn world(iid: &str, identifier: &str, levels: Vec<Value>) -> Value {
    json!({
        "defaultLevelHeight": 256,
        "defaultLevelWidth": 256,
        "identifier": identifier,
        "iid": iid,
        "levels": levels,
        "worldGridHeight": 256,
        "worldGridWidth": 256,
        "worldLayout": "GridVania",
    })
}

/// A complete project document.
pub fn project(levels: Vec<Value>, worlds: Vec<Value>) -> Value {
    merge([
        json!({
            "__header__": {
                "fileType": "LDtk Project JSON",
                "app": "LDtk",
                "schema": "https://ldtk.io/files/JSON_SCHEMA.json",
            },
            "appBuildId": 473703,
            "backupLimit": 10,
            "backupOnSave": false,
            "backupRelPath": null,
            "bgColor": "#40465B",
            "customCommands": [],
            "defaultEntityHeight": 16,
            "defaultEntityWidth": 16,
            "defaultGridSize": 16,
            "defaultLevelBgColor": "#696A79",
        }),
        json!({
            "defaultLevelHeight": 256,
            "defaultLevelWidth": 256,
            "defaultPivotX": 0,
            "defaultPivotY": 0,
            "defs": definitions(),
            "dummyWorldIid": "dummy-world",
            "exportLevelBg": true,
            "exportPng": null,
            "exportTiled": false,
            "externalLevels": false,
            "flags": [],
            "identifierStyle": "Capitalize",
        }),
        json!({
            "iid": "project",
            "imageExportMode": "None",
            "jsonVersion": "1.5.3",
            "levelNamePattern": "Level_%idx",
            "levels": levels,
            "minifyJson": false,
            "nextUid": 100,
            "pngFilePattern": null,
            "simplifiedExport": false,
            "toc": [],
            "tutorialDesc": null,
        }),
        json!({
            "worldGridHeight": 256,
            "worldGridWidth": 256,
            "worldLayout": "Free",
            "worlds": worlds,
            "__FORCED_REFS": {},
        }),
    ])
}
