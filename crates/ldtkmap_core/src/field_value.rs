//! Typed interpretation of custom field values.
//!
//! A field instance stores its payload next to a type tag such as `Int`,
//! `LocalEnum.Weapon` or `Array<Point>`. [`FieldType`] parses that tag and
//! [`FieldValue::decode`] reads the payload according to it.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::DecodeError;
use crate::json::{FromLdtkJson, ToLdtkJson, expect_array};
use crate::model::{EntityReferenceInfos, GridPoint, TilesetRect};

/// Where an enum field's enum is declared, which decides the tag spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumSource {
    /// `LocalEnum.Name`
    Local,
    /// `ExternEnum.Name`
    External,
    /// `Enum(Name)`, written by older editor versions.
    Legacy,
}

/// A parsed field type tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Int,
    Float,
    Bool,
    String,
    Multilines,
    Color,
    Point,
    FilePath,
    Tile,
    EntityRef,
    Enum { source: EnumSource, name: String },
    /// Never nests: the format has no arrays of arrays.
    Array(Box<FieldType>),
}

impl FieldType {
    /// Tag forms listed in errors for unrecognized tags.
    pub const ACCEPTED_FORMS: &'static [&'static str] = &[
        "Int",
        "Float",
        "Bool",
        "String",
        "Multilines",
        "Color",
        "Point",
        "FilePath",
        "Tile",
        "EntityRef",
        "Enum(<name>)",
        "LocalEnum.<name>",
        "ExternEnum.<name>",
        "Array<<type>>",
    ];

    pub fn is_array(&self) -> bool {
        matches!(self, FieldType::Array(_))
    }

    /// The element type of an array, or the type itself.
    pub fn base(&self) -> &FieldType {
        match self {
            FieldType::Array(inner) => inner.as_ref(),
            other => other,
        }
    }

    pub fn enum_name(&self) -> Option<&str> {
        match self.base() {
            FieldType::Enum { name, .. } => Some(name),
            _ => None,
        }
    }

    fn parse_scalar(tag: &str) -> Option<FieldType> {
        let scalar = match tag {
            "Int" => FieldType::Int,
            "Float" => FieldType::Float,
            "Bool" => FieldType::Bool,
            "String" => FieldType::String,
            "Multilines" => FieldType::Multilines,
            "Color" => FieldType::Color,
            "Point" => FieldType::Point,
            "FilePath" => FieldType::FilePath,
            "Tile" => FieldType::Tile,
            "EntityRef" => FieldType::EntityRef,
            _ => {
                let (source, name) = if let Some(name) = tag.strip_prefix("LocalEnum.") {
                    (EnumSource::Local, name)
                } else if let Some(name) = tag.strip_prefix("ExternEnum.") {
                    (EnumSource::External, name)
                } else {
                    let name = tag.strip_prefix("Enum(")?.strip_suffix(')')?;
                    (EnumSource::Legacy, name)
                };
                if !is_identifier(name) {
                    return None;
                }
                FieldType::Enum {
                    source,
                    name: name.to_string(),
                }
            }
        };
        Some(scalar)
    }
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

impl FromStr for FieldType {
    type Err = DecodeError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let parsed = match tag
            .strip_prefix("Array<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            Some(inner) => FieldType::parse_scalar(inner).map(|t| FieldType::Array(Box::new(t))),
            None => FieldType::parse_scalar(tag),
        };

        parsed.ok_or_else(|| DecodeError::InvalidUnionLiteral {
            union_name: "FieldType",
            literal: tag.to_string(),
            accepted: FieldType::ACCEPTED_FORMS,
        })
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Int => f.write_str("Int"),
            FieldType::Float => f.write_str("Float"),
            FieldType::Bool => f.write_str("Bool"),
            FieldType::String => f.write_str("String"),
            FieldType::Multilines => f.write_str("Multilines"),
            FieldType::Color => f.write_str("Color"),
            FieldType::Point => f.write_str("Point"),
            FieldType::FilePath => f.write_str("FilePath"),
            FieldType::Tile => f.write_str("Tile"),
            FieldType::EntityRef => f.write_str("EntityRef"),
            FieldType::Enum { source, name } => match source {
                EnumSource::Local => write!(f, "LocalEnum.{name}"),
                EnumSource::External => write!(f, "ExternEnum.{name}"),
                EnumSource::Legacy => write!(f, "Enum({name})"),
            },
            FieldType::Array(inner) => write!(f, "Array<{inner}>"),
        }
    }
}

/// One non-null field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldScalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Both `String` and `Multilines` fields.
    String(String),
    /// `#rrggbb`
    Color(String),
    Enum { enum_name: String, value: String },
    Point(GridPoint),
    FilePath(String),
    Tile(TilesetRect),
    EntityRef(EntityReferenceInfos),
}

impl FieldScalar {
    /// Decode one non-null element. `field_type` must not be an array.
    fn decode(field_type: &FieldType, value: &Value) -> Result<Self, DecodeError> {
        let scalar = match field_type {
            FieldType::Int => FieldScalar::Int(i64::from_json(value)?),
            FieldType::Float => FieldScalar::Float(f64::from_json(value)?),
            FieldType::Bool => FieldScalar::Bool(bool::from_json(value)?),
            FieldType::String | FieldType::Multilines => {
                FieldScalar::String(String::from_json(value)?)
            }
            FieldType::Color => FieldScalar::Color(String::from_json(value)?),
            FieldType::FilePath => FieldScalar::FilePath(String::from_json(value)?),
            FieldType::Point => FieldScalar::Point(GridPoint::from_json(value)?),
            FieldType::Tile => FieldScalar::Tile(TilesetRect::from_json(value)?),
            FieldType::EntityRef => FieldScalar::EntityRef(EntityReferenceInfos::from_json(value)?),
            FieldType::Enum { name, .. } => FieldScalar::Enum {
                enum_name: name.clone(),
                value: String::from_json(value)?,
            },
            FieldType::Array(_) => {
                return Err(DecodeError::TypeMismatch {
                    expected: "scalar field value",
                    found: "array type",
                });
            }
        };
        Ok(scalar)
    }
}

impl ToLdtkJson for FieldScalar {
    fn to_json(&self) -> Value {
        match self {
            FieldScalar::Int(v) => v.to_json(),
            FieldScalar::Float(v) => v.to_json(),
            FieldScalar::Bool(v) => v.to_json(),
            FieldScalar::String(v) | FieldScalar::Color(v) | FieldScalar::FilePath(v) => {
                v.to_json()
            }
            FieldScalar::Enum { value, .. } => value.to_json(),
            FieldScalar::Point(point) => point.to_json(),
            FieldScalar::Tile(rect) => rect.to_json(),
            FieldScalar::EntityRef(infos) => infos.to_json(),
        }
    }
}

/// A field value typed against its tag. `None` entries are JSON `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Single(Option<FieldScalar>),
    Array(Vec<Option<FieldScalar>>),
}

impl FieldValue {
    pub fn decode(field_type: &FieldType, value: &Value) -> Result<Self, DecodeError> {
        match field_type {
            FieldType::Array(inner) => expect_array(value)?
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    decode_nullable(inner, item).map_err(|err| err.within_index(index))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(FieldValue::Array),
            scalar => decode_nullable(scalar, value).map(FieldValue::Single),
        }
    }

    pub fn as_single(&self) -> Option<&FieldScalar> {
        match self {
            FieldValue::Single(scalar) => scalar.as_ref(),
            FieldValue::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Option<FieldScalar>]> {
        match self {
            FieldValue::Array(items) => Some(items),
            FieldValue::Single(_) => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Single(None))
    }
}

fn decode_nullable(field_type: &FieldType, value: &Value) -> Result<Option<FieldScalar>, DecodeError> {
    if value.is_null() {
        Ok(None)
    } else {
        FieldScalar::decode(field_type, value).map(Some)
    }
}

impl ToLdtkJson for FieldValue {
    fn to_json(&self) -> Value {
        match self {
            FieldValue::Single(scalar) => scalar.to_json(),
            FieldValue::Array(items) => items.to_json(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!("Int".parse::<FieldType>().unwrap(), FieldType::Int);
        assert_eq!(
            "LocalEnum.Weapon".parse::<FieldType>().unwrap(),
            FieldType::Enum {
                source: EnumSource::Local,
                name: "Weapon".to_string()
            }
        );
        assert_eq!(
            "Array<Point>".parse::<FieldType>().unwrap(),
            FieldType::Array(Box::new(FieldType::Point))
        );

        let legacy: FieldType = "Array<Enum(Item_Kind)>".parse().unwrap();
        assert!(legacy.is_array());
        assert_eq!(legacy.enum_name(), Some("Item_Kind"));
    }

    #[test]
    fn test_display_round_trips() {
        for tag in [
            "Float",
            "Multilines",
            "ExternEnum.Biome",
            "Enum(Door)",
            "Array<EntityRef>",
            "Array<LocalEnum.Weapon>",
        ] {
            assert_eq!(tag.parse::<FieldType>().unwrap().to_string(), tag);
        }
    }

    #[test]
    fn test_reject_unknown_tags() {
        for tag in [
            "int",
            "Integer",
            "Array<Array<Int>>",
            "Array<Int",
            "Array< Int>",
            "Enum()",
            "LocalEnum.",
            "Enum(A B)",
        ] {
            let err = tag.parse::<FieldType>().unwrap_err();
            assert!(err.is_invalid_union_literal(), "{tag}");
            assert!(err.to_string().contains(tag), "{tag}");
        }
    }

    #[test]
    fn test_decode_int_array() {
        let field_type: FieldType = "Array<Int>".parse().unwrap();
        let value = FieldValue::decode(&field_type, &json!([1, 2, 3])).unwrap();
        assert_eq!(
            value,
            FieldValue::Array(vec![
                Some(FieldScalar::Int(1)),
                Some(FieldScalar::Int(2)),
                Some(FieldScalar::Int(3)),
            ])
        );
        assert_eq!(value.to_json(), json!([1, 2, 3]));
    }

    #[test]
    fn test_decode_nulls() {
        let value = FieldValue::decode(&FieldType::Tile, &json!(null)).unwrap();
        assert!(value.is_null());

        let field_type: FieldType = "Array<Point>".parse().unwrap();
        let value =
            FieldValue::decode(&field_type, &json!([{ "cx": 1, "cy": 2 }, null])).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items[0], Some(FieldScalar::Point(GridPoint { cx: 1, cy: 2 })));
        assert_eq!(items[1], None);
    }

    #[test]
    fn test_decode_enum_keeps_enum_name() {
        let field_type: FieldType = "LocalEnum.Weapon".parse().unwrap();
        let value = FieldValue::decode(&field_type, &json!("Sword")).unwrap();
        assert_eq!(
            value.as_single(),
            Some(&FieldScalar::Enum {
                enum_name: "Weapon".to_string(),
                value: "Sword".to_string()
            })
        );
        assert_eq!(value.to_json(), json!("Sword"));
    }

    #[test]
    fn test_decode_mismatch_paths() {
        let field_type: FieldType = "Array<Int>".parse().unwrap();
        let err = FieldValue::decode(&field_type, &json!([1, 2.5])).unwrap_err();
        assert!(err.is_type_mismatch());
        assert_eq!(err.path().to_string(), "[1]");

        let err = FieldValue::decode(&field_type, &json!(3)).unwrap_err();
        assert!(err.is_type_mismatch());
        assert!(err.path().is_root());

        let err = FieldValue::decode(&FieldType::EntityRef, &json!({ "entityIid": "e" })).unwrap_err();
        assert!(err.is_missing_field());
        assert_eq!(err.path().to_string(), "layerIid");
    }
}
