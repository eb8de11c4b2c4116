//! GeoJSON document model.
//!
//! These types mirror the exact text the crate emits. They are kept apart
//! from `geojson::Feature` because key order and integer rendering are part
//! of the output format, and the geojson crate normalises both.

use std::fmt;

use geojson::{GeoJson, JsonObject};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Largest magnitude below which every integer is exactly representable in an `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A single longitude, latitude or elevation value.
///
/// Integral values with magnitude below 2^53 render without a decimal point
/// (`-122`, not `-122.0`). From 2^53 up, and for `-0.0`, the value goes
/// through the float formatter (`9007199254740992.0`, `-0.0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ordinate(pub f64);

impl Serialize for Ordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER && !is_negative_zero(value) {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

fn is_negative_zero(value: f64) -> bool {
    value == 0.0 && value.is_sign_negative()
}

pub type Position = Vec<Ordinate>;

fn raw_position(position: &Position) -> geojson::Position {
    position.iter().map(|o| o.0).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum GeometryObject {
    Point { coordinates: Position },
    MultiLineString { coordinates: Vec<Vec<Position>> },
}

impl From<&GeometryObject> for geojson::Geometry {
    fn from(geometry: &GeometryObject) -> Self {
        let value = match geometry {
            GeometryObject::Point { coordinates } => {
                geojson::Value::Point(raw_position(coordinates))
            }
            GeometryObject::MultiLineString { coordinates } => geojson::Value::MultiLineString(
                coordinates
                    .iter()
                    .map(|line| line.iter().map(raw_position).collect())
                    .collect(),
            ),
        };
        geojson::Geometry::new(value)
    }
}

/// The `properties` member. An empty value still renders as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Properties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Properties {
    /// `None` when neither key would be emitted.
    pub fn from_parts(title: Option<&str>, icon: Option<&str>) -> Option<Self> {
        if title.is_none() && icon.is_none() {
            return None;
        }
        Some(Self {
            title: title.map(str::to_owned),
            icon: icon.map(str::to_owned),
        })
    }
}

impl From<&Properties> for JsonObject {
    fn from(properties: &Properties) -> Self {
        let mut object = JsonObject::new();
        if let Some(title) = &properties.title {
            object.insert("title".to_string(), title.clone().into());
        }
        if let Some(icon) = &properties.icon {
            object.insert("icon".to_string(), icon.clone().into());
        }
        object
    }
}

/// Where `properties` sits relative to `geometry` in a rendered feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertiesPlacement {
    BeforeGeometry,
    AfterGeometry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureObject {
    pub geometry: GeometryObject,
    pub properties: Option<Properties>,
    pub placement: PropertiesPlacement,
}

impl Serialize for FeatureObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.properties.is_some() { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("type", "Feature")?;
        match self.placement {
            PropertiesPlacement::BeforeGeometry => {
                if let Some(properties) = &self.properties {
                    map.serialize_entry("properties", properties)?;
                }
                map.serialize_entry("geometry", &self.geometry)?;
            }
            PropertiesPlacement::AfterGeometry => {
                map.serialize_entry("geometry", &self.geometry)?;
                if let Some(properties) = &self.properties {
                    map.serialize_entry("properties", properties)?;
                }
            }
        }
        map.end()
    }
}

impl fmt::Display for FeatureObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_compact(self, f)
    }
}

impl From<&FeatureObject> for geojson::Feature {
    fn from(feature: &FeatureObject) -> Self {
        geojson::Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::from(&feature.geometry)),
            id: None,
            properties: feature.properties.as_ref().map(JsonObject::from),
            foreign_members: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollectionObject {
    pub features: Vec<FeatureObject>,
}

impl fmt::Display for FeatureCollectionObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_compact(self, f)
    }
}

fn write_compact<T: Serialize>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    serde_json::to_string(value)
        .map_err(|_| fmt::Error)
        .and_then(|s| f.write_str(&s))
}

/// Convert a rendered collection into the geojson crate's representation.
pub fn to_geojson(collection: &FeatureCollectionObject) -> GeoJson {
    let features: Vec<geojson::Feature> = collection
        .features
        .iter()
        .map(geojson::Feature::from)
        .collect();

    GeoJson::FeatureCollection(geojson::FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}
