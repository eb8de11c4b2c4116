use std::fmt;

use geo::{Coord, LineString, MultiLineString};

use crate::geometry::{position, TrackSegment};
use crate::output::{FeatureObject, GeometryObject, Properties, PropertiesPlacement};

/// Anything that renders as a single GeoJSON Feature.
///
/// `feature_object` has no default body: a variant that does not say how it
/// renders does not compile.
pub trait Feature: fmt::Debug {
    fn feature_object(&self) -> FeatureObject;

    fn to_geojson(&self) -> String {
        self.feature_object().to_string()
    }

    fn to_geojson_feature(&self) -> geojson::Feature {
        geojson::Feature::from(&self.feature_object())
    }
}

/// A named or anonymous sequence of segments, rendered as a `MultiLineString`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    pub name: Option<String>,
    pub segments: Vec<TrackSegment>,
}

impl Track {
    pub fn new(segments: Vec<TrackSegment>) -> Self {
        Self {
            name: None,
            segments,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Feature for Track {
    fn feature_object(&self) -> FeatureObject {
        FeatureObject {
            geometry: GeometryObject::MultiLineString {
                coordinates: self.segments.iter().map(TrackSegment::positions).collect(),
            },
            properties: self
                .name
                .as_deref()
                .and_then(|name| Properties::from_parts(Some(name), None)),
            placement: PropertiesPlacement::BeforeGeometry,
        }
    }
}

impl From<&Track> for MultiLineString<f64> {
    fn from(track: &Track) -> Self {
        MultiLineString::new(track.segments.iter().map(LineString::from).collect())
    }
}

/// A single marked location, rendered as a `Point`.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub longitude: f64,
    pub latitude: f64,
    pub elevation: Option<f64>,
    pub name: Option<String>,
    pub icon: Option<String>,
}

impl Waypoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            elevation: None,
            name: None,
            icon: None,
        }
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

impl Feature for Waypoint {
    fn feature_object(&self) -> FeatureObject {
        FeatureObject {
            geometry: GeometryObject::Point {
                coordinates: position(self.longitude, self.latitude, self.elevation),
            },
            properties: Properties::from_parts(self.name.as_deref(), self.icon.as_deref()),
            placement: PropertiesPlacement::AfterGeometry,
        }
    }
}

impl From<&Waypoint> for geo::Point<f64> {
    fn from(waypoint: &Waypoint) -> Self {
        geo::Point(Coord {
            x: waypoint.longitude,
            y: waypoint.latitude,
        })
    }
}

/// Stand-in for a missing track: an empty `MultiLineString` with no properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullTrack;

impl Feature for NullTrack {
    fn feature_object(&self) -> FeatureObject {
        FeatureObject {
            geometry: GeometryObject::MultiLineString {
                coordinates: Vec::new(),
            },
            properties: None,
            placement: PropertiesPlacement::BeforeGeometry,
        }
    }
}

/// Stand-in for a missing waypoint. Unlike a bare `Waypoint`, it always
/// carries an empty `properties` object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullWaypoint;

impl Feature for NullWaypoint {
    fn feature_object(&self) -> FeatureObject {
        FeatureObject {
            geometry: GeometryObject::Point {
                coordinates: Vec::new(),
            },
            properties: Some(Properties::default()),
            placement: PropertiesPlacement::AfterGeometry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use serde_json::Value;

    fn segment(coords: &[(f64, f64)]) -> TrackSegment {
        TrackSegment::new(coords.iter().map(|&(lon, lat)| Point::new(lon, lat)).collect())
    }

    fn parse(feature: &dyn Feature) -> Value {
        serde_json::from_str(&feature.to_geojson()).unwrap()
    }

    #[test]
    fn track_with_name() {
        let track = Track::new(vec![
            segment(&[(-122.0, 45.0), (-122.0, 46.0), (-121.0, 46.0)]),
            segment(&[(-121.0, 45.0), (-121.0, 46.0)]),
        ])
        .named("track 1");

        assert_eq!(
            track.to_geojson(),
            r#"{"type":"Feature","properties":{"title":"track 1"},"geometry":{"type":"MultiLineString","coordinates":[[[-122,45],[-122,46],[-121,46]],[[-121,45],[-121,46]]]}}"#
        );
    }

    #[test]
    fn track_without_name_omits_properties() {
        let track = Track::new(vec![segment(&[(-121.0, 45.5), (-122.0, 45.5)])]);
        let json = parse(&track);
        assert!(json.get("properties").is_none());
        assert_eq!(
            track.to_geojson(),
            r#"{"type":"Feature","geometry":{"type":"MultiLineString","coordinates":[[[-121,45.5],[-122,45.5]]]}}"#
        );
    }

    #[test]
    fn track_groups_match_segments() {
        let segments = vec![
            segment(&[(0.0, 0.0)]),
            segment(&[]),
            segment(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]),
        ];
        let track = Track::new(segments.clone()).named("groups");
        let json = parse(&track);
        let groups = json["geometry"]["coordinates"].as_array().unwrap();
        assert_eq!(groups.len(), segments.len());
        for (group, segment) in groups.iter().zip(&segments) {
            assert_eq!(group.as_array().unwrap().len(), segment.points.len());
        }
        assert_eq!(json["properties"]["title"], "groups");
    }

    #[test]
    fn track_elevation_adds_third_ordinate() {
        let track = Track::new(vec![TrackSegment::new(vec![
            Point::new(-121.0, 45.0).with_elevation(100.5),
            Point::new(-121.0, 46.0),
        ])]);
        let json = parse(&track);
        assert_eq!(json["geometry"]["coordinates"][0][0].as_array().unwrap().len(), 3);
        assert_eq!(json["geometry"]["coordinates"][0][1].as_array().unwrap().len(), 2);
    }

    #[test]
    fn empty_track() {
        let track = Track::new(Vec::new());
        assert_eq!(
            track.to_geojson(),
            r#"{"type":"Feature","geometry":{"type":"MultiLineString","coordinates":[]}}"#
        );
    }

    #[test]
    fn waypoint_with_everything() {
        let waypoint = Waypoint::new(-121.5, 45.5)
            .with_elevation(30.0)
            .with_name("home")
            .with_icon("flag");
        assert_eq!(
            waypoint.to_geojson(),
            r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[-121.5,45.5,30]},"properties":{"title":"home","icon":"flag"}}"#
        );
    }

    #[test]
    fn waypoint_with_only_name_or_icon() {
        let named = Waypoint::new(-121.5, 45.6).with_name("store");
        assert_eq!(
            named.to_geojson(),
            r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[-121.5,45.6]},"properties":{"title":"store"}}"#
        );

        let iconic = Waypoint::new(-121.5, 45.6).with_icon("dot");
        assert_eq!(
            iconic.to_geojson(),
            r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[-121.5,45.6]},"properties":{"icon":"dot"}}"#
        );
    }

    #[test]
    fn bare_waypoint_omits_properties() {
        let waypoint = Waypoint::new(1.25, 2.0);
        assert_eq!(
            waypoint.to_geojson(),
            r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1.25,2]}}"#
        );
    }

    #[test]
    fn null_track_is_constant() {
        let expected =
            r#"{"type":"Feature","geometry":{"type":"MultiLineString","coordinates":[]}}"#;
        assert_eq!(NullTrack.to_geojson(), expected);
        assert_eq!(NullTrack::default().to_geojson(), expected);
    }

    #[test]
    fn null_waypoint_keeps_empty_properties() {
        let expected =
            r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[]},"properties":{}}"#;
        assert_eq!(NullWaypoint.to_geojson(), expected);
        assert_eq!(NullWaypoint.to_geojson(), expected);
    }

    #[test]
    fn converts_to_geo_types() {
        let track = Track::new(vec![
            segment(&[(-122.0, 45.0), (-122.0, 46.0)]),
            segment(&[(-121.0, 45.0), (-121.0, 46.0), (-120.0, 46.0)]),
        ]);
        let lines = MultiLineString::from(&track);
        assert_eq!(lines.0.len(), 2);
        assert_eq!(lines.0[1].0.len(), 3);

        let point = geo::Point::from(&Waypoint::new(-121.5, 45.5).with_elevation(30.0));
        assert_eq!(point.x(), -121.5);
        assert_eq!(point.y(), 45.5);
    }

    #[test]
    fn null_waypoint_geojson_feature_has_empty_properties() {
        let feature = NullWaypoint.to_geojson_feature();
        assert_eq!(feature.properties, Some(geojson::JsonObject::new()));
        assert!(NullTrack.to_geojson_feature().properties.is_none());
    }
}
