use geo::{Coord, LineString};

use crate::output::{Ordinate, Position};

/// A single coordinate: longitude, latitude and an optional elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub longitude: f64,
    pub latitude: f64,
    pub elevation: Option<f64>,
}

impl Point {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            elevation: None,
        }
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }

    /// `[lon, lat]`, or `[lon, lat, ele]` when an elevation is set.
    pub fn position(&self) -> Position {
        position(self.longitude, self.latitude, self.elevation)
    }
}

pub(crate) fn position(longitude: f64, latitude: f64, elevation: Option<f64>) -> Position {
    let mut position = vec![Ordinate(longitude), Ordinate(latitude)];
    if let Some(elevation) = elevation {
        position.push(Ordinate(elevation));
    }
    position
}

impl From<&Point> for Coord<f64> {
    fn from(point: &Point) -> Self {
        Coord {
            x: point.longitude,
            y: point.latitude,
        }
    }
}

/// An ordered run of points within a track.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackSegment {
    pub points: Vec<Point>,
}

impl TrackSegment {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn positions(&self) -> Vec<Position> {
        self.points.iter().map(Point::position).collect()
    }
}

impl From<Vec<Point>> for TrackSegment {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl From<&TrackSegment> for LineString<f64> {
    fn from(segment: &TrackSegment) -> Self {
        LineString::new(segment.points.iter().map(Coord::from).collect())
    }
}
