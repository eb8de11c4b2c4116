pub mod feature;
pub mod geometry;
pub mod output;
pub mod world;

pub use feature::{Feature, NullTrack, NullWaypoint, Track, Waypoint};
pub use geometry::{Point, TrackSegment};
pub use world::World;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to encode GeoJSON: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
