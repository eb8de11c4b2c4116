use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::{info, Level};

use gis_world::{NullTrack, NullWaypoint, Point, Track, TrackSegment, Waypoint, World};

#[derive(Parser)]
#[command(about = "Render a collection of waypoints and tracks as GeoJSON")]
struct Cli {
    /// Write the FeatureCollection here instead of standard output
    #[arg(long)]
    output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log debug events
    #[arg(long, short, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(long, short)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }
}

fn sample_world() -> World {
    let home = Waypoint::new(-121.5, 45.5)
        .with_elevation(30.0)
        .with_name("home")
        .with_icon("flag");
    let store = Waypoint::new(-121.5, 45.6).with_name("store").with_icon("dot");

    let segment_1 = TrackSegment::new(vec![
        Point::new(-122.0, 45.0),
        Point::new(-122.0, 46.0),
        Point::new(-121.0, 46.0),
    ]);
    let segment_2 = TrackSegment::new(vec![Point::new(-121.0, 45.0), Point::new(-121.0, 46.0)]);
    let segment_3 = TrackSegment::new(vec![Point::new(-121.0, 45.5), Point::new(-122.0, 45.5)]);

    let track_1 = Track::new(vec![segment_1, segment_2]).named("track 1");
    let track_2 = Track::new(vec![segment_3]).named("track 2");

    let mut world = World::new("My Data");
    world.add_feature(home);
    world.add_feature(store);
    world.add_feature(track_1);
    world.add_feature(track_2);
    world.add_feature(NullTrack);
    world.add_feature(NullWaypoint);
    world
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(cli.log_level())
        .init();

    let world = sample_world();
    info!("Built world {:?} with {} features", world.name(), world.len());

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            world.write_geojson(BufWriter::new(file), cli.pretty)?;
            info!("Wrote {}", path.display());
        }
        None => world.write_geojson(io::stdout().lock(), cli.pretty)?,
    }

    Ok(())
}
