use std::io::Write;

use anyhow::Result;
use geo_types::Point;
use gpx::{Gpx, GpxVersion, Track, TrackSegment, Waypoint};

use crate::route_vector::RouteVector;

pub fn route_vector_to_gpx(route_vector: &RouteVector) -> Result<Gpx> {
    let mut points = Vec::new();
    route_vector.route_points.iter().for_each(|point| {
        // gpx wants x = longitude, y = latitude
        points.push(Waypoint::new(Point::new(point.longitude, point.latitude)));
    });
    let track = Track {
        name: Some("Route".to_string()),
        comment: None,
        description: None,
        source: None,
        links: vec![],
        type_: None,
        number: None,
        segments: vec![TrackSegment { points }],
    };
    let gpx = Gpx {
        version: GpxVersion::Gpx11,
        creator: Some("voicecam_core".to_string()),
        metadata: None,
        waypoints: vec![],
        tracks: vec![track],
        routes: vec![],
    };
    Ok(gpx)
}

pub fn write_route_gpx<W: Write>(route_vector: &RouteVector, writer: W) -> Result<()> {
    let gpx = route_vector_to_gpx(route_vector)?;
    gpx::write(&gpx, writer)?;
    Ok(())
}
