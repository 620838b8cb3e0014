use voicecam_core::export_data::{route_vector_to_gpx, write_route_gpx};
use voicecam_core::route_vector::{RoutePoint, RouteVector};

fn sample_route() -> RouteVector {
    RouteVector {
        route_points: vec![
            RoutePoint {
                latitude: 38.5,
                longitude: -120.2,
            },
            RoutePoint {
                latitude: 40.7,
                longitude: -120.95,
            },
            RoutePoint {
                latitude: 43.252,
                longitude: -126.453,
            },
        ],
    }
}

#[test]
fn gpx_keeps_every_point_in_order() {
    let gpx = route_vector_to_gpx(&sample_route()).unwrap();
    assert_eq!(gpx.tracks.len(), 1);
    assert_eq!(gpx.tracks[0].segments.len(), 1);

    let points = &gpx.tracks[0].segments[0].points;
    assert_eq!(points.len(), 3);
    // x is longitude, y is latitude
    assert_eq!(points[0].point().x(), -120.2);
    assert_eq!(points[0].point().y(), 38.5);
    assert_eq!(points[2].point().x(), -126.453);
    assert_eq!(points[2].point().y(), 43.252);
}

#[test]
fn written_gpx_contains_track_points() {
    let mut buf = Vec::new();
    write_route_gpx(&sample_route(), &mut buf).unwrap();
    let xml = String::from_utf8(buf).unwrap();
    assert!(xml.contains("<trkpt"));
    assert!(xml.contains("38.5"));
    assert!(xml.contains("-120.2"));
}
