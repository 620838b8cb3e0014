use assert_float_eq::assert_float_absolute_eq;
use voicecam_core::directions::{default_location, parse_directions_response, RouteResult};

const OK_RESPONSE: &str = r#"{
    "status": "OK",
    "routes": [
        {
            "summary": "I-80 W",
            "overview_polyline": { "points": "_p~iF~ps|U_ulLnnqC_mqNvxq`@" }
        }
    ]
}"#;

#[test]
fn parse_ok_response() {
    let result = parse_directions_response(OK_RESPONSE).unwrap();
    let route_vector = match result {
        RouteResult::Found(route_vector) => route_vector,
        RouteResult::NotFound => panic!("expected a route"),
    };
    assert_eq!(route_vector.route_points.len(), 3);
    assert_float_absolute_eq!(route_vector.route_points[0].latitude, 38.5, 1e-9);
    assert_float_absolute_eq!(route_vector.route_points[0].longitude, -120.2, 1e-9);
    assert_float_absolute_eq!(route_vector.route_points[2].latitude, 43.252, 1e-9);
    assert_float_absolute_eq!(route_vector.route_points[2].longitude, -126.453, 1e-9);
}

#[test]
fn zero_results_is_not_found() {
    let json = r#"{"status": "ZERO_RESULTS", "routes": []}"#;
    assert_eq!(
        parse_directions_response(json).unwrap(),
        RouteResult::NotFound
    );
}

#[test]
fn not_found_status_is_not_found() {
    let json = r#"{"status": "NOT_FOUND", "routes": []}"#;
    assert_eq!(
        parse_directions_response(json).unwrap(),
        RouteResult::NotFound
    );
}

#[test]
fn missing_routes_field_defaults_to_empty() {
    let json = r#"{"status": "ZERO_RESULTS"}"#;
    assert_eq!(
        parse_directions_response(json).unwrap(),
        RouteResult::NotFound
    );
}

#[test]
fn error_status_fails() {
    let json = r#"{"status": "REQUEST_DENIED", "routes": []}"#;
    assert!(parse_directions_response(json).is_err());
}

#[test]
fn ok_without_routes_fails() {
    let json = r#"{"status": "OK", "routes": []}"#;
    assert!(parse_directions_response(json).is_err());
}

#[test]
fn malformed_json_fails() {
    assert!(parse_directions_response("not json at all").is_err());
}

#[test]
fn malformed_polyline_fails() {
    let json = r#"{
        "status": "OK",
        "routes": [{"overview_polyline": {"points": "_p~iF~ps|U_"}}]
    }"#;
    assert!(parse_directions_response(json).is_err());
}

#[test]
fn empty_polyline_is_not_found() {
    let json = r#"{
        "status": "OK",
        "routes": [{"overview_polyline": {"points": ""}}]
    }"#;
    assert_eq!(
        parse_directions_response(json).unwrap(),
        RouteResult::NotFound
    );
}

#[test]
fn default_location_is_san_francisco() {
    let location = default_location();
    assert_float_absolute_eq!(location.latitude, 37.7749, 1e-9);
    assert_float_absolute_eq!(location.longitude, -122.4194, 1e-9);
}
