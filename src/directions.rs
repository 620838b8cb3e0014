use anyhow::Result;
use serde::Deserialize;

use crate::polyline::decode_polyline;
use crate::route_vector::{RoutePoint, RouteVector};

const DIRECTIONS_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/directions/json";

// Only `status` and the overview polyline of the first route are consumed,
// the rest of the payload is ignored.
#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    overview_polyline: OverviewPolyline,
}

#[derive(Debug, Deserialize)]
struct OverviewPolyline {
    points: String,
}

#[derive(Debug, PartialEq)]
pub enum RouteResult {
    Found(RouteVector),
    /// The query was well-formed but no route exists between the endpoints.
    /// Kept apart from `Err` so callers can tell "nothing there" from a
    /// failed lookup.
    NotFound,
}

pub fn default_location() -> RoutePoint {
    RoutePoint {
        latitude: 37.7749,
        longitude: -122.4194,
    }
}

pub fn parse_directions_response(json: &str) -> Result<RouteResult> {
    let response: DirectionsResponse = serde_json::from_str(json)?;
    match response.status.as_str() {
        "OK" => (),
        "ZERO_RESULTS" | "NOT_FOUND" => return Ok(RouteResult::NotFound),
        status => bail!("directions query failed with status {}", status),
    }
    let route = match response.routes.first() {
        Some(route) => route,
        None => bail!("directions response has status OK but no routes"),
    };
    let route_points = decode_polyline(&route.overview_polyline.points)?;
    if route_points.is_empty() {
        return Ok(RouteResult::NotFound);
    }
    Ok(RouteResult::Found(RouteVector { route_points }))
}

pub struct DirectionsClient {
    http: reqwest::Client,
    api_key: String,
}

impl DirectionsClient {
    pub fn new(api_key: &str) -> Self {
        DirectionsClient {
            http: reqwest::Client::new(),
            api_key: api_key.to_string(),
        }
    }

    pub async fn query_route(
        &self,
        origin: &RoutePoint,
        destination: &RoutePoint,
    ) -> Result<RouteResult> {
        debug!(
            "[directions] querying route ({},{}) -> ({},{})",
            origin.latitude, origin.longitude, destination.latitude, destination.longitude
        );
        let response = self
            .http
            .get(DIRECTIONS_ENDPOINT)
            .query(&[
                (
                    "origin",
                    format!("{},{}", origin.latitude, origin.longitude),
                ),
                (
                    "destination",
                    format!("{},{}", destination.latitude, destination.longitude),
                ),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        parse_directions_response(&body)
    }
}
