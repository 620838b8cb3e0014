#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoutePoint {
    // degrees, [-90, 90] / [-180, 180]
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteVector {
    pub route_points: Vec<RoutePoint>,
}
