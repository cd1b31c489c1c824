use std::f64::consts::PI;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Sphere radius used by the Web Mercator projection (EPSG:3857), in meters.
pub const EARTH_RADIUS_WEB_MERCATOR_M: f64 = 6378137.0;

pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Rounds half away from zero to the given number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Great-circle distance in kilometers between two points given in degrees.
pub fn haversine_distance(
    latitude_1: f64,
    longitude_1: f64,
    latitude_2: f64,
    longitude_2: f64,
) -> f64 {
    let lat1_rad = to_radians(latitude_1);
    let lon1_rad = to_radians(longitude_1);
    let lat2_rad = to_radians(latitude_2);
    let lon2_rad = to_radians(longitude_2);

    let dlat = lat2_rad - lat1_rad;
    let dlon = lon2_rad - lon1_rad;

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Projects `(longitude, latitude)` in degrees to Web Mercator meters.
pub fn lon_lat_to_web_mercator(longitude: f64, latitude: f64) -> (f64, f64) {
    let x = EARTH_RADIUS_WEB_MERCATOR_M * to_radians(longitude);
    let y = EARTH_RADIUS_WEB_MERCATOR_M
        * (PI / 4.0 + to_radians(latitude) / 2.0).tan().ln();
    (x, y)
}

/// Inverse of [`lon_lat_to_web_mercator`].
pub fn web_mercator_to_lon_lat(x: f64, y: f64) -> (f64, f64) {
    let longitude = to_degrees(x / EARTH_RADIUS_WEB_MERCATOR_M);
    let latitude = to_degrees(
        2.0 * (y / EARTH_RADIUS_WEB_MERCATOR_M).exp().atan() - PI / 2.0,
    );
    (longitude, latitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected} (+/- {tolerance}), got {actual}"
        );
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let distance = haversine_distance(0.0, 0.0, 1.0, 0.0);
        assert_close(distance, 111.1949, 1e-4);
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let distance = haversine_distance(0.0, 0.0, 0.0, 1.0);
        assert_close(distance, 111.1949, 1e-4);
    }

    #[test]
    fn test_identical_points() {
        assert_eq!(haversine_distance(54.32, 10.13, 54.32, 10.13), 0.0);
    }

    #[test]
    fn test_antipodal_points() {
        let distance = haversine_distance(0.0, 0.0, 0.0, 180.0);
        assert_close(distance, PI * EARTH_RADIUS_KM, 1e-6);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(111.194_926, 2), 111.19);
        assert_eq!(round_to(0.125, 1), 0.1);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn test_web_mercator_origin() {
        let (x, y) = lon_lat_to_web_mercator(0.0, 0.0);
        assert_close(x, 0.0, 1e-9);
        assert_close(y, 0.0, 1e-9);
    }

    #[test]
    fn test_web_mercator_known_point() {
        // Kiel, as reported by the map in EPSG:3857
        let (x, y) = lon_lat_to_web_mercator(10.1228, 54.3233);
        assert_close(x, 1_126_864.94, 0.01);
        assert_close(y, 7_231_624.78, 0.01);

        let (longitude, latitude) = web_mercator_to_lon_lat(x, y);
        assert_close(longitude, 10.1228, 1e-9);
        assert_close(latitude, 54.3233, 1e-9);
    }

    #[test]
    fn test_web_mercator_antimeridian() {
        let (longitude, latitude) =
            web_mercator_to_lon_lat(PI * EARTH_RADIUS_WEB_MERCATOR_M, 0.0);
        assert_close(longitude, 180.0, 1e-9);
        assert_close(latitude, 0.0, 1e-9);
    }
}
