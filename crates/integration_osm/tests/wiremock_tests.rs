//! Integration tests for the OSM clients (wiremock-based)

use wiremock::matchers::{header_exists, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_osm::{
    Coordinate, GeocodingClient, NominatimConfig, NominatimGeocodingClient, OsmError, OsrmConfig,
    OsrmRoutingClient, RoutingClient,
};

const fn sample_search_json() -> &'static str {
    r#"[
        {
            "place_id": 1001,
            "lat": "42.8765615",
            "lon": "74.6037124",
            "display_name": "Ala-Too Square, Chuy Avenue, Bishkek, Kyrgyzstan",
            "address": {"road": "Chuy Avenue", "city": "Bishkek"}
        },
        {
            "place_id": 1002,
            "lat": "42.8700",
            "lon": "74.6000",
            "display_name": "Ala-Too Cinema, Bishkek, Kyrgyzstan",
            "address": {"city": "Bishkek"}
        }
    ]"#
}

const fn sample_route_json() -> &'static str {
    r#"{
        "code": "Ok",
        "routes": [
            {
                "distance": 12345.0,
                "duration": 930.0,
                "weight": 930.0,
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[74.6037, 42.8765], [74.5900, 42.8750], [74.5693, 42.8741]]
                },
                "legs": []
            },
            {
                "distance": 14000.0,
                "duration": 1100.0,
                "geometry": {"type": "LineString", "coordinates": [[74.6037, 42.8765], [74.5693, 42.8741]]},
                "legs": []
            }
        ],
        "waypoints": []
    }"#
}

fn waypoints() -> [Coordinate; 2] {
    [
        Coordinate::new(42.8765, 74.6037),
        Coordinate::new(42.8741, 74.5693),
    ]
}

#[tokio::test]
async fn test_search_with_address_details() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("format", "json"))
        .and(query_param("q", "Ala, Bishkek"))
        .and(query_param("addressdetails", "1"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_search_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&NominatimConfig::for_testing(&server.uri())).unwrap();
    let places = client.search("Ala, Bishkek", true).await.unwrap();

    assert_eq!(places.len(), 2);
    assert_eq!(
        places[0].display_name.as_deref(),
        Some("Ala-Too Square, Chuy Avenue, Bishkek, Kyrgyzstan")
    );
    assert_eq!(places[0].address.get("road").map(String::as_str), Some("Chuy Avenue"));
}

#[tokio::test]
async fn test_search_without_address_details() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Ala-Too Square"))
        .and(query_param_is_missing("addressdetails"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_search_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&NominatimConfig::for_testing(&server.uri())).unwrap();
    let places = client.search("Ala-Too Square", false).await.unwrap();

    let first = places[0].coordinates().unwrap();
    assert!((first.lat - 42.876_561_5).abs() < 1e-9);
    assert!((first.lon - 74.603_712_4).abs() < 1e-9);
}

#[tokio::test]
async fn test_search_empty_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&NominatimConfig::for_testing(&server.uri())).unwrap();
    assert!(client.search("Nowhere", false).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&NominatimConfig::for_testing(&server.uri())).unwrap();
    let err = client.search("Ala-Too", true).await.unwrap_err();
    assert!(matches!(err, OsmError::RequestFailed(_)));
}

#[tokio::test]
async fn test_search_invalid_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&NominatimConfig::for_testing(&server.uri())).unwrap();
    let err = client.search("Ala-Too", true).await.unwrap_err();
    assert!(matches!(err, OsmError::ParseError(_)));
}

#[tokio::test]
async fn test_search_connection_refused() {
    let config = NominatimConfig::for_testing("http://127.0.0.1:1");
    let client = NominatimGeocodingClient::new(&config).unwrap();
    let err = client.search("Ala-Too", true).await.unwrap_err();
    assert!(matches!(
        err,
        OsmError::ConnectionFailed(_) | OsmError::Timeout { .. }
    ));
}

#[tokio::test]
async fn test_route_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route/v1/driving/74.6037,42.8765;74.5693,42.8741"))
        .and(query_param("overview", "full"))
        .and(query_param("geometries", "geojson"))
        .and(query_param("alternatives", "true"))
        .and(query_param("steps", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_route_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = OsrmRoutingClient::new(&OsrmConfig::for_testing(&server.uri())).unwrap();
    let routes = client.route(&waypoints()).await.unwrap();

    assert_eq!(routes.len(), 2);
    assert!((routes[0].distance - 12345.0).abs() < f64::EPSILON);
    assert!((routes[0].duration - 930.0).abs() < f64::EPSILON);

    let line = routes[0].coordinates();
    assert_eq!(line.len(), 3);
    assert!((line[2].lat - 42.8741).abs() < f64::EPSILON);
    assert!((line[2].lon - 74.5693).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_route_custom_profile() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route/v1/foot/74.6037,42.8765;74.5693,42.8741"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_route_json()))
        .expect(1)
        .mount(&server)
        .await;

    let config = OsrmConfig {
        profile: "foot".to_string(),
        ..OsrmConfig::for_testing(&server.uri())
    };
    let client = OsrmRoutingClient::new(&config).unwrap();
    assert!(client.route(&waypoints()).await.is_ok());
}

#[tokio::test]
async fn test_route_no_route_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route/v1/driving/74.6037,42.8765;74.5693,42.8741"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"code": "NoRoute", "message": "Impossible route between points"}"#,
        ))
        .mount(&server)
        .await;

    let client = OsrmRoutingClient::new(&OsrmConfig::for_testing(&server.uri())).unwrap();
    let err = client.route(&waypoints()).await.unwrap_err();
    assert!(matches!(err, OsmError::NoRoute(ref m) if m.contains("Impossible route")));
}

#[tokio::test]
async fn test_route_ok_without_routes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"code": "Ok", "routes": []}"#))
        .mount(&server)
        .await;

    let client = OsrmRoutingClient::new(&OsrmConfig::for_testing(&server.uri())).unwrap();
    let err = client.route(&waypoints()).await.unwrap_err();
    assert!(matches!(err, OsmError::NoRoute(_)));
}

#[tokio::test]
async fn test_route_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = OsrmRoutingClient::new(&OsrmConfig::for_testing(&server.uri())).unwrap();
    let err = client.route(&waypoints()).await.unwrap_err();
    assert!(matches!(err, OsmError::RequestFailed(_)));
}

#[tokio::test]
async fn test_route_makes_no_request_for_one_waypoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_route_json()))
        .expect(0)
        .mount(&server)
        .await;

    let client = OsrmRoutingClient::new(&OsrmConfig::for_testing(&server.uri())).unwrap();
    let err = client.route(&waypoints()[..1]).await.unwrap_err();
    assert!(matches!(err, OsmError::InvalidRequest(_)));
}
