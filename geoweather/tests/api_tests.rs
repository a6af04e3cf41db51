//! HTTP tests for the forecast client and the network locators, against wiremock.

use std::time::Duration;

use geoweather::api::{WeatherClient, WeatherSource};
use geoweather::locate::{CityLocator, IpLocator, Locator};
use geoweather_core::{Coordinate, FetchError, LocateError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "latitude": 50.45,
        "longitude": 30.52,
        "timezone": "Europe/Kyiv",
        "current": {
            "time": "2026-10-17T12:00",
            "interval": 900,
            "temperature_2m": 9.5,
            "relative_humidity_2m": 81,
            "apparent_temperature": 7.2,
            "precipitation": 0.4,
            "weather_code": 61,
            "wind_speed_10m": 14.0,
            "wind_direction_10m": 315,
            "surface_pressure": 1001.4
        }
    })
}

fn client(server: &MockServer, route: &str) -> WeatherClient {
    WeatherClient::new(format!("{}{}", server.uri(), route), Duration::from_secs(5))
        .expect("client")
}

#[tokio::test]
async fn test_forecast_request_and_mapping() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "50.45"))
        .and(query_param("longitude", "30.52"))
        .and(query_param("timezone", "auto"))
        .and(query_param(
            "current",
            "temperature_2m,relative_humidity_2m,apparent_temperature,precipitation,\
             weather_code,wind_speed_10m,wind_direction_10m,surface_pressure",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot = client(&server, "/v1/forecast")
        .current_weather(Coordinate::new(50.45, 30.52))
        .await
        .expect("snapshot");

    assert_eq!(snapshot.timezone, "Europe/Kyiv");
    assert_eq!(snapshot.humidity, 81);
    assert_eq!(snapshot.weather_code, 61);
    assert_eq!(snapshot.description(), "Rainy");
    assert_eq!(snapshot.wind_direction, 315.0);
}

#[tokio::test]
async fn test_forecast_server_error_is_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client(&server, "/v1/forecast")
        .current_weather(Coordinate::new(0.0, 0.0))
        .await;

    assert_eq!(result, Err(FetchError::Status(500)));
}

#[tokio::test]
async fn test_forecast_bad_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = client(&server, "/v1/forecast")
        .current_weather(Coordinate::new(0.0, 0.0))
        .await;

    assert!(matches!(result, Err(FetchError::Parse(_))), "{result:?}");
}

#[tokio::test]
async fn test_forecast_missing_field_is_parse_error() {
    let server = MockServer::start().await;

    let mut body = forecast_body();
    body["current"]
        .as_object_mut()
        .expect("object")
        .remove("weather_code");

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let result = client(&server, "/v1/forecast")
        .current_weather(Coordinate::new(0.0, 0.0))
        .await;

    assert!(matches!(result, Err(FetchError::Parse(_))), "{result:?}");
}

#[tokio::test]
async fn test_ip_locator_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json/"))
        .and(query_param("fields", "status,message,lat,lon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "lat": 38.72,
            "lon": -9.14
        })))
        .mount(&server)
        .await;

    let locator = IpLocator::new(reqwest::Client::new(), format!("{}/json/", server.uri()));
    let coordinate = locator.current_position().await.expect("coordinate");

    assert_eq!(coordinate, Coordinate::new(38.72, -9.14));
}

#[tokio::test]
async fn test_ip_locator_forbidden_is_permission_denied() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let locator = IpLocator::new(reqwest::Client::new(), format!("{}/json/", server.uri()));
    let result = locator.current_position().await;

    assert!(matches!(result, Err(LocateError::PermissionDenied(_))), "{result:?}");
}

#[tokio::test]
async fn test_ip_locator_failed_lookup_is_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "fail",
            "message": "private range"
        })))
        .mount(&server)
        .await;

    let locator = IpLocator::new(reqwest::Client::new(), format!("{}/json/", server.uri()));
    let result = locator.current_position().await;

    assert_eq!(
        result,
        Err(LocateError::PositionUnavailable("private range".into()))
    );
}

#[tokio::test]
async fn test_city_locator_resolves_first_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Lisbon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                { "latitude": 38.72, "longitude": -9.13 },
                { "latitude": 0.0, "longitude": 0.0 }
            ]
        })))
        .mount(&server)
        .await;

    let locator = CityLocator::new(
        reqwest::Client::new(),
        format!("{}/v1/search", server.uri()),
        "Lisbon",
    );

    assert_eq!(
        locator.current_position().await,
        Ok(Coordinate::new(38.72, -9.13))
    );
}

#[tokio::test]
async fn test_city_locator_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let locator = CityLocator::new(
        reqwest::Client::new(),
        format!("{}/v1/search", server.uri()),
        "Atlantis",
    );
    let result = locator.current_position().await;

    match result {
        Err(LocateError::PositionUnavailable(message)) => {
            assert!(message.contains("Atlantis"), "{message}");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
