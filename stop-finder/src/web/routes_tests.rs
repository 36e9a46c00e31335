//! Router tests against mocked Mapbox and MBTA servers.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::geocoder::{GeocoderConfig, MapboxGeocoder};
use crate::stops::{MbtaStopLocator, StopsConfig};

const GEOCODE_PATH: &str = "/search/geocode/v6/forward";

struct Upstreams {
    mapbox: MockServer,
    mbta: MockServer,
}

impl Upstreams {
    async fn start() -> Self {
        Self {
            mapbox: MockServer::start().await,
            mbta: MockServer::start().await,
        }
    }

    fn router(&self) -> axum::Router {
        let geocoder =
            MapboxGeocoder::new(GeocoderConfig::new("test-token").with_base_url(self.mapbox.uri()))
                .unwrap();
        let locator =
            MbtaStopLocator::new(StopsConfig::default().with_base_url(self.mbta.uri())).unwrap();
        create_router(AppState::new(geocoder, locator))
    }

    async fn geocodes(&self, place: &str, lng: f64, lat: f64) {
        Mock::given(method("GET"))
            .and(path(GEOCODE_PATH))
            .and(query_param("q", place))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": {"type": "Point", "coordinates": [lng, lat]},
                    "properties": {"name": place}
                }]
            })))
            .expect(1)
            .mount(&self.mapbox)
            .await;
    }

    async fn nearest_stop(&self, name: &str, wheelchair_boarding: i64) {
        Mock::given(method("GET"))
            .and(path("/stops"))
            .and(query_param("sort", "distance"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{
                    "type": "stop",
                    "id": "place-x",
                    "attributes": {"name": name, "wheelchair_boarding": wheelchair_boarding}
                }]
            })))
            .expect(1)
            .mount(&self.mbta)
            .await;
    }

    async fn expect_no_stop_lookup(&self) {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(0)
            .mount(&self.mbta)
            .await;
    }
}

async fn submit(router: axum::Router, form_body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form_body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn index_renders_form() {
    let upstreams = Upstreams::start().await;
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = upstreams.router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains(r#"name="place_name""#));
}

#[tokio::test]
async fn prudential_renders_place_and_station() {
    let upstreams = Upstreams::start().await;
    upstreams.geocodes("Prudential", -71.0818, 42.3471).await;
    upstreams.nearest_stop("Prudential Station", 1).await;

    let (status, html) = submit(upstreams.router(), "place_name=Prudential").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<dd class="place">Prudential</dd>"#));
    assert!(html.contains(r#"<dd class="station">Prudential Station</dd>"#));
    assert!(html.contains("Wheelchair accessible: Yes"));
}

#[tokio::test]
async fn place_name_with_spaces_is_escaped_for_geocoder() {
    let upstreams = Upstreams::start().await;
    upstreams.geocodes("Fenway Park, Boston", -71.0972, 42.3467).await;
    upstreams.nearest_stop("Kenmore", 2).await;

    let (status, html) = submit(upstreams.router(), "place_name=Fenway+Park%2C+Boston").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Kenmore"));
    assert!(html.contains("Wheelchair accessible: No"));
}

#[tokio::test]
async fn unknown_place_renders_not_found_without_stop_lookup() {
    let upstreams = Upstreams::start().await;
    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"features": []})))
        .mount(&upstreams.mapbox)
        .await;
    upstreams.expect_no_stop_lookup().await;

    let (status, html) = submit(upstreams.router(), "place_name=Atlantis").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("could not determine location"));
}

#[tokio::test]
async fn garbled_geocoder_response_is_treated_as_not_found() {
    let upstreams = Upstreams::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"features\": ["))
        .mount(&upstreams.mapbox)
        .await;
    upstreams.expect_no_stop_lookup().await;

    let (status, html) = submit(upstreams.router(), "place_name=Boston").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("could not determine location"));
}

#[tokio::test]
async fn no_stops_renders_not_found() {
    let upstreams = Upstreams::start().await;
    upstreams.geocodes("Nantucket", -70.0995, 41.2835).await;
    Mock::given(method("GET"))
        .and(path("/stops"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&upstreams.mbta)
        .await;

    let (status, html) = submit(upstreams.router(), "place_name=Nantucket").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("no nearby stop found"));
}

#[tokio::test]
async fn stop_with_null_name_renders_not_found() {
    let upstreams = Upstreams::start().await;
    upstreams.geocodes("Nantucket", -70.0995, 41.2835).await;
    Mock::given(method("GET"))
        .and(path("/stops"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"attributes": {"name": null, "wheelchair_boarding": 1}}]
        })))
        .expect(1)
        .mount(&upstreams.mbta)
        .await;

    let (status, html) = submit(upstreams.router(), "place_name=Nantucket").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("no nearby stop found"));
}

#[tokio::test]
async fn malformed_feature_renders_generic_error() {
    let upstreams = Upstreams::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"features": [{"properties": {}}]})),
        )
        .mount(&upstreams.mapbox)
        .await;
    upstreams.expect_no_stop_lookup().await;

    let (status, html) = submit(upstreams.router(), "place_name=Boston").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(html.contains("Something went wrong"));
    assert!(html.contains("malformed geocoding feature"));
}

#[tokio::test]
async fn blank_place_name_is_bad_request() {
    let upstreams = Upstreams::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstreams.mapbox)
        .await;

    for body in ["place_name=+++", ""] {
        let (status, html) = submit(upstreams.router(), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(html.contains("Please enter a place name"));
    }
}
