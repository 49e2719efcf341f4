//! HTTP routes end to end over SQLite

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use common::*;
use http_body_util::BodyExt;
use listing_service::config::Config;
use listing_service::ListingServiceModule;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn app() -> Router {
    let db = sqlite_db().await;
    let module = ListingServiceModule::default();
    module.init(db, Config::default()).unwrap();
    module.register_rest(Router::new()).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn venue_body(name: &str) -> Value {
    json!({
        "name": name,
        "city": "San Francisco",
        "state": "CA",
        "address": "1015 Folsom Street",
        "genres": ["Jazz", "Reggae"],
        "facebook_link": "https://www.facebook.com/TheMusicalHop",
        "seeking_talent": true
    })
}

fn artist_body(name: &str) -> Value {
    json!({
        "name": name,
        "city": "San Francisco",
        "state": "CA",
        "genres": ["Rock n Roll"]
    })
}

#[tokio::test]
async fn create_venue_flashes_success() {
    let app = app().await;

    let (status, body) = send(&app, "POST", "/venues", Some(venue_body("The Musical Hop"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Venue The Musical Hop was successfully listed!");
    assert_eq!(body["venue"]["genres"], json!(["Jazz", "Reggae"]));
}

#[tokio::test]
async fn missing_fields_are_a_bad_request() {
    let app = app().await;

    let (status, body) = send(&app, "POST", "/venues", Some(json!({"name": "Half a venue"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["detail"], "missing required fields: city, state, address");
}

#[tokio::test]
async fn venue_page_reports_counts() {
    let app = app().await;
    let (_, venue) = send(&app, "POST", "/venues", Some(venue_body("The Musical Hop"))).await;
    let (_, artist) = send(&app, "POST", "/artists", Some(artist_body("Guns N Petals"))).await;
    let venue_id = venue["venue"]["id"].as_i64().unwrap();
    let artist_id = artist["artist"]["id"].as_i64().unwrap();

    let (status, show) = send(
        &app,
        "POST",
        "/shows",
        Some(json!({
            "artist_id": artist_id,
            "venue_id": venue_id,
            "start_time": "2019-05-21 21:30:00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(show["message"], "Show was successfully listed!");

    let (status, page) = send(&app, "GET", &format!("/venues/{venue_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["name"], "The Musical Hop");
    assert_eq!(page["past_shows_count"], 1);
    assert_eq!(page["upcoming_shows_count"], 0);
    assert_eq!(page["past_shows"][0]["artist_name"], "Guns N Petals");
    assert_eq!(page["past_shows"][0]["start_time"], "2019-05-21 21:30:00");

    let (_, page) = send(&app, "GET", &format!("/artists/{artist_id}"), None).await;
    assert_eq!(page["past_shows"][0]["venue_name"], "The Musical Hop");
}

#[tokio::test]
async fn show_for_unknown_artist_is_unprocessable() {
    let app = app().await;
    let (_, venue) = send(&app, "POST", "/venues", Some(venue_body("The Musical Hop"))).await;

    let (status, body) = send(
        &app,
        "POST",
        "/shows",
        Some(json!({
            "artist_id": 77,
            "venue_id": venue["venue"]["id"],
            "start_time": "2035-04-01T20:00:00Z"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "An error occurred. Show could not be listed.");
    let (_, shows) = send(&app, "GET", "/shows", None).await;
    assert_eq!(shows, json!([]));
}

#[tokio::test]
async fn search_returns_count_and_data() {
    let app = app().await;
    send(&app, "POST", "/venues", Some(venue_body("The Musical Hop"))).await;
    send(&app, "POST", "/venues", Some(venue_body("Park Square Live Music & Coffee"))).await;

    let (status, body) = send(
        &app,
        "POST",
        "/venues/search",
        Some(json!({"search_term": "MUSIC"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);

    let (_, body) = send(&app, "POST", "/artists/search", Some(json!({"search_term": "x"}))).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn edit_update_and_delete_venue() {
    let app = app().await;
    let (_, created) = send(&app, "POST", "/venues", Some(venue_body("The Musical Hop"))).await;
    let id = created["venue"]["id"].as_i64().unwrap();

    let (status, edit) = send(&app, "GET", &format!("/venues/{id}/edit"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(edit["address"], "1015 Folsom Street");

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/venues/{id}"),
        Some(venue_body("The Musical Hop Annex")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["message"], "Venue The Musical Hop Annex was successfully updated!");

    let (status, deleted) = send(&app, "DELETE", &format!("/venues/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Venue deleted successfully!");

    let (status, missing) = send(&app, "GET", &format!("/venues/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["status"], 404);
}

#[tokio::test]
async fn venues_list_groups_by_area() {
    let app = app().await;
    send(&app, "POST", "/venues", Some(venue_body("The Musical Hop"))).await;
    let mut ny = venue_body("The Dueling Pianos Bar");
    ny["city"] = json!("New York");
    ny["state"] = json!("NY");
    send(&app, "POST", "/venues", Some(ny)).await;

    let (status, areas) = send(&app, "GET", "/venues", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(areas[0]["city"], "New York");
    assert_eq!(areas[1]["venues"][0]["name"], "The Musical Hop");
    assert_eq!(areas[1]["venues"][0]["num_upcoming_shows"], 0);
}

#[tokio::test]
async fn artists_list_is_id_and_name() {
    let app = app().await;
    send(&app, "POST", "/artists", Some(artist_body("Guns N Petals"))).await;
    send(&app, "POST", "/artists", Some(artist_body("Matt Quevedo"))).await;

    let (_, artists) = send(&app, "GET", "/artists", None).await;

    assert_eq!(
        artists,
        json!([{"id": 1, "name": "Guns N Petals"}, {"id": 2, "name": "Matt Quevedo"}])
    );
}
