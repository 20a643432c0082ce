mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use common::{StubReply, count_lookups, spawn_stub_catalog};
use movie_catalog::api::handlers::{get_movie_handler, list_movies_handler};
use serde_json::{Value, json};
use sqlx::PgPool;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(2);

fn batman_begins_body() -> Value {
    json!({
        "Title": "Batman Begins",
        "Year": "2005",
        "Released": "15 Jun 2005",
        "imdbRating": "8.2",
        "imdbID": "tt0372784",
        "Response": "True"
    })
}

fn make_server(pool: PgPool, base_url: &str, timeout: Duration) -> TestServer {
    let state = common::create_test_state(pool, base_url, timeout);
    let app = Router::new()
        .route("/movies", get(list_movies_handler))
        .route("/movies/{id}", get(get_movie_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_get_movie_records_lookup(pool: PgPool) {
    let stub = spawn_stub_catalog(StubReply::json(batman_begins_body())).await;
    let server = make_server(pool.clone(), &stub.base_url, TIMEOUT);

    let response = server.get("/movies/tt0372784").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "imdb_id": "tt0372784",
            "title": "Batman Begins",
            "year": "2005",
            "released": "15 Jun 2005",
            "imdb_rating": "8.2"
        })
    );

    let row: (String, String, String, String) = sqlx::query_as(
        "SELECT title, year, released, imdb_rating FROM movie_lookups WHERE imdb_id = $1",
    )
    .bind("tt0372784")
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(
        row,
        (
            "Batman Begins".to_string(),
            "2005".to_string(),
            "15 Jun 2005".to_string(),
            "8.2".to_string()
        )
    );
    assert_eq!(count_lookups(&pool, "tt0372784").await, 1);
}

#[sqlx::test]
async fn test_get_movie_upstream_failure_records_nothing(pool: PgPool) {
    let stub = spawn_stub_catalog(StubReply::status(
        StatusCode::INTERNAL_SERVER_ERROR,
        "upstream exploded",
    ))
    .await;
    let server = make_server(pool.clone(), &stub.base_url, TIMEOUT);

    let response = server.get("/movies/tt0372784").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<Value>();
    assert!(json["message"].as_str().unwrap().contains("500"));
    assert_eq!(count_lookups(&pool, "tt0372784").await, 0);
}

#[sqlx::test]
async fn test_get_movie_not_found_records_nothing(pool: PgPool) {
    let stub = spawn_stub_catalog(StubReply::json(
        json!({"Response": "False", "Error": "Incorrect IMDb ID."}),
    ))
    .await;
    let server = make_server(pool.clone(), &stub.base_url, TIMEOUT);

    let response = server.get("/movies/tt0000000").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Incorrect IMDb ID." })
    );
    assert_eq!(count_lookups(&pool, "tt0000000").await, 0);
}

#[sqlx::test]
async fn test_get_movie_timeout_records_nothing(pool: PgPool) {
    let stub = spawn_stub_catalog(
        StubReply::json(batman_begins_body()).delayed(Duration::from_secs(10)),
    )
    .await;
    let server = make_server(pool.clone(), &stub.base_url, Duration::from_millis(100));

    let response = server.get("/movies/tt0372784").await;

    response.assert_status(StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(count_lookups(&pool, "tt0372784").await, 0);
}

#[sqlx::test]
async fn test_get_movie_repeated_lookups_append_rows(pool: PgPool) {
    let stub = spawn_stub_catalog(StubReply::json(batman_begins_body())).await;
    let server = make_server(pool.clone(), &stub.base_url, TIMEOUT);

    for _ in 0..3 {
        server.get("/movies/tt0372784").await.assert_status_ok();
    }

    assert_eq!(count_lookups(&pool, "tt0372784").await, 3);
}

#[sqlx::test]
async fn test_list_movies_records_nothing(pool: PgPool) {
    let stub = spawn_stub_catalog(StubReply::json(json!({
        "Search": [
            {"Title": "Batman Begins", "Year": "2005", "imdbID": "tt0372784"},
            {"Title": "Batman", "Year": "1989", "imdbID": "tt0096895"}
        ],
        "totalResults": "12",
        "Response": "True"
    })))
    .await;
    let server = make_server(pool.clone(), &stub.base_url, TIMEOUT);

    let response = server
        .get("/movies")
        .add_query_param("searchword", "batman")
        .add_query_param("page", "1")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("x-cursor"), "2");
    assert_eq!(response.json::<Vec<Value>>().len(), 2);

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movie_lookups")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(total, 0);
}
