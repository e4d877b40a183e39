//! Catalog, category and user endpoints over the in-memory store.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_category, get, get_auth, memory_app, post_json, post_json_auth,
    post_raw_auth, publish, signup,
};
use creatorhub_api::seed::seed_demo_data;
use creatorhub_db::models::asset::CreateAsset;
use creatorhub_db::EntityStore;
use serde_json::{json, Value};

fn ids(json: &Value) -> Vec<i64> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect()
}

fn asset_body(title: &str, category_id: i64, featured: bool) -> Value {
    json!({
        "title": title,
        "preview_url": format!("https://cdn.example.com/{title}.png"),
        "price": 19.0,
        "category_id": category_id,
        "featured": featured,
    })
}

// ---------------------------------------------------------------------------
// Publishing and listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn graphics_scenario_counts_and_lists() {
    let (_store, app) = memory_app();
    let (creator_id, token) = signup(&app, "designpro", true).await;
    let graphics = create_category(&app, &token, "Graphics").await;

    let mut published = Vec::new();
    for (title, featured) in [("one", true), ("two", false), ("three", true)] {
        let asset = publish(&app, &token, asset_body(title, graphics, featured)).await;
        assert_eq!(asset["creator_id"], creator_id);
        assert_eq!(asset["download_count"], 0);
        published.push(asset["id"].as_i64().unwrap());
    }

    let category =
        body_json(get(app.clone(), &format!("/api/v1/categories/{graphics}")).await).await;
    assert_eq!(category["data"]["asset_count"], 3);

    let all = body_json(get(app.clone(), "/api/v1/assets").await).await;
    assert_eq!(ids(&all), published);

    let featured = body_json(get(app.clone(), "/api/v1/assets?featured=true").await).await;
    assert_eq!(ids(&featured), vec![published[0], published[2]]);

    let limited = body_json(get(app, "/api/v1/assets?featured=true&limit=1").await).await;
    assert_eq!(ids(&limited), vec![published[0]]);
}

#[tokio::test]
async fn asset_json_is_flat_with_projections() {
    let (_store, app) = memory_app();
    let (creator_id, token) = signup(&app, "designpro", true).await;
    let graphics = create_category(&app, &token, "Graphics").await;
    let asset = publish(&app, &token, asset_body("kit", graphics, false)).await;
    let id = asset["id"].as_i64().unwrap();

    let response = get(app, &format!("/api/v1/assets/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(data["title"], "kit");
    assert!(data["description"].is_null());
    assert_eq!(data["tags"], json!([]));
    assert_eq!(data["creator"]["id"], creator_id);
    assert_eq!(data["creator"]["username"], "designpro");
    assert!(data["creator"].get("password_hash").is_none());
    assert_eq!(data["category"]["id"], graphics);
    assert_eq!(data["category"]["name"], "Graphics");
    assert!(data["category"].get("asset_count").is_none());
}

#[tokio::test]
async fn filters_by_category_and_creator() {
    let (_store, app) = memory_app();
    let (alice, alice_token) = signup(&app, "alice", true).await;
    let (_bob, bob_token) = signup(&app, "bob", true).await;
    let graphics = create_category(&app, &alice_token, "Graphics").await;
    let audio = create_category(&app, &alice_token, "Audio").await;

    publish(&app, &alice_token, asset_body("a-graphic", graphics, false)).await;
    let a_audio = publish(&app, &alice_token, asset_body("a-audio", audio, false)).await;
    publish(&app, &bob_token, asset_body("b-audio", audio, false)).await;

    let uri = format!("/api/v1/assets?category_id={audio}&creator_id={alice}");
    let json = body_json(get(app, &uri).await).await;
    assert_eq!(ids(&json), vec![a_audio["id"].as_i64().unwrap()]);
}

#[tokio::test]
async fn recent_and_trending_showcases() {
    let (store, app) = memory_app();
    let (_id, token) = signup(&app, "designpro", true).await;
    let graphics = create_category(&app, &token, "Graphics").await;

    let mut published = Vec::new();
    for i in 0..6 {
        let asset = publish(&app, &token, asset_body(&format!("asset-{i}"), graphics, false)).await;
        published.push(asset["id"].as_i64().unwrap());
    }

    // Default limit is 4.
    let recent = body_json(get(app.clone(), "/api/v1/assets/recent").await).await;
    assert_eq!(ids(&recent).len(), 4);
    let stamps: Vec<String> = recent["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["created_at"].as_str().unwrap().to_string())
        .collect();
    let parsed: Vec<chrono::DateTime<chrono::Utc>> =
        stamps.iter().map(|s| s.parse().unwrap()).collect();
    assert!(parsed.windows(2).all(|w| w[0] >= w[1]));

    store.set_download_count(published[1], 50).unwrap();
    store.set_download_count(published[4], 500).unwrap();
    let trending = body_json(get(app, "/api/v1/assets/trending?limit=2").await).await;
    assert_eq!(ids(&trending), vec![published[4], published[1]]);
}

#[tokio::test]
async fn featured_showcase_defaults_to_four() {
    let (_store, app) = memory_app();
    let (_id, token) = signup(&app, "designpro", true).await;
    let graphics = create_category(&app, &token, "Graphics").await;
    for i in 0..5 {
        publish(&app, &token, asset_body(&format!("f-{i}"), graphics, true)).await;
    }

    let json = body_json(get(app, "/api/v1/assets/featured").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 4);
    assert!(data.iter().all(|a| a["featured"] == true));
}

#[tokio::test]
async fn negative_limit_is_rejected() {
    let (_store, app) = memory_app();
    let response = get(app, "/api/v1/assets/recent?limit=-1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_finds_by_tag_and_requires_query() {
    let (_store, app) = memory_app();
    let (_id, token) = signup(&app, "designpro", true).await;
    let graphics = create_category(&app, &token, "Graphics").await;
    let body = json!({
        "title": "Ultimate UI Component Library",
        "preview_url": "https://cdn.example.com/ui.png",
        "price": 49.0,
        "category_id": graphics,
        "tags": ["ui", "design"],
    });
    let asset = publish(&app, &token, body).await;
    publish(&app, &token, asset_body("Landscape", graphics, false)).await;

    let hits = body_json(get(app.clone(), "/api/v1/assets/search?q=ui").await).await;
    assert_eq!(ids(&hits), vec![asset["id"].as_i64().unwrap()]);

    let none = body_json(get(app.clone(), "/api/v1/assets/search?q=zzz-no-match").await).await;
    assert!(ids(&none).is_empty());

    for uri in ["/api/v1/assets/search", "/api/v1/assets/search?q="] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body_json(response).await["error"], "Search query is required");
    }
}

// ---------------------------------------------------------------------------
// Errors and authorization
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_asset_returns_404() {
    let (_store, app) = memory_app();
    let response = get(app, "/api/v1/assets/404").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Asset with id 404 not found");
}

#[tokio::test]
async fn dangling_reference_returns_integrity_fault() {
    let (store, app) = memory_app();
    let (_id, token) = signup(&app, "designpro", true).await;
    let graphics = create_category(&app, &token, "Graphics").await;

    let orphan = store
        .insert_asset(
            77,
            &CreateAsset {
                title: "orphan".into(),
                description: None,
                preview_url: "https://cdn.example.com/orphan.png".into(),
                price: 1.0,
                category_id: graphics,
                tags: None,
                featured: None,
                thumbnails: None,
            },
        )
        .await
        .unwrap();

    let response = get(app.clone(), &format!("/api/v1/assets/{}", orphan.id)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "INTEGRITY_FAULT");

    let response = get(app, "/api/v1/assets").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn publishing_requires_a_creator() {
    let (_store, app) = memory_app();
    let (_creator, creator_token) = signup(&app, "designpro", true).await;
    let (_buyer, buyer_token) = signup(&app, "buyer", false).await;
    let graphics = create_category(&app, &creator_token, "Graphics").await;

    let response = post_json(app.clone(), "/api/v1/assets", asset_body("x", graphics, false)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/assets",
        asset_body("x", graphics, false),
        &buyer_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let category = body_json(get(app, &format!("/api/v1/categories/{graphics}")).await).await;
    assert_eq!(category["data"]["asset_count"], 0);
}

#[tokio::test]
async fn creator_id_in_body_is_ignored() {
    let (_store, app) = memory_app();
    let (creator_id, token) = signup(&app, "designpro", true).await;
    let (other_id, _) = signup(&app, "other", true).await;
    let graphics = create_category(&app, &token, "Graphics").await;

    let mut body = asset_body("mine", graphics, false);
    body["creator_id"] = json!(other_id);
    let asset = publish(&app, &token, body).await;
    assert_eq!(asset["creator_id"], creator_id);
}

#[tokio::test]
async fn invalid_asset_is_rejected_without_counting() {
    let (_store, app) = memory_app();
    let (_id, token) = signup(&app, "designpro", true).await;
    let graphics = create_category(&app, &token, "Graphics").await;

    let mut body = asset_body("cheap", graphics, false);
    body["price"] = json!(-5.0);
    let response = post_json_auth(app.clone(), "/api/v1/assets", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response =
        post_json_auth(app.clone(), "/api/v1/assets", asset_body("lost", 999, false), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let category = body_json(get(app, &format!("/api/v1/categories/{graphics}")).await).await;
    assert_eq!(category["data"]["asset_count"], 0);
}

#[tokio::test]
async fn asset_body_that_does_not_fit_is_a_validation_error() {
    let (_store, app) = memory_app();
    let (_id, token) = signup(&app, "designpro", true).await;
    let graphics = create_category(&app, &token, "Graphics").await;

    let mut untitled = asset_body("untitled", graphics, false);
    untitled.as_object_mut().unwrap().remove("title");
    let response = post_json_auth(app.clone(), "/api/v1/assets", untitled, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("title"), "got: {message}");

    let mut mistyped = asset_body("mistyped", graphics, false);
    mistyped["price"] = json!("nineteen");
    let response = post_json_auth(app.clone(), "/api/v1/assets", mistyped, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = post_raw_auth(app.clone(), "/api/v1/assets", "{\"title\": ", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");

    let category = body_json(get(app, &format!("/api/v1/categories/{graphics}")).await).await;
    assert_eq!(category["data"]["asset_count"], 0);
}

#[tokio::test]
async fn category_body_without_name_is_a_validation_error() {
    let (_store, app) = memory_app();
    let (_id, token) = signup(&app, "alice", false).await;

    let body = json!({ "icon_name": "ri-font-size-2" });
    let response = post_json_auth(app, "/api/v1/categories", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("name"));
}

// ---------------------------------------------------------------------------
// Categories and users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn categories_require_auth_to_create_and_reject_duplicates() {
    let (_store, app) = memory_app();
    let body = json!({ "name": "Fonts", "icon_name": "ri-font-size-2" });

    let response = post_json(app.clone(), "/api/v1/categories", body.clone()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let (_id, token) = signup(&app, "alice", false).await;
    create_category(&app, &token, "Fonts").await;

    let response = post_json_auth(app.clone(), "/api/v1/categories", body, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let list = body_json(get(app.clone(), "/api/v1/categories").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);

    let response = get(app, "/api/v1/categories/42").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn users_and_creators_endpoints() {
    let (_store, app) = memory_app();
    let body = json!({
        "username": "buyer",
        "password": "password123",
        "display_name": "Buyer",
    });
    let response = post_json(app.clone(), "/api/v1/users", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let buyer = body_json(response).await;
    assert_eq!(buyer["data"]["is_creator"], false);
    assert!(buyer["data"].get("password_hash").is_none());

    let (first, token) = signup(&app, "first", true).await;
    signup(&app, "second", true).await;

    let buyer_id = buyer["data"]["id"].as_i64().unwrap();
    let response = get_auth(app.clone(), &format!("/api/v1/users/{buyer_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app.clone(), "/api/v1/users/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let creators = body_json(get(app.clone(), "/api/v1/creators").await).await;
    assert_eq!(creators["data"].as_array().unwrap().len(), 2);

    let one = body_json(get(app, "/api/v1/creators?limit=1").await).await;
    assert_eq!(ids(&one), vec![first]);
}

// ---------------------------------------------------------------------------
// Demo data
// ---------------------------------------------------------------------------

#[tokio::test]
async fn demo_seed_populates_an_empty_store_once() {
    let (store, app) = memory_app();

    let summary = seed_demo_data(store.as_ref()).await.unwrap().unwrap();
    assert_eq!(summary.categories, 6);
    assert_eq!(summary.creators, 6);
    assert_eq!(summary.assets, 6);
    assert!(seed_demo_data(store.as_ref()).await.unwrap().is_none());

    let categories = store.list_categories().await.unwrap();
    assert_eq!(categories[0].name, "Graphics & Design");
    assert_eq!(categories[0].asset_count, 2);
    let total: i64 = categories.iter().map(|c| c.asset_count).sum();
    assert_eq!(total, 6);

    let featured = body_json(get(app.clone(), "/api/v1/assets/featured").await).await;
    assert_eq!(featured["data"].as_array().unwrap().len(), 3);

    let hits = body_json(get(app.clone(), "/api/v1/assets/search?q=ui").await).await;
    assert_eq!(
        hits["data"][0]["title"],
        "Ultimate UI Component Library"
    );

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "designpro", "password": "password123" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
