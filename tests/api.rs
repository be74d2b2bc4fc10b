use party_menu_rs::shared_main::{build_router, AppState};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn spawn_app() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let app = build_router(AppState::default());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api", address)
}

async fn get_json(url: &str) -> (StatusCode, Value) {
    let resp = reqwest::get(url).await.unwrap();
    let status = resp.status();
    (status, resp.json().await.unwrap())
}

fn dish_ids(body: &Value) -> Vec<u64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn root_reports_api_name() {
    let api = spawn_app().await;

    let (status, body) = get_json(&format!("{}/", api)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Party Menu Selection API" }));
}

#[tokio::test]
async fn lists_and_filters_dishes() {
    let api = spawn_app().await;

    let (status, all) = get_json(&format!("{}/dishes", api)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 18);

    let (_, starters) = get_json(&format!("{}/dishes?meal_type=starter", api)).await;
    assert_eq!(dish_ids(&starters), vec![101, 102, 103, 104, 105]);

    let (_, search) = get_json(&format!("{}/dishes?search=chicken", api)).await;
    assert_eq!(dish_ids(&search), vec![102, 201]);
}

#[tokio::test]
async fn veg_desserts_are_all_desserts() {
    let api = spawn_app().await;

    let (status, body) =
        get_json(&format!("{}/dishes?meal_type=DESSERT&dish_type=VEG", api)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dish_ids(&body), vec![301, 302, 303, 304]);
}

#[tokio::test]
async fn unknown_meal_type_is_empty_not_error() {
    let api = spawn_app().await;

    let (status, body) = get_json(&format!("{}/dishes?meal_type=BRUNCH", api)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn ingredients_lookup() {
    let api = spawn_app().await;

    let (status, body) = get_json(&format!("{}/dishes/101/ingredients", api)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dish"]["name"], "Samosa");
    assert_eq!(body["ingredients"][0], json!({ "name": "Potato", "quantity": "2", "unit": "medium" }));

    let (status, body) = get_json(&format!("{}/dishes/303/ingredients", api)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ingredients"], json!([]));

    let (status, body) = get_json(&format!("{}/dishes/999/ingredients", api)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Dish not found" }));
}

#[tokio::test]
async fn meal_types_with_display_names() {
    let api = spawn_app().await;

    let (status, body) = get_json(&format!("{}/meal-types", api)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "meal_types": ["STARTER", "MAIN_COURSE", "DESSERT", "SIDES"],
            "display_names": {
                "STARTER": "Starter",
                "MAIN_COURSE": "Main Course",
                "DESSERT": "Dessert",
                "SIDES": "Sides"
            }
        })
    );
}

#[tokio::test]
async fn selection_workflow() {
    let api = spawn_app().await;
    let client = reqwest::Client::new();
    let user_url = format!("{}/selections/party_host", api);

    // quantity defaults to 1, second add merges
    client
        .post(&user_url)
        .json(&json!({ "dish_id": 101 }))
        .send()
        .await
        .unwrap();
    let body: Value = client
        .post(&user_url)
        .json(&json!({ "dish_id": 101, "quantity": 1 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["message"], "Selection added");
    assert_eq!(body["selections"], json!([{ "dish_id": 101, "quantity": 2 }]));

    client
        .post(&user_url)
        .json(&json!({ "dish_id": 201, "quantity": 1 }))
        .send()
        .await
        .unwrap();

    let resp = client
        .delete(format!("{}/101", user_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Selection removed");
    assert_eq!(body["selections"], json!([{ "dish_id": 201, "quantity": 1 }]));

    let (status, summary) = get_json(&user_url).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["total_count"], 1);
    assert_eq!(
        summary["category_counts"],
        json!({ "STARTER": 0, "MAIN_COURSE": 1, "DESSERT": 0, "SIDES": 0 })
    );
}

#[tokio::test]
async fn unknown_user_has_empty_summary() {
    let api = spawn_app().await;

    let (status, body) = get_json(&format!("{}/selections/unknown_user", api)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "selections": [],
            "total_count": 0,
            "category_counts": { "STARTER": 0, "MAIN_COURSE": 0, "DESSERT": 0, "SIDES": 0 }
        })
    );
}

#[tokio::test]
async fn removing_for_unknown_user_is_noop() {
    let api = spawn_app().await;

    let resp = reqwest::Client::new()
        .delete(format!("{}/selections/nobody/101", api))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["selections"], json!([]));
}

#[tokio::test]
async fn adding_unknown_dish_is_rejected() {
    let api = spawn_app().await;
    let client = reqwest::Client::new();
    let user_url = format!("{}/selections/typo_user", api);

    let resp = client
        .post(&user_url)
        .json(&json!({ "dish_id": 999, "quantity": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let (_, summary) = get_json(&user_url).await;
    assert_eq!(summary["selections"], json!([]));
}

#[tokio::test]
async fn malformed_input_is_client_error() {
    let api = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/selections/someone", api))
        .json(&json!({ "quantity": 2 }))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_client_error());

    let resp = client
        .delete(format!("{}/selections/someone/not-a-number", api))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn out_of_range_dish_ids_are_not_found() {
    let api = spawn_app().await;

    for id in ["-1", "0", "4294967296"] {
        let (status, body) = get_json(&format!("{}/dishes/{}/ingredients", api, id)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "dish id {}", id);
        assert_eq!(body, json!({ "detail": "Dish not found" }));
    }
}

#[tokio::test]
async fn removing_negative_or_wide_dish_id_is_noop() {
    let api = spawn_app().await;
    let client = reqwest::Client::new();
    let user_url = format!("{}/selections/wide_ids", api);

    client
        .post(&user_url)
        .json(&json!({ "dish_id": 402, "quantity": 2 }))
        .send()
        .await
        .unwrap();

    for id in ["-1", "4294967296"] {
        let resp = client
            .delete(format!("{}/{}", user_url, id))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "dish id {}", id);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["selections"], json!([{ "dish_id": 402, "quantity": 2 }]));
    }
}

#[tokio::test]
async fn quantity_overflow_is_rejected_and_server_keeps_serving() {
    let api = spawn_app().await;
    let client = reqwest::Client::new();
    let user_url = format!("{}/selections/big_spender", api);

    let resp = client
        .post(&user_url)
        .json(&json!({ "dish_id": 101, "quantity": i64::MAX }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(&user_url)
        .json(&json!({ "dish_id": 101, "quantity": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "detail": "Quantity out of range" }));

    let (status, summary) = get_json(&user_url).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["total_count"], i64::MAX);

    let (status, other) = get_json(&format!("{}/selections/bystander", api)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(other["total_count"], 0);
}
