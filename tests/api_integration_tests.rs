use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;

use hotel_inventory_management::adapter::driven::{
    ConsoleLogger, ConsoleNotificationSink, InMemoryInventoryGateway,
};
use hotel_inventory_management::adapter::driver::rest_api::{create_router, AppState};
use hotel_inventory_management::application::service::{
    HotelApplicationService, RoomApplicationService,
};

// テスト用のサーバーを構築する
// インメモリゲートウェイとコンソールアダプターで全経路を組み立てる
fn test_server() -> TestServer {
    let gateway = Arc::new(InMemoryInventoryGateway::new());
    let notifier = Arc::new(ConsoleNotificationSink::new());
    let logger = Arc::new(ConsoleLogger::new());

    let hotel_service = HotelApplicationService::new(
        gateway.clone(),
        notifier.clone(),
        logger.clone(),
    );
    let room_service = RoomApplicationService::new(gateway, notifier, logger);

    let app_state = AppState {
        hotel_service: Arc::new(hotel_service),
        room_service: Arc::new(room_service),
    };

    let app = create_router().with_state(app_state);
    TestServer::new(app).expect("failed to build test server")
}

fn hotel_body(name: &str, number_of_rooms: u32) -> Value {
    json!({
        "name": name,
        "address": "Calle 70 #15-20",
        "city": "Cartagena",
        "nit": "900123456-1",
        "number_of_rooms": number_of_rooms,
    })
}

async fn create_hotel(server: &TestServer, name: &str, number_of_rooms: u32) -> String {
    let response = server
        .post("/hotels")
        .json(&hotel_body(name, number_of_rooms))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    body["data"]["uuid"].as_str().unwrap().to_string()
}

async fn add_room(server: &TestServer, hotel_id: &str, quantity: u32) -> axum_test::TestResponse {
    server
        .post("/rooms")
        .json(&json!({
            "hotel_id": hotel_id,
            "room_type": "standard",
            "accommodation": "double",
            "quantity": quantity,
        }))
        .await
}

#[tokio::test]
async fn test_health_check() {
    let server = test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_create_and_fetch_hotel() {
    let server = test_server();
    let hotel_id = create_hotel(&server, "Decameron Cartagena", 10).await;

    let response = server.get(&format!("/hotels/one/{}", hotel_id)).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["name"], "Decameron Cartagena");
    assert_eq!(body["data"]["number_of_rooms"], 10);
    assert_eq!(body["data"]["rooms"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_hotel_with_blank_name_is_rejected() {
    let server = test_server();
    let response = server.post("/hotels").json(&hotel_body("  ", 10)).await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_fetch_unknown_hotel_returns_404() {
    let server = test_server();
    let response = server
        .get("/hotels/one/00000000-0000-0000-0000-000000000000")
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_add_room_within_capacity() {
    let server = test_server();
    let hotel_id = create_hotel(&server, "Hotel Obelisco", 10).await;

    let response = add_room(&server, &hotel_id, 4).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["quantity"], 4);
    assert_eq!(body["data"]["room_type"], "standard");
    // 表示用ラベルも同時に返す
    assert_eq!(body["data"]["room_type_label"], "Estándar");
    assert_eq!(body["data"]["accommodation_label"], "Doble");
}

#[tokio::test]
async fn test_add_room_beyond_capacity_returns_400() {
    let server = test_server();
    let hotel_id = create_hotel(&server, "Hotel Obelisco", 10).await;

    add_room(&server, &hotel_id, 8).await.assert_status(axum::http::StatusCode::CREATED);

    // 残数2に対して3室を要求する
    let response = add_room(&server, &hotel_id, 3).await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("Capacity exceeded"));
}

#[tokio::test]
async fn test_add_room_filling_capacity_exactly() {
    let server = test_server();
    let hotel_id = create_hotel(&server, "Hotel Pequeño", 5).await;

    add_room(&server, &hotel_id, 5).await.assert_status(axum::http::StatusCode::CREATED);

    // 残数0のため、1室も追加できない
    let response = add_room(&server, &hotel_id, 1).await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_room_with_same_quantity_succeeds() {
    let server = test_server();
    let hotel_id = create_hotel(&server, "Hotel Obelisco", 10).await;

    let created = add_room(&server, &hotel_id, 10).await;
    let room_id = created.json::<Value>()["data"]["uuid"]
        .as_str()
        .unwrap()
        .to_string();

    // 在庫が満杯でも、同じ数量での編集は成功する
    let response = server
        .put(&format!("/rooms/{}", room_id))
        .json(&json!({
            "hotel_id": hotel_id,
            "room_type": "suite",
            "accommodation": "single",
            "quantity": 10,
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["room_type"], "suite");
    assert_eq!(body["data"]["quantity"], 10);
}

#[tokio::test]
async fn test_update_room_beyond_capacity_returns_400() {
    let server = test_server();
    let hotel_id = create_hotel(&server, "Hotel Obelisco", 10).await;

    let created = add_room(&server, &hotel_id, 6).await;
    let room_id = created.json::<Value>()["data"]["uuid"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server
        .put(&format!("/rooms/{}", room_id))
        .json(&json!({
            "hotel_id": hotel_id,
            "room_type": "standard",
            "accommodation": "double",
            "quantity": 11,
        }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_room_frees_capacity() {
    let server = test_server();
    let hotel_id = create_hotel(&server, "Hotel Obelisco", 10).await;

    let created = add_room(&server, &hotel_id, 10).await;
    let room_id = created.json::<Value>()["data"]["uuid"]
        .as_str()
        .unwrap()
        .to_string();

    // 満杯のため追加は失敗する
    add_room(&server, &hotel_id, 1)
        .await
        .assert_status(axum::http::StatusCode::BAD_REQUEST);

    let response = server.delete(&format!("/rooms/{}", room_id)).await;
    response.assert_status_ok();

    // 削除後は容量が解放されている
    add_room(&server, &hotel_id, 1)
        .await
        .assert_status(axum::http::StatusCode::CREATED);
}

#[tokio::test]
async fn test_delete_unknown_room_returns_404() {
    let server = test_server();
    let response = server
        .delete("/rooms/00000000-0000-0000-0000-000000000000")
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_room_category_pairs_are_allowed() {
    let server = test_server();
    let hotel_id = create_hotel(&server, "Hotel Obelisco", 10).await;

    add_room(&server, &hotel_id, 3).await.assert_status(axum::http::StatusCode::CREATED);
    add_room(&server, &hotel_id, 3).await.assert_status(axum::http::StatusCode::CREATED);

    let response = server.get(&format!("/rooms/hotel/{}", hotel_id)).await;
    response.assert_status_ok();
    let body: Value = response.json();
    let rooms = body["data"].as_array().unwrap();
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0]["room_type"], rooms[1]["room_type"]);
}

#[tokio::test]
async fn test_delete_hotel_cascades_to_rooms() {
    let server = test_server();
    let hotel_id = create_hotel(&server, "Hotel Obelisco", 10).await;

    let created = add_room(&server, &hotel_id, 4).await;
    let room_id = created.json::<Value>()["data"]["uuid"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.delete(&format!("/hotels/{}", hotel_id)).await;
    response.assert_status_ok();

    // ホテルも所有していた客室も参照できなくなる
    server
        .get(&format!("/hotels/one/{}", hotel_id))
        .await
        .assert_status(axum::http::StatusCode::NOT_FOUND);
    server
        .get(&format!("/rooms/hotel/{}", hotel_id))
        .await
        .assert_status(axum::http::StatusCode::NOT_FOUND);
    server
        .delete(&format!("/rooms/{}", room_id))
        .await
        .assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_hotel_keeps_rooms() {
    let server = test_server();
    let hotel_id = create_hotel(&server, "Hotel Obelisco", 10).await;
    add_room(&server, &hotel_id, 4).await.assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .put(&format!("/hotels/{}", hotel_id))
        .json(&hotel_body("Hotel Obelisco Renovado", 20))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["name"], "Hotel Obelisco Renovado");
    assert_eq!(body["data"]["number_of_rooms"], 20);
    assert_eq!(body["data"]["rooms"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_shrinking_total_below_assigned_is_tolerated() {
    let server = test_server();
    let hotel_id = create_hotel(&server, "Hotel Obelisco", 10).await;
    add_room(&server, &hotel_id, 8).await.assert_status(axum::http::StatusCode::CREATED);

    // 割り当て済み8室より少ない総数に縮小しても更新は成功する
    let response = server
        .put(&format!("/hotels/{}", hotel_id))
        .json(&hotel_body("Hotel Obelisco", 5))
        .await;
    response.assert_status_ok();

    // 超過状態では新たな追加はできない
    add_room(&server, &hotel_id, 1)
        .await
        .assert_status(axum::http::StatusCode::BAD_REQUEST);

    // 参照は引き続き可能（超過は警告扱いで、取得を妨げない）
    let response = server.get(&format!("/hotels/one/{}", hotel_id)).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["number_of_rooms"], 5);
    assert_eq!(body["data"]["rooms"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_hotels_newest_first() {
    let server = test_server();
    create_hotel(&server, "Primero", 5).await;
    create_hotel(&server, "Segundo", 5).await;

    let response = server.get("/hotels").await;
    response.assert_status_ok();
    let body: Value = response.json();
    let hotels = body["data"].as_array().unwrap();
    assert_eq!(hotels.len(), 2);
    assert_eq!(hotels[0]["name"], "Segundo");
    assert_eq!(hotels[1]["name"], "Primero");
}

#[tokio::test]
async fn test_unknown_room_type_returns_400() {
    let server = test_server();
    let hotel_id = create_hotel(&server, "Hotel Obelisco", 10).await;

    let response = server
        .post("/rooms")
        .json(&json!({
            "hotel_id": hotel_id,
            "room_type": "penthouse",
            "accommodation": "double",
            "quantity": 1,
        }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], "error");
}
