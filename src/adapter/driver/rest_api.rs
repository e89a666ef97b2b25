use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::adapter::driver::request_dto::{
    CreateHotelRequest, CreateRoomRequest, UpdateHotelRequest, UpdateRoomRequest,
};
use crate::adapter::driver::response_dto::{ApiResponse, HotelResponse, RoomResponse};
use crate::application::service::{HotelApplicationService, RoomApplicationService};
use crate::application::ApplicationError;
use crate::domain::error::DomainError;
use crate::domain::model::{HotelId, RoomId};
use crate::domain::port::GatewayError;

/// エラーレスポンスの型
/// エラー時も成功時と同じ封筒形式で返す
type ApiErrorResponse = (StatusCode, Json<ApiResponse<serde_json::Value>>);

/// アプリケーションサービスを含む状態
#[derive(Clone)]
pub struct AppState {
    pub hotel_service: Arc<HotelApplicationService>,
    pub room_service: Arc<RoomApplicationService>,
}

/// REST APIルーターを作成
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/hotels", get(get_hotels))
        .route("/hotels", post(create_hotel))
        .route("/hotels/one/:hotel_id", get(get_hotel_by_id))
        .route("/hotels/:hotel_id", put(update_hotel))
        .route("/hotels/:hotel_id", delete(delete_hotel))
        .route("/rooms", post(create_room))
        .route("/rooms/:room_id", put(update_room))
        .route("/rooms/:room_id", delete(delete_room))
        .route("/rooms/hotel/:hotel_id", get(get_rooms_by_hotel))
}

// ヘルスチェックエンドポイント
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "hotel-inventory-management",
        "version": "0.1.0"
    }))
}

// ホテル一覧取得エンドポイント
async fn get_hotels(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<HotelResponse>>>, ApiErrorResponse> {
    match state.hotel_service.list_hotels().await {
        Ok(hotels) => {
            let response: Vec<HotelResponse> =
                hotels.iter().map(HotelResponse::from_hotel).collect();
            Ok(Json(ApiResponse::success(response)))
        }
        Err(err) => Err(map_application_error(err)),
    }
}

// ホテル詳細取得エンドポイント
async fn get_hotel_by_id(
    State(state): State<AppState>,
    Path(hotel_id): Path<Uuid>,
) -> Result<Json<ApiResponse<HotelResponse>>, ApiErrorResponse> {
    let hotel_id = HotelId::from_uuid(hotel_id);
    match state.hotel_service.get_hotel(hotel_id).await {
        Ok(hotel) => Ok(Json(ApiResponse::success(HotelResponse::from_hotel(&hotel)))),
        Err(err) => Err(map_application_error(err)),
    }
}

// ホテル作成エンドポイント
async fn create_hotel(
    State(state): State<AppState>,
    Json(request): Json<CreateHotelRequest>,
) -> Result<(StatusCode, Json<ApiResponse<HotelResponse>>), ApiErrorResponse> {
    let fields = request.into_fields().map_err(map_domain_error)?;
    match state.hotel_service.create_hotel(fields).await {
        Ok(hotel) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success_with_message(
                HotelResponse::from_hotel(&hotel),
                "ホテルを作成しました",
            )),
        )),
        Err(err) => Err(map_application_error(err)),
    }
}

// ホテル更新エンドポイント
async fn update_hotel(
    State(state): State<AppState>,
    Path(hotel_id): Path<Uuid>,
    Json(request): Json<UpdateHotelRequest>,
) -> Result<Json<ApiResponse<HotelResponse>>, ApiErrorResponse> {
    let hotel_id = HotelId::from_uuid(hotel_id);
    let fields = request.into_fields().map_err(map_domain_error)?;
    match state.hotel_service.update_hotel(hotel_id, fields).await {
        Ok(hotel) => Ok(Json(ApiResponse::success_with_message(
            HotelResponse::from_hotel(&hotel),
            "ホテルを更新しました",
        ))),
        Err(err) => Err(map_application_error(err)),
    }
}

// ホテル削除エンドポイント
// 所有する客室も連鎖的に削除される
async fn delete_hotel(
    State(state): State<AppState>,
    Path(hotel_id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiErrorResponse> {
    let hotel_id = HotelId::from_uuid(hotel_id);
    match state.hotel_service.delete_hotel(hotel_id).await {
        Ok(()) => Ok(Json(ApiResponse::success_with_message(
            serde_json::Value::Null,
            "ホテルを削除しました",
        ))),
        Err(err) => Err(map_application_error(err)),
    }
}

// 客室作成エンドポイント
async fn create_room(
    State(state): State<AppState>,
    Json(request): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RoomResponse>>), ApiErrorResponse> {
    let hotel_id = HotelId::from_uuid(request.hotel_id);
    let draft = request.into_draft().map_err(map_domain_error)?;
    match state.room_service.add_room(hotel_id, draft).await {
        Ok(room) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success_with_message(
                RoomResponse::from_room(&room),
                "客室を追加しました",
            )),
        )),
        Err(err) => Err(map_application_error(err)),
    }
}

// 客室更新エンドポイント
async fn update_room(
    State(state): State<AppState>,
    Path(room_id): Path<Uuid>,
    Json(request): Json<UpdateRoomRequest>,
) -> Result<Json<ApiResponse<RoomResponse>>, ApiErrorResponse> {
    let room_id = RoomId::from_uuid(room_id);
    let hotel_id = HotelId::from_uuid(request.hotel_id);
    let patch = request.into_patch().map_err(map_domain_error)?;
    match state.room_service.update_room(hotel_id, room_id, patch).await {
        Ok(room) => Ok(Json(ApiResponse::success_with_message(
            RoomResponse::from_room(&room),
            "客室を更新しました",
        ))),
        Err(err) => Err(map_application_error(err)),
    }
}

// 客室削除エンドポイント
// パスには客室IDのみが含まれるため、所属ホテルは一覧から解決する
async fn delete_room(
    State(state): State<AppState>,
    Path(room_id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiErrorResponse> {
    let room_id = RoomId::from_uuid(room_id);
    let hotel_id = match find_owning_hotel(&state, room_id).await {
        Ok(Some(hotel_id)) => hotel_id,
        Ok(None) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("error", "客室が見つかりません")),
            ))
        }
        Err(err) => return Err(map_application_error(err)),
    };
    match state.room_service.delete_room(hotel_id, room_id).await {
        Ok(()) => Ok(Json(ApiResponse::success_with_message(
            serde_json::Value::Null,
            "客室を削除しました",
        ))),
        Err(err) => Err(map_application_error(err)),
    }
}

// 指定ホテルの客室一覧取得エンドポイント
async fn get_rooms_by_hotel(
    State(state): State<AppState>,
    Path(hotel_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<RoomResponse>>>, ApiErrorResponse> {
    let hotel_id = HotelId::from_uuid(hotel_id);
    match state.room_service.list_rooms(hotel_id).await {
        Ok(rooms) => {
            let response: Vec<RoomResponse> = rooms.iter().map(RoomResponse::from_room).collect();
            Ok(Json(ApiResponse::success(response)))
        }
        Err(err) => Err(map_application_error(err)),
    }
}

/// 客室IDから所属ホテルを解決する
async fn find_owning_hotel(
    state: &AppState,
    room_id: RoomId,
) -> Result<Option<HotelId>, ApplicationError> {
    let hotels = state.hotel_service.list_hotels().await?;
    for hotel in hotels {
        if hotel.inventory().find_room(room_id).is_some() {
            return Ok(Some(hotel.id()));
        }
    }
    Ok(None)
}

// アプリケーションエラーをHTTPエラーにマッピング
fn map_application_error(err: ApplicationError) -> ApiErrorResponse {
    match err {
        ApplicationError::DomainError(domain_err) => map_domain_error(domain_err),
        ApplicationError::GatewayError(gateway_err) => map_gateway_error(gateway_err),
        ApplicationError::NotFound(msg) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("error", msg)),
        ),
        ApplicationError::Cancelled => (
            StatusCode::CONFLICT,
            Json(ApiResponse::error("cancelled", "操作が取り消されました")),
        ),
    }
}

// ドメインエラーをHTTPステータスコードにマッピング
// バリデーション・容量の違反はすべて400として返す
fn map_domain_error(domain_err: DomainError) -> ApiErrorResponse {
    let status = match domain_err {
        DomainError::RoomNotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ApiResponse::error("error", domain_err.to_string())),
    )
}

// ゲートウェイエラーをHTTPステータスコードにマッピング
fn map_gateway_error(gateway_err: GatewayError) -> ApiErrorResponse {
    match gateway_err {
        GatewayError::BadRequest(msg) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("error", msg)),
        ),
        GatewayError::HotelNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(
                "error",
                format!("ホテルが見つかりません: {}", id),
            )),
        ),
        GatewayError::RoomNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(
                "error",
                format!("客室が見つかりません: {}", id),
            )),
        ),
        GatewayError::Unexpected(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("error", msg)),
        ),
    }
}
