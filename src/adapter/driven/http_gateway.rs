use crate::domain::model::{
    Hotel, HotelFields, HotelId, Room, RoomDraft, RoomId, RoomPatch, RoomType,
};
use crate::domain::model::Accommodation;
use crate::domain::port::{GatewayError, InventoryGateway};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// バックエンドAPIのレスポンス封筒
/// `{status: "success" | ..., data: ..., message?: ...}`
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    status: String,
    data: Option<T>,
    message: Option<String>,
}

/// ホテルのワイヤ表現
#[derive(Debug, Serialize, Deserialize)]
struct HotelPayload {
    uuid: Uuid,
    name: String,
    address: String,
    city: String,
    nit: String,
    number_of_rooms: u32,
    #[serde(default)]
    rooms: Vec<RoomPayload>,
}

/// 客室のワイヤ表現
#[derive(Debug, Serialize, Deserialize)]
struct RoomPayload {
    uuid: Uuid,
    hotel_id: Uuid,
    room_type: String,
    accommodation: String,
    quantity: u32,
}

/// ホテル作成・更新のリクエストボディ
#[derive(Debug, Serialize)]
struct HotelBody {
    name: String,
    address: String,
    city: String,
    nit: String,
    number_of_rooms: u32,
}

impl HotelBody {
    fn from_fields(fields: &HotelFields) -> Self {
        Self {
            name: fields.name().to_string(),
            address: fields.address().to_string(),
            city: fields.city().to_string(),
            nit: fields.tax_id().to_string(),
            number_of_rooms: fields.total_rooms(),
        }
    }
}

/// 客室作成・更新のリクエストボディ
#[derive(Debug, Serialize)]
struct RoomBody {
    hotel_id: Option<Uuid>,
    room_type: String,
    accommodation: String,
    quantity: u32,
}

/// ワイヤ表現をドメインの客室に変換
/// 不正な形式は`GatewayError::Unexpected`として扱う
fn room_from_payload(payload: RoomPayload) -> Result<Room, GatewayError> {
    let room_type = RoomType::from_string(&payload.room_type)
        .map_err(|err| GatewayError::Unexpected(format!("Malformed room in response: {}", err)))?;
    let accommodation = Accommodation::from_string(&payload.accommodation)
        .map_err(|err| GatewayError::Unexpected(format!("Malformed room in response: {}", err)))?;
    Room::new(
        RoomId::from_uuid(payload.uuid),
        HotelId::from_uuid(payload.hotel_id),
        room_type,
        accommodation,
        payload.quantity,
    )
    .map_err(|err| GatewayError::Unexpected(format!("Malformed room in response: {}", err)))
}

/// ワイヤ表現をドメインのホテルに変換
fn hotel_from_payload(payload: HotelPayload) -> Result<Hotel, GatewayError> {
    let fields = HotelFields::new(
        payload.name,
        payload.address,
        payload.city,
        payload.nit,
        payload.number_of_rooms,
    )
    .map_err(|err| GatewayError::Unexpected(format!("Malformed hotel in response: {}", err)))?;
    let rooms = payload
        .rooms
        .into_iter()
        .map(room_from_payload)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Hotel::reconstruct(
        HotelId::from_uuid(payload.uuid),
        fields,
        rooms,
    ))
}

/// HTTPステータスと封筒をゲートウェイエラーにマッピング
///
/// - 400 → `BadRequest`（サーバーメッセージをそのまま提示）
/// - 400以外の失敗ステータス → `Unexpected`（バリデーション拒否として扱わない）
/// - 2xx かつ非"success"封筒 → `BadRequest`
/// - 404 → 呼び出し元が対象別のNotFoundに変換する
fn unwrap_envelope<T>(
    http_status: StatusCode,
    envelope: Envelope<T>,
) -> Result<Option<T>, GatewayError> {
    if http_status == StatusCode::BAD_REQUEST {
        let message = envelope
            .message
            .unwrap_or_else(|| "バリデーションに失敗しました".to_string());
        return Err(GatewayError::BadRequest(message));
    }
    if !http_status.is_success() {
        let detail = envelope
            .message
            .unwrap_or_else(|| http_status.to_string());
        return Err(GatewayError::Unexpected(format!(
            "Server failure: {}",
            detail
        )));
    }
    if envelope.status != "success" {
        let message = envelope
            .message
            .unwrap_or_else(|| "バリデーションに失敗しました".to_string());
        return Err(GatewayError::BadRequest(message));
    }
    Ok(envelope.data)
}

/// HTTP在庫ゲートウェイ
/// リモートのバックエンドAPIに対して在庫ゲートウェイの契約を実装する
pub struct HttpInventoryGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpInventoryGateway {
    /// 新しいHTTPゲートウェイを作成
    ///
    /// # Arguments
    /// * `base_url` - バックエンドのベースURL（末尾のスラッシュなし）
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// レスポンスを封筒として解釈する
    /// JSONとして読めないボディは`Unexpected`として扱う
    async fn read_envelope<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<(StatusCode, Envelope<T>), GatewayError> {
        let status = response.status();
        let envelope = response
            .json::<Envelope<T>>()
            .await
            .map_err(|err| GatewayError::Unexpected(format!("Malformed response body: {}", err)))?;
        Ok((status, envelope))
    }

    async fn expect_hotel(
        response: reqwest::Response,
        id: Option<HotelId>,
    ) -> Result<Hotel, GatewayError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(GatewayError::HotelNotFound(id));
            }
        }
        let (status, envelope) = Self::read_envelope::<HotelPayload>(response).await?;
        let payload = unwrap_envelope(status, envelope)?
            .ok_or_else(|| GatewayError::Unexpected("Response without data".to_string()))?;
        hotel_from_payload(payload)
    }
}

#[async_trait]
impl InventoryGateway for HttpInventoryGateway {
    async fn create_hotel(&self, fields: HotelFields) -> Result<Hotel, GatewayError> {
        let response = self
            .client
            .post(self.url("/hotels"))
            .json(&HotelBody::from_fields(&fields))
            .send()
            .await
            .map_err(|err| GatewayError::Unexpected(err.to_string()))?;
        Self::expect_hotel(response, None).await
    }

    async fn fetch_hotel(&self, id: HotelId) -> Result<Hotel, GatewayError> {
        let response = self
            .client
            .get(self.url(&format!("/hotels/one/{}", id)))
            .send()
            .await
            .map_err(|err| GatewayError::Unexpected(err.to_string()))?;
        Self::expect_hotel(response, Some(id)).await
    }

    async fn list_hotels(&self) -> Result<Vec<Hotel>, GatewayError> {
        let response = self
            .client
            .get(self.url("/hotels"))
            .send()
            .await
            .map_err(|err| GatewayError::Unexpected(err.to_string()))?;
        let (status, envelope) = Self::read_envelope::<Vec<HotelPayload>>(response).await?;
        let payloads = unwrap_envelope(status, envelope)?.unwrap_or_default();
        payloads.into_iter().map(hotel_from_payload).collect()
    }

    async fn update_hotel(&self, id: HotelId, fields: HotelFields) -> Result<Hotel, GatewayError> {
        let response = self
            .client
            .put(self.url(&format!("/hotels/{}", id)))
            .json(&HotelBody::from_fields(&fields))
            .send()
            .await
            .map_err(|err| GatewayError::Unexpected(err.to_string()))?;
        Self::expect_hotel(response, Some(id)).await
    }

    async fn delete_hotel(&self, id: HotelId) -> Result<(), GatewayError> {
        let response = self
            .client
            .delete(self.url(&format!("/hotels/{}", id)))
            .send()
            .await
            .map_err(|err| GatewayError::Unexpected(err.to_string()))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(GatewayError::HotelNotFound(id));
        }
        let (status, envelope) = Self::read_envelope::<serde_json::Value>(response).await?;
        unwrap_envelope(status, envelope)?;
        Ok(())
    }

    async fn create_room(&self, hotel_id: HotelId, draft: RoomDraft) -> Result<Room, GatewayError> {
        let body = RoomBody {
            hotel_id: Some(hotel_id.as_uuid()),
            room_type: draft.room_type().as_str().to_string(),
            accommodation: draft.accommodation().as_str().to_string(),
            quantity: draft.quantity(),
        };
        let response = self
            .client
            .post(self.url("/rooms"))
            .json(&body)
            .send()
            .await
            .map_err(|err| GatewayError::Unexpected(err.to_string()))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(GatewayError::HotelNotFound(hotel_id));
        }
        let (status, envelope) = Self::read_envelope::<RoomPayload>(response).await?;
        let payload = unwrap_envelope(status, envelope)?
            .ok_or_else(|| GatewayError::Unexpected("Response without data".to_string()))?;
        room_from_payload(payload)
    }

    async fn update_room(&self, room_id: RoomId, patch: RoomPatch) -> Result<Room, GatewayError> {
        let body = RoomBody {
            hotel_id: None,
            room_type: patch.room_type().as_str().to_string(),
            accommodation: patch.accommodation().as_str().to_string(),
            quantity: patch.quantity(),
        };
        let response = self
            .client
            .put(self.url(&format!("/rooms/{}", room_id)))
            .json(&body)
            .send()
            .await
            .map_err(|err| GatewayError::Unexpected(err.to_string()))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(GatewayError::RoomNotFound(room_id));
        }
        let (status, envelope) = Self::read_envelope::<RoomPayload>(response).await?;
        let payload = unwrap_envelope(status, envelope)?
            .ok_or_else(|| GatewayError::Unexpected("Response without data".to_string()))?;
        room_from_payload(payload)
    }

    async fn delete_room(&self, room_id: RoomId) -> Result<(), GatewayError> {
        let response = self
            .client
            .delete(self.url(&format!("/rooms/{}", room_id)))
            .send()
            .await
            .map_err(|err| GatewayError::Unexpected(err.to_string()))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(GatewayError::RoomNotFound(room_id));
        }
        let (status, envelope) = Self::read_envelope::<serde_json::Value>(response).await?;
        unwrap_envelope(status, envelope)?;
        Ok(())
    }

    async fn list_rooms_by_hotel(&self, hotel_id: HotelId) -> Result<Vec<Room>, GatewayError> {
        let response = self
            .client
            .get(self.url(&format!("/rooms/hotel/{}", hotel_id)))
            .send()
            .await
            .map_err(|err| GatewayError::Unexpected(err.to_string()))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(GatewayError::HotelNotFound(hotel_id));
        }
        let (status, envelope) = Self::read_envelope::<Vec<RoomPayload>>(response).await?;
        let payloads = unwrap_envelope(status, envelope)?.unwrap_or_default();
        payloads.into_iter().map(room_from_payload).collect()
    }
}
