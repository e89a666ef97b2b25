use serde::Serialize;
use uuid::Uuid;

use crate::domain::model::{Hotel, Room, RoomCatalog};

/// バックエンドAPIのレスポンス封筒
/// `status`は成功時に"success"、失敗時はエラー種別を表す文字列
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data: Some(data),
            message: None,
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            data: Some(data),
            message: Some(message.into()),
        }
    }

    pub fn error(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            data: None,
            message: Some(message.into()),
        }
    }
}

/// ホテル用のレスポンスDTO
#[derive(Serialize)]
pub struct HotelResponse {
    pub uuid: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub nit: String,
    pub number_of_rooms: u32,
    pub rooms: Vec<RoomResponse>,
}

/// 客室用のレスポンスDTO
/// `room_type_label`と`accommodation_label`は画面表示用のラベル
#[derive(Serialize)]
pub struct RoomResponse {
    pub uuid: Uuid,
    pub hotel_id: Uuid,
    pub room_type: String,
    pub accommodation: String,
    pub room_type_label: String,
    pub accommodation_label: String,
    pub quantity: u32,
}

impl HotelResponse {
    /// ドメインオブジェクトからHotelResponseを作成
    pub fn from_hotel(hotel: &Hotel) -> Self {
        let rooms = hotel
            .inventory()
            .rooms()
            .iter()
            .map(RoomResponse::from_room)
            .collect();
        Self {
            uuid: hotel.id().as_uuid(),
            name: hotel.fields().name().to_string(),
            address: hotel.fields().address().to_string(),
            city: hotel.fields().city().to_string(),
            nit: hotel.fields().tax_id().to_string(),
            number_of_rooms: hotel.fields().total_rooms(),
            rooms,
        }
    }
}

impl RoomResponse {
    /// ドメインオブジェクトからRoomResponseを作成
    pub fn from_room(room: &Room) -> Self {
        let room_type = room.room_type().as_str().to_string();
        let accommodation = room.accommodation().as_str().to_string();
        Self {
            uuid: room.id().as_uuid(),
            hotel_id: room.hotel_id().as_uuid(),
            room_type_label: RoomCatalog::label_for(&room_type),
            accommodation_label: RoomCatalog::label_for(&accommodation),
            room_type,
            accommodation,
            quantity: room.quantity(),
        }
    }
}
