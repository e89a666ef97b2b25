use serde::Deserialize;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::{Accommodation, HotelFields, RoomDraft, RoomPatch, RoomType};

/// ホテル作成用のリクエストDTO
#[derive(Deserialize)]
pub struct CreateHotelRequest {
    pub name: String,
    pub address: String,
    pub city: String,
    pub nit: String,
    pub number_of_rooms: u32,
}

/// ホテル更新用のリクエストDTO
#[derive(Deserialize)]
pub struct UpdateHotelRequest {
    pub name: String,
    pub address: String,
    pub city: String,
    pub nit: String,
    pub number_of_rooms: u32,
}

/// 客室作成用のリクエストDTO
#[derive(Deserialize)]
pub struct CreateRoomRequest {
    pub hotel_id: Uuid,
    pub room_type: String,
    pub accommodation: String,
    pub quantity: u32,
}

/// 客室更新用のリクエストDTO
/// 更新時もクライアントは所属ホテルのIDを送信する
#[derive(Deserialize)]
pub struct UpdateRoomRequest {
    pub hotel_id: Uuid,
    pub room_type: String,
    pub accommodation: String,
    pub quantity: u32,
}

impl CreateHotelRequest {
    /// リクエストをドメインのホテル属性に変換
    pub fn into_fields(self) -> Result<HotelFields, DomainError> {
        HotelFields::new(
            self.name,
            self.address,
            self.city,
            self.nit,
            self.number_of_rooms,
        )
    }
}

impl UpdateHotelRequest {
    pub fn into_fields(self) -> Result<HotelFields, DomainError> {
        HotelFields::new(
            self.name,
            self.address,
            self.city,
            self.nit,
            self.number_of_rooms,
        )
    }
}

impl CreateRoomRequest {
    /// リクエストをドメインの客室ドラフトに変換
    /// 未知の客室タイプ・収容区分はドメインエラーになる
    pub fn into_draft(&self) -> Result<RoomDraft, DomainError> {
        let room_type = RoomType::from_string(&self.room_type)?;
        let accommodation = Accommodation::from_string(&self.accommodation)?;
        RoomDraft::new(room_type, accommodation, self.quantity)
    }
}

impl UpdateRoomRequest {
    pub fn into_patch(&self) -> Result<RoomPatch, DomainError> {
        let room_type = RoomType::from_string(&self.room_type)?;
        let accommodation = Accommodation::from_string(&self.accommodation)?;
        RoomPatch::new(room_type, accommodation, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_room_request_into_draft() {
        let request = CreateRoomRequest {
            hotel_id: Uuid::new_v4(),
            room_type: "suite".to_string(),
            accommodation: "double".to_string(),
            quantity: 3,
        };
        let draft = request.into_draft().unwrap();
        assert_eq!(draft.room_type(), RoomType::Suite);
        assert_eq!(draft.accommodation(), Accommodation::Double);
        assert_eq!(draft.quantity(), 3);
    }

    #[test]
    fn test_create_room_request_unknown_type() {
        let request = CreateRoomRequest {
            hotel_id: Uuid::new_v4(),
            room_type: "penthouse".to_string(),
            accommodation: "double".to_string(),
            quantity: 3,
        };
        assert!(matches!(
            request.into_draft(),
            Err(DomainError::UnknownRoomType(_))
        ));
    }

    #[test]
    fn test_create_room_request_zero_quantity() {
        let request = CreateRoomRequest {
            hotel_id: Uuid::new_v4(),
            room_type: "standard".to_string(),
            accommodation: "single".to_string(),
            quantity: 0,
        };
        assert!(matches!(
            request.into_draft(),
            Err(DomainError::InvalidQuantity)
        ));
    }

    #[test]
    fn test_create_hotel_request_empty_name() {
        let request = CreateHotelRequest {
            name: "  ".to_string(),
            address: "Calle 70".to_string(),
            city: "Barranquilla".to_string(),
            nit: "900123456-1".to_string(),
            number_of_rooms: 10,
        };
        assert!(matches!(
            request.into_fields(),
            Err(DomainError::EmptyField(_))
        ));
    }
}
