use crate::domain::error::DomainError;
use crate::domain::model::{HotelId, Room, RoomInventory};
use serde::{Deserialize, Serialize};

/// ホテルの基本情報を表す値オブジェクト
/// 作成・編集の入力をバリデーション済みの状態で保持する
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelFields {
    name: String,
    address: String,
    city: String,
    tax_id: String,
    total_rooms: u32,
}

impl HotelFields {
    /// 新しいホテル基本情報を作成
    /// バリデーション:
    /// - 名前・住所・都市・税務番号は空でない必要がある
    /// - 総客室数は1以上である必要がある
    pub fn new(
        name: String,
        address: String,
        city: String,
        tax_id: String,
        total_rooms: u32,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyField("name".to_string()));
        }
        if address.trim().is_empty() {
            return Err(DomainError::EmptyField("address".to_string()));
        }
        if city.trim().is_empty() {
            return Err(DomainError::EmptyField("city".to_string()));
        }
        if tax_id.trim().is_empty() {
            return Err(DomainError::EmptyField("tax_id".to_string()));
        }
        if total_rooms == 0 {
            return Err(DomainError::InvalidRoomCount);
        }

        Ok(Self {
            name,
            address,
            city,
            tax_id,
            total_rooms,
        })
    }

    /// ホテル名を取得
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 住所を取得
    pub fn address(&self) -> &str {
        &self.address
    }

    /// 都市を取得
    pub fn city(&self) -> &str {
        &self.city
    }

    /// 税務番号（NIT）を取得
    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    /// 申告された総客室数を取得
    pub fn total_rooms(&self) -> u32 {
        self.total_rooms
    }
}

/// ホテル集約
/// 基本情報と客室在庫を所有する
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    id: HotelId,
    fields: HotelFields,
    inventory: RoomInventory,
}

impl Hotel {
    /// 客室のない新しいホテルを作成
    /// 識別子はゲートウェイが採番したものを渡す
    pub fn new(id: HotelId, fields: HotelFields) -> Self {
        let inventory = RoomInventory::new(fields.total_rooms());
        Self {
            id,
            fields,
            inventory,
        }
    }

    /// ゲートウェイから取得したデータでホテルを再構築
    pub fn reconstruct(id: HotelId, fields: HotelFields, rooms: Vec<Room>) -> Self {
        let inventory = RoomInventory::reconstruct(fields.total_rooms(), rooms);
        Self {
            id,
            fields,
            inventory,
        }
    }

    /// ホテルIDを取得
    pub fn id(&self) -> HotelId {
        self.id
    }

    /// 基本情報を取得
    pub fn fields(&self) -> &HotelFields {
        &self.fields
    }

    /// 客室在庫を取得
    pub fn inventory(&self) -> &RoomInventory {
        &self.inventory
    }

    /// 客室在庫を可変で取得
    pub fn inventory_mut(&mut self) -> &mut RoomInventory {
        &mut self.inventory
    }

    /// 基本情報を編集する
    /// 客室レコードには触れない。総数を減らして超過状態になった場合も
    /// そのまま受け入れ、警告状態として扱う
    pub fn edit(&mut self, fields: HotelFields) {
        self.inventory.set_total_rooms(fields.total_rooms());
        self.fields = fields;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Accommodation, RoomId, RoomType};

    fn valid_fields() -> HotelFields {
        HotelFields::new(
            "Decameron Cartagena".to_string(),
            "Calle 70 #4-29".to_string(),
            "Cartagena".to_string(),
            "900123456-1".to_string(),
            30,
        )
        .unwrap()
    }

    #[test]
    fn test_hotel_fields_valid() {
        let fields = valid_fields();
        assert_eq!(fields.name(), "Decameron Cartagena");
        assert_eq!(fields.total_rooms(), 30);
    }

    #[test]
    fn test_hotel_fields_empty_name_fails() {
        let result = HotelFields::new(
            "   ".to_string(),
            "Calle 70".to_string(),
            "Cartagena".to_string(),
            "900123456-1".to_string(),
            30,
        );
        assert_eq!(
            result.unwrap_err(),
            DomainError::EmptyField("name".to_string())
        );
    }

    #[test]
    fn test_hotel_fields_empty_tax_id_fails() {
        let result = HotelFields::new(
            "Decameron".to_string(),
            "Calle 70".to_string(),
            "Cartagena".to_string(),
            "".to_string(),
            30,
        );
        assert_eq!(
            result.unwrap_err(),
            DomainError::EmptyField("tax_id".to_string())
        );
    }

    #[test]
    fn test_hotel_fields_zero_rooms_fails() {
        let result = HotelFields::new(
            "Decameron".to_string(),
            "Calle 70".to_string(),
            "Cartagena".to_string(),
            "900123456-1".to_string(),
            0,
        );
        assert_eq!(result.unwrap_err(), DomainError::InvalidRoomCount);
    }

    #[test]
    fn test_new_hotel_has_empty_inventory() {
        let hotel = Hotel::new(HotelId::new(), valid_fields());
        assert_eq!(hotel.inventory().assigned_count(), 0);
        assert_eq!(hotel.inventory().available_count(), 30);
    }

    #[test]
    fn test_edit_does_not_touch_rooms() {
        let hotel_id = HotelId::new();
        let room = Room::new(
            RoomId::new(),
            hotel_id,
            RoomType::Suite,
            Accommodation::Double,
            10,
        )
        .unwrap();
        let mut hotel = Hotel::reconstruct(hotel_id, valid_fields(), vec![room]);

        let new_fields = HotelFields::new(
            "Decameron Barú".to_string(),
            "Km 14 Vía Barú".to_string(),
            "Cartagena".to_string(),
            "900123456-1".to_string(),
            12,
        )
        .unwrap();
        hotel.edit(new_fields);

        assert_eq!(hotel.fields().name(), "Decameron Barú");
        assert_eq!(hotel.inventory().total_rooms(), 12);
        assert_eq!(hotel.inventory().rooms().len(), 1);
        assert_eq!(hotel.inventory().assigned_count(), 10);
    }

    #[test]
    fn test_edit_below_assigned_becomes_warning_state() {
        let hotel_id = HotelId::new();
        let room = Room::new(
            RoomId::new(),
            hotel_id,
            RoomType::Standard,
            Accommodation::Single,
            10,
        )
        .unwrap();
        let mut hotel = Hotel::reconstruct(hotel_id, valid_fields(), vec![room]);

        let new_fields = HotelFields::new(
            "Decameron".to_string(),
            "Calle 70".to_string(),
            "Cartagena".to_string(),
            "900123456-1".to_string(),
            4,
        )
        .unwrap();
        hotel.edit(new_fields);

        assert!(hotel.inventory().is_over_allocated());
        assert_eq!(hotel.inventory().excess(), 6);
    }
}
