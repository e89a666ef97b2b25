use crate::domain::model::{
    Hotel, HotelFields, HotelId, Room, RoomDraft, RoomId, RoomInventory, RoomPatch,
};
use crate::domain::port::{GatewayError, InventoryGateway};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// 保存されたホテル1件分のレコード
#[derive(Debug, Clone)]
struct StoredHotel {
    fields: HotelFields,
    rooms: Vec<Room>,
    created_at: DateTime<Utc>,
}

/// ゲートウェイの内部状態
#[derive(Debug, Default)]
struct State {
    hotels: HashMap<HotelId, StoredHotel>,
    /// 客室IDから所属ホテルIDへの索引
    room_index: HashMap<RoomId, HotelId>,
}

/// インメモリ在庫ゲートウェイ
///
/// バックエンドAPIの振る舞いを在メモリで再現する駆動される側アダプター。
/// 元のバックエンドと同様に、フィールドと容量の検証をサーバー側でも行い、
/// 拒否は`BadRequest`（HTTP 400相当）として返す
pub struct InMemoryInventoryGateway {
    state: RwLock<State>,
}

impl InMemoryInventoryGateway {
    /// 空のゲートウェイを作成
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State::default()),
        }
    }

    fn to_hotel(id: HotelId, stored: &StoredHotel) -> Hotel {
        Hotel::reconstruct(id, stored.fields.clone(), stored.rooms.clone())
    }
}

impl Default for InMemoryInventoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InventoryGateway for InMemoryInventoryGateway {
    async fn create_hotel(&self, fields: HotelFields) -> Result<Hotel, GatewayError> {
        let mut state = self.state.write().await;
        let id = HotelId::new();
        state.hotels.insert(
            id,
            StoredHotel {
                fields: fields.clone(),
                rooms: Vec::new(),
                created_at: Utc::now(),
            },
        );
        Ok(Hotel::new(id, fields))
    }

    async fn fetch_hotel(&self, id: HotelId) -> Result<Hotel, GatewayError> {
        let state = self.state.read().await;
        let stored = state
            .hotels
            .get(&id)
            .ok_or(GatewayError::HotelNotFound(id))?;
        Ok(Self::to_hotel(id, stored))
    }

    async fn list_hotels(&self) -> Result<Vec<Hotel>, GatewayError> {
        let state = self.state.read().await;
        // 作成日時の降順で並べて返す
        let mut entries: Vec<_> = state.hotels.iter().collect();
        entries.sort_by(|a, b| b.1.created_at.cmp(&a.1.created_at));
        Ok(entries
            .into_iter()
            .map(|(id, stored)| Self::to_hotel(*id, stored))
            .collect())
    }

    async fn update_hotel(&self, id: HotelId, fields: HotelFields) -> Result<Hotel, GatewayError> {
        let mut state = self.state.write().await;
        let stored = state
            .hotels
            .get_mut(&id)
            .ok_or(GatewayError::HotelNotFound(id))?;
        // 客室レコードは変更しない。総数の縮小による超過は警告状態として受け入れる
        stored.fields = fields;
        Ok(Self::to_hotel(id, stored))
    }

    async fn delete_hotel(&self, id: HotelId) -> Result<(), GatewayError> {
        let mut state = self.state.write().await;
        let stored = state
            .hotels
            .remove(&id)
            .ok_or(GatewayError::HotelNotFound(id))?;
        // カスケード削除: 所有する客室をすべて取り除き、孤児を残さない
        for room in &stored.rooms {
            state.room_index.remove(&room.id());
        }
        Ok(())
    }

    async fn create_room(&self, hotel_id: HotelId, draft: RoomDraft) -> Result<Room, GatewayError> {
        let mut state = self.state.write().await;
        let stored = state
            .hotels
            .get_mut(&hotel_id)
            .ok_or(GatewayError::HotelNotFound(hotel_id))?;

        // サーバー側でも容量を検証する
        let inventory =
            RoomInventory::reconstruct(stored.fields.total_rooms(), stored.rooms.clone());
        if !inventory.can_add(draft.quantity()) {
            return Err(GatewayError::BadRequest(format!(
                "割り当て可能な客室数を超えています（残り{}室）",
                inventory.available_count().max(0)
            )));
        }

        let room = Room::from_draft(RoomId::new(), hotel_id, &draft);
        stored.rooms.push(room.clone());
        state.room_index.insert(room.id(), hotel_id);
        Ok(room)
    }

    async fn update_room(&self, room_id: RoomId, patch: RoomPatch) -> Result<Room, GatewayError> {
        let mut state = self.state.write().await;
        let hotel_id = *state
            .room_index
            .get(&room_id)
            .ok_or(GatewayError::RoomNotFound(room_id))?;
        let stored = state
            .hotels
            .get_mut(&hotel_id)
            .ok_or(GatewayError::HotelNotFound(hotel_id))?;

        let mut inventory =
            RoomInventory::reconstruct(stored.fields.total_rooms(), stored.rooms.clone());
        inventory
            .update(room_id, &patch)
            .map_err(|err| GatewayError::BadRequest(err.to_string()))?;

        stored.rooms = inventory.rooms().to_vec();
        let updated = stored
            .rooms
            .iter()
            .find(|room| room.id() == room_id)
            .cloned()
            .ok_or(GatewayError::RoomNotFound(room_id))?;
        Ok(updated)
    }

    async fn delete_room(&self, room_id: RoomId) -> Result<(), GatewayError> {
        let mut state = self.state.write().await;
        let hotel_id = state
            .room_index
            .remove(&room_id)
            .ok_or(GatewayError::RoomNotFound(room_id))?;
        if let Some(stored) = state.hotels.get_mut(&hotel_id) {
            stored.rooms.retain(|room| room.id() != room_id);
        }
        Ok(())
    }

    async fn list_rooms_by_hotel(&self, hotel_id: HotelId) -> Result<Vec<Room>, GatewayError> {
        let state = self.state.read().await;
        let stored = state
            .hotels
            .get(&hotel_id)
            .ok_or(GatewayError::HotelNotFound(hotel_id))?;
        Ok(stored.rooms.clone())
    }
}
