use crate::domain::error::DomainError;
use crate::domain::model::{Accommodation, HotelId, RoomDraft, RoomId, RoomPatch, RoomType};
use serde::{Deserialize, Serialize};

/// 客室レコード
/// 同一タイプ・アコモデーションの客室を数量でまとめた割り当てブロック
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    hotel_id: HotelId,
    room_type: RoomType,
    accommodation: Accommodation,
    quantity: u32,
}

impl Room {
    /// 新しい客室レコードを作成
    /// 数量は1以上である必要がある
    pub fn new(
        id: RoomId,
        hotel_id: HotelId,
        room_type: RoomType,
        accommodation: Accommodation,
        quantity: u32,
    ) -> Result<Self, DomainError> {
        if quantity == 0 {
            return Err(DomainError::InvalidQuantity);
        }
        Ok(Self {
            id,
            hotel_id,
            room_type,
            accommodation,
            quantity,
        })
    }

    /// ゲートウェイが確定したドラフトから客室レコードを作成
    pub fn from_draft(id: RoomId, hotel_id: HotelId, draft: &RoomDraft) -> Self {
        Self {
            id,
            hotel_id,
            room_type: draft.room_type(),
            accommodation: draft.accommodation(),
            quantity: draft.quantity(),
        }
    }

    /// 客室IDを取得
    pub fn id(&self) -> RoomId {
        self.id
    }

    /// 所属ホテルのIDを取得
    pub fn hotel_id(&self) -> HotelId {
        self.hotel_id
    }

    /// 客室タイプを取得
    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    /// アコモデーションを取得
    pub fn accommodation(&self) -> Accommodation {
        self.accommodation
    }

    /// 数量を取得
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// 変更内容を適用する
    /// タイプ・アコモデーション・数量のみ置き換える
    pub fn apply(&mut self, patch: &RoomPatch) {
        self.room_type = patch.room_type();
        self.accommodation = patch.accommodation();
        self.quantity = patch.quantity();
    }
}
