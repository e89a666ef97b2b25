use crate::domain::error::DomainError;
use crate::domain::model::{Room, RoomId, RoomPatch};

/// 客室在庫集約
/// 1ホテル分の客室割り当てを管理し、総数に対する超過を防ぐ
///
/// `total_rooms` はホテルが申告した総客室数であり、
/// 実際の客室レコード数とは独立した上限として扱う。
#[derive(Debug, Clone, PartialEq)]
pub struct RoomInventory {
    total_rooms: u32,
    rooms: Vec<Room>,
}

impl RoomInventory {
    /// 空の在庫を作成
    pub fn new(total_rooms: u32) -> Self {
        Self {
            total_rooms,
            rooms: Vec::new(),
        }
    }

    /// ゲートウェイから取得したデータで在庫を再構築
    /// 既に総数を超過している在庫もそのまま受け入れる（警告状態として扱う）
    pub fn reconstruct(total_rooms: u32, rooms: Vec<Room>) -> Self {
        Self { total_rooms, rooms }
    }

    /// 申告された総客室数を取得
    pub fn total_rooms(&self) -> u32 {
        self.total_rooms
    }

    /// 申告総数を差し替える
    /// ホテル編集時に使用し、客室レコードには触れない
    pub fn set_total_rooms(&mut self, total_rooms: u32) {
        self.total_rooms = total_rooms;
    }

    /// 客室レコードを登録順で取得
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// IDで客室レコードを検索
    pub fn find_room(&self, room_id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id() == room_id)
    }

    /// 割り当て済み客室数（全レコードの数量の合計）
    pub fn assigned_count(&self) -> u32 {
        self.rooms.iter().map(|room| room.quantity()).sum()
    }

    /// 割り当て可能な残数
    /// 総数を超過している場合は負の値を返す
    pub fn available_count(&self) -> i64 {
        self.total_rooms as i64 - self.assigned_count() as i64
    }

    /// 割り当てが総数を超過しているか
    pub fn is_over_allocated(&self) -> bool {
        self.available_count() < 0
    }

    /// 超過している数量
    /// 超過していなければ0
    pub fn excess(&self) -> u32 {
        let available = self.available_count();
        if available < 0 {
            available.unsigned_abs() as u32
        } else {
            0
        }
    }

    /// 指定した数量の客室を追加できるかチェック
    pub fn can_add(&self, quantity: u32) -> bool {
        quantity >= 1 && quantity as i64 <= self.available_count()
    }

    /// 既存の客室を指定した数量に変更できるかチェック
    ///
    /// 変更対象の現在の数量を残数に戻してから判定する。
    /// これをしないと、同じ数量を指定し直しただけでも編集が拒否される。
    /// 対象が存在しない場合はfalseを返す
    pub fn can_update(&self, room_id: RoomId, new_quantity: u32) -> bool {
        let Some(current) = self.find_room(room_id) else {
            return false;
        };
        new_quantity >= 1
            && new_quantity as i64 <= self.available_count() + current.quantity() as i64
    }

    /// 客室レコードを追加
    /// 残数を超える場合は`CapacityExceeded`で失敗し、在庫は変化しない
    pub fn add(&mut self, room: Room) -> Result<(), DomainError> {
        if !self.can_add(room.quantity()) {
            return Err(DomainError::CapacityExceeded {
                requested: room.quantity(),
                available: self.available_count(),
            });
        }
        self.rooms.push(room);
        Ok(())
    }

    /// 客室レコードを変更
    ///
    /// # Returns
    /// * `Ok(())` - 変更成功
    /// * `Err(DomainError::RoomNotFound)` - 対象が存在しない
    /// * `Err(DomainError::CapacityExceeded)` - 変更後の数量が残数を超える
    pub fn update(&mut self, room_id: RoomId, patch: &RoomPatch) -> Result<(), DomainError> {
        if self.find_room(room_id).is_none() {
            return Err(DomainError::RoomNotFound(room_id));
        }
        if !self.can_update(room_id, patch.quantity()) {
            let current = self
                .find_room(room_id)
                .map(|room| room.quantity() as i64)
                .unwrap_or(0);
            return Err(DomainError::CapacityExceeded {
                requested: patch.quantity(),
                available: self.available_count() + current,
            });
        }
        if let Some(room) = self.rooms.iter_mut().find(|room| room.id() == room_id) {
            room.apply(patch);
        }
        Ok(())
    }

    /// 客室レコードを削除
    /// 削除は在庫を解放するだけなので、容量の観点では常に成功する
    pub fn remove(&mut self, room_id: RoomId) -> Result<Room, DomainError> {
        let position = self
            .rooms
            .iter()
            .position(|room| room.id() == room_id)
            .ok_or(DomainError::RoomNotFound(room_id))?;
        Ok(self.rooms.remove(position))
    }
}
