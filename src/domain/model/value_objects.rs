use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;

/// ホテルの一意識別子
/// ゲートウェイが作成時に採番する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HotelId(Uuid);

impl HotelId {
    /// 新しい一意のHotelIdを生成
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// UUIDから HotelId を作成
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// 文字列からHotelIdを作成
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        let uuid = Uuid::parse_str(s)?;
        Ok(Self(uuid))
    }

    /// 内部のUUIDを取得
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for HotelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for HotelId {
    fn default() -> Self {
        Self::new()
    }
}

/// 客室レコードの一意識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(Uuid);

impl RoomId {
    /// 新しい一意のRoomIdを生成
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// UUIDから RoomId を作成
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// 文字列からRoomIdを作成
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        let uuid = Uuid::parse_str(s)?;
        Ok(Self(uuid))
    }

    /// 内部のUUIDを取得
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for RoomId {
    fn default() -> Self {
        Self::new()
    }
}

/// 客室タイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// スイート
    Suite,
    /// スタンダード
    Standard,
    /// ジュニア
    Junior,
}

impl RoomType {
    /// 正規化された名前を取得
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Suite => "suite",
            RoomType::Standard => "standard",
            RoomType::Junior => "junior",
        }
    }

    /// 文字列からRoomTypeを作成
    /// 大文字小文字は区別しない
    pub fn from_string(s: &str) -> Result<Self, DomainError> {
        match s.to_lowercase().as_str() {
            "suite" => Ok(RoomType::Suite),
            "standard" => Ok(RoomType::Standard),
            "junior" => Ok(RoomType::Junior),
            _ => Err(DomainError::UnknownRoomType(s.to_string())),
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// アコモデーション（客室の収容形態）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accommodation {
    /// 1名用
    Single,
    /// 2名用
    Double,
    /// 3名用
    Triple,
    /// 4名用
    Quadruple,
}

impl Accommodation {
    /// 正規化された名前を取得
    pub fn as_str(&self) -> &'static str {
        match self {
            Accommodation::Single => "single",
            Accommodation::Double => "double",
            Accommodation::Triple => "triple",
            Accommodation::Quadruple => "quadruple",
        }
    }

    /// 文字列からAccommodationを作成
    /// 大文字小文字は区別しない
    pub fn from_string(s: &str) -> Result<Self, DomainError> {
        match s.to_lowercase().as_str() {
            "single" => Ok(Accommodation::Single),
            "double" => Ok(Accommodation::Double),
            "triple" => Ok(Accommodation::Triple),
            "quadruple" => Ok(Accommodation::Quadruple),
            _ => Err(DomainError::UnknownAccommodation(s.to_string())),
        }
    }
}

impl fmt::Display for Accommodation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 追加前の客室ドラフトを表す値オブジェクト
/// 識別子はゲートウェイが永続化を確認した後に採番される
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDraft {
    room_type: RoomType,
    accommodation: Accommodation,
    quantity: u32,
}

impl RoomDraft {
    /// 新しい客室ドラフトを作成
    /// 数量は1以上である必要がある
    pub fn new(
        room_type: RoomType,
        accommodation: Accommodation,
        quantity: u32,
    ) -> Result<Self, DomainError> {
        if quantity == 0 {
            return Err(DomainError::InvalidQuantity);
        }
        Ok(Self {
            room_type,
            accommodation,
            quantity,
        })
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
}

/// 既存客室への変更内容を表す値オブジェクト
/// タイプ・アコモデーション・数量のみ変更できる
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomPatch {
    room_type: RoomType,
    accommodation: Accommodation,
    quantity: u32,
}

impl RoomPatch {
    /// 新しい変更内容を作成
    /// 数量は1以上である必要がある
    pub fn new(
        room_type: RoomType,
        accommodation: Accommodation,
        quantity: u32,
    ) -> Result<Self, DomainError> {
        if quantity == 0 {
            return Err(DomainError::InvalidQuantity);
        }
        Ok(Self {
            room_type,
            accommodation,
            quantity,
        })
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotel_id_creation() {
        let id1 = HotelId::new();
        let id2 = HotelId::new();
        assert_ne!(id1, id2, "Each HotelId should be unique");
    }

    #[test]
    fn test_room_type_from_string_valid() {
        assert_eq!(RoomType::from_string("suite").unwrap(), RoomType::Suite);
        assert_eq!(
            RoomType::from_string("standard").unwrap(),
            RoomType::Standard
        );
        assert_eq!(RoomType::from_string("junior").unwrap(), RoomType::Junior);
        // 大文字小文字を区別しない
        assert_eq!(RoomType::from_string("Suite").unwrap(), RoomType::Suite);
    }

    #[test]
    fn test_room_type_from_string_invalid() {
        let result = RoomType::from_string("penthouse");
        assert_eq!(
            result.unwrap_err(),
            DomainError::UnknownRoomType("penthouse".to_string())
        );
    }

    #[test]
    fn test_accommodation_from_string_valid() {
        assert_eq!(
            Accommodation::from_string("single").unwrap(),
            Accommodation::Single
        );
        assert_eq!(
            Accommodation::from_string("QUADRUPLE").unwrap(),
            Accommodation::Quadruple
        );
    }

    #[test]
    fn test_accommodation_from_string_invalid() {
        assert!(Accommodation::from_string("quintuple").is_err());
        assert!(Accommodation::from_string("").is_err());
    }

    #[test]
    fn test_room_draft_creation() {
        let draft = RoomDraft::new(RoomType::Suite, Accommodation::Double, 3).unwrap();
        assert_eq!(draft.room_type(), RoomType::Suite);
        assert_eq!(draft.accommodation(), Accommodation::Double);
        assert_eq!(draft.quantity(), 3);
    }

    #[test]
    fn test_room_draft_zero_quantity_fails() {
        let result = RoomDraft::new(RoomType::Standard, Accommodation::Single, 0);
        assert_eq!(result.unwrap_err(), DomainError::InvalidQuantity);
    }

    #[test]
    fn test_room_patch_zero_quantity_fails() {
        let result = RoomPatch::new(RoomType::Junior, Accommodation::Triple, 0);
        assert_eq!(result.unwrap_err(), DomainError::InvalidQuantity);
    }
}
