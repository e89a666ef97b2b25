use crate::domain::model::RoomId;

/// ドメイン層のエラー型
/// ビジネスルール違反を表現する
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// 必須フィールドが空（例: ホテル名が未入力）
    EmptyField(String),
    /// 無効な客室総数（1以上である必要がある）
    InvalidRoomCount,
    /// 無効な数量（例: 0以下の数量）
    InvalidQuantity,
    /// 割り当て可能な客室数の超過
    CapacityExceeded {
        /// 要求された数量
        requested: u32,
        /// 割り当て可能な残数（すでに超過している場合は負になる）
        available: i64,
    },
    /// 客室が見つからない
    RoomNotFound(RoomId),
    /// カタログに存在しない客室タイプ
    UnknownRoomType(String),
    /// カタログに存在しないアコモデーション
    UnknownAccommodation(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::EmptyField(field) => write!(f, "Field must not be empty: {}", field),
            DomainError::InvalidRoomCount => write!(f, "Total rooms must be at least 1"),
            DomainError::InvalidQuantity => write!(f, "Invalid quantity"),
            DomainError::CapacityExceeded {
                requested,
                available,
            } => write!(
                f,
                "Capacity exceeded: requested {}, available {}",
                requested, available
            ),
            DomainError::RoomNotFound(room_id) => write!(f, "Room not found: {}", room_id),
            DomainError::UnknownRoomType(value) => write!(f, "Unknown room type: {}", value),
            DomainError::UnknownAccommodation(value) => {
                write!(f, "Unknown accommodation: {}", value)
            }
        }
    }
}

impl std::error::Error for DomainError {}
