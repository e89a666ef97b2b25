// 出力ポート
// ドメイン層が外部に依存する機能をトレイトとして定義
// アダプター層でこれらのトレイトを実装する

use crate::domain::model::{
    Hotel, HotelFields, HotelId, Room, RoomDraft, RoomId, RoomPatch,
};
use async_trait::async_trait;
use std::collections::HashMap;

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

/// ロガートレイト
/// ログ出力を抽象化するポート
pub trait Logger: Send + Sync {
    /// デバッグレベルのログを出力
    fn debug(&self, component: &str, message: &str, context: Option<HashMap<String, String>>);

    /// 情報レベルのログを出力
    fn info(&self, component: &str, message: &str, context: Option<HashMap<String, String>>);

    /// 警告レベルのログを出力
    fn warn(&self, component: &str, message: &str, context: Option<HashMap<String, String>>);

    /// エラーレベルのログを出力
    fn error(&self, component: &str, message: &str, context: Option<HashMap<String, String>>);
}

/// ゲートウェイエラー型
/// リモート永続化APIの呼び出しで発生するエラーを表現する
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    /// バリデーション拒否（HTTP 400相当）
    /// サーバーが返したメッセージをそのまま利用者に提示する
    #[error("Bad request: {0}")]
    BadRequest(String),
    /// 指定されたホテルが存在しない
    #[error("Hotel not found: {0}")]
    HotelNotFound(HotelId),
    /// 指定された客室が存在しない
    #[error("Room not found: {0}")]
    RoomNotFound(RoomId),
    /// その他の予期しない失敗（ネットワーク障害、不正なレスポンス形式など）
    #[error("Unexpected gateway failure: {0}")]
    Unexpected(String),
}

/// 在庫ゲートウェイトレイト
/// リモート永続化APIへの境界を抽象化する
/// すべての操作は低速・失敗しうるネットワーク呼び出しとして扱う
#[async_trait]
pub trait InventoryGateway: Send + Sync {
    /// ホテルを作成し、採番された識別子を含むホテルを返す
    async fn create_hotel(&self, fields: HotelFields) -> Result<Hotel, GatewayError>;

    /// IDでホテルを取得する（所有する客室も含む）
    async fn fetch_hotel(&self, id: HotelId) -> Result<Hotel, GatewayError>;

    /// すべてのホテルを取得する
    async fn list_hotels(&self) -> Result<Vec<Hotel>, GatewayError>;

    /// ホテルの基本情報を更新する
    /// 客室レコードは変更しない
    async fn update_hotel(&self, id: HotelId, fields: HotelFields) -> Result<Hotel, GatewayError>;

    /// ホテルを削除する
    /// 所有する客室もすべて削除される（カスケード削除の契約）
    async fn delete_hotel(&self, id: HotelId) -> Result<(), GatewayError>;

    /// 客室を作成し、採番された識別子を含む客室を返す
    async fn create_room(&self, hotel_id: HotelId, draft: RoomDraft) -> Result<Room, GatewayError>;

    /// 客室を変更する
    async fn update_room(&self, room_id: RoomId, patch: RoomPatch) -> Result<Room, GatewayError>;

    /// 客室を削除する
    async fn delete_room(&self, room_id: RoomId) -> Result<(), GatewayError>;

    /// 指定ホテルの客室を登録順で取得する
    async fn list_rooms_by_hotel(&self, hotel_id: HotelId) -> Result<Vec<Room>, GatewayError>;
}

/// 通知の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// 成功
    Success,
    /// エラー（予期しない失敗）
    Error,
    /// 情報（バリデーション拒否など）
    Info,
}

/// 通知シンクトレイト
/// 成功・失敗・確認ダイアログの提示を抽象化するポート
/// 副作用のみで、コアのロジックには影響しない
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// 利用者に通知を提示する
    async fn notify(&self, kind: NotificationKind, message: &str, title: &str);

    /// 破壊的な操作の前に確認を求める
    ///
    /// # Returns
    /// * `true` - 利用者が操作を承認した
    /// * `false` - 利用者が操作を取り消した
    async fn confirm(&self, message: &str) -> bool;
}
