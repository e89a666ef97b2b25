use crate::application::error::ApplicationError;
use crate::domain::error::DomainError;
use crate::domain::model::{Hotel, HotelFields, HotelId, Room, RoomDraft, RoomId, RoomPatch};
use crate::domain::port::{
    GatewayError, InventoryGateway, Logger, NotificationKind, NotificationSink,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// ゲートウェイエラーを通知シンクに提示する
/// バリデーション拒否は情報通知、それ以外はエラー通知として扱う
async fn surface_gateway_error(
    notifier: &dyn NotificationSink,
    err: &GatewayError,
    fallback_message: &str,
) {
    match err {
        // サーバーが返したメッセージをそのまま提示する
        GatewayError::BadRequest(message) => {
            notifier
                .notify(NotificationKind::Info, message, "入力内容を確認してください")
                .await;
        }
        GatewayError::HotelNotFound(_) | GatewayError::RoomNotFound(_) => {
            notifier
                .notify(
                    NotificationKind::Info,
                    &err.to_string(),
                    "対象が見つかりません",
                )
                .await;
        }
        GatewayError::Unexpected(_) => {
            notifier
                .notify(NotificationKind::Error, fallback_message, "予期しないエラー")
                .await;
        }
    }
}

/// ホテルアプリケーションサービス
/// ホテルのCRUDをゲートウェイ・通知シンクと協調して実行する
pub struct HotelApplicationService {
    gateway: Arc<dyn InventoryGateway>,
    notifier: Arc<dyn NotificationSink>,
    logger: Arc<dyn Logger>,
}

impl HotelApplicationService {
    /// 新しいホテルアプリケーションサービスを作成
    ///
    /// # Arguments
    /// * `gateway` - 在庫ゲートウェイ
    /// * `notifier` - 通知シンク
    /// * `logger` - ロガー
    pub fn new(
        gateway: Arc<dyn InventoryGateway>,
        notifier: Arc<dyn NotificationSink>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            gateway,
            notifier,
            logger,
        }
    }

    /// 新しいホテルを作成
    /// フィールドのバリデーションは`HotelFields`の構築時に済んでいる
    ///
    /// # Returns
    /// * `Ok(Hotel)` - 採番済みの作成されたホテル
    /// * `Err(ApplicationError)` - 作成失敗
    pub async fn create_hotel(&self, fields: HotelFields) -> Result<Hotel, ApplicationError> {
        match self.gateway.create_hotel(fields).await {
            Ok(hotel) => {
                self.logger.info(
                    "HotelApplicationService",
                    "Hotel created",
                    Some(HashMap::from([(
                        "hotel_id".to_string(),
                        hotel.id().to_string(),
                    )])),
                );
                self.notifier
                    .notify(
                        NotificationKind::Success,
                        "ホテルを作成しました",
                        "完了",
                    )
                    .await;
                Ok(hotel)
            }
            Err(err) => {
                self.logger.error(
                    "HotelApplicationService",
                    &format!("Hotel creation failed: {}", err),
                    None,
                );
                surface_gateway_error(
                    self.notifier.as_ref(),
                    &err,
                    "ホテルの作成中に予期しないエラーが発生しました",
                )
                .await;
                Err(err.into())
            }
        }
    }

    /// IDでホテルを取得
    /// 割り当てが総客室数を超過している場合は警告を提示する（クラッシュさせない）
    ///
    /// # Returns
    /// * `Ok(Hotel)` - 取得したホテル
    /// * `Err(ApplicationError::NotFound)` - ホテルが存在しない
    pub async fn get_hotel(&self, id: HotelId) -> Result<Hotel, ApplicationError> {
        let hotel = match self.gateway.fetch_hotel(id).await {
            Ok(hotel) => hotel,
            Err(err @ GatewayError::HotelNotFound(_)) => {
                surface_gateway_error(
                    self.notifier.as_ref(),
                    &err,
                    "ホテルの取得中に予期しないエラーが発生しました",
                )
                .await;
                return Err(ApplicationError::NotFound(format!(
                    "ホテルが見つかりません: {}",
                    id
                )));
            }
            Err(err) => {
                surface_gateway_error(
                    self.notifier.as_ref(),
                    &err,
                    "ホテルの取得中に予期しないエラーが発生しました",
                )
                .await;
                return Err(err.into());
            }
        };

        if hotel.inventory().is_over_allocated() {
            let excess = hotel.inventory().excess();
            self.logger.warn(
                "HotelApplicationService",
                "Hotel is over-allocated",
                Some(HashMap::from([
                    ("hotel_id".to_string(), hotel.id().to_string()),
                    ("excess".to_string(), excess.to_string()),
                ])),
            );
            self.notifier
                .notify(
                    NotificationKind::Info,
                    &format!("割り当てが総客室数を{}室超過しています", excess),
                    "警告",
                )
                .await;
        }

        Ok(hotel)
    }

    /// すべてのホテルを取得
    pub async fn list_hotels(&self) -> Result<Vec<Hotel>, ApplicationError> {
        self.gateway
            .list_hotels()
            .await
            .map_err(ApplicationError::from)
    }

    /// ホテルの基本情報を編集
    /// 客室レコードには触れない
    pub async fn update_hotel(
        &self,
        id: HotelId,
        fields: HotelFields,
    ) -> Result<Hotel, ApplicationError> {
        match self.gateway.update_hotel(id, fields).await {
            Ok(hotel) => {
                self.notifier
                    .notify(
                        NotificationKind::Success,
                        "ホテルを更新しました",
                        "完了",
                    )
                    .await;
                Ok(hotel)
            }
            Err(err) => {
                surface_gateway_error(
                    self.notifier.as_ref(),
                    &err,
                    "ホテルの更新中に予期しないエラーが発生しました",
                )
                .await;
                Err(err.into())
            }
        }
    }

    /// ホテルを削除
    /// 破壊的操作のため確認を取り、承認された場合のみ実行する。
    /// 所有する客室もすべて削除される（ゲートウェイのカスケード削除の契約）
    ///
    /// # Returns
    /// * `Ok(())` - 削除成功
    /// * `Err(ApplicationError::Cancelled)` - 利用者が取り消した
    pub async fn delete_hotel(&self, id: HotelId) -> Result<(), ApplicationError> {
        let approved = self
            .notifier
            .confirm("このホテルを削除すると、所有するすべての客室も削除されます。よろしいですか？")
            .await;
        if !approved {
            return Err(ApplicationError::Cancelled);
        }

        match self.gateway.delete_hotel(id).await {
            Ok(()) => {
                self.logger.info(
                    "HotelApplicationService",
                    "Hotel deleted",
                    Some(HashMap::from([("hotel_id".to_string(), id.to_string())])),
                );
                self.notifier
                    .notify(
                        NotificationKind::Success,
                        "ホテルを削除しました",
                        "完了",
                    )
                    .await;
                Ok(())
            }
            Err(err) => {
                surface_gateway_error(
                    self.notifier.as_ref(),
                    &err,
                    "ホテルの削除中に予期しないエラーが発生しました",
                )
                .await;
                Err(err.into())
            }
        }
    }
}

/// 客室アプリケーションサービス
///
/// 客室の追加・変更・削除を実行する。容量の検査と書き込みは
/// ホテルごとのミューテックスで直列化し、検査と書き込みの間に
/// 別の操作が割り込んで容量の前提が崩れることを防ぐ。
pub struct RoomApplicationService {
    gateway: Arc<dyn InventoryGateway>,
    notifier: Arc<dyn NotificationSink>,
    logger: Arc<dyn Logger>,
    /// ホテルごとの直列化用ミューテックス。
    /// エントリはホテル削除後も回収されず、編集対象となった
    /// ホテル数に比例して増え続ける（エントリは空のミューテックス1個分）
    hotel_locks: Mutex<HashMap<HotelId, Arc<Mutex<()>>>>,
}

impl RoomApplicationService {
    /// 新しい客室アプリケーションサービスを作成
    pub fn new(
        gateway: Arc<dyn InventoryGateway>,
        notifier: Arc<dyn NotificationSink>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            gateway,
            notifier,
            logger,
            hotel_locks: Mutex::new(HashMap::new()),
        }
    }

    /// 指定ホテル用のミューテックスを取得（なければ作成）
    async fn lock_for(&self, hotel_id: HotelId) -> Arc<Mutex<()>> {
        let mut locks = self.hotel_locks.lock().await;
        locks
            .entry(hotel_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// 客室を追加
    ///
    /// ローカルの容量検査を通過した場合のみゲートウェイを呼び出す。
    /// 容量・バリデーションの失敗はネットワークに到達する前に短絡する
    ///
    /// # Returns
    /// * `Ok(Room)` - 採番済みの作成された客室
    /// * `Err(ApplicationError)` - 追加失敗
    pub async fn add_room(
        &self,
        hotel_id: HotelId,
        draft: RoomDraft,
    ) -> Result<Room, ApplicationError> {
        let lock = self.lock_for(hotel_id).await;
        let _guard = lock.lock().await;

        let hotel = self.fetch_hotel(hotel_id).await?;
        let inventory = hotel.inventory();
        if !inventory.can_add(draft.quantity()) {
            return Err(DomainError::CapacityExceeded {
                requested: draft.quantity(),
                available: inventory.available_count(),
            }
            .into());
        }

        match self.gateway.create_room(hotel_id, draft).await {
            Ok(room) => {
                self.logger.info(
                    "RoomApplicationService",
                    "Room added",
                    Some(HashMap::from([
                        ("hotel_id".to_string(), hotel_id.to_string()),
                        ("room_id".to_string(), room.id().to_string()),
                        ("quantity".to_string(), room.quantity().to_string()),
                    ])),
                );
                self.notifier
                    .notify(
                        NotificationKind::Success,
                        "客室を追加しました",
                        "完了",
                    )
                    .await;
                Ok(room)
            }
            Err(err) => {
                surface_gateway_error(
                    self.notifier.as_ref(),
                    &err,
                    "客室の追加中に予期しないエラーが発生しました",
                )
                .await;
                Err(err.into())
            }
        }
    }

    /// 客室を変更
    ///
    /// 変更対象の現在の数量を残数に戻してから容量を判定するため、
    /// 同じ数量を指定し直す編集は常に成功する
    pub async fn update_room(
        &self,
        hotel_id: HotelId,
        room_id: RoomId,
        patch: RoomPatch,
    ) -> Result<Room, ApplicationError> {
        let lock = self.lock_for(hotel_id).await;
        let _guard = lock.lock().await;

        let hotel = self.fetch_hotel(hotel_id).await?;
        // ローカルのスナップショットに適用して容量・存在を検査する
        let mut snapshot = hotel.inventory().clone();
        snapshot.update(room_id, &patch)?;

        match self.gateway.update_room(room_id, patch).await {
            Ok(room) => {
                self.notifier
                    .notify(
                        NotificationKind::Success,
                        "客室を更新しました",
                        "完了",
                    )
                    .await;
                Ok(room)
            }
            Err(err) => {
                surface_gateway_error(
                    self.notifier.as_ref(),
                    &err,
                    "客室の更新中に予期しないエラーが発生しました",
                )
                .await;
                Err(err.into())
            }
        }
    }

    /// 客室を削除
    /// 破壊的操作のため確認を取り、承認された場合のみ実行する。
    /// 削除は在庫を解放するだけなので容量の検査は不要
    pub async fn delete_room(
        &self,
        hotel_id: HotelId,
        room_id: RoomId,
    ) -> Result<(), ApplicationError> {
        let approved = self.notifier.confirm("この客室を削除しますか？").await;
        if !approved {
            return Err(ApplicationError::Cancelled);
        }

        let lock = self.lock_for(hotel_id).await;
        let _guard = lock.lock().await;

        let hotel = self.fetch_hotel(hotel_id).await?;
        if hotel.inventory().find_room(room_id).is_none() {
            return Err(DomainError::RoomNotFound(room_id).into());
        }

        match self.gateway.delete_room(room_id).await {
            Ok(()) => {
                self.logger.info(
                    "RoomApplicationService",
                    "Room deleted",
                    Some(HashMap::from([
                        ("hotel_id".to_string(), hotel_id.to_string()),
                        ("room_id".to_string(), room_id.to_string()),
                    ])),
                );
                self.notifier
                    .notify(
                        NotificationKind::Success,
                        "客室を削除しました",
                        "完了",
                    )
                    .await;
                Ok(())
            }
            Err(err) => {
                surface_gateway_error(
                    self.notifier.as_ref(),
                    &err,
                    "客室の削除中に予期しないエラーが発生しました",
                )
                .await;
                Err(err.into())
            }
        }
    }

    /// 指定ホテルの客室を登録順で取得
    pub async fn list_rooms(&self, hotel_id: HotelId) -> Result<Vec<Room>, ApplicationError> {
        self.gateway
            .list_rooms_by_hotel(hotel_id)
            .await
            .map_err(ApplicationError::from)
    }

    /// ホテルを取得し、存在しない場合はNotFoundに変換する
    async fn fetch_hotel(&self, hotel_id: HotelId) -> Result<Hotel, ApplicationError> {
        match self.gateway.fetch_hotel(hotel_id).await {
            Ok(hotel) => Ok(hotel),
            Err(err @ GatewayError::HotelNotFound(_)) => {
                surface_gateway_error(
                    self.notifier.as_ref(),
                    &err,
                    "ホテルの取得中に予期しないエラーが発生しました",
                )
                .await;
                Err(ApplicationError::NotFound(format!(
                    "ホテルが見つかりません: {}",
                    hotel_id
                )))
            }
            Err(err) => {
                surface_gateway_error(
                    self.notifier.as_ref(),
                    &err,
                    "ホテルの取得中に予期しないエラーが発生しました",
                )
                .await;
                Err(err.into())
            }
        }
    }
}
