use hotel_inventory_management::adapter::driven::{
    ConsoleLogger, ConsoleNotificationSink, HttpInventoryGateway, InMemoryInventoryGateway,
};
use hotel_inventory_management::adapter::driver::rest_api::{create_router, AppState};
use hotel_inventory_management::adapter::ServerConfig;
use hotel_inventory_management::application::service::{
    HotelApplicationService, RoomApplicationService,
};
use hotel_inventory_management::domain::port::InventoryGateway;

use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== ホテル客室在庫管理システム REST API ===");
    println!();

    // .envファイルから環境変数を読み込む
    dotenvy::dotenv().ok();

    // サーバー設定を読み込む
    let config = ServerConfig::from_env()?;
    println!(
        "サーバー設定を読み込みました: {}:{}",
        config.host, config.port
    );

    // 在庫ゲートウェイを作成
    // GATEWAY_MODE=http の場合はリモートのバックエンドAPIに委譲する
    let gateway: Arc<dyn InventoryGateway> = match std::env::var("GATEWAY_MODE").as_deref() {
        Ok("http") => {
            println!("HTTPゲートウェイを使用します: {}", config.api_base_url);
            Arc::new(HttpInventoryGateway::new(config.api_base_url.clone()))
        }
        _ => {
            println!("インメモリゲートウェイを使用します");
            Arc::new(InMemoryInventoryGateway::new())
        }
    };

    // 通知シンクとロガーを作成
    let notifier = Arc::new(ConsoleNotificationSink::new());
    let logger = Arc::new(ConsoleLogger::new());

    // アプリケーションサービスを作成
    let hotel_service = HotelApplicationService::new(
        gateway.clone(),
        notifier.clone(),
        logger.clone(),
    );
    let room_service = RoomApplicationService::new(gateway, notifier, logger);

    // アプリケーション状態を作成
    let app_state = AppState {
        hotel_service: Arc::new(hotel_service),
        room_service: Arc::new(room_service),
    };

    // REST APIルーターを作成
    let app = create_router()
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // サーバーを起動
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    println!(
        "REST APIサーバーが起動しました: http://{}",
        config.bind_address()
    );
    println!("ヘルスチェック: GET /health");
    println!("API仕様:");
    println!("  GET    /hotels - ホテル一覧取得");
    println!("  GET    /hotels/one/:id - ホテル詳細取得");
    println!("  POST   /hotels - ホテル作成");
    println!("  PUT    /hotels/:id - ホテル更新");
    println!("  DELETE /hotels/:id - ホテル削除（客室も連鎖削除）");
    println!("  POST   /rooms - 客室追加");
    println!("  PUT    /rooms/:id - 客室更新");
    println!("  DELETE /rooms/:id - 客室削除");
    println!("  GET    /rooms/hotel/:id - ホテルの客室一覧取得");
    println!();

    axum::serve(listener, app).await?;

    Ok(())
}
