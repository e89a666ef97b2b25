use crate::domain::port::{NotificationKind, NotificationSink};
use async_trait::async_trait;

/// コンソール通知シンク
/// 通知を標準出力に提示する
///
/// 対話環境を持たないため、確認ダイアログは常に承認として扱う。
/// 確認の拒否経路はテスト用のシンクで検証する
pub struct ConsoleNotificationSink;

impl ConsoleNotificationSink {
    /// 新しいコンソール通知シンクを作成
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleNotificationSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationSink for ConsoleNotificationSink {
    async fn notify(&self, kind: NotificationKind, message: &str, title: &str) {
        let icon = match kind {
            NotificationKind::Success => "✅",
            NotificationKind::Error => "🚨",
            NotificationKind::Info => "ℹ️",
        };
        println!("{} [通知] {}: {}", icon, title, message);
    }

    async fn confirm(&self, message: &str) -> bool {
        println!("❓ [確認] {} -> 承認", message);
        true
    }
}
