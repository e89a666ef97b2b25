use crate::domain::error::DomainError;
use crate::domain::port::GatewayError;

/// アプリケーション層のエラー型
/// ドメインエラーとゲートウェイエラーをラップする
#[derive(Debug, Clone, PartialEq)]
pub enum ApplicationError {
    /// ドメインエラー（バリデーション・容量の違反）
    /// ゲートウェイ呼び出しの前に短絡する
    DomainError(DomainError),
    /// ゲートウェイエラー（ネットワーク・サーバーの失敗）
    GatewayError(GatewayError),
    /// エンティティが見つからない
    NotFound(String),
    /// 利用者が確認ダイアログで操作を取り消した
    Cancelled,
}

impl std::fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationError::DomainError(err) => write!(f, "Domain error: {}", err),
            ApplicationError::GatewayError(err) => write!(f, "Gateway error: {}", err),
            ApplicationError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApplicationError::Cancelled => write!(f, "Operation cancelled by the user"),
        }
    }
}

impl std::error::Error for ApplicationError {}

// From実装でエラー変換を簡潔に
impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        ApplicationError::DomainError(err)
    }
}

impl From<GatewayError> for ApplicationError {
    fn from(err: GatewayError) -> Self {
        ApplicationError::GatewayError(err)
    }
}
