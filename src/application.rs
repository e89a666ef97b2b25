// アプリケーション層
// ドメインと出力ポートを協調させるアプリケーションサービス

pub mod error;
pub mod service;

pub use error::ApplicationError;
