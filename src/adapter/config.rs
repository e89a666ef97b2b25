use std::env;

/// サーバー・ゲートウェイ接続設定を管理する構造体
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// HTTPゲートウェイが接続するバックエンドのベースURL
    pub api_base_url: String,
}

/// 設定エラー
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl ServerConfig {
    /// 環境変数から設定を読み取る
    /// 環境変数が設定されていない場合はデフォルト値を使用
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidValue(format!("Invalid SERVER_PORT: {}", e)))?;

        let api_base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        Ok(Self {
            host,
            port,
            api_base_url,
        })
    }

    /// リッスンアドレスを生成
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
