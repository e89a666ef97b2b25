use crate::domain::port::{LogLevel, Logger};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// ログエントリ
/// 構造化ログの基本構造を定義
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub component: String,
    pub message: String,
    pub context: HashMap<String, String>,
}

impl LogEntry {
    /// 新しいログエントリを作成
    pub fn new(level: LogLevel, component: String, message: String) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            component,
            message,
            context: HashMap::new(),
        }
    }

    /// 追加コンテキストを設定
    pub fn with_context(mut self, context: HashMap<String, String>) -> Self {
        self.context = context;
        self
    }

    /// ログエントリを文字列として出力
    pub fn format(&self) -> String {
        let level_str = match self.level {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
        };

        let mut parts = vec![
            format!("[{}]", self.timestamp.format("%Y-%m-%d %H:%M:%S UTC")),
            format!("[{}]", level_str),
            format!("[{}]", self.component),
            self.message.clone(),
        ];

        if !self.context.is_empty() {
            let mut pairs: Vec<_> = self
                .context
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            pairs.sort();
            parts.push(format!("[{}]", pairs.join(", ")));
        }

        parts.join(" ")
    }
}

/// コンソールログ実装
/// 標準出力・標準エラー出力にログを出力する
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }

    fn emit(
        &self,
        level: LogLevel,
        component: &str,
        message: &str,
        context: Option<HashMap<String, String>>,
    ) {
        let mut entry = LogEntry::new(level, component.to_string(), message.to_string());
        if let Some(ctx) = context {
            entry = entry.with_context(ctx);
        }
        if level == LogLevel::Error {
            eprintln!("{}", entry.format());
        } else {
            println!("{}", entry.format());
        }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, component: &str, message: &str, context: Option<HashMap<String, String>>) {
        self.emit(LogLevel::Debug, component, message, context);
    }

    fn info(&self, component: &str, message: &str, context: Option<HashMap<String, String>>) {
        self.emit(LogLevel::Info, component, message, context);
    }

    fn warn(&self, component: &str, message: &str, context: Option<HashMap<String, String>>) {
        self.emit(LogLevel::Warning, component, message, context);
    }

    fn error(&self, component: &str, message: &str, context: Option<HashMap<String, String>>) {
        self.emit(LogLevel::Error, component, message, context);
    }
}
