mod console_logger;
mod console_notifier;
mod http_gateway;
mod in_memory_gateway;

pub use console_logger::{ConsoleLogger, LogEntry};
pub use console_notifier::ConsoleNotificationSink;
pub use http_gateway::HttpInventoryGateway;
pub use in_memory_gateway::InMemoryInventoryGateway;
