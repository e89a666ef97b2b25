// ドメイン層
// ホテル・客室在庫のエンティティ、不変条件、出力ポートを定義する

pub mod error;
pub mod model;
pub mod port;

pub use error::DomainError;
