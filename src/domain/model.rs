// ドメインモデル（エンティティと値オブジェクト）

mod catalog;
mod hotel;
mod inventory;
mod room;
mod value_objects;

pub use value_objects::{Accommodation, HotelId, RoomDraft, RoomId, RoomPatch, RoomType};

pub use catalog::{CatalogEntry, RoomCatalog};
pub use hotel::{Hotel, HotelFields};
pub use inventory::RoomInventory;
pub use room::Room;
