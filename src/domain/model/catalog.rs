use crate::domain::model::{Accommodation, RoomType};

/// カタログの1エントリ
/// 画面のセレクトボックスに表示するための固定データ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: u8,
    pub name: &'static str,
    pub label: &'static str,
}

/// 有効な客室タイプの一覧（表示順）
const ROOM_TYPES: [CatalogEntry; 3] = [
    CatalogEntry {
        id: 1,
        name: "suite",
        label: "Suite",
    },
    CatalogEntry {
        id: 2,
        name: "standard",
        label: "Estándar",
    },
    CatalogEntry {
        id: 3,
        name: "junior",
        label: "Junior",
    },
];

/// 有効なアコモデーションの一覧（表示順）
const ACCOMMODATIONS: [CatalogEntry; 4] = [
    CatalogEntry {
        id: 1,
        name: "single",
        label: "Individual",
    },
    CatalogEntry {
        id: 2,
        name: "double",
        label: "Doble",
    },
    CatalogEntry {
        id: 3,
        name: "triple",
        label: "Triple",
    },
    CatalogEntry {
        id: 4,
        name: "quadruple",
        label: "Cuádruple",
    },
];

/// 客室タイプとアコモデーションの静的カタログ
/// 可変状態を持たない参照専用テーブル
pub struct RoomCatalog;

impl RoomCatalog {
    /// 有効な客室タイプを表示順で返す
    pub fn room_types() -> &'static [CatalogEntry] {
        &ROOM_TYPES
    }

    /// 有効なアコモデーションを表示順で返す
    pub fn accommodations() -> &'static [CatalogEntry] {
        &ACCOMMODATIONS
    }

    /// カタログ名（客室タイプまたはアコモデーション）から表示ラベルを返す
    /// 未知の名前は入力をそのまま返し、決して失敗しない
    pub fn label_for(name: &str) -> String {
        let lowered = name.to_lowercase();
        ROOM_TYPES
            .iter()
            .chain(ACCOMMODATIONS.iter())
            .find(|entry| entry.name == lowered)
            .map(|entry| entry.label.to_string())
            .unwrap_or_else(|| name.to_string())
    }

    /// アコモデーション列挙値の表示ラベルを返す
    pub fn accommodation_label(accommodation: Accommodation) -> &'static str {
        match accommodation {
            Accommodation::Single => "Individual",
            Accommodation::Double => "Doble",
            Accommodation::Triple => "Triple",
            Accommodation::Quadruple => "Cuádruple",
        }
    }

    /// 客室タイプ列挙値の表示ラベルを返す
    pub fn room_type_label(room_type: RoomType) -> &'static str {
        match room_type {
            RoomType::Suite => "Suite",
            RoomType::Standard => "Estándar",
            RoomType::Junior => "Junior",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_types_fixed_order() {
        let types = RoomCatalog::room_types();
        assert_eq!(types.len(), 3);
        assert_eq!(types[0].name, "suite");
        assert_eq!(types[1].name, "standard");
        assert_eq!(types[2].name, "junior");
    }

    #[test]
    fn test_accommodations_fixed_order() {
        let accommodations = RoomCatalog::accommodations();
        assert_eq!(accommodations.len(), 4);
        assert_eq!(accommodations[0].name, "single");
        assert_eq!(accommodations[3].name, "quadruple");
        assert_eq!(accommodations[3].label, "Cuádruple");
    }

    #[test]
    fn test_label_for_known_name() {
        assert_eq!(RoomCatalog::label_for("single"), "Individual");
        assert_eq!(RoomCatalog::label_for("double"), "Doble");
        assert_eq!(RoomCatalog::label_for("standard"), "Estándar");
        // 大文字小文字を区別しない
        assert_eq!(RoomCatalog::label_for("TRIPLE"), "Triple");
    }

    #[test]
    fn test_label_for_unknown_name_returns_input() {
        assert_eq!(RoomCatalog::label_for("dormitory"), "dormitory");
        assert_eq!(RoomCatalog::label_for(""), "");
    }

    #[test]
    fn test_enum_labels_match_catalog() {
        assert_eq!(
            RoomCatalog::accommodation_label(Accommodation::Quadruple),
            "Cuádruple"
        );
        assert_eq!(RoomCatalog::room_type_label(RoomType::Standard), "Estándar");
    }
}
