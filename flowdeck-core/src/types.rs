use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier for columns and tasks. The board accepts both numeric and
/// textual ids so persisted data from either convention round-trips
/// unchanged. Unique within its own collection, not across collections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Num(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Num(n) => write!(f, "{}", n),
            ItemId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for ItemId {
    type Err = std::convert::Infallible;

    /// Decimal digits parse as the numeric variant, everything else stays
    /// textual. Matches how ids come back in URL path segments.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ItemId::from(s))
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        ItemId::Num(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        match s.parse::<u64>() {
            Ok(n) => ItemId::Num(n),
            Err(_) => ItemId::Text(s.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ItemId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: ItemId,
    pub column_id: ItemId,
    pub content: String,
}

/// The persistence record: both sequences serialized as one unit under the
/// fixed storage key. Field names match the historical on-disk format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardData {
    #[serde(default)]
    pub saved_columns: Vec<Column>,
    #[serde(default)]
    pub saved_tasks: Vec<Task>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_parses_digits_as_numeric() {
        let id: ItemId = "42".parse().unwrap();
        assert_eq!(id, ItemId::Num(42));

        let id: ItemId = "backlog".parse().unwrap();
        assert_eq!(id, ItemId::Text("backlog".to_string()));
    }

    #[test]
    fn test_item_id_serializes_untagged() {
        assert_eq!(serde_json::to_string(&ItemId::Num(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&ItemId::Text("a".into())).unwrap(),
            "\"a\""
        );

        let back: ItemId = serde_json::from_str("7").unwrap();
        assert_eq!(back, ItemId::Num(7));
    }

    #[test]
    fn test_board_data_round_trip() {
        let data = BoardData {
            saved_columns: vec![Column {
                id: ItemId::Num(1),
                title: "Column 1".to_string(),
            }],
            saved_tasks: vec![Task {
                id: ItemId::Num(10),
                column_id: ItemId::Num(1),
                content: "Task 1".to_string(),
            }],
        };

        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"savedColumns\""));
        assert!(json.contains("\"savedTasks\""));
        assert!(json.contains("\"columnId\":1"));

        let back: BoardData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_board_data_tolerates_missing_fields() {
        let data: BoardData = serde_json::from_str("{}").unwrap();
        assert!(data.saved_columns.is_empty());
        assert!(data.saved_tasks.is_empty());

        let data: BoardData = serde_json::from_str("{\"savedColumns\":[]}").unwrap();
        assert!(data.saved_tasks.is_empty());
    }
}
