//! Local storage types.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One catalog entry remembered in a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedEntry {
    /// Cleaned title at the time it was recorded.
    pub display_name: String,
    /// Opaque source reference (private path or bundled reference).
    pub source_path: String,
    /// When the entry was last added or promoted.
    pub added_at: DateTime<Utc>,
}

/// Persisted category lists.
///
/// Stored as `categories.json` in the data directory. Each category keeps
/// its entries most-recent-first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFile {
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<RecordedEntry>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_missing_categories_defaults() {
        let file: CategoryFile = serde_json::from_str("{}").unwrap();
        assert!(file.categories.is_empty());
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "categories": {
                "recent": [
                    {
                        "display_name": "Zelda",
                        "source_path": "roms/Zelda.nes",
                        "added_at": "2024-05-01T12:00:00Z"
                    }
                ]
            }
        }"#;
        let file: CategoryFile = serde_json::from_str(json).unwrap();
        let recent = &file.categories["recent"];
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].display_name, "Zelda");
        assert_eq!(
            recent[0].added_at,
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
        );
    }
}
