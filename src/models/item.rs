//! Items shown in the detail panel for a selected entity.

use super::ItemRecord;

/// An associated record belonging to exactly one entity.
///
/// All fields are opaque display strings; nothing beyond presence is
/// validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    /// Display title.
    pub title: String,
    /// Free-form date string.
    pub date: String,
    /// Free-form category string.
    pub category: String,
    /// Path or URL of the item's asset.
    pub asset_path: String,
}

impl Item {
    /// Builds an item from a raw record with tolerant defaults.
    #[must_use]
    pub fn from_record(record: &ItemRecord) -> Self {
        Self {
            title: record.title.clone().unwrap_or_default(),
            date: record.date.clone().unwrap_or_default(),
            category: record.category.clone().unwrap_or_default(),
            asset_path: record.asset_path.clone().unwrap_or_default(),
        }
    }

    /// The compound "date - category" line shown under the title.
    ///
    /// Either side may be empty; the separator only appears between two
    /// non-empty parts.
    #[must_use]
    pub fn detail_line(&self) -> String {
        match (self.date.is_empty(), self.category.is_empty()) {
            (true, true) => String::new(),
            (false, true) => self.date.clone(),
            (true, false) => self.category.clone(),
            (false, false) => format!("{} - {}", self.date, self.category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record_tolerates_missing_fields() {
        let item = Item::from_record(&ItemRecord::default());
        assert_eq!(item, Item::default());
    }

    #[test]
    fn test_detail_line_joins_both_parts() {
        let item = Item {
            title: "Untitled".to_string(),
            date: "1997".to_string(),
            category: "Print".to_string(),
            asset_path: String::new(),
        };
        assert_eq!(item.detail_line(), "1997 - Print");
    }

    #[test]
    fn test_detail_line_single_part() {
        let item = Item {
            date: "1997".to_string(),
            ..Item::default()
        };
        assert_eq!(item.detail_line(), "1997");

        let item = Item {
            category: "Print".to_string(),
            ..Item::default()
        };
        assert_eq!(item.detail_line(), "Print");
    }
}
