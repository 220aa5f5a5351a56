//! CSV table loading.
//!
//! The three tables are read in one call that either yields all of them or
//! fails as a whole: a partial dataset never reaches index construction.
//! Within a table the reader is deliberately lenient. Unknown columns are
//! ignored, missing columns and short rows surface as absent fields, and
//! row order is preserved exactly as written.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

use crate::models::{ItemRecord, LinkRecord, PlaceRecord};

/// The three raw record tables, in file order.
#[derive(Debug, Clone, Default)]
pub struct RawTables {
    /// Rows of the places table.
    pub places: Vec<PlaceRecord>,
    /// Rows of the links table.
    pub links: Vec<LinkRecord>,
    /// Rows of the items table.
    pub items: Vec<ItemRecord>,
}

/// Loads the three tables from their file paths.
///
/// # Errors
///
/// Fails if any of the three files cannot be opened or contains rows the
/// CSV reader cannot tokenize. On failure nothing is returned; the caller
/// keeps whatever index it already had.
pub fn load_tables(places: &Path, links: &Path, items: &Path) -> Result<RawTables> {
    let tables = RawTables {
        places: read_table(places)?,
        links: read_table(links)?,
        items: read_table(items)?,
    };

    info!(
        places = tables.places.len(),
        links = tables.links.len(),
        items = tables.items.len(),
        "loaded data tables"
    );

    Ok(tables)
}

/// Reads one CSV file into a record vector, preserving row order.
fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: T =
            row.with_context(|| format!("Failed to parse a row in {}", path.display()))?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Should create temp file");
        file.write_all(content.as_bytes())
            .expect("Should write csv");
        file
    }

    #[test]
    fn test_read_table_preserves_row_order() {
        let file = write_csv("hub_id,entity_id\nh1,e2\nh1,e1\nh2,e1\n");
        let rows: Vec<LinkRecord> = read_table(file.path()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].entity_id.as_deref(), Some("e2"));
        assert_eq!(rows[2].hub_id.as_deref(), Some("h2"));
    }

    #[test]
    fn test_read_table_ignores_unknown_columns() {
        let file = write_csv("hub_id,entity_id,notes\nh1,e1,ignored\n");
        let rows: Vec<LinkRecord> = read_table(file.path()).unwrap();
        assert_eq!(rows[0].hub_id.as_deref(), Some("h1"));
        assert_eq!(rows[0].entity_id.as_deref(), Some("e1"));
    }

    #[test]
    fn test_read_table_tolerates_missing_columns() {
        let file = write_csv("id,name\np1,Somewhere\n");
        let rows: Vec<PlaceRecord> = read_table(file.path()).unwrap();
        assert_eq!(rows[0].id.as_deref(), Some("p1"));
        assert_eq!(rows[0].category, None);
        assert_eq!(rows[0].latitude, None);
    }

    #[test]
    fn test_read_table_missing_file_fails() {
        let missing = Path::new("definitely/not/here.csv");
        assert!(read_table::<PlaceRecord>(missing).is_err());
    }

    #[test]
    fn test_load_tables_fails_as_a_whole() {
        let places = write_csv("id,name,category,latitude,longitude,color\nh1,A,hub,1,2,#FFFFFF\n");
        let links = write_csv("hub_id,entity_id\n");
        let missing = Path::new("definitely/not/items.csv");

        let result = load_tables(places.path(), links.path(), missing);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_tables_reads_all_three() {
        let places = write_csv("id,name,category,latitude,longitude,color\nh1,A,hub,1,2,#FFFFFF\n");
        let links = write_csv("hub_id,entity_id\nh1,e1\n");
        let items = write_csv("entity_id,title,date,category,asset_path\ne1,T,1999,Print,p.jpg\n");

        let tables = load_tables(places.path(), links.path(), items.path()).unwrap();
        assert_eq!(tables.places.len(), 1);
        assert_eq!(tables.links.len(), 1);
        assert_eq!(tables.items.len(), 1);
        assert_eq!(tables.items[0].title.as_deref(), Some("T"));
    }
}
