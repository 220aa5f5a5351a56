//! Dataset validation command.
//!
//! Loads the three CSV tables the same way the map does and reports the
//! reference problems the map would silently skip: link rows naming
//! places that do not exist and record groups attached to unknown places.

use anyhow::{bail, Context, Result};
use clap::Args;
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::config::Config;
use crate::parser::load_tables;
use crate::services::DataIndex;

/// Check the CSV tables for dangling references
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Directory holding places.csv, links.csv, and items.csv
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Treat dangling references as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let mut config = Config::load().context("Failed to load configuration")?;
        if let Some(dir) = &self.data_dir {
            config.data.dir = Some(dir.clone());
        }

        let tables = load_tables(
            &config.data.places_path(),
            &config.data.links_path(),
            &config.data.items_path(),
        )?;
        let index = DataIndex::build(&tables);

        println!(
            "Places:  {} ({} hubs)",
            index.place_count(),
            index.hub_count()
        );
        println!("Links:   {}", index.link_count());
        println!("Records: {}", index.item_count());

        let report = DanglingReport::scan(&index);

        if report.is_clean() {
            println!("\n✓ All references resolve");
            return Ok(());
        }

        println!();
        for hub_id in &report.unknown_hubs {
            println!("⚠ link rows name a hub with no place row: {hub_id}");
        }
        for entity_id in &report.unknown_link_targets {
            println!("⚠ linked place missing from the places table: {entity_id}");
        }
        for entity_id in &report.unknown_item_owners {
            println!("⚠ records attached to an unknown place: {entity_id}");
        }
        println!(
            "\n{} dangling reference(s); the map skips these rows",
            report.total()
        );

        if self.strict {
            bail!("Dangling references found in strict mode");
        }
        Ok(())
    }
}

/// Identifiers referenced by link or item rows but absent from the
/// places table. Ordered sets keep the output stable across runs.
#[derive(Debug, Default)]
struct DanglingReport {
    unknown_hubs: BTreeSet<String>,
    unknown_link_targets: BTreeSet<String>,
    unknown_item_owners: BTreeSet<String>,
}

impl DanglingReport {
    fn scan(index: &DataIndex) -> Self {
        let mut report = Self::default();

        for (hub_id, entities) in index.link_groups() {
            if index.place(hub_id).is_none() {
                report.unknown_hubs.insert(hub_id.to_string());
            }
            for entity_id in entities {
                if index.place(entity_id).is_none() {
                    report.unknown_link_targets.insert(entity_id.clone());
                }
            }
        }

        for (entity_id, _) in index.item_groups() {
            if index.place(entity_id).is_none() {
                report.unknown_item_owners.insert(entity_id.to_string());
            }
        }

        report
    }

    fn is_clean(&self) -> bool {
        self.total() == 0
    }

    fn total(&self) -> usize {
        self.unknown_hubs.len() + self.unknown_link_targets.len() + self.unknown_item_owners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    use crate::models::{ItemRecord, LinkRecord, PlaceRecord};
    use crate::parser::RawTables;

    fn place(id: &str, category: &str) -> PlaceRecord {
        PlaceRecord {
            id: Some(id.to_string()),
            name: Some(id.to_string()),
            category: Some(category.to_string()),
            latitude: Some("48.0".to_string()),
            longitude: Some("2.0".to_string()),
            color: None,
        }
    }

    fn link(hub: &str, entity: &str) -> LinkRecord {
        LinkRecord {
            hub_id: Some(hub.to_string()),
            entity_id: Some(entity.to_string()),
        }
    }

    fn item(entity: &str) -> ItemRecord {
        ItemRecord {
            entity_id: Some(entity.to_string()),
            title: Some("piece".to_string()),
            date: None,
            category: None,
            asset_path: None,
        }
    }

    #[test]
    fn test_scan_reports_each_kind_of_dangler() {
        let tables = RawTables {
            places: vec![place("h1", "hub"), place("e1", "entity")],
            links: vec![link("h1", "e1"), link("h1", "ghost"), link("nobody", "e1")],
            items: vec![item("e1"), item("orphan")],
        };
        let report = DanglingReport::scan(&DataIndex::build(&tables));

        assert_eq!(report.unknown_hubs.len(), 1);
        assert!(report.unknown_hubs.contains("nobody"));
        assert!(report.unknown_link_targets.contains("ghost"));
        assert!(report.unknown_item_owners.contains("orphan"));
        assert_eq!(report.total(), 3);
    }

    #[test]
    fn test_scan_clean_dataset() {
        let tables = RawTables {
            places: vec![place("h1", "hub"), place("e1", "entity")],
            links: vec![link("h1", "e1")],
            items: vec![item("e1")],
        };
        let report = DanglingReport::scan(&DataIndex::build(&tables));
        assert!(report.is_clean());
    }

    #[test]
    fn test_repeated_dangler_reported_once() {
        let tables = RawTables {
            places: vec![place("h1", "hub")],
            links: vec![link("h1", "ghost"), link("h1", "ghost")],
            items: vec![],
        };
        let report = DanglingReport::scan(&DataIndex::build(&tables));
        assert_eq!(report.unknown_link_targets.len(), 1);
    }

    fn write_dataset(dir: &TempDir, links: &str) {
        fs::write(
            dir.path().join("places.csv"),
            "id,name,category,latitude,longitude,color\nh1,Nantes,hub,47.2,-1.5,#7678ED\ne1,Atelier,entity,47.3,-1.6,#3D348B\n",
        )
        .unwrap();
        fs::write(dir.path().join("links.csv"), links).unwrap();
        fs::write(
            dir.path().join("items.csv"),
            "entity_id,title,date,category,asset_path\ne1,Untitled,1999,Print,assets/u.jpg\n",
        )
        .unwrap();
    }

    #[test]
    fn test_execute_accepts_clean_data() {
        let dir = TempDir::new().unwrap();
        write_dataset(&dir, "hub_id,entity_id\nh1,e1\n");

        let args = ValidateArgs {
            data_dir: Some(dir.path().to_path_buf()),
            strict: true,
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_execute_strict_fails_on_danglers() {
        let dir = TempDir::new().unwrap();
        write_dataset(&dir, "hub_id,entity_id\nh1,ghost\n");

        let relaxed = ValidateArgs {
            data_dir: Some(dir.path().to_path_buf()),
            strict: false,
        };
        assert!(relaxed.execute().is_ok());

        let strict = ValidateArgs {
            data_dir: Some(dir.path().to_path_buf()),
            strict: true,
        };
        assert!(strict.execute().is_err());
    }
}
