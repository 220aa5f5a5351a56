//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use hubmap::config::Config;

/// Places table: two hubs and three linked places.
pub const SAMPLE_PLACES: &str = "\
id,name,category,latitude,longitude,color
paris,Paris,hub,48.8566,2.3522,#7678ED
nantes,Nantes,hub,47.2184,-1.5536,#7678ED
atelier,Atelier Nord,entity,48.8900,2.3500,#3D348B
presse,La Presse,entity,48.8500,2.3400,#F35B04
forge,La Forge,entity,47.2100,-1.5500,#F7B801
";

/// Links table: paris carries two places, nantes one plus a dangling id.
pub const SAMPLE_LINKS: &str = "\
hub_id,entity_id
paris,atelier
paris,presse
nantes,forge
nantes,ghost
";

/// Items table: two records for atelier, one for presse.
pub const SAMPLE_ITEMS: &str = "\
entity_id,title,date,category,asset_path
atelier,Untitled Study,1994,Graphics,assets/untitled.jpg
atelier,Second Study,1995,Graphics,assets/second.jpg
presse,Broadsheet,2001,Publishing,assets/broadsheet.jpg
";

/// Writes arbitrary CSV content as the three table files in `dir`.
pub fn write_dataset(dir: &Path, places: &str, links: &str, items: &str) {
    fs::write(dir.join("places.csv"), places).expect("Should write places.csv");
    fs::write(dir.join("links.csv"), links).expect("Should write links.csv");
    fs::write(dir.join("items.csv"), items).expect("Should write items.csv");
}

/// Creates a temp dir holding the standard dataset.
pub fn sample_data_dir() -> TempDir {
    let dir = TempDir::new().expect("Should create temp dir");
    write_dataset(dir.path(), SAMPLE_PLACES, SAMPLE_LINKS, SAMPLE_ITEMS);
    dir
}

/// A config pointed at `dir`, with the welcome overlay off so view tests
/// start on a bare overview.
pub fn test_config(dir: &Path) -> Config {
    let mut config = Config::default();
    config.data.dir = Some(dir.to_path_buf());
    config.ui.show_welcome = false;
    config
}
