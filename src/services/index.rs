//! The in-memory relational index built from the loaded tables.
//!
//! Built once per load and read-only afterwards; a reload replaces the
//! whole index, it never mutates one in place.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::models::{Item, Place, PlaceKind};
use crate::parser::RawTables;

/// Lookup structures over places, links, and items.
///
/// Three views over the load: place-by-id, hub id → linked entity ids, and
/// entity id → associated items. Link and item rows referencing ids absent
/// from the place table are kept as-is; consumers skip them at render time.
#[derive(Debug, Clone, Default)]
pub struct DataIndex {
    /// Places in load order. A repeated id keeps its first position with
    /// the later record's fields.
    places: Vec<Place>,
    /// Place id → position in `places`.
    by_id: HashMap<String, usize>,
    /// Hub id → linked entity ids, duplicates preserved in load order.
    links: HashMap<String, Vec<String>>,
    /// Entity id → associated items in load order.
    items: HashMap<String, Vec<Item>>,
    /// Total number of link rows loaded.
    link_rows: usize,
    /// Total number of item rows loaded.
    item_rows: usize,
}

impl DataIndex {
    /// Builds the index from raw tables.
    ///
    /// Pure construction: no row is rejected. Places with a repeated id
    /// overwrite the earlier record (keeping its load position); link and
    /// item rows group under their hub/entity id whether or not that id
    /// names a known place.
    #[must_use]
    pub fn build(tables: &RawTables) -> Self {
        let mut index = Self::default();

        for record in &tables.places {
            let place = Place::from_record(record);
            match index.by_id.entry(place.id.clone()) {
                Entry::Occupied(slot) => index.places[*slot.get()] = place,
                Entry::Vacant(slot) => {
                    slot.insert(index.places.len());
                    index.places.push(place);
                }
            }
        }

        for record in &tables.links {
            let hub_id = record.hub_id.clone().unwrap_or_default();
            let entity_id = record.entity_id.clone().unwrap_or_default();
            index.links.entry(hub_id).or_default().push(entity_id);
            index.link_rows += 1;
        }

        for record in &tables.items {
            let entity_id = record.entity_id.clone().unwrap_or_default();
            index
                .items
                .entry(entity_id)
                .or_default()
                .push(Item::from_record(record));
            index.item_rows += 1;
        }

        index
    }

    /// Looks up a place by id.
    #[must_use]
    pub fn place(&self, id: &str) -> Option<&Place> {
        self.by_id.get(id).map(|&slot| &self.places[slot])
    }

    /// All places in load order.
    #[must_use]
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Hub places in load order.
    pub fn hubs(&self) -> impl Iterator<Item = &Place> {
        self.places
            .iter()
            .filter(|place| place.kind == PlaceKind::Hub)
    }

    /// Entity ids linked from a hub, in load order with duplicates kept.
    ///
    /// Returns an empty slice for a hub without link rows; an empty link
    /// sequence is valid, not an error.
    #[must_use]
    pub fn linked_entities(&self, hub_id: &str) -> &[String] {
        self.links.get(hub_id).map_or(&[], Vec::as_slice)
    }

    /// Items associated with an entity, in load order.
    #[must_use]
    pub fn items_for(&self, entity_id: &str) -> &[Item] {
        self.items.get(entity_id).map_or(&[], Vec::as_slice)
    }

    /// All link groups (hub id → entity ids), in no particular order.
    pub fn link_groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.links
            .iter()
            .map(|(hub_id, entities)| (hub_id.as_str(), entities.as_slice()))
    }

    /// All item groups (entity id → items), in no particular order.
    pub fn item_groups(&self) -> impl Iterator<Item = (&str, &[Item])> {
        self.items
            .iter()
            .map(|(entity_id, items)| (entity_id.as_str(), items.as_slice()))
    }

    /// Number of distinct places.
    #[must_use]
    pub fn place_count(&self) -> usize {
        self.places.len()
    }

    /// Number of hub places.
    #[must_use]
    pub fn hub_count(&self) -> usize {
        self.hubs().count()
    }

    /// Number of link rows loaded.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.link_rows
    }

    /// Number of item rows loaded.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_rows
    }

    /// True when no places were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemRecord, LinkRecord, PlaceRecord};

    fn place_record(id: &str, category: &str) -> PlaceRecord {
        PlaceRecord {
            id: Some(id.to_string()),
            name: Some(format!("{id} name")),
            category: Some(category.to_string()),
            latitude: Some("48.0".to_string()),
            longitude: Some("2.0".to_string()),
            color: Some("#3D348B".to_string()),
        }
    }

    fn link_record(hub: &str, entity: &str) -> LinkRecord {
        LinkRecord {
            hub_id: Some(hub.to_string()),
            entity_id: Some(entity.to_string()),
        }
    }

    fn item_record(entity: &str, title: &str) -> ItemRecord {
        ItemRecord {
            entity_id: Some(entity.to_string()),
            title: Some(title.to_string()),
            date: Some("2001".to_string()),
            category: Some("Print".to_string()),
            asset_path: Some(format!("assets/{title}.jpg")),
        }
    }

    fn sample_tables() -> RawTables {
        RawTables {
            places: vec![
                place_record("h1", "hub"),
                place_record("e1", "entity"),
                place_record("h2", "hub"),
                place_record("e2", "entity"),
            ],
            links: vec![
                link_record("h1", "e1"),
                link_record("h1", "e2"),
                link_record("h2", "e1"),
            ],
            items: vec![
                item_record("e1", "first"),
                item_record("e2", "second"),
                item_record("e1", "third"),
            ],
        }
    }

    #[test]
    fn test_build_indexes_places_by_id() {
        let index = DataIndex::build(&sample_tables());
        assert_eq!(index.place_count(), 4);
        assert_eq!(index.place("h1").unwrap().name, "h1 name");
        assert!(index.place("missing").is_none());
    }

    #[test]
    fn test_hubs_iterate_in_load_order() {
        let index = DataIndex::build(&sample_tables());
        let hub_ids: Vec<&str> = index.hubs().map(|place| place.id.as_str()).collect();
        assert_eq!(hub_ids, vec!["h1", "h2"]);
        assert_eq!(index.hub_count(), 2);
    }

    #[test]
    fn test_repeated_place_id_keeps_position_takes_last_fields() {
        let mut tables = sample_tables();
        let mut replacement = place_record("h1", "hub");
        replacement.name = Some("renamed".to_string());
        tables.places.push(replacement);

        let index = DataIndex::build(&tables);
        assert_eq!(index.place_count(), 4);
        assert_eq!(index.place("h1").unwrap().name, "renamed");
        let first = index.places().first().unwrap();
        assert_eq!(first.id, "h1");
    }

    #[test]
    fn test_linked_entities_preserve_order_and_duplicates() {
        let mut tables = sample_tables();
        tables.links.push(link_record("h1", "e1"));

        let index = DataIndex::build(&tables);
        assert_eq!(index.linked_entities("h1"), ["e1", "e2", "e1"]);
        assert_eq!(index.link_count(), 4);
    }

    #[test]
    fn test_linked_entities_empty_for_unlinked_hub() {
        let index = DataIndex::build(&sample_tables());
        assert!(index.linked_entities("h3").is_empty());
    }

    #[test]
    fn test_items_group_in_load_order() {
        let index = DataIndex::build(&sample_tables());
        let titles: Vec<&str> = index
            .items_for("e1")
            .iter()
            .map(|item| item.title.as_str())
            .collect();
        assert_eq!(titles, vec!["first", "third"]);
        assert!(index.items_for("e9").is_empty());
    }

    #[test]
    fn test_dangling_references_are_kept() {
        let mut tables = sample_tables();
        tables.links.push(link_record("ghost-hub", "e1"));
        tables.items.push(item_record("ghost-entity", "orphan"));

        let index = DataIndex::build(&tables);
        assert_eq!(index.linked_entities("ghost-hub"), ["e1"]);
        assert_eq!(index.items_for("ghost-entity").len(), 1);
        assert!(index.place("ghost-hub").is_none());
    }

    #[test]
    fn test_missing_fields_group_under_empty_id() {
        let tables = RawTables {
            places: vec![],
            links: vec![LinkRecord::default()],
            items: vec![ItemRecord::default()],
        };
        let index = DataIndex::build(&tables);
        assert_eq!(index.linked_entities(""), [""]);
        assert_eq!(index.items_for("").len(), 1);
    }

    #[test]
    fn test_empty_index() {
        let index = DataIndex::build(&RawTables::default());
        assert!(index.is_empty());
        assert_eq!(index.hub_count(), 0);
    }
}
