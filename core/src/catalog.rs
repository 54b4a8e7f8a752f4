//! Static god/item/build catalog
//!
//! Reference data shipped as JSON next to the overlay. It is read once,
//! indexed by id, and never modified afterwards; every query is a pure
//! function over the loaded index.

use std::fs;
use std::path::Path;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Minimum item tier offered when assembling a build
pub const BUILD_ITEM_MIN_TIER: u8 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct God {
    pub id: u32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "godIcon_URL", default)]
    pub icon_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "ItemId")]
    pub id: u32,
    #[serde(rename = "DeviceName", default)]
    pub name: String,
    #[serde(rename = "itemIcon_URL", default)]
    pub icon_url: String,
    #[serde(rename = "ItemTier", default)]
    pub tier: u8,
}

/// A saved item build for one god.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Build {
    pub god_id: u32,
    pub name: String,
    #[serde(default)]
    pub items: Vec<u32>,
}

/// Immutable, indexed reference data.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    gods: Vec<God>,
    items: Vec<Item>,
    builds: Vec<Build>,
    god_index: HashMap<u32, usize>,
    item_index: HashMap<u32, usize>,
}

impl Catalog {
    /// Build the index. Later records with a duplicate id shadow earlier ones in lookups.
    pub fn new(gods: Vec<God>, items: Vec<Item>, builds: Vec<Build>) -> Self {
        let god_index = gods.iter().enumerate().map(|(i, g)| (g.id, i)).collect();
        let item_index = items.iter().enumerate().map(|(i, it)| (it.id, i)).collect();
        Self {
            gods,
            items,
            builds,
            god_index,
            item_index,
        }
    }

    /// Parse the three JSON documents. `builds` is optional.
    pub fn from_json(gods: &str, items: &str, builds: Option<&str>) -> Result<Self, CatalogError> {
        let gods = parse(Path::new("gods.json"), gods)?;
        let items = parse(Path::new("items.json"), items)?;
        let builds = match builds {
            Some(json) => parse(Path::new("builds.json"), json)?,
            None => Vec::new(),
        };
        Ok(Self::new(gods, items, builds))
    }

    /// Load `gods.json`, `items.json` and (if present) `builds.json` from a directory.
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        let gods = read_json(&dir.join("gods.json"))?;
        let items = read_json(&dir.join("items.json"))?;

        let builds_path = dir.join("builds.json");
        let builds = if builds_path.exists() {
            read_json(&builds_path)?
        } else {
            Vec::new()
        };

        let catalog = Self::new(gods, items, builds);
        tracing::info!(
            dir = %dir.display(),
            gods = catalog.gods.len(),
            items = catalog.items.len(),
            builds = catalog.builds.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    pub fn god(&self, id: u32) -> Option<&God> {
        self.god_index.get(&id).map(|&i| &self.gods[i])
    }

    pub fn item(&self, id: u32) -> Option<&Item> {
        self.item_index.get(&id).map(|&i| &self.items[i])
    }

    /// All gods in file order
    pub fn gods(&self) -> &[God] {
        &self.gods
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Gods whose name contains `query`, ignoring case. An empty query matches every god.
    pub fn search_gods<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a God> + 'a {
        let needle = query.to_uppercase();
        self.gods
            .iter()
            .filter(move |g| g.name.to_uppercase().contains(&needle))
    }

    /// Items at or above `min_tier`, in file order
    pub fn items_of_min_tier(&self, min_tier: u8) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |it| it.tier >= min_tier)
    }

    pub fn builds_for(&self, god_id: u32) -> impl Iterator<Item = &Build> {
        self.builds.iter().filter(move |b| b.god_id == god_id)
    }

    /// Resolve a build's item ids, skipping ids the catalog doesn't know.
    pub fn build_items<'a>(&'a self, build: &'a Build) -> impl Iterator<Item = &'a Item> + 'a {
        build.items.iter().filter_map(move |&id| self.item(id))
    }
}

fn parse<T: serde::de::DeserializeOwned>(path: &Path, json: &str) -> Result<T, CatalogError> {
    serde_json::from_str(json).map_err(|e| CatalogError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let contents = fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse(path, &contents)
}
