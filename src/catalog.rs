//! Recipe catalog.
//!
//! Immutable mapping from target item name to its trade-up recipe.
//! Built once at analyzer construction — either from the built-in data
//! or from a TOML file — and never modified afterwards. Lookup is
//! case-insensitive via title-case normalization.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;

use crate::types::Recipe;

/// Normalize a raw item name for catalog lookup: title-case each
/// whitespace-separated word ("butterfly knife" → "Butterfly Knife").
pub fn normalize_item_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Immutable catalog of trade-up recipes, keyed by normalized item name.
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    recipes: BTreeMap<String, Recipe>,
}

/// On-disk catalog file shape.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    recipes: BTreeMap<String, Recipe>,
}

impl RecipeCatalog {
    /// Build a catalog from explicit entries. Keys are normalized on insert
    /// so lookups behave the same regardless of the source casing.
    pub fn new(entries: impl IntoIterator<Item = (String, Recipe)>) -> Self {
        let recipes = entries
            .into_iter()
            .map(|(name, recipe)| (normalize_item_name(&name), recipe))
            .collect();
        Self { recipes }
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {path}"))?;
        let file: CatalogFile = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse catalog file: {path}"))?;
        Ok(Self::new(file.recipes))
    }

    /// Look up a recipe by its normalized name.
    pub fn get(&self, normalized_name: &str) -> Option<&Recipe> {
        self.recipes.get(normalized_name)
    }

    /// All known item identifiers, in catalog order.
    pub fn known_items(&self) -> Vec<String> {
        self.recipes.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// The built-in catalog. Mirrors the current trade-up rules for the
    /// five tracked target items.
    pub fn builtin() -> Self {
        fn recipe(sources: &[&str], inputs: &[&str], success_rate: f64) -> Recipe {
            Recipe {
                eligible_sources: sources.iter().map(|s| s.to_string()).collect(),
                required_inputs: inputs.iter().map(|s| s.to_string()).collect(),
                success_rate,
            }
        }

        Self::new([
            (
                "Karambit".to_string(),
                recipe(
                    &["Dreams & Nightmares", "Operation Riptide", "Shattered Web"],
                    &[
                        "AWP | Dragon Lore",
                        "M4A4 | Howl",
                        "AK-47 | Fire Serpent",
                        "Desert Eagle | Blaze",
                        "AWP | Neo-Noir",
                    ],
                    0.85,
                ),
            ),
            (
                "Butterfly Knife".to_string(),
                recipe(
                    &["Glove Case", "Gamma 2", "Spectrum 2"],
                    &[
                        "USP-S | Neo-Noir",
                        "Glock-18 | Bullet Queen",
                        "P250 | Wingshot",
                        "MAC-10 | Neon Rider",
                        "UMP-45 | Primal Saber",
                    ],
                    0.82,
                ),
            ),
            (
                "M9 Bayonet".to_string(),
                recipe(
                    &["Chroma 3", "Gamma", "Bravo"],
                    &[
                        "M4A1-S | Hyper Beast",
                        "P90 | Death Grip",
                        "Five-SeveN | Fowl Play",
                        "Nova | Hyper Beast",
                        "PP-Bizon | Osiris",
                    ],
                    0.88,
                ),
            ),
            (
                "Gut Knife".to_string(),
                recipe(
                    &["Gamma 2", "Operation Broken Fang", "CS20"],
                    &[
                        "G3SG1 | Flux",
                        "Dual Berettas | Royal Consorts",
                        "FAMAS | Djinn",
                        "Tec-9 | Re-Entry",
                        "MP7 | Nemesis",
                    ],
                    0.83,
                ),
            ),
            (
                "Flip Knife".to_string(),
                recipe(
                    &["Glove Case", "Spectrum", "Clutch"],
                    &[
                        "SCAR-20 | Cardiac",
                        "SG 553 | Phantom",
                        "R8 Revolver | Llama Cannon",
                        "XM1014 | Quicksilver",
                        "CZ75-Auto | Tacticat",
                    ],
                    0.86,
                ),
            ),
        ])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
