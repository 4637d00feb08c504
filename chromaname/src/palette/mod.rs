//! Named reference colors and nearest-name lookup.
//!
//! A palette is loaded once from a JSON asset mapping color names to
//! `RRGGBB` strings:
//!
//! ```json
//! { "Red": "FF0000", "Navy Blue": "000080" }
//! ```
//!
//! Entries keep the order they have in the asset. Matching is a linear scan
//! using Manhattan distance in RGB space; the first entry reaching the
//! minimum distance wins, and the scan stops at the first exact match.
//!
//! # Example
//!
//! ```
//! use chromaname::color::Rgb;
//! use chromaname::palette::Palette;
//!
//! let palette = Palette::from_json_str(r#"{"Red":"FF0000","Blue":"0000FF"}"#)?;
//! let found = palette.closest_match(Rgb::new(250, 10, 5)).unwrap();
//!
//! assert_eq!(found.name, "Red");
//! assert_eq!(found.distance, 20);
//! # Ok::<(), chromaname::palette::PaletteError>(())
//! ```

mod error;

pub use error::PaletteError;

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::color::Rgb;

/// Bundled default palette asset.
const BUILTIN_PALETTE: &str = include_str!("../../assets/colors.json");

/// One named reference color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub name: String,
    pub color: Rgb,
}

/// Result of a nearest-color lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteMatch<'a> {
    /// Name of the matched entry.
    pub name: &'a str,
    /// The entry's reference color.
    pub color: Rgb,
    /// Manhattan distance between the query and `color`.
    pub distance: u32,
}

/// An immutable, ordered set of named colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// A palette with no entries. Every lookup returns `None`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a palette from `(name, color)` pairs.
    ///
    /// A repeated name keeps its first position and takes the last color.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Rgb)>,
        S: Into<String>,
    {
        let mut palette = Self::empty();
        for (name, color) in entries {
            let name = name.into();
            match palette.entries.iter_mut().find(|e| e.name == name) {
                Some(existing) => existing.color = color,
                None => palette.entries.push(PaletteEntry { name, color }),
            }
        }
        palette
    }

    /// Parse a JSON palette asset.
    ///
    /// # Errors
    ///
    /// Fails if the document is not a JSON object or any value is not a
    /// 6-digit hex string.
    pub fn from_json_str(json: &str) -> Result<Self, PaletteError> {
        let Value::Object(map) = serde_json::from_str::<Value>(json)? else {
            return Err(PaletteError::NotAnObject);
        };

        let mut entries = Vec::with_capacity(map.len());
        for (name, value) in &map {
            let hex = value
                .as_str()
                .ok_or_else(|| PaletteError::invalid_value(name, value, "expected a string"))?;
            let color =
                Rgb::from_hex(hex).map_err(|e| PaletteError::invalid_value(name, value, e))?;
            entries.push(PaletteEntry {
                name: name.clone(),
                color,
            });
        }
        Ok(Self { entries })
    }

    /// Load a JSON palette asset from disk.
    pub fn load(path: &Path) -> Result<Self, PaletteError> {
        let json = fs::read_to_string(path).map_err(|source| PaletteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let palette = Self::from_json_str(&json)?;
        debug!(path = %path.display(), entries = palette.len(), "Loaded palette");
        Ok(palette)
    }

    /// The palette bundled with the library.
    pub fn builtin() -> Result<Self, PaletteError> {
        Self::from_json_str(BUILTIN_PALETTE)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in asset order.
    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }

    /// Color stored under `name`.
    pub fn get(&self, name: &str) -> Option<Rgb> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.color)
    }

    /// The entry nearest to `color`, or `None` for an empty palette.
    pub fn closest_match(&self, color: Rgb) -> Option<PaletteMatch<'_>> {
        let mut best: Option<PaletteMatch<'_>> = None;
        for entry in &self.entries {
            let distance = color.manhattan_distance(entry.color);
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(PaletteMatch {
                    name: &entry.name,
                    color: entry.color,
                    distance,
                });
                if distance == 0 {
                    break;
                }
            }
        }
        best
    }

    /// Name of the entry nearest to `color`.
    pub fn closest_name(&self, color: Rgb) -> Option<&str> {
        self.closest_match(color).map(|m| m.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::MAX_DISTANCE;

    fn red_blue() -> Palette {
        Palette::from_json_str(r#"{"Red":"FF0000","Blue":"0000FF"}"#).unwrap()
    }

    #[test]
    fn test_closest_name_red_over_blue() {
        let palette = red_blue();
        let found = palette.closest_match(Rgb::new(250, 10, 5)).unwrap();

        assert_eq!(found.name, "Red");
        assert_eq!(found.distance, 20);
        let blue = palette.get("Blue").unwrap();
        assert_eq!(Rgb::new(250, 10, 5).manhattan_distance(blue), 510);
    }

    #[test]
    fn test_empty_palette_has_no_match() {
        let palette = Palette::empty();
        assert_eq!(palette.closest_name(Rgb::new(1, 2, 3)), None);
        assert_eq!(palette.closest_match(Rgb::new(255, 255, 255)), None);
    }

    #[test]
    fn test_first_entry_wins_ties() {
        // Both entries are 30 away from mid gray
        let palette = Palette::from_entries([
            ("Lighter", Rgb::new(138, 138, 138)),
            ("Darker", Rgb::new(118, 118, 118)),
        ]);
        assert_eq!(palette.closest_name(Rgb::new(128, 128, 128)), Some("Lighter"));

        let swapped = Palette::from_entries([
            ("Darker", Rgb::new(118, 118, 118)),
            ("Lighter", Rgb::new(138, 138, 138)),
        ]);
        assert_eq!(swapped.closest_name(Rgb::new(128, 128, 128)), Some("Darker"));
    }

    #[test]
    fn test_exact_match_stops_scan() {
        let palette = Palette::from_entries([
            ("Far", Rgb::new(0, 0, 0)),
            ("Exact", Rgb::new(10, 20, 30)),
            ("Duplicate", Rgb::new(10, 20, 30)),
        ]);
        let found = palette.closest_match(Rgb::new(10, 20, 30)).unwrap();
        assert_eq!(found.name, "Exact");
        assert_eq!(found.distance, 0);
    }

    #[test]
    fn test_maximum_distance_still_matches() {
        let palette = Palette::from_entries([("White", Rgb::new(255, 255, 255))]);
        let found = palette.closest_match(Rgb::new(0, 0, 0)).unwrap();
        assert_eq!(found.name, "White");
        assert_eq!(found.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_from_json_preserves_asset_order() {
        let palette =
            Palette::from_json_str(r#"{"Zebra":"000000","Apple":"FFFFFF","Mango":"FF8000"}"#)
                .unwrap();
        let names: Vec<&str> = palette.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Zebra", "Apple", "Mango"]);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(matches!(
            Palette::from_json_str(r#"["FF0000"]"#),
            Err(PaletteError::NotAnObject)
        ));
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            Palette::from_json_str(r##"{"Red":"#FF0000"}"##),
            Err(PaletteError::InvalidValue { .. })
        ));
        assert!(matches!(
            Palette::from_json_str(r#"{"Red":16711680}"#),
            Err(PaletteError::InvalidValue { .. })
        ));
        assert!(matches!(
            Palette::from_json_str(r#"{"Red":"FF00ZZ"}"#),
            Err(PaletteError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            Palette::from_json_str("{\"Red\": "),
            Err(PaletteError::Json(_))
        ));
    }

    #[test]
    fn test_from_entries_repeated_name() {
        let palette = Palette::from_entries([
            ("Red", Rgb::new(200, 0, 0)),
            ("Blue", Rgb::new(0, 0, 255)),
            ("Red", Rgb::new(255, 0, 0)),
        ]);
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get("Red"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(palette.iter().next().unwrap().name, "Red");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Palette::load(Path::new("/nonexistent/colors.json"));
        assert!(matches!(result, Err(PaletteError::Io { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.json");
        fs::write(&path, r#"{"Teal":"008080"}"#).unwrap();

        let palette = Palette::load(&path).unwrap();
        assert_eq!(palette.get("Teal"), Some(Rgb::new(0, 128, 128)));
    }

    #[test]
    fn test_builtin_palette() {
        let palette = Palette::builtin().unwrap();
        assert!(palette.len() > 10);
        assert_eq!(palette.closest_name(Rgb::new(255, 0, 0)), Some("Red"));
        assert_eq!(palette.closest_name(Rgb::new(0, 0, 0)), Some("Black"));
    }

    // Property-based tests using proptest
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_own_color_matches_itself(which in 0usize..1000) {
                let palette = Palette::builtin()?;
                let entry = palette.iter().nth(which % palette.len()).unwrap();
                let found = palette.closest_match(entry.color).unwrap();

                prop_assert_eq!(found.distance, 0);
                // Earlier entries with the same color win, so compare colors
                prop_assert_eq!(found.color, entry.color);
                prop_assert_eq!(palette.get(found.name), Some(entry.color));
            }

            #[test]
            fn test_match_is_minimal(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let palette = Palette::builtin()?;
                let query = Rgb::new(r, g, b);
                let found = palette.closest_match(query).unwrap();

                for entry in palette.iter() {
                    prop_assert!(found.distance <= query.manhattan_distance(entry.color));
                }
            }
        }
    }
}
