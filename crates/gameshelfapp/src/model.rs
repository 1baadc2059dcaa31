//! # Domain Model: Collection Items and Catalog Records
//!
//! This module defines the data that flows between the catalog and the collection:
//! [`GameRecord`] (what the catalog hands us), [`GameSnapshot`] (the normalized display
//! fields we keep), and [`CollectionItem`] (one owned game+platform line).
//!
//! ## Two Naming Conventions
//!
//! Catalog documents in the wild come in two shapes. The current one uses English keys
//! (`name`, `genre`, `year`, `metacritic`); older exports use the legacy keys
//! (`nombre`, `genero`, `fecha_lanzamiento`, `puntuacion_metacritic`). A record may carry
//! either, or both. When both are filled in, the legacy key wins; an empty string or a zero
//! score counts as missing.
//!
//! Rather than sprinkling `a.or(b)` across the code base, [`GameRecord`] keeps both sets of
//! fields exactly as they arrived, and [`GameSnapshot::from_record`] is the one place that
//! folds them into the canonical shape:
//!
//! | Snapshot field | Looked up in order | Fallback |
//! |----------------|--------------------|----------|
//! | `name`         | `nombre`, `name`   | `""`     |
//! | `genre`        | `genero`, `genre`, first of `genres` | `""` |
//! | `year`         | `fecha_lanzamiento`, `year` | `""` |
//! | `rating`       | `rating`           | `0`      |
//! | `metacritic`   | `puntuacion_metacritic`, `metacritic` | `0` |
//!
//! ## Collection Identity
//!
//! A collection line is keyed by `"{gameId}-{platform}"` (see [`unique_id`]). The same game
//! on two platforms is two lines; the same game+platform twice is never allowed.
//!
//! ## Persisted Shape
//!
//! [`CollectionItem`] serializes with camelCase keys (`uniqueId`, `gameId`, `dateAdded`, ...),
//! which is the on-disk format of the collection blob.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque catalog identifier.
///
/// Catalog files use both numeric and string ids, so deserialization accepts either and
/// the id is carried as text from then on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GameId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for GameId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for GameId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseScalar {
    Text(String),
    Int(i64),
    Float(f64),
}

impl LooseScalar {
    fn into_text(self) -> String {
        match self {
            LooseScalar::Text(s) => s,
            LooseScalar::Int(n) => n.to_string(),
            LooseScalar::Float(n) => n.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for GameId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(GameId(LooseScalar::deserialize(deserializer)?.into_text()))
    }
}

/// Accepts `"2017"`, `2017` or `null`.
fn loose_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LooseScalar>::deserialize(deserializer)?.map(LooseScalar::into_text))
}

fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose_opt_string(deserializer)?.unwrap_or_default())
}

/// Builds the collection key for a game on a platform.
pub fn unique_id(game_id: &GameId, platform: &str) -> String {
    format!("{}-{}", game_id, platform)
}

/// Availability of a game on one platform, with optional storage/size metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformAvailability {
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(
        default,
        alias = "almacenamiento",
        skip_serializing_if = "Option::is_none"
    )]
    pub storage: Option<String>,
}

/// A game as the catalog describes it.
///
/// Both naming conventions are kept side by side; use [`GameSnapshot::from_record`] to get
/// the canonical display fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub legacy_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(rename = "genero", default, skip_serializing_if = "Option::is_none")]
    pub legacy_genre: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,

    #[serde(
        default,
        deserialize_with = "loose_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,
    #[serde(
        rename = "fecha_lanzamiento",
        default,
        deserialize_with = "loose_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub legacy_release_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metacritic: Option<f64>,
    #[serde(
        rename = "puntuacion_metacritic",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub legacy_metacritic: Option<f64>,

    /// Platform this record stands for, when the catalog view has already picked one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    #[serde(default, alias = "plataformas", skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<PlatformAvailability>,
}

impl GameRecord {
    pub fn new(id: impl Into<GameId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms = platforms
            .into_iter()
            .map(|name| PlatformAvailability {
                name: name.into(),
                storage: None,
            })
            .collect();
        self
    }

    /// Returns a copy of this record bound to `platform`.
    pub fn on_platform(&self, platform: &str) -> Self {
        Self {
            platform: Some(platform.to_string()),
            ..self.clone()
        }
    }

    pub fn display_name(&self) -> &str {
        first_filled([self.legacy_name.as_deref(), self.name.as_deref()]).unwrap_or_default()
    }

    pub fn platform_names(&self) -> impl Iterator<Item = &str> {
        self.platforms.iter().map(|p| p.name.as_str())
    }

    pub fn is_available_on(&self, platform: &str) -> bool {
        self.platform_names().any(|p| p == platform)
    }

    pub fn storage_on(&self, platform: &str) -> Option<&str> {
        self.platforms
            .iter()
            .find(|p| p.name == platform)
            .and_then(|p| p.storage.as_deref())
    }

    /// All genres this record declares, whichever field they came from.
    pub fn genre_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.genres.iter().map(String::as_str).collect();
        for single in [self.genre.as_deref(), self.legacy_genre.as_deref()]
            .into_iter()
            .flatten()
        {
            if !single.is_empty() && !names.contains(&single) {
                names.push(single);
            }
        }
        names
    }
}

/// Canonical display fields copied into a collection item at add time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameSnapshot {
    pub name: String,
    pub genre: String,
    pub year: String,
    pub rating: f64,
    pub metacritic: f64,
}

impl GameSnapshot {
    pub fn from_record(record: &GameRecord) -> Self {
        let genre = first_filled([
            record.legacy_genre.as_deref(),
            record.genre.as_deref(),
            record.genres.first().map(String::as_str),
        ]);
        let year = first_filled([
            record.legacy_release_date.as_deref(),
            record.year.as_deref(),
        ]);
        let metacritic = [record.legacy_metacritic, record.metacritic]
            .into_iter()
            .flatten()
            .find(|score| *score != 0.0);

        Self {
            name: record.display_name().to_string(),
            genre: genre.unwrap_or_default().to_string(),
            year: year.unwrap_or_default().to_string(),
            rating: record.rating.unwrap_or(0.0),
            metacritic: metacritic.unwrap_or(0.0),
        }
    }
}

/// First candidate that is present and not empty.
fn first_filled<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
}

/// One owned game+platform line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionItem {
    pub unique_id: String,
    pub game_id: GameId,
    pub platform: String,
    pub name: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub year: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub metacritic: f64,
    pub quantity: u32,
    /// Unit price, fixed when the item was added.
    pub price: f64,
    pub date_added: DateTime<Utc>,
}

impl CollectionItem {
    /// Only the collection store creates items; everything else reads them.
    pub(crate) fn new(game_id: GameId, platform: &str, snapshot: GameSnapshot, price: f64) -> Self {
        Self {
            unique_id: unique_id(&game_id, platform),
            game_id,
            platform: platform.to_string(),
            name: snapshot.name,
            genre: snapshot.genre,
            year: snapshot.year,
            rating: snapshot.rating,
            metacritic: snapshot.metacritic,
            quantity: 1,
            price,
            date_added: Utc::now(),
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Aggregates over the whole collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionStats {
    /// Distinct game+platform lines.
    pub total_games: usize,
    /// Sum of quantities.
    pub total_items: u64,
    pub total_value: f64,
    pub platform_count: usize,
    pub genre_count: usize,
    pub platforms: Vec<String>,
    pub genres: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_id_joins_game_and_platform() {
        assert_eq!(unique_id(&GameId::from(7u64), "Wii U"), "7-Wii U");
        assert_eq!(unique_id(&GameId::from("zelda"), "PC"), "zelda-PC");
    }

    #[test]
    fn test_game_id_accepts_numbers_and_strings() {
        let numeric: GameId = serde_json::from_str("42").unwrap();
        let text: GameId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(numeric, text);
        assert_eq!(numeric.as_str(), "42");
    }

    #[test]
    fn test_snapshot_prefers_legacy_convention() {
        let record: GameRecord = serde_json::from_str(
            r#"{"id": 1, "name": "Celeste", "nombre": "Celeste (ES)",
                "genre": "Platformer", "genero": "Plataformas",
                "year": "2018", "fecha_lanzamiento": "2018-01-25",
                "metacritic": 92, "puntuacion_metacritic": 10}"#,
        )
        .unwrap();

        let snap = GameSnapshot::from_record(&record);
        assert_eq!(snap.name, "Celeste (ES)");
        assert_eq!(record.display_name(), "Celeste (ES)");
        assert_eq!(snap.genre, "Plataformas");
        assert_eq!(snap.year, "2018-01-25");
        assert_eq!(snap.metacritic, 10.0);
    }

    #[test]
    fn test_snapshot_empty_legacy_values_fall_through() {
        let record: GameRecord = serde_json::from_str(
            r#"{"id": 1, "name": "Celeste", "nombre": "",
                "genre": "Platformer", "genero": "",
                "year": "2018", "fecha_lanzamiento": "",
                "metacritic": 92, "puntuacion_metacritic": 0}"#,
        )
        .unwrap();

        let snap = GameSnapshot::from_record(&record);
        assert_eq!(snap.name, "Celeste");
        assert_eq!(snap.genre, "Platformer");
        assert_eq!(snap.year, "2018");
        assert_eq!(snap.metacritic, 92.0);
    }

    #[test]
    fn test_snapshot_reads_legacy_convention() {
        let record: GameRecord = serde_json::from_str(
            r#"{"id": "5", "nombre": "Okami", "genero": "Aventura",
                "fecha_lanzamiento": "2006-04-20", "puntuacion_metacritic": 93,
                "rating": 4.5,
                "plataformas": [{"nombre": "PlayStation 2", "almacenamiento": "4.7 GB"}]}"#,
        )
        .unwrap();

        let snap = GameSnapshot::from_record(&record);
        assert_eq!(snap.name, "Okami");
        assert_eq!(snap.genre, "Aventura");
        assert_eq!(snap.year, "2006-04-20");
        assert_eq!(snap.rating, 4.5);
        assert_eq!(snap.metacritic, 93.0);
        assert_eq!(record.storage_on("PlayStation 2"), Some("4.7 GB"));
    }

    #[test]
    fn test_snapshot_defaults_when_fields_missing() {
        let record: GameRecord = serde_json::from_str(r#"{"id": 9}"#).unwrap();
        assert_eq!(GameSnapshot::from_record(&record), GameSnapshot::default());
    }

    #[test]
    fn test_snapshot_falls_back_to_first_genre_and_numeric_year() {
        let record: GameRecord = serde_json::from_str(
            r#"{"id": 3, "name": "Hades", "genres": ["Roguelike", "Action"], "year": 2020}"#,
        )
        .unwrap();

        let snap = GameSnapshot::from_record(&record);
        assert_eq!(snap.genre, "Roguelike");
        assert_eq!(snap.year, "2020");
    }

    #[test]
    fn test_genre_names_merges_fields_without_duplicates() {
        let record = GameRecord {
            genres: vec!["RPG".into(), "Action".into()],
            genre: Some("RPG".into()),
            legacy_genre: Some("Rol".into()),
            ..GameRecord::new(1u64, "x")
        };
        assert_eq!(record.genre_names(), vec!["RPG", "Action", "Rol"]);
    }

    #[test]
    fn test_collection_item_serializes_camel_case() {
        let item = CollectionItem::new(
            GameId::from(1u64),
            "PC",
            GameSnapshot {
                name: "Doom".into(),
                ..Default::default()
            },
            200.0,
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["uniqueId"], "1-PC");
        assert_eq!(json["gameId"], "1");
        assert_eq!(json["quantity"], 1);
        assert!(json.get("dateAdded").is_some());
    }

    #[test]
    fn test_line_total() {
        let mut item = CollectionItem::new(
            GameId::from(1u64),
            "PSP",
            GameSnapshot::default(),
            70.0,
        );
        item.quantity = 3;
        assert_eq!(item.line_total(), 210.0);
    }
}
