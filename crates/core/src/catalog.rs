//! The title record: the single entity exchanged between the query service
//! and its consumers.
//!
//! Multi-valued relations (directors, countries, categories) travel as
//! native JSON arrays. An absent relation is an empty array, never `[""]`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder rendered for absent or empty field values.
pub const EMPTY_CELL: &str = "-";

/// A catalog title with its aggregated relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRecord {
    #[serde(rename = "show_id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub release_year: i32,
    pub rating: Option<String>,
    pub duration: String,
    pub date_added: Option<NaiveDate>,
    pub description: String,
    #[serde(default)]
    pub directors: Vec<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Addressable fields of a [`TitleRecord`], used by table renderers to
/// iterate columns generically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleField {
    Id,
    Kind,
    Title,
    Directors,
    ReleaseYear,
    Rating,
    Duration,
    DateAdded,
    Countries,
    Categories,
    Description,
}

impl TitleField {
    /// JSON key of the field on the wire.
    pub fn key(self) -> &'static str {
        match self {
            TitleField::Id => "show_id",
            TitleField::Kind => "type",
            TitleField::Title => "title",
            TitleField::Directors => "directors",
            TitleField::ReleaseYear => "release_year",
            TitleField::Rating => "rating",
            TitleField::Duration => "duration",
            TitleField::DateAdded => "date_added",
            TitleField::Countries => "countries",
            TitleField::Categories => "categories",
            TitleField::Description => "description",
        }
    }
}

impl TitleRecord {
    /// Render one field as display text.
    ///
    /// Lists are joined with `", "`. Absent values, empty strings and empty
    /// lists all render as [`EMPTY_CELL`].
    pub fn display_value(&self, field: TitleField) -> String {
        let text = match field {
            TitleField::Id => self.id.clone(),
            TitleField::Kind => self.kind.clone(),
            TitleField::Title => self.title.clone(),
            TitleField::Directors => self.directors.join(", "),
            TitleField::ReleaseYear => self.release_year.to_string(),
            TitleField::Rating => self.rating.clone().unwrap_or_default(),
            TitleField::Duration => self.duration.clone(),
            TitleField::DateAdded => self
                .date_added
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            TitleField::Countries => self.countries.join(", "),
            TitleField::Categories => self.categories.join(", "),
            TitleField::Description => self.description.clone(),
        };

        if text.trim().is_empty() {
            EMPTY_CELL.to_string()
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TitleRecord {
        TitleRecord {
            id: "s1".to_string(),
            title: "Zodiac".to_string(),
            kind: "Movie".to_string(),
            release_year: 2007,
            rating: None,
            duration: "157 min".to_string(),
            date_added: NaiveDate::from_ymd_opt(2019, 11, 20),
            description: String::new(),
            directors: vec!["David Fincher".to_string()],
            countries: vec![],
            categories: vec!["Dramas".to_string(), "Thrillers".to_string()],
        }
    }

    #[test]
    fn serializes_with_wire_keys() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["show_id"], "s1");
        assert_eq!(json["type"], "Movie");
        assert_eq!(json["date_added"], "2019-11-20");
        assert!(json["rating"].is_null());
        assert_eq!(json["countries"], serde_json::json!([]));
        assert!(json.get("id").is_none());
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn missing_list_fields_deserialize_as_empty() {
        let json = serde_json::json!({
            "show_id": "s9",
            "title": "Amélie",
            "type": "Movie",
            "release_year": 2001,
            "rating": "R",
            "duration": "122 min",
            "date_added": null,
            "description": "A shy waitress."
        });

        let record: TitleRecord = serde_json::from_value(json).unwrap();
        assert!(record.directors.is_empty());
        assert!(record.countries.is_empty());
        assert!(record.categories.is_empty());
        assert_eq!(record.date_added, None);
    }

    #[test]
    fn display_value_joins_lists() {
        let record = sample();
        assert_eq!(
            record.display_value(TitleField::Categories),
            "Dramas, Thrillers"
        );
        assert_eq!(record.display_value(TitleField::ReleaseYear), "2007");
        assert_eq!(record.display_value(TitleField::DateAdded), "2019-11-20");
    }

    #[test]
    fn display_value_uses_placeholder_for_empty() {
        let record = sample();
        assert_eq!(record.display_value(TitleField::Rating), EMPTY_CELL);
        assert_eq!(record.display_value(TitleField::Countries), EMPTY_CELL);
        assert_eq!(record.display_value(TitleField::Description), EMPTY_CELL);
    }

    #[test]
    fn field_keys_match_serialized_names() {
        let json = serde_json::to_value(sample()).unwrap();
        let fields = [
            TitleField::Id,
            TitleField::Kind,
            TitleField::Title,
            TitleField::Directors,
            TitleField::ReleaseYear,
            TitleField::Rating,
            TitleField::Duration,
            TitleField::DateAdded,
            TitleField::Countries,
            TitleField::Categories,
            TitleField::Description,
        ];
        for field in fields {
            assert!(json.get(field.key()).is_some(), "missing {}", field.key());
        }
    }
}
