//! Raw response shapes and their resolution to the single representation
//! in `artshop-types`.
//!
//! The server is not consistent about relation fields: depending on the
//! endpoint they arrive as embedded objects or as bare identifiers, and the
//! denormalized artwork list arrives either as `artworkTitles` or as
//! embedded `arts` records. Every shape is accepted here and resolved once,
//! at the client boundary; views never see the raw forms.

use artshop_types::{Art, Artist, ArtistRef, Classification, ClassificationRef, EntityId};
use serde::Deserialize;

/// A relation field that may arrive embedded or as a bare identifier.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Relation<T> {
    Embedded(T),
    Id(EntityId),
}

/// Response body that is a single object for an exact match and an array
/// otherwise (`GET /art/title`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArtist {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub artwork_titles: Option<Vec<String>>,
    #[serde(default)]
    pub arts: Vec<RawArtStub>,
}

/// Embedded artwork inside an artist or classification response; only the
/// title is of interest.
#[derive(Debug, Deserialize)]
pub struct RawArtStub {
    #[serde(default)]
    pub title: Option<String>,
}

impl RawArtist {
    pub fn resolve(self) -> Artist {
        let artwork_titles = resolve_titles(self.artwork_titles, self.arts);
        Artist {
            id: self.id,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            artwork_titles,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawClassification {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub artwork_titles: Option<Vec<String>>,
    #[serde(default)]
    pub arts: Vec<RawArtStub>,
}

impl RawClassification {
    pub fn resolve(self) -> Classification {
        let artwork_titles = resolve_titles(self.artwork_titles, self.arts);
        Classification {
            id: self.id,
            name: self.name,
            description: self.description,
            artwork_titles,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArt {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub classification: Option<Relation<ClassificationRef>>,
    #[serde(default)]
    pub artists: Vec<Relation<ArtistRef>>,
}

impl RawArt {
    pub fn resolve(self) -> Art {
        Art {
            id: self.id,
            title: self.title,
            year: self.year,
            classification: self.classification.map(resolve_classification),
            artists: self.artists.into_iter().map(resolve_artist).collect(),
        }
    }
}

/// A bare id resolves to a ref with empty name fields; display code falls
/// back to the id. No hydration fetches are issued.
fn resolve_classification(relation: Relation<ClassificationRef>) -> ClassificationRef {
    match relation {
        Relation::Embedded(reference) => reference,
        Relation::Id(id) => ClassificationRef {
            id,
            name: String::new(),
            description: String::new(),
        },
    }
}

fn resolve_artist(relation: Relation<ArtistRef>) -> ArtistRef {
    match relation {
        Relation::Embedded(reference) => reference,
        Relation::Id(id) => ArtistRef {
            id,
            first_name: String::new(),
            last_name: String::new(),
        },
    }
}

fn resolve_titles(titles: Option<Vec<String>>, arts: Vec<RawArtStub>) -> Vec<String> {
    match titles {
        Some(titles) if !titles.is_empty() => titles,
        _ => arts.into_iter().filter_map(|art| art.title).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn art_accepts_embedded_relations() {
        let raw: RawArt = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Starry Night",
                "year": 1889,
                "classification": { "id": 2, "name": "Painting", "description": "Oil" },
                "artists": [{ "id": 7, "firstName": "Vincent", "lastName": "van Gogh" }]
            }"#,
        )
        .unwrap();
        let art = raw.resolve();
        assert_eq!(art.classification.unwrap().name, "Painting");
        assert_eq!(art.artists[0].display_name(), "Vincent van Gogh");
    }

    #[test]
    fn art_accepts_bare_id_relations() {
        let raw: RawArt = serde_json::from_str(
            r#"{ "id": 1, "title": "Starry Night", "classification": 2, "artists": [7, 9] }"#,
        )
        .unwrap();
        let art = raw.resolve();
        let classification = art.classification.unwrap();
        assert_eq!(classification.id, 2);
        assert_eq!(classification.display_name(), "#2");
        assert_eq!(art.artists.len(), 2);
        assert_eq!(art.artists[1].id, 9);
    }

    #[test]
    fn artist_titles_from_either_field() {
        let raw: RawArtist = serde_json::from_str(
            r#"{ "id": 1, "firstName": "Ada", "artworkTitles": ["Engine"] }"#,
        )
        .unwrap();
        assert_eq!(raw.resolve().artwork_titles, vec!["Engine"]);

        let raw: RawArtist = serde_json::from_str(
            r#"{ "id": 1, "firstName": "Ada", "arts": [{ "title": "Engine" }, {}] }"#,
        )
        .unwrap();
        assert_eq!(raw.resolve().artwork_titles, vec!["Engine"]);
    }

    #[test]
    fn one_or_many_normalizes_to_vec() {
        let single: OneOrMany<RawArt> =
            serde_json::from_str(r#"{ "id": 1, "title": "Starry Night" }"#).unwrap();
        assert_eq!(single.into_vec().len(), 1);

        let many: OneOrMany<RawArt> =
            serde_json::from_str(r#"[{ "id": 1, "title": "A" }, { "id": 2, "title": "B" }]"#)
                .unwrap();
        assert_eq!(many.into_vec().len(), 2);

        let empty: OneOrMany<RawArt> = serde_json::from_str("[]").unwrap();
        assert!(empty.into_vec().is_empty());
    }
}
