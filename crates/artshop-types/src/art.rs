use crate::{ArtistRef, ClassificationRef, EntityId};
use serde::{Deserialize, Serialize};

/// An artwork record in its resolved form. Relations are always embedded
/// sub-objects here; the client resolves bare-id responses before handing
/// records to views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Art {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub classification: Option<ClassificationRef>,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
}

impl Art {
    /// Comma-joined artist names for list cells.
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(ArtistRef::display_name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Partial update body for `PATCH /art/{id}`. Mirrors the server's patch
/// DTO: relations are patched by bare identifier, not embedded objects.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_ids: Option<Vec<EntityId>>,
}

impl ArtPatch {
    pub fn has_updates(&self) -> bool {
        self.title.is_some()
            || self.year.is_some()
            || self.classification_id.is_some()
            || self.artist_ids.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_embeds_relations_camel_case() {
        let art = Art {
            id: None,
            title: "Starry Night".into(),
            year: Some(1889),
            classification: Some(ClassificationRef {
                id: 2,
                name: "Painting".into(),
                description: "Oil on canvas".into(),
            }),
            artists: vec![ArtistRef {
                id: 7,
                first_name: "Vincent".into(),
                last_name: "van Gogh".into(),
            }],
        };
        let json = serde_json::to_value(&art).unwrap();
        assert_eq!(json["classification"]["name"], "Painting");
        assert_eq!(json["artists"][0]["firstName"], "Vincent");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn deserializes_without_relations() {
        let art: Art = serde_json::from_str(r#"{ "id": 3, "title": "Untitled" }"#).unwrap();
        assert_eq!(art.id, Some(3));
        assert!(art.classification.is_none());
        assert!(art.artists.is_empty());
    }
}
