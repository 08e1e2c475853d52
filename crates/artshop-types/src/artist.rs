use crate::EntityId;
use serde::{Deserialize, Serialize};

/// An artist record in its resolved form.
///
/// `artwork_titles` is the denormalized list the server attaches to read
/// endpoints; it is display-only and never sent back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing)]
    pub artwork_titles: Vec<String>,
}

impl Artist {
    pub fn new(
        first_name: Option<String>,
        middle_name: Option<String>,
        last_name: Option<String>,
    ) -> Self {
        Artist {
            id: None,
            first_name,
            middle_name,
            last_name,
            artwork_titles: Vec::new(),
        }
    }

    /// "FirstName LastName", skipping absent parts. Used by pickers and
    /// list cells.
    pub fn display_name(&self) -> String {
        let mut parts = Vec::new();
        if let Some(first) = self.first_name.as_deref().filter(|s| !s.is_empty()) {
            parts.push(first);
        }
        if let Some(last) = self.last_name.as_deref().filter(|s| !s.is_empty()) {
            parts.push(last);
        }
        parts.join(" ")
    }
}

/// Embedded artist sub-object inside an Art payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRef {
    pub id: EntityId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl ArtistRef {
    pub fn display_name(&self) -> String {
        let joined = format!("{} {}", self.first_name, self.last_name);
        let trimmed = joined.trim();
        if trimmed.is_empty() {
            format!("#{}", self.id)
        } else {
            trimmed.to_string()
        }
    }
}

/// Partial update body for `PATCH /artist/{id}`. Absent fields are omitted
/// so the server leaves them untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl ArtistPatch {
    pub fn has_updates(&self) -> bool {
        self.first_name.is_some() || self.middle_name.is_some() || self.last_name.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_skips_missing_parts() {
        let artist = Artist::new(Some("Ada".into()), None, None);
        assert_eq!(artist.display_name(), "Ada");

        let artist = Artist::new(Some("Ada".into()), None, Some("Lovelace".into()));
        assert_eq!(artist.display_name(), "Ada Lovelace");
    }

    #[test]
    fn patch_serializes_only_present_fields() {
        let patch = ArtistPatch {
            last_name: Some("Lovelace".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "lastName": "Lovelace" }));
    }

    #[test]
    fn artwork_titles_never_serialized() {
        let mut artist = Artist::new(Some("Ada".into()), None, Some("Lovelace".into()));
        artist.artwork_titles = vec!["Analytical Engine".into()];
        let json = serde_json::to_value(&artist).unwrap();
        assert!(json.get("artworkTitles").is_none());
    }
}
