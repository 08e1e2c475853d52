use crate::EntityId;
use serde::{Deserialize, Serialize};

/// A classification record in its resolved form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing)]
    pub artwork_titles: Vec<String>,
}

impl Classification {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Classification {
            id: None,
            name: name.into(),
            description,
            artwork_titles: Vec::new(),
        }
    }
}

/// Embedded classification sub-object inside an Art payload.
///
/// The server requires a non-blank description, so payload assembly fills a
/// placeholder when the source record has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationRef {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl ClassificationRef {
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("#{}", self.id)
        } else {
            self.name.clone()
        }
    }
}

/// Partial update body for `PATCH /classification/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ClassificationPatch {
    pub fn has_updates(&self) -> bool {
        self.name.is_some() || self.description.is_some()
    }
}
