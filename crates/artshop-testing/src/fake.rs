use crate::fixtures;
use artshop_client::{Api, Error, Result, StatusCode};
use artshop_types::{
    Art, ArtPatch, Artist, ArtistPatch, ArtistRef, Classification, ClassificationPatch,
    ClassificationRef, EntityId,
};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// In-memory stand-in for the remote API. Records every call (method
/// name) and supports injecting a failure for the next call of a given
/// method, so tests can assert both "exactly one DELETE issued" and "no
/// network call issued".
pub struct FakeApi {
    state: Mutex<State>,
}

struct State {
    artists: Vec<Artist>,
    arts: Vec<Art>,
    classifications: Vec<Classification>,
    next_id: EntityId,
    calls: Vec<&'static str>,
    failures: HashMap<&'static str, Option<String>>,
}

fn not_found() -> Error {
    Error::Api {
        status: StatusCode::NOT_FOUND,
        message: Some("Ресурс не найден".to_string()),
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl FakeApi {
    pub fn new() -> Self {
        FakeApi {
            state: Mutex::new(State {
                artists: Vec::new(),
                arts: Vec::new(),
                classifications: Vec::new(),
                next_id: 100,
                calls: Vec::new(),
                failures: HashMap::new(),
            }),
        }
    }

    /// A fake pre-populated with `fixtures` data.
    pub fn with_fixtures() -> Self {
        let fake = FakeApi::new();
        {
            let mut state = fake.state.lock().unwrap();
            state.artists = fixtures::artists();
            state.arts = fixtures::arts();
            state.classifications = fixtures::classifications();
        }
        fake
    }

    /// The next call of `method` fails with a 500 carrying `message` (or
    /// no message body at all, to exercise fallback texts).
    pub fn fail_next(&self, method: &'static str, message: Option<&str>) {
        let mut state = self.state.lock().unwrap();
        state.failures.insert(method, message.map(String::from));
    }

    pub fn call_count(&self, method: &str) -> usize {
        let state = self.state.lock().unwrap();
        state.calls.iter().filter(|name| **name == method).count()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Records the call and applies any injected failure.
    fn begin(&self, method: &'static str) -> Result<MutexGuard<'_, State>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(method);
        if let Some(message) = state.failures.remove(method) {
            return Err(Error::Api {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message,
            });
        }
        Ok(state)
    }
}

impl Default for FakeApi {
    fn default() -> Self {
        FakeApi::new()
    }
}

impl State {
    fn assign_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Api for FakeApi {
    async fn all_artists(&self) -> Result<Vec<Artist>> {
        Ok(self.begin("all_artists")?.artists.clone())
    }

    async fn artist(&self, id: EntityId) -> Result<Artist> {
        let state = self.begin("artist")?;
        state
            .artists
            .iter()
            .find(|artist| artist.id == Some(id))
            .cloned()
            .ok_or_else(not_found)
    }

    async fn artists_by_name(&self, first_name: &str, last_name: &str) -> Result<Vec<Artist>> {
        let state = self.begin("artists_by_name")?;
        Ok(state
            .artists
            .iter()
            .filter(|artist| {
                contains_ci(artist.first_name.as_deref().unwrap_or(""), first_name)
                    && contains_ci(artist.last_name.as_deref().unwrap_or(""), last_name)
            })
            .cloned()
            .collect())
    }

    async fn artists_by_art_title(&self, art_title: &str) -> Result<Vec<Artist>> {
        let state = self.begin("artists_by_art_title")?;
        Ok(state
            .artists
            .iter()
            .filter(|artist| {
                artist
                    .artwork_titles
                    .iter()
                    .any(|title| contains_ci(title, art_title))
            })
            .cloned()
            .collect())
    }

    async fn create_artist(&self, artist: &Artist) -> Result<Artist> {
        let mut state = self.begin("create_artist")?;
        let mut created = artist.clone();
        created.id = Some(state.assign_id());
        state.artists.push(created.clone());
        Ok(created)
    }

    async fn update_artist(&self, id: EntityId, artist: &Artist) -> Result<Artist> {
        let mut state = self.begin("update_artist")?;
        let existing = state
            .artists
            .iter_mut()
            .find(|candidate| candidate.id == Some(id))
            .ok_or_else(not_found)?;
        let mut updated = artist.clone();
        updated.id = Some(id);
        *existing = updated.clone();
        Ok(updated)
    }

    async fn patch_artist(&self, id: EntityId, patch: &ArtistPatch) -> Result<Artist> {
        let mut state = self.begin("patch_artist")?;
        let existing = state
            .artists
            .iter_mut()
            .find(|candidate| candidate.id == Some(id))
            .ok_or_else(not_found)?;
        if let Some(first_name) = &patch.first_name {
            existing.first_name = Some(first_name.clone());
        }
        if let Some(middle_name) = &patch.middle_name {
            existing.middle_name = Some(middle_name.clone());
        }
        if let Some(last_name) = &patch.last_name {
            existing.last_name = Some(last_name.clone());
        }
        Ok(existing.clone())
    }

    async fn delete_artist(&self, id: EntityId) -> Result<()> {
        let mut state = self.begin("delete_artist")?;
        let before = state.artists.len();
        state.artists.retain(|artist| artist.id != Some(id));
        if state.artists.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn bulk_artists(&self, artists: &[Artist]) -> Result<Vec<Artist>> {
        let mut state = self.begin("bulk_artists")?;
        let mut created = Vec::with_capacity(artists.len());
        for artist in artists {
            let mut record = artist.clone();
            record.id = Some(state.assign_id());
            state.artists.push(record.clone());
            created.push(record);
        }
        Ok(created)
    }

    async fn all_arts(&self) -> Result<Vec<Art>> {
        Ok(self.begin("all_arts")?.arts.clone())
    }

    async fn art(&self, id: EntityId) -> Result<Art> {
        let state = self.begin("art")?;
        state
            .arts
            .iter()
            .find(|art| art.id == Some(id))
            .cloned()
            .ok_or_else(not_found)
    }

    async fn arts_by_title(&self, title: &str) -> Result<Vec<Art>> {
        let state = self.begin("arts_by_title")?;
        Ok(state
            .arts
            .iter()
            .filter(|art| contains_ci(&art.title, title))
            .cloned()
            .collect())
    }

    async fn arts_by_artist_name(&self, artist_name: &str) -> Result<Vec<Art>> {
        let state = self.begin("arts_by_artist_name")?;
        Ok(state
            .arts
            .iter()
            .filter(|art| {
                art.artists
                    .iter()
                    .any(|artist| contains_ci(&artist.display_name(), artist_name))
            })
            .cloned()
            .collect())
    }

    async fn arts_by_classification_id(&self, id: EntityId) -> Result<Vec<Art>> {
        let state = self.begin("arts_by_classification_id")?;
        Ok(state
            .arts
            .iter()
            .filter(|art| {
                art.classification
                    .as_ref()
                    .is_some_and(|classification| classification.id == id)
            })
            .cloned()
            .collect())
    }

    async fn arts_by_classification_name(&self, name: &str) -> Result<Vec<Art>> {
        let state = self.begin("arts_by_classification_name")?;
        Ok(state
            .arts
            .iter()
            .filter(|art| {
                art.classification
                    .as_ref()
                    .is_some_and(|classification| contains_ci(&classification.name, name))
            })
            .cloned()
            .collect())
    }

    async fn create_art(&self, art: &Art) -> Result<Art> {
        let mut state = self.begin("create_art")?;
        let mut created = art.clone();
        created.id = Some(state.assign_id());
        state.arts.push(created.clone());
        Ok(created)
    }

    async fn update_art(&self, id: EntityId, art: &Art) -> Result<Art> {
        let mut state = self.begin("update_art")?;
        let existing = state
            .arts
            .iter_mut()
            .find(|candidate| candidate.id == Some(id))
            .ok_or_else(not_found)?;
        let mut updated = art.clone();
        updated.id = Some(id);
        *existing = updated.clone();
        Ok(updated)
    }

    async fn patch_art(&self, id: EntityId, patch: &ArtPatch) -> Result<Art> {
        let mut state = self.begin("patch_art")?;
        // Split the guard so relation lookups can read the reference
        // lists while the artwork is borrowed mutably.
        let state = &mut *state;
        let existing = state
            .arts
            .iter_mut()
            .find(|candidate| candidate.id == Some(id))
            .ok_or_else(not_found)?;
        if let Some(title) = &patch.title {
            existing.title = title.clone();
        }
        if let Some(year) = patch.year {
            existing.year = Some(year);
        }
        if let Some(classification_id) = patch.classification_id {
            let reference = state
                .classifications
                .iter()
                .find(|candidate| candidate.id == Some(classification_id))
                .map(|classification| ClassificationRef {
                    id: classification_id,
                    name: classification.name.clone(),
                    description: classification.description.clone().unwrap_or_default(),
                })
                .unwrap_or_else(|| ClassificationRef {
                    id: classification_id,
                    name: String::new(),
                    description: String::new(),
                });
            existing.classification = Some(reference);
        }
        if let Some(artist_ids) = &patch.artist_ids {
            existing.artists = artist_ids
                .iter()
                .map(|&artist_id| {
                    state
                        .artists
                        .iter()
                        .find(|candidate| candidate.id == Some(artist_id))
                        .map(|artist| ArtistRef {
                            id: artist_id,
                            first_name: artist.first_name.clone().unwrap_or_default(),
                            last_name: artist.last_name.clone().unwrap_or_default(),
                        })
                        .unwrap_or_else(|| ArtistRef {
                            id: artist_id,
                            first_name: String::new(),
                            last_name: String::new(),
                        })
                })
                .collect();
        }
        Ok(existing.clone())
    }

    async fn delete_art(&self, id: EntityId) -> Result<()> {
        let mut state = self.begin("delete_art")?;
        let before = state.arts.len();
        state.arts.retain(|art| art.id != Some(id));
        if state.arts.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn bulk_arts(&self, arts: &[Art]) -> Result<Vec<Art>> {
        let mut state = self.begin("bulk_arts")?;
        let mut created = Vec::with_capacity(arts.len());
        for art in arts {
            let mut record = art.clone();
            record.id = Some(state.assign_id());
            state.arts.push(record.clone());
            created.push(record);
        }
        Ok(created)
    }

    async fn all_classifications(&self) -> Result<Vec<Classification>> {
        Ok(self.begin("all_classifications")?.classifications.clone())
    }

    async fn classification(&self, id: EntityId) -> Result<Classification> {
        let state = self.begin("classification")?;
        state
            .classifications
            .iter()
            .find(|classification| classification.id == Some(id))
            .cloned()
            .ok_or_else(not_found)
    }

    async fn classifications_by_name(&self, name: &str) -> Result<Vec<Classification>> {
        let state = self.begin("classifications_by_name")?;
        Ok(state
            .classifications
            .iter()
            .filter(|classification| contains_ci(&classification.name, name))
            .cloned()
            .collect())
    }

    async fn classifications_by_art_title(&self, art_title: &str) -> Result<Vec<Classification>> {
        let state = self.begin("classifications_by_art_title")?;
        Ok(state
            .classifications
            .iter()
            .filter(|classification| {
                classification
                    .artwork_titles
                    .iter()
                    .any(|title| contains_ci(title, art_title))
            })
            .cloned()
            .collect())
    }

    async fn create_classification(
        &self,
        classification: &Classification,
    ) -> Result<Classification> {
        let mut state = self.begin("create_classification")?;
        let mut created = classification.clone();
        created.id = Some(state.assign_id());
        state.classifications.push(created.clone());
        Ok(created)
    }

    async fn update_classification(
        &self,
        id: EntityId,
        classification: &Classification,
    ) -> Result<Classification> {
        let mut state = self.begin("update_classification")?;
        let existing = state
            .classifications
            .iter_mut()
            .find(|candidate| candidate.id == Some(id))
            .ok_or_else(not_found)?;
        let mut updated = classification.clone();
        updated.id = Some(id);
        *existing = updated.clone();
        Ok(updated)
    }

    async fn patch_classification(
        &self,
        id: EntityId,
        patch: &ClassificationPatch,
    ) -> Result<Classification> {
        let mut state = self.begin("patch_classification")?;
        let existing = state
            .classifications
            .iter_mut()
            .find(|candidate| candidate.id == Some(id))
            .ok_or_else(not_found)?;
        if let Some(name) = &patch.name {
            existing.name = name.clone();
        }
        if let Some(description) = &patch.description {
            existing.description = Some(description.clone());
        }
        Ok(existing.clone())
    }

    async fn delete_classification(&self, id: EntityId) -> Result<()> {
        let mut state = self.begin("delete_classification")?;
        let before = state.classifications.len();
        state
            .classifications
            .retain(|classification| classification.id != Some(id));
        if state.classifications.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn bulk_classifications(
        &self,
        classifications: &[Classification],
    ) -> Result<Vec<Classification>> {
        let mut state = self.begin("bulk_classifications")?;
        let mut created = Vec::with_capacity(classifications.len());
        for classification in classifications {
            let mut record = classification.clone();
            record.id = Some(state.assign_id());
            state.classifications.push(record.clone());
            created.push(record);
        }
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn patch_art_applies_relation_fields() {
        let api = FakeApi::with_fixtures();
        let patch = ArtPatch {
            classification_id: Some(2),
            artist_ids: Some(vec![2, 3]),
            ..Default::default()
        };

        let updated = api.patch_art(1, &patch).await.unwrap();
        // Unpatched fields stay as stored.
        assert_eq!(updated.title, "Звёздная ночь");
        let classification = updated.classification.unwrap();
        assert_eq!(classification.id, 2);
        assert_eq!(classification.name, "Графика");
        assert_eq!(
            updated
                .artists
                .iter()
                .map(|artist| artist.id)
                .collect::<Vec<_>>(),
            vec![2, 3]
        );
        assert_eq!(updated.artists[0].first_name, "Клод");
    }

    #[tokio::test]
    async fn patch_art_resolves_unknown_relation_ids_to_bare_refs() {
        let api = FakeApi::with_fixtures();
        let patch = ArtPatch {
            classification_id: Some(77),
            ..Default::default()
        };

        let updated = api.patch_art(1, &patch).await.unwrap();
        let classification = updated.classification.unwrap();
        assert_eq!(classification.id, 77);
        assert_eq!(classification.display_name(), "#77");
    }
}
