use crate::error::Error;
use crate::messages;
use crate::notice::Notice;
use crate::store::Store;
use artshop_client::Api;
use artshop_types::{
    validate, Art, Artist, ArtistRef, Classification, ClassificationRef, EntityId, EntityKind,
    ValidationError,
};

/// Add/edit form for artworks. Holds the field inputs, the relation
/// selections as bare ids, and the two reference lists backing the
/// pickers.
///
/// The year field stays a raw string until submit, like a controlled
/// text input; all bounds checking goes through `artshop_types::validate`.
#[derive(Debug, Default)]
pub struct ArtForm {
    pub id: Option<EntityId>,
    pub title: String,
    pub year: String,
    pub classification_id: Option<EntityId>,
    pub artist_ids: Vec<EntityId>,
    artists: Vec<Artist>,
    classifications: Vec<Classification>,
    references_loaded: bool,
    pub notice: Notice,
}

impl ArtForm {
    pub fn new() -> Self {
        ArtForm::default()
    }

    /// Fetch both picker lists in parallel. All-or-nothing: if either
    /// fetch fails neither list is populated and the pickers stay empty.
    pub async fn load_references<A: Api>(&mut self, api: &A) -> Result<(), Error> {
        match futures::try_join!(api.all_artists(), api.all_classifications()) {
            Ok((artists, classifications)) => {
                self.artists = artists;
                self.classifications = classifications;
                self.references_loaded = true;
                Ok(())
            }
            Err(err) => {
                self.notice
                    .show(err.user_message(messages::REFERENCES_LOAD_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub fn references_loaded(&self) -> bool {
        self.references_loaded
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn classifications(&self) -> &[Classification] {
        &self.classifications
    }

    /// Edit mode: fetch the artwork and populate the fields, mapping the
    /// embedded relation objects down to bare id selections for the
    /// pickers.
    pub async fn load<A: Api>(&mut self, api: &A, id: EntityId) -> Result<(), Error> {
        match api.art(id).await {
            Ok(art) => {
                self.id = art.id.or(Some(id));
                self.title = art.title;
                self.year = art.year.map(|year| year.to_string()).unwrap_or_default();
                self.classification_id = art.classification.map(|c| c.id);
                self.artist_ids = art.artists.iter().map(|a| a.id).collect();
                Ok(())
            }
            Err(err) => {
                self.notice
                    .show(err.user_message(messages::ART_LOAD_FALLBACK));
                Err(err.into())
            }
        }
    }

    /// Inline helper text for the title field.
    pub fn title_error(&self) -> Option<ValidationError> {
        validate::art_title(&self.title).err()
    }

    /// Inline helper text for the year field. Uses the same rule as
    /// submit gating.
    pub fn year_error(&self) -> Option<ValidationError> {
        validate::art_year(&self.year, validate::current_year()).err()
    }

    pub fn validate(&self) -> Result<(String, i32), ValidationError> {
        let title = validate::art_title(&self.title)?;
        let year = validate::art_year(&self.year, validate::current_year())?;
        Ok((title, year))
    }

    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Selected ids with no counterpart in the fetched reference lists.
    /// Payload assembly drops these, so callers can warn before submit.
    pub fn unknown_selections(&self) -> Vec<EntityId> {
        let mut missing = Vec::new();
        if let Some(id) = self.classification_id {
            if !self.classifications.iter().any(|c| c.id == Some(id)) {
                missing.push(id);
            }
        }
        for &id in &self.artist_ids {
            if !self.artists.iter().any(|a| a.id == Some(id)) {
                missing.push(id);
            }
        }
        missing
    }

    /// Assemble the outgoing payload. The classification and artist
    /// sub-objects are rebuilt from the current selections resolved
    /// against the latest fetched reference lists; embedded objects from
    /// a prior fetch are never reused. Selections that no longer exist in
    /// the reference lists are dropped.
    pub fn payload(&self) -> Result<Art, Error> {
        let (title, year) = self.validate().map_err(Error::Validation)?;
        let classification = self.classification_id.and_then(|id| {
            self.classifications
                .iter()
                .find(|c| c.id == Some(id))
                .map(|c| ClassificationRef {
                    id,
                    name: c.name.clone(),
                    description: c
                        .description
                        .clone()
                        .unwrap_or_else(|| "No description".to_string()),
                })
        });
        let artists = self
            .artist_ids
            .iter()
            .filter_map(|&id| {
                self.artists.iter().find(|a| a.id == Some(id)).map(|a| ArtistRef {
                    id,
                    first_name: a.first_name.clone().unwrap_or_default(),
                    last_name: a.last_name.clone().unwrap_or_default(),
                })
            })
            .collect();
        Ok(Art {
            id: None,
            title,
            year: Some(year),
            classification,
            artists,
        })
    }

    /// Validates before touching the network, then creates or updates.
    pub async fn submit<A: Api>(&mut self, api: &A, store: &mut Store) -> Result<Art, Error> {
        let payload = match self.payload() {
            Ok(payload) => payload,
            Err(err) => {
                if let Error::Validation(validation) = &err {
                    self.notice.show(validation.message.clone());
                }
                return Err(err);
            }
        };
        let result = match self.id {
            Some(id) => api.update_art(id, &payload).await,
            None => api.create_art(&payload).await,
        };
        match result {
            Ok(saved) => {
                self.notice.show(if self.id.is_some() {
                    messages::ART_UPDATED
                } else {
                    messages::ART_ADDED
                });
                store.invalidate(EntityKind::Art);
                Ok(saved)
            }
            Err(err) => {
                self.notice
                    .show(err.user_message(messages::ART_SAVE_FALLBACK));
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artshop_testing::FakeApi;
    use chrono::Datelike;

    fn current_year() -> i32 {
        chrono::Utc::now().year()
    }

    #[tokio::test]
    async fn payload_rebuilds_relations_from_fresh_references() {
        let api = FakeApi::with_fixtures();
        let mut form = ArtForm::new();
        form.load_references(&api).await.unwrap();
        form.title = "Подсолнухи".to_string();
        form.year = "1888".to_string();
        form.classification_id = Some(1);
        form.artist_ids = vec![1];

        let payload = form.payload().unwrap();
        let classification = payload.classification.unwrap();
        assert_eq!(classification.id, 1);
        // Name and description come from the fetched list, not from any
        // previously embedded object.
        assert_eq!(classification.name, "Живопись");
        assert!(!classification.description.is_empty());
        assert_eq!(payload.artists.len(), 1);
        assert_eq!(payload.artists[0].first_name, "Винсент");
    }

    #[tokio::test]
    async fn stale_selection_is_dropped_from_payload() {
        let api = FakeApi::with_fixtures();
        let mut form = ArtForm::new();
        form.load_references(&api).await.unwrap();
        form.title = "Подсолнухи".to_string();
        form.year = "1888".to_string();
        form.artist_ids = vec![1, 999];

        let payload = form.payload().unwrap();
        assert_eq!(payload.artists.len(), 1);
        assert_eq!(payload.artists[0].id, 1);
    }

    #[tokio::test]
    async fn unknown_selection_ids_are_reported() {
        let api = FakeApi::with_fixtures();
        let mut form = ArtForm::new();
        form.load_references(&api).await.unwrap();
        form.classification_id = Some(77);
        form.artist_ids = vec![1, 999];

        assert_eq!(form.unknown_selections(), vec![77, 999]);

        form.classification_id = Some(1);
        form.artist_ids = vec![1];
        assert!(form.unknown_selections().is_empty());
    }

    #[tokio::test]
    async fn future_year_blocks_submit_without_network_call() {
        let api = FakeApi::with_fixtures();
        let mut form = ArtForm::new();
        form.load_references(&api).await.unwrap();
        form.title = "Подсолнухи".to_string();
        form.year = (current_year() + 1).to_string();

        assert!(!form.is_submittable());
        let year_error = form.year_error().unwrap();
        assert_eq!(year_error.message, "Год не может быть в будущем");

        let err = form.submit(&api, &mut Store::new()).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(
            form.notice.current(),
            Some("Год не может быть в будущем")
        );
        assert_eq!(api.call_count("create_art"), 0);
        assert_eq!(api.call_count("update_art"), 0);
    }

    #[tokio::test]
    async fn blank_title_blocks_submit() {
        let mut form = ArtForm::new();
        form.title = "   ".to_string();
        form.year = "1888".to_string();
        assert!(!form.is_submittable());
        assert_eq!(form.title_error().unwrap().message, "Название обязательно");
    }

    #[tokio::test]
    async fn current_year_is_accepted() {
        let api = FakeApi::with_fixtures();
        let mut form = ArtForm::new();
        form.load_references(&api).await.unwrap();
        form.title = "Автопортрет".to_string();
        form.year = current_year().to_string();

        let saved = form.submit(&api, &mut Store::new()).await.unwrap();
        assert_eq!(saved.title, "Автопортрет");
        assert_eq!(form.notice.current(), Some(messages::ART_ADDED));
    }

    #[tokio::test]
    async fn reference_load_is_all_or_nothing() {
        let api = FakeApi::with_fixtures();
        api.fail_next("all_classifications", None);
        let mut form = ArtForm::new();

        assert!(form.load_references(&api).await.is_err());
        assert!(!form.references_loaded());
        assert!(form.artists().is_empty());
        assert!(form.classifications().is_empty());
        assert_eq!(
            form.notice.current(),
            Some(messages::REFERENCES_LOAD_FALLBACK)
        );
    }

    #[tokio::test]
    async fn edit_maps_embedded_relations_to_id_selections() {
        let api = FakeApi::with_fixtures();
        let mut form = ArtForm::new();
        form.load_references(&api).await.unwrap();
        form.load(&api, 1).await.unwrap();

        assert_eq!(form.id, Some(1));
        assert_eq!(form.classification_id, Some(1));
        assert_eq!(form.artist_ids, vec![1]);

        form.year = "1890".to_string();
        form.submit(&api, &mut Store::new()).await.unwrap();
        assert_eq!(form.notice.current(), Some(messages::ART_UPDATED));
        assert_eq!(api.call_count("update_art"), 1);
    }
}
