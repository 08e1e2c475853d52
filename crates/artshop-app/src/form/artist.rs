use crate::error::Error;
use crate::messages;
use crate::notice::Notice;
use crate::store::Store;
use artshop_client::Api;
use artshop_types::{validate, Artist, EntityId, EntityKind, ValidationError};

/// Add/edit form for artists. First and last name are required, the
/// middle name is optional.
#[derive(Debug, Default)]
pub struct ArtistForm {
    pub id: Option<EntityId>,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub notice: Notice,
}

impl ArtistForm {
    pub fn new() -> Self {
        ArtistForm::default()
    }

    /// Edit mode: fetch the artist and populate the fields. On failure a
    /// notice is shown and the fields stay at their defaults.
    pub async fn load<A: Api>(&mut self, api: &A, id: EntityId) -> Result<(), Error> {
        match api.artist(id).await {
            Ok(artist) => {
                self.id = artist.id.or(Some(id));
                self.first_name = artist.first_name.unwrap_or_default();
                self.middle_name = artist.middle_name.unwrap_or_default();
                self.last_name = artist.last_name.unwrap_or_default();
                Ok(())
            }
            Err(err) => {
                self.notice
                    .show(err.user_message(messages::ARTIST_LOAD_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::artist_first_name(&self.first_name)?;
        validate::artist_last_name(&self.last_name)?;
        Ok(())
    }

    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }

    fn payload(&self) -> Artist {
        let optional = |value: &str| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        Artist::new(
            optional(&self.first_name),
            optional(&self.middle_name),
            optional(&self.last_name),
        )
    }

    /// Validates, then creates (no id) or updates (id present). Shows the
    /// success or failure notice and invalidates the artist cache.
    pub async fn submit<A: Api>(&mut self, api: &A, store: &mut Store) -> Result<Artist, Error> {
        if let Err(err) = self.validate() {
            self.notice.show(err.message.clone());
            return Err(err.into());
        }
        let payload = self.payload();
        let result = match self.id {
            Some(id) => api.update_artist(id, &payload).await,
            None => api.create_artist(&payload).await,
        };
        match result {
            Ok(saved) => {
                self.notice.show(if self.id.is_some() {
                    messages::ARTIST_UPDATED
                } else {
                    messages::ARTIST_ADDED
                });
                store.invalidate(EntityKind::Artist);
                Ok(saved)
            }
            Err(err) => {
                self.notice
                    .show(err.user_message(messages::ARTIST_SAVE_FALLBACK));
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artshop_testing::FakeApi;

    #[tokio::test]
    async fn create_then_list_contains_new_artist() {
        let api = FakeApi::with_fixtures();
        let mut store = Store::new();
        let mut form = ArtistForm::new();
        form.first_name = "Ada".to_string();
        form.last_name = "Lovelace".to_string();

        let saved = form.submit(&api, &mut store).await.unwrap();
        assert!(saved.id.is_some());
        assert_eq!(form.notice.current(), Some(messages::ARTIST_ADDED));

        let artists = api.all_artists().await.unwrap();
        assert!(artists.iter().any(|artist| {
            artist.first_name.as_deref() == Some("Ada")
                && artist.last_name.as_deref() == Some("Lovelace")
        }));
    }

    #[tokio::test]
    async fn missing_last_name_blocks_submit() {
        let api = FakeApi::with_fixtures();
        let mut form = ArtistForm::new();
        form.first_name = "Ada".to_string();

        assert!(!form.is_submittable());
        let err = form.submit(&api, &mut Store::new()).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(api.call_count("create_artist"), 0);
    }

    #[tokio::test]
    async fn edit_mode_updates_instead_of_creating() {
        let api = FakeApi::with_fixtures();
        let mut form = ArtistForm::new();
        form.load(&api, 1).await.unwrap();
        form.last_name = "Ван Гог".to_string();

        form.submit(&api, &mut Store::new()).await.unwrap();
        assert_eq!(form.notice.current(), Some(messages::ARTIST_UPDATED));
        assert_eq!(api.call_count("update_artist"), 1);
        assert_eq!(api.call_count("create_artist"), 0);
    }

    #[tokio::test]
    async fn failed_load_keeps_defaults() {
        let api = FakeApi::with_fixtures();
        api.fail_next("artist", Some("Ресурс не найден"));
        let mut form = ArtistForm::new();
        assert!(form.load(&api, 99).await.is_err());
        assert!(form.first_name.is_empty());
        assert_eq!(form.notice.current(), Some("Ресурс не найден"));
    }
}
