use crate::error::Error;
use crate::messages;
use crate::notice::Notice;
use crate::store::Store;
use artshop_client::Api;
use artshop_types::{validate, Classification, EntityId, EntityKind, ValidationError};

/// Add/edit form for classifications. Name required, description free
/// text.
#[derive(Debug, Default)]
pub struct ClassificationForm {
    pub id: Option<EntityId>,
    pub name: String,
    pub description: String,
    pub notice: Notice,
}

impl ClassificationForm {
    pub fn new() -> Self {
        ClassificationForm::default()
    }

    pub async fn load<A: Api>(&mut self, api: &A, id: EntityId) -> Result<(), Error> {
        match api.classification(id).await {
            Ok(classification) => {
                self.id = classification.id.or(Some(id));
                self.name = classification.name;
                self.description = classification.description.unwrap_or_default();
                Ok(())
            }
            Err(err) => {
                self.notice
                    .show(err.user_message(messages::CLASSIFICATION_LOAD_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::classification_name(&self.name)?;
        Ok(())
    }

    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }

    fn payload(&self) -> Classification {
        let description = self.description.trim();
        Classification::new(
            self.name.trim(),
            (!description.is_empty()).then(|| description.to_string()),
        )
    }

    pub async fn submit<A: Api>(
        &mut self,
        api: &A,
        store: &mut Store,
    ) -> Result<Classification, Error> {
        if let Err(err) = self.validate() {
            self.notice.show(err.message.clone());
            return Err(err.into());
        }
        let payload = self.payload();
        let result = match self.id {
            Some(id) => api.update_classification(id, &payload).await,
            None => api.create_classification(&payload).await,
        };
        match result {
            Ok(saved) => {
                self.notice.show(if self.id.is_some() {
                    messages::CLASSIFICATION_UPDATED
                } else {
                    messages::CLASSIFICATION_ADDED
                });
                store.invalidate(EntityKind::Classification);
                Ok(saved)
            }
            Err(err) => {
                self.notice
                    .show(err.user_message(messages::CLASSIFICATION_SAVE_FALLBACK));
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
    async fn blank_name_blocks_submit() {
        let api = FakeApi::with_fixtures();
        let mut form = ClassificationForm::new();
        form.description = "масло, холст".to_string();

        assert!(!form.is_submittable());
        assert!(form.submit(&api, &mut Store::new()).await.is_err());
        assert_eq!(api.call_count("create_classification"), 0);
    }

    #[tokio::test]
    async fn create_shows_success_notice() {
        let api = FakeApi::with_fixtures();
        let mut form = ClassificationForm::new();
        form.name = "Скульптура".to_string();

        let saved = form.submit(&api, &mut Store::new()).await.unwrap();
        assert_eq!(saved.name, "Скульптура");
        assert_eq!(
            form.notice.current(),
            Some(messages::CLASSIFICATION_ADDED)
        );
    }
}
