use super::DeleteFlow;
use crate::error::Error;
use crate::messages;
use crate::notice::Notice;
use crate::store::Store;
use artshop_client::Api;
use artshop_types::{Classification, EntityId, EntityKind};

/// The classification list screen.
#[derive(Debug, Default)]
pub struct ClassificationListView {
    pub rows: Vec<Classification>,
    pub search_name: String,
    pub delete: DeleteFlow,
    pub notice: Notice,
}

impl ClassificationListView {
    pub fn new() -> Self {
        ClassificationListView::default()
    }

    pub async fn load<A: Api>(&mut self, api: &A) {
        match api.all_classifications().await {
            Ok(rows) => self.rows = rows,
            Err(err) => self
                .notice
                .show(err.user_message(messages::CLASSIFICATIONS_LOAD_FALLBACK)),
        }
    }

    pub async fn search<A: Api>(&mut self, api: &A) {
        match api.classifications_by_name(&self.search_name).await {
            Ok(rows) => self.rows = rows,
            Err(err) => self
                .notice
                .show(err.user_message(messages::CLASSIFICATIONS_SEARCH_FALLBACK)),
        }
    }

    pub async fn search_by_art_title<A: Api>(&mut self, api: &A, art_title: &str) {
        match api.classifications_by_art_title(art_title).await {
            Ok(rows) => self.rows = rows,
            Err(err) => self
                .notice
                .show(err.user_message(messages::CLASSIFICATIONS_SEARCH_FALLBACK)),
        }
    }

    pub fn request_delete(&mut self, id: EntityId) {
        self.delete.request(id);
    }

    pub fn cancel_delete(&mut self) {
        self.delete.cancel();
    }

    pub async fn confirm_delete<A: Api>(
        &mut self,
        api: &A,
        store: &mut Store,
    ) -> Result<(), Error> {
        let Some(id) = self.delete.confirm() else {
            return Ok(());
        };
        match api.delete_classification(id).await {
            Ok(()) => {
                self.rows.retain(|classification| classification.id != Some(id));
                self.notice.show(messages::CLASSIFICATION_DELETED);
                store.invalidate(EntityKind::Classification);
                Ok(())
            }
            Err(err) => {
                self.notice
                    .show(err.user_message(messages::CLASSIFICATION_DELETE_FALLBACK));
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
    async fn search_replaces_rows() {
        let api = FakeApi::with_fixtures();
        let mut view = ClassificationListView::new();
        view.load(&api).await;
        let all = view.rows.len();

        view.search_name = "Живопись".to_string();
        view.search(&api).await;
        assert!(view.rows.len() <= all);
        assert!(view.rows.iter().all(|c| c.name.contains("Живопись")));
    }

    #[tokio::test]
    async fn failed_delete_shows_server_message() {
        let api = FakeApi::with_fixtures();
        let mut view = ClassificationListView::new();
        view.load(&api).await;
        let before = view.rows.len();

        api.fail_next(
            "delete_classification",
            Some("Ошибка целостности данных"),
        );
        view.request_delete(1);
        let result = view.confirm_delete(&api, &mut Store::new()).await;

        assert!(result.is_err());
        assert_eq!(view.rows.len(), before);
        assert_eq!(view.notice.current(), Some("Ошибка целостности данных"));
    }
}
