use super::DeleteFlow;
use crate::error::Error;
use crate::messages;
use crate::notice::Notice;
use crate::store::Store;
use artshop_client::Api;
use artshop_types::{Art, EntityId, EntityKind};

/// The artwork list screen. Two independent search inputs (title,
/// classification name); whichever search runs replaces the result set.
#[derive(Debug, Default)]
pub struct ArtListView {
    pub rows: Vec<Art>,
    pub search_title: String,
    pub search_classification: String,
    pub delete: DeleteFlow,
    pub notice: Notice,
}

impl ArtListView {
    pub fn new() -> Self {
        ArtListView::default()
    }

    pub async fn load<A: Api>(&mut self, api: &A) {
        match api.all_arts().await {
            Ok(rows) => self.rows = rows,
            Err(err) => self
                .notice
                .show(err.user_message(messages::ARTS_LOAD_FALLBACK)),
        }
    }

    /// Title search; the endpoint returns a single object for an exact
    /// match, already normalized to a list by the client.
    pub async fn search_by_title<A: Api>(&mut self, api: &A) {
        match api.arts_by_title(&self.search_title).await {
            Ok(rows) => self.rows = rows,
            Err(err) => self
                .notice
                .show(err.user_message(messages::ARTS_SEARCH_TITLE_FALLBACK)),
        }
    }

    pub async fn search_by_classification<A: Api>(&mut self, api: &A) {
        match api
            .arts_by_classification_name(&self.search_classification)
            .await
        {
            Ok(rows) => self.rows = rows,
            Err(err) => self.notice.show(
                err.user_message(messages::ARTS_SEARCH_CLASSIFICATION_FALLBACK),
            ),
        }
    }

    pub async fn search_by_artist<A: Api>(&mut self, api: &A, artist_name: &str) {
        match api.arts_by_artist_name(artist_name).await {
            Ok(rows) => self.rows = rows,
            Err(err) => self
                .notice
                .show(err.user_message(messages::ARTS_SEARCH_ARTIST_FALLBACK)),
        }
    }

    pub async fn search_by_classification_id<A: Api>(&mut self, api: &A, id: EntityId) {
        match api.arts_by_classification_id(id).await {
            Ok(rows) => self.rows = rows,
            Err(err) => self.notice.show(
                err.user_message(messages::ARTS_SEARCH_CLASSIFICATION_FALLBACK),
            ),
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
        match api.delete_art(id).await {
            Ok(()) => {
                self.rows.retain(|art| art.id != Some(id));
                self.notice.show(messages::ART_DELETED);
                store.invalidate(EntityKind::Art);
                Ok(())
            }
            Err(err) => {
                self.notice
                    .show(err.user_message(messages::ART_DELETE_FALLBACK));
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
    async fn title_search_normalizes_single_result() {
        let api = FakeApi::with_fixtures();
        let mut view = ArtListView::new();
        view.search_title = "Звёздная ночь".to_string();
        view.search_by_title(&api).await;
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].title, "Звёздная ночь");
    }

    #[tokio::test]
    async fn empty_search_terms_return_a_list() {
        let api = FakeApi::with_fixtures();
        let mut view = ArtListView::new();
        view.search_by_classification(&api).await;
        // Empty term passed through; shape stays a sequence either way.
        assert!(view.notice.current().is_none());
    }

    #[tokio::test]
    async fn delete_flow_issues_exactly_one_call() {
        let api = FakeApi::with_fixtures();
        let mut view = ArtListView::new();
        view.load(&api).await;

        view.request_delete(1);
        view.confirm_delete(&api, &mut Store::new()).await.unwrap();
        // A second confirm without a new request is a no-op.
        view.confirm_delete(&api, &mut Store::new()).await.unwrap();

        assert_eq!(api.call_count("delete_art"), 1);
        assert!(view.rows.iter().all(|art| art.id != Some(1)));
    }

    #[tokio::test]
    async fn delete_invalidates_art_cache() {
        let api = FakeApi::with_fixtures();
        let mut store = Store::new();
        store.arts(&api).await.unwrap();

        let mut view = ArtListView::new();
        view.load(&api).await;
        view.request_delete(1);
        view.confirm_delete(&api, &mut store).await.unwrap();

        assert!(!store.is_cached(EntityKind::Art));
    }
}
