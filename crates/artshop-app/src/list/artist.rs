use super::DeleteFlow;
use crate::error::Error;
use crate::messages;
use crate::notice::Notice;
use crate::store::Store;
use artshop_client::Api;
use artshop_types::{Artist, EntityId, EntityKind};

/// The artist list screen: rows in server order, first/last name search,
/// delete confirmation, transient notice.
#[derive(Debug, Default)]
pub struct ArtistListView {
    pub rows: Vec<Artist>,
    pub search_first_name: String,
    pub search_last_name: String,
    pub delete: DeleteFlow,
    pub notice: Notice,
}

impl ArtistListView {
    pub fn new() -> Self {
        ArtistListView::default()
    }

    /// Fetch-all on mount; replaces the result set. Failure surfaces a
    /// notice and leaves the rows untouched.
    pub async fn load<A: Api>(&mut self, api: &A) {
        match api.all_artists().await {
            Ok(rows) => self.rows = rows,
            Err(err) => self
                .notice
                .show(err.user_message(messages::ARTISTS_LOAD_FALLBACK)),
        }
    }

    /// Search by the current name inputs; empty terms are passed through
    /// and the server decides matching.
    pub async fn search<A: Api>(&mut self, api: &A) {
        match api
            .artists_by_name(&self.search_first_name, &self.search_last_name)
            .await
        {
            Ok(rows) => self.rows = rows,
            Err(err) => self
                .notice
                .show(err.user_message(messages::ARTISTS_SEARCH_FALLBACK)),
        }
    }

    pub async fn search_by_art_title<A: Api>(&mut self, api: &A, art_title: &str) {
        match api.artists_by_art_title(art_title).await {
            Ok(rows) => self.rows = rows,
            Err(err) => self
                .notice
                .show(err.user_message(messages::ARTISTS_SEARCH_FALLBACK)),
        }
    }

    pub fn request_delete(&mut self, id: EntityId) {
        self.delete.request(id);
    }

    pub fn cancel_delete(&mut self) {
        self.delete.cancel();
    }

    /// On success removes exactly the confirmed id from the local rows and
    /// invalidates the artist cache; on failure the rows stay unchanged.
    /// A confirm without a pending target is a no-op.
    pub async fn confirm_delete<A: Api>(
        &mut self,
        api: &A,
        store: &mut Store,
    ) -> Result<(), Error> {
        let Some(id) = self.delete.confirm() else {
            return Ok(());
        };
        match api.delete_artist(id).await {
            Ok(()) => {
                self.rows.retain(|artist| artist.id != Some(id));
                self.notice.show(messages::ARTIST_DELETED);
                store.invalidate(EntityKind::Artist);
                Ok(())
            }
            Err(err) => {
                self.notice
                    .show(err.user_message(messages::ARTIST_DELETE_FALLBACK));
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
    async fn load_replaces_rows_in_server_order() {
        let api = FakeApi::with_fixtures();
        let mut view = ArtistListView::new();
        view.load(&api).await;
        assert!(!view.rows.is_empty());
        assert_eq!(view.rows[0].id, Some(1));
    }

    #[tokio::test]
    async fn confirmed_delete_removes_exactly_one_row() {
        let api = FakeApi::with_fixtures();
        let mut view = ArtistListView::new();
        view.load(&api).await;
        let before = view.rows.len();

        view.request_delete(1);
        view.confirm_delete(&api, &mut Store::new()).await.unwrap();

        assert_eq!(view.rows.len(), before - 1);
        assert!(view.rows.iter().all(|artist| artist.id != Some(1)));
        assert_eq!(view.notice.current(), Some(messages::ARTIST_DELETED));
        assert_eq!(api.call_count("delete_artist"), 1);
    }

    #[tokio::test]
    async fn cancelled_delete_issues_no_call() {
        let api = FakeApi::with_fixtures();
        let mut view = ArtistListView::new();
        view.load(&api).await;
        let before = view.rows.len();

        view.request_delete(1);
        view.cancel_delete();
        view.confirm_delete(&api, &mut Store::new()).await.unwrap();

        assert_eq!(view.rows.len(), before);
        assert_eq!(api.call_count("delete_artist"), 0);
    }

    #[tokio::test]
    async fn failed_delete_leaves_rows_unchanged() {
        let api = FakeApi::with_fixtures();
        let mut view = ArtistListView::new();
        view.load(&api).await;
        let before = view.rows.clone();

        api.fail_next("delete_artist", Some("Ресурс не найден"));
        view.request_delete(1);
        let result = view.confirm_delete(&api, &mut Store::new()).await;

        assert!(result.is_err());

        assert_eq!(view.rows, before);
        assert_eq!(view.notice.current(), Some("Ресурс не найден"));
    }

    #[tokio::test]
    async fn failed_load_keeps_rows_and_shows_fallback() {
        let api = FakeApi::with_fixtures();
        api.fail_next("all_artists", None);
        let mut view = ArtistListView::new();
        view.load(&api).await;
        assert!(view.rows.is_empty());
        assert_eq!(
            view.notice.current(),
            Some(messages::ARTISTS_LOAD_FALLBACK)
        );
    }
}
