use artshop_client::{Api, Result};
use artshop_types::{Art, Artist, Classification, EntityKind};

/// Per-kind cache of fetched lists with explicit invalidation.
///
/// This replaces the source system's strategy of reloading the whole page
/// after a mutation: a successful create/update/delete calls
/// `invalidate(kind)` and the next read of that kind refetches, so
/// freshness is guaranteed without discarding unrelated state.
#[derive(Debug, Default)]
pub struct Store {
    artists: Option<Vec<Artist>>,
    arts: Option<Vec<Art>>,
    classifications: Option<Vec<Classification>>,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    pub fn invalidate(&mut self, kind: EntityKind) {
        match kind {
            EntityKind::Artist => self.artists = None,
            EntityKind::Art => self.arts = None,
            EntityKind::Classification => self.classifications = None,
        }
    }

    pub fn is_cached(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::Artist => self.artists.is_some(),
            EntityKind::Art => self.arts.is_some(),
            EntityKind::Classification => self.classifications.is_some(),
        }
    }

    pub async fn artists<A: Api>(&mut self, api: &A) -> Result<&[Artist]> {
        if self.artists.is_none() {
            self.artists = Some(api.all_artists().await?);
        }
        Ok(self.artists.as_deref().unwrap_or_default())
    }

    pub async fn arts<A: Api>(&mut self, api: &A) -> Result<&[Art]> {
        if self.arts.is_none() {
            self.arts = Some(api.all_arts().await?);
        }
        Ok(self.arts.as_deref().unwrap_or_default())
    }

    pub async fn classifications<A: Api>(&mut self, api: &A) -> Result<&[Classification]> {
        if self.classifications.is_none() {
            self.classifications = Some(api.all_classifications().await?);
        }
        Ok(self.classifications.as_deref().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artshop_testing::FakeApi;

    #[tokio::test]
    async fn refetches_only_after_invalidation() {
        let api = FakeApi::with_fixtures();
        let mut store = Store::new();

        store.artists(&api).await.unwrap();
        store.artists(&api).await.unwrap();
        assert_eq!(api.call_count("all_artists"), 1);

        store.invalidate(EntityKind::Artist);
        assert!(!store.is_cached(EntityKind::Artist));
        store.artists(&api).await.unwrap();
        assert_eq!(api.call_count("all_artists"), 2);
    }

    #[tokio::test]
    async fn invalidation_is_scoped_to_one_kind() {
        let api = FakeApi::with_fixtures();
        let mut store = Store::new();

        store.artists(&api).await.unwrap();
        store.classifications(&api).await.unwrap();
        store.invalidate(EntityKind::Artist);
        assert!(store.is_cached(EntityKind::Classification));
    }
}
