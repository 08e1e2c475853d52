use crate::Result;
use artshop_types::{
    Art, ArtPatch, Artist, ArtistPatch, Classification, ClassificationPatch, EntityId,
};

/// The API surface the application layer consumes. One method per
/// (entity, operation) pair; implementations are thin request builders
/// with no retry, caching, or transformation logic beyond wire-shape
/// resolution. Implemented by [`crate::ApiClient`] and by the in-memory
/// fake in artshop-testing.
#[allow(async_fn_in_trait)]
pub trait Api {
    // Artists
    async fn all_artists(&self) -> Result<Vec<Artist>>;
    async fn artist(&self, id: EntityId) -> Result<Artist>;
    async fn artists_by_name(&self, first_name: &str, last_name: &str) -> Result<Vec<Artist>>;
    async fn artists_by_art_title(&self, art_title: &str) -> Result<Vec<Artist>>;
    async fn create_artist(&self, artist: &Artist) -> Result<Artist>;
    async fn update_artist(&self, id: EntityId, artist: &Artist) -> Result<Artist>;
    async fn patch_artist(&self, id: EntityId, patch: &ArtistPatch) -> Result<Artist>;
    async fn delete_artist(&self, id: EntityId) -> Result<()>;
    async fn bulk_artists(&self, artists: &[Artist]) -> Result<Vec<Artist>>;

    // Artworks
    async fn all_arts(&self) -> Result<Vec<Art>>;
    async fn art(&self, id: EntityId) -> Result<Art>;
    async fn arts_by_title(&self, title: &str) -> Result<Vec<Art>>;
    async fn arts_by_artist_name(&self, artist_name: &str) -> Result<Vec<Art>>;
    async fn arts_by_classification_id(&self, id: EntityId) -> Result<Vec<Art>>;
    async fn arts_by_classification_name(&self, name: &str) -> Result<Vec<Art>>;
    async fn create_art(&self, art: &Art) -> Result<Art>;
    async fn update_art(&self, id: EntityId, art: &Art) -> Result<Art>;
    async fn patch_art(&self, id: EntityId, patch: &ArtPatch) -> Result<Art>;
    async fn delete_art(&self, id: EntityId) -> Result<()>;
    async fn bulk_arts(&self, arts: &[Art]) -> Result<Vec<Art>>;

    // Classifications
    async fn all_classifications(&self) -> Result<Vec<Classification>>;
    async fn classification(&self, id: EntityId) -> Result<Classification>;
    async fn classifications_by_name(&self, name: &str) -> Result<Vec<Classification>>;
    async fn classifications_by_art_title(&self, art_title: &str) -> Result<Vec<Classification>>;
    async fn create_classification(&self, classification: &Classification)
    -> Result<Classification>;
    async fn update_classification(
        &self,
        id: EntityId,
        classification: &Classification,
    ) -> Result<Classification>;
    async fn patch_classification(
        &self,
        id: EntityId,
        patch: &ClassificationPatch,
    ) -> Result<Classification>;
    async fn delete_classification(&self, id: EntityId) -> Result<()>;
    async fn bulk_classifications(
        &self,
        classifications: &[Classification],
    ) -> Result<Vec<Classification>>;
}
