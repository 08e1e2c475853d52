use crate::error::{Error, Result};
use crate::traits::Api;
use crate::wire::{OneOrMany, RawArt, RawArtist, RawClassification};
use artshop_types::{
    Art, ArtPatch, Artist, ArtistPatch, Classification, ClassificationPatch, EntityId,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// HTTP client for the catalog API. Holds a connection-pooling
/// `reqwest::Client` and the base URL (e.g. `http://localhost:8100/api`).
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

/// Optional error body attached to non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ApiClient {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.http.get(self.url(path)).query(query).send().await?;
        read_json(response).await
    }

    async fn post_json<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        read_json(response).await
    }

    async fn put_json<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.http.put(self.url(path)).json(body).send().await?;
        read_json(response).await
    }

    async fn patch_json<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.http.patch(self.url(path)).json(body).send().await?;
        read_json(response).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let response = self.http.delete(self.url(path)).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
        .and_then(|body| body.message);
    Err(Error::Api { status, message })
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let response = check_status(response).await?;
    Ok(response.json().await?)
}

impl Api for ApiClient {
    async fn all_artists(&self) -> Result<Vec<Artist>> {
        let raw: Vec<RawArtist> = self.get_json("artist/all", &[]).await?;
        Ok(raw.into_iter().map(RawArtist::resolve).collect())
    }

    async fn artist(&self, id: EntityId) -> Result<Artist> {
        let raw: RawArtist = self.get_json(&format!("artist/{id}"), &[]).await?;
        Ok(raw.resolve())
    }

    async fn artists_by_name(&self, first_name: &str, last_name: &str) -> Result<Vec<Artist>> {
        // Empty terms are passed through; the server decides matching.
        let query = [
            ("firstName", first_name.to_string()),
            ("lastName", last_name.to_string()),
        ];
        let raw: Vec<RawArtist> = self.get_json("artist/name", &query).await?;
        Ok(raw.into_iter().map(RawArtist::resolve).collect())
    }

    async fn artists_by_art_title(&self, art_title: &str) -> Result<Vec<Artist>> {
        let query = [("artTitle", art_title.to_string())];
        let raw: Vec<RawArtist> = self.get_json("artist/by-art", &query).await?;
        Ok(raw.into_iter().map(RawArtist::resolve).collect())
    }

    async fn create_artist(&self, artist: &Artist) -> Result<Artist> {
        let raw: RawArtist = self.post_json("artist/add", artist).await?;
        Ok(raw.resolve())
    }

    async fn update_artist(&self, id: EntityId, artist: &Artist) -> Result<Artist> {
        let raw: RawArtist = self.put_json(&format!("artist/{id}"), artist).await?;
        Ok(raw.resolve())
    }

    async fn patch_artist(&self, id: EntityId, patch: &ArtistPatch) -> Result<Artist> {
        let raw: RawArtist = self.patch_json(&format!("artist/{id}"), patch).await?;
        Ok(raw.resolve())
    }

    async fn delete_artist(&self, id: EntityId) -> Result<()> {
        self.delete(&format!("artist/{id}")).await
    }

    async fn bulk_artists(&self, artists: &[Artist]) -> Result<Vec<Artist>> {
        let raw: Vec<RawArtist> = self.post_json("artist/bulk", artists).await?;
        Ok(raw.into_iter().map(RawArtist::resolve).collect())
    }

    async fn all_arts(&self) -> Result<Vec<Art>> {
        let raw: Vec<RawArt> = self.get_json("art/all", &[]).await?;
        Ok(raw.into_iter().map(RawArt::resolve).collect())
    }

    async fn art(&self, id: EntityId) -> Result<Art> {
        let raw: RawArt = self.get_json(&format!("art/{id}"), &[]).await?;
        Ok(raw.resolve())
    }

    async fn arts_by_title(&self, title: &str) -> Result<Vec<Art>> {
        // Exact match returns a single object, otherwise an array.
        let query = [("title", title.to_string())];
        let raw: Option<OneOrMany<RawArt>> = self.get_json("art/title", &query).await?;
        Ok(raw
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
            .into_iter()
            .map(RawArt::resolve)
            .collect())
    }

    async fn arts_by_artist_name(&self, artist_name: &str) -> Result<Vec<Art>> {
        let query = [("artistName", artist_name.to_string())];
        let raw: Vec<RawArt> = self.get_json("art/by-artist", &query).await?;
        Ok(raw.into_iter().map(RawArt::resolve).collect())
    }

    async fn arts_by_classification_id(&self, id: EntityId) -> Result<Vec<Art>> {
        let query = [("id", id.to_string())];
        let raw: Vec<RawArt> = self.get_json("art/by-classificationid", &query).await?;
        Ok(raw.into_iter().map(RawArt::resolve).collect())
    }

    async fn arts_by_classification_name(&self, name: &str) -> Result<Vec<Art>> {
        let query = [("name", name.to_string())];
        let raw: Vec<RawArt> = self.get_json("art/by-classification", &query).await?;
        Ok(raw.into_iter().map(RawArt::resolve).collect())
    }

    async fn create_art(&self, art: &Art) -> Result<Art> {
        let raw: RawArt = self.post_json("art/add", art).await?;
        Ok(raw.resolve())
    }

    async fn update_art(&self, id: EntityId, art: &Art) -> Result<Art> {
        let raw: RawArt = self.put_json(&format!("art/{id}"), art).await?;
        Ok(raw.resolve())
    }

    async fn patch_art(&self, id: EntityId, patch: &ArtPatch) -> Result<Art> {
        let raw: RawArt = self.patch_json(&format!("art/{id}"), patch).await?;
        Ok(raw.resolve())
    }

    async fn delete_art(&self, id: EntityId) -> Result<()> {
        self.delete(&format!("art/{id}")).await
    }

    async fn bulk_arts(&self, arts: &[Art]) -> Result<Vec<Art>> {
        let raw: Vec<RawArt> = self.post_json("art/bulk", arts).await?;
        Ok(raw.into_iter().map(RawArt::resolve).collect())
    }

    async fn all_classifications(&self) -> Result<Vec<Classification>> {
        let raw: Vec<RawClassification> = self.get_json("classification/all", &[]).await?;
        Ok(raw.into_iter().map(RawClassification::resolve).collect())
    }

    async fn classification(&self, id: EntityId) -> Result<Classification> {
        let raw: RawClassification = self.get_json(&format!("classification/{id}"), &[]).await?;
        Ok(raw.resolve())
    }

    async fn classifications_by_name(&self, name: &str) -> Result<Vec<Classification>> {
        let query = [("name", name.to_string())];
        let raw: Vec<RawClassification> = self.get_json("classification/name", &query).await?;
        Ok(raw.into_iter().map(RawClassification::resolve).collect())
    }

    async fn classifications_by_art_title(&self, art_title: &str) -> Result<Vec<Classification>> {
        let query = [("artTitle", art_title.to_string())];
        let raw: Vec<RawClassification> = self.get_json("classification/by-art", &query).await?;
        Ok(raw.into_iter().map(RawClassification::resolve).collect())
    }

    async fn create_classification(
        &self,
        classification: &Classification,
    ) -> Result<Classification> {
        let raw: RawClassification = self.post_json("classification/add", classification).await?;
        Ok(raw.resolve())
    }

    async fn update_classification(
        &self,
        id: EntityId,
        classification: &Classification,
    ) -> Result<Classification> {
        let raw: RawClassification = self
            .put_json(&format!("classification/{id}"), classification)
            .await?;
        Ok(raw.resolve())
    }

    async fn patch_classification(
        &self,
        id: EntityId,
        patch: &ClassificationPatch,
    ) -> Result<Classification> {
        let raw: RawClassification = self
            .patch_json(&format!("classification/{id}"), patch)
            .await?;
        Ok(raw.resolve())
    }

    async fn delete_classification(&self, id: EntityId) -> Result<()> {
        self.delete(&format!("classification/{id}")).await
    }

    async fn bulk_classifications(
        &self,
        classifications: &[Classification],
    ) -> Result<Vec<Classification>> {
        let raw: Vec<RawClassification> =
            self.post_json("classification/bulk", classifications).await?;
        Ok(raw.into_iter().map(RawClassification::resolve).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = ApiClient::new("http://localhost:8100/api/");
        assert_eq!(client.base_url(), "http://localhost:8100/api");
        assert_eq!(client.url("artist/all"), "http://localhost:8100/api/artist/all");
    }
}
