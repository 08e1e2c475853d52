use crate::ui;
use anyhow::Result;
use artshop_app::{ArtistForm, Store, messages};
use artshop_client::{Api, ApiClient};
use artshop_types::{ArtistPatch, EntityId, validate};

pub async fn add(
    api: &ApiClient,
    first_name: Option<String>,
    middle_name: Option<String>,
    last_name: Option<String>,
) -> Result<()> {
    let mut form = ArtistForm::new();
    form.first_name = first_name.unwrap_or_default();
    form.middle_name = middle_name.unwrap_or_default();
    form.last_name = last_name.unwrap_or_default();
    submit(api, form).await
}

pub async fn edit(
    api: &ApiClient,
    id: EntityId,
    first_name: Option<String>,
    middle_name: Option<String>,
    last_name: Option<String>,
) -> Result<()> {
    let mut form = ArtistForm::new();
    if form.load(api, id).await.is_err() {
        anyhow::bail!(form.notice.take().unwrap_or_else(|| messages::ARTIST_LOAD_FALLBACK.to_string()));
    }

    // Each flag edits exactly one field; the rest stay as loaded.
    if let Some(first_name) = first_name {
        form.first_name = first_name;
    }
    if let Some(middle_name) = middle_name {
        form.middle_name = middle_name;
    }
    if let Some(last_name) = last_name {
        form.last_name = last_name;
    }

    submit(api, form).await
}

pub async fn patch(
    api: &ApiClient,
    id: EntityId,
    first_name: Option<String>,
    middle_name: Option<String>,
    last_name: Option<String>,
) -> Result<()> {
    let first_name = first_name
        .map(|raw| validate::artist_first_name(&raw))
        .transpose()
        .map_err(|err| anyhow::anyhow!(err.message))?;
    let last_name = last_name
        .map(|raw| validate::artist_last_name(&raw))
        .transpose()
        .map_err(|err| anyhow::anyhow!(err.message))?;

    let patch = ArtistPatch {
        first_name,
        middle_name,
        last_name,
    };
    if !patch.has_updates() {
        anyhow::bail!("Нет изменений");
    }

    api.patch_artist(id, &patch)
        .await
        .map_err(|err| anyhow::anyhow!(err.user_message(messages::ARTIST_SAVE_FALLBACK)))?;
    ui::notify(messages::ARTIST_UPDATED);
    Ok(())
}

async fn submit(api: &ApiClient, mut form: ArtistForm) -> Result<()> {
    let mut store = Store::new();
    match form.submit(api, &mut store).await {
        Ok(_) => {
            if let Some(text) = form.notice.take() {
                ui::notify(&text);
            }
            Ok(())
        }
        Err(_) => anyhow::bail!(
            form.notice
                .take()
                .unwrap_or_else(|| messages::ARTIST_SAVE_FALLBACK.to_string())
        ),
    }
}
