use crate::ui;
use anyhow::Result;
use artshop_app::{ArtForm, Store, messages};
use artshop_client::{Api, ApiClient};
use artshop_types::{ArtPatch, EntityId, validate};

pub async fn add(
    api: &ApiClient,
    title: Option<String>,
    year: Option<String>,
    classification: Option<EntityId>,
    artists: Vec<EntityId>,
) -> Result<()> {
    let mut form = ArtForm::new();
    form.title = title.unwrap_or_default();
    form.year = year.unwrap_or_default();
    form.classification_id = classification;
    form.artist_ids = artists;

    // Validation runs before the reference fetch so invalid input never
    // reaches the network.
    if let Err(err) = form.validate() {
        anyhow::bail!(err.message);
    }

    load_references(api, &mut form).await?;
    warn_unknown_selections(&form);
    submit(api, form).await
}

pub async fn edit(
    api: &ApiClient,
    id: EntityId,
    title: Option<String>,
    year: Option<String>,
    classification: Option<EntityId>,
    artists: Option<Vec<EntityId>>,
) -> Result<()> {
    let mut form = ArtForm::new();
    load_references(api, &mut form).await?;
    if form.load(api, id).await.is_err() {
        anyhow::bail!(
            form.notice
                .take()
                .unwrap_or_else(|| messages::ART_LOAD_FALLBACK.to_string())
        );
    }

    if let Some(title) = title {
        form.title = title;
    }
    if let Some(year) = year {
        form.year = year;
    }
    if let Some(classification) = classification {
        form.classification_id = Some(classification);
    }
    if let Some(artists) = artists {
        form.artist_ids = artists;
    }

    if let Err(err) = form.validate() {
        anyhow::bail!(err.message);
    }

    warn_unknown_selections(&form);
    submit(api, form).await
}

pub async fn patch(
    api: &ApiClient,
    id: EntityId,
    title: Option<String>,
    year: Option<String>,
    classification: Option<EntityId>,
    artists: Option<Vec<EntityId>>,
) -> Result<()> {
    let title = title
        .map(|raw| validate::art_title(&raw))
        .transpose()
        .map_err(|err| anyhow::anyhow!(err.message))?;
    let year = year
        .map(|raw| validate::art_year(&raw, validate::current_year()))
        .transpose()
        .map_err(|err| anyhow::anyhow!(err.message))?;

    let patch = ArtPatch {
        title,
        year,
        classification_id: classification,
        artist_ids: artists,
    };
    if !patch.has_updates() {
        anyhow::bail!("Нет изменений");
    }

    api.patch_art(id, &patch)
        .await
        .map_err(|err| anyhow::anyhow!(err.user_message(messages::ART_SAVE_FALLBACK)))?;
    ui::notify(messages::ART_UPDATED);
    Ok(())
}

/// Mistyped relation ids would otherwise vanish from the payload without
/// a trace.
fn warn_unknown_selections(form: &ArtForm) {
    for id in form.unknown_selections() {
        eprintln!(
            "Внимание: запись {} не найдена в справочниках и будет пропущена",
            id
        );
    }
}

async fn load_references(api: &ApiClient, form: &mut ArtForm) -> Result<()> {
    if form.load_references(api).await.is_err() {
        anyhow::bail!(
            form.notice
                .take()
                .unwrap_or_else(|| messages::REFERENCES_LOAD_FALLBACK.to_string())
        );
    }
    Ok(())
}

async fn submit(api: &ApiClient, mut form: ArtForm) -> Result<()> {
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
                .unwrap_or_else(|| messages::ART_SAVE_FALLBACK.to_string())
        ),
    }
}
