use crate::ui;
use anyhow::Result;
use artshop_app::{ClassificationForm, Store, messages};
use artshop_client::{Api, ApiClient};
use artshop_types::{ClassificationPatch, EntityId, validate};

pub async fn add(api: &ApiClient, name: Option<String>, description: Option<String>) -> Result<()> {
    let mut form = ClassificationForm::new();
    form.name = name.unwrap_or_default();
    form.description = description.unwrap_or_default();
    submit(api, form).await
}

pub async fn edit(
    api: &ApiClient,
    id: EntityId,
    name: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let mut form = ClassificationForm::new();
    if form.load(api, id).await.is_err() {
        anyhow::bail!(
            form.notice
                .take()
                .unwrap_or_else(|| messages::CLASSIFICATION_LOAD_FALLBACK.to_string())
        );
    }

    if let Some(name) = name {
        form.name = name;
    }
    if let Some(description) = description {
        form.description = description;
    }

    submit(api, form).await
}

pub async fn patch(
    api: &ApiClient,
    id: EntityId,
    name: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let name = name
        .map(|raw| validate::classification_name(&raw))
        .transpose()
        .map_err(|err| anyhow::anyhow!(err.message))?;

    let patch = ClassificationPatch { name, description };
    if !patch.has_updates() {
        anyhow::bail!("Нет изменений");
    }

    api.patch_classification(id, &patch)
        .await
        .map_err(|err| anyhow::anyhow!(err.user_message(messages::CLASSIFICATION_SAVE_FALLBACK)))?;
    ui::notify(messages::CLASSIFICATION_UPDATED);
    Ok(())
}

async fn submit(api: &ApiClient, mut form: ClassificationForm) -> Result<()> {
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
                .unwrap_or_else(|| messages::CLASSIFICATION_SAVE_FALLBACK.to_string())
        ),
    }
}
