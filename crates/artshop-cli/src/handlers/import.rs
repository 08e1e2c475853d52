use crate::ui;
use anyhow::{Context, Result};
use artshop_app::messages;
use artshop_client::{Api, ApiClient};
use artshop_types::{Art, Artist, Classification};
use std::path::Path;

pub async fn artists(api: &ApiClient, file: &Path) -> Result<()> {
    let records: Vec<Artist> = read_records(file)?;
    let created = api
        .bulk_artists(&records)
        .await
        .map_err(|err| anyhow::anyhow!(err.user_message(messages::ARTIST_SAVE_FALLBACK)))?;
    ui::notify(&format!("Добавлено записей: {}", created.len()));
    Ok(())
}

pub async fn arts(api: &ApiClient, file: &Path) -> Result<()> {
    let records: Vec<Art> = read_records(file)?;
    let created = api
        .bulk_arts(&records)
        .await
        .map_err(|err| anyhow::anyhow!(err.user_message(messages::ART_SAVE_FALLBACK)))?;
    ui::notify(&format!("Добавлено записей: {}", created.len()));
    Ok(())
}

pub async fn classifications(api: &ApiClient, file: &Path) -> Result<()> {
    let records: Vec<Classification> = read_records(file)?;
    let created = api
        .bulk_classifications(&records)
        .await
        .map_err(|err| anyhow::anyhow!(err.user_message(messages::CLASSIFICATION_SAVE_FALLBACK)))?;
    ui::notify(&format!("Добавлено записей: {}", created.len()));
    Ok(())
}

fn read_records<T: serde::de::DeserializeOwned>(file: &Path) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Не удалось прочитать файл {}", file.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Некорректный JSON в файле {}", file.display()))
}
