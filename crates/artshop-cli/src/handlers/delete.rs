use crate::ui;
use anyhow::Result;
use artshop_app::{
    ArtListView, ArtistListView, ClassificationListView, Store, messages,
};
use artshop_client::ApiClient;
use artshop_types::EntityId;

pub async fn artist(api: &ApiClient, id: EntityId, yes: bool) -> Result<()> {
    let mut view = ArtistListView::new();
    view.request_delete(id);

    if !yes && !ui::confirm(messages::ARTIST_DELETE_CONFIRM)? {
        view.cancel_delete();
        println!("Отменено");
        return Ok(());
    }

    let mut store = Store::new();
    let result = view.confirm_delete(api, &mut store).await;
    finish(result, view.notice.take(), messages::ARTIST_DELETE_FALLBACK)
}

pub async fn art(api: &ApiClient, id: EntityId, yes: bool) -> Result<()> {
    let mut view = ArtListView::new();
    view.request_delete(id);

    if !yes && !ui::confirm(messages::ART_DELETE_CONFIRM)? {
        view.cancel_delete();
        println!("Отменено");
        return Ok(());
    }

    let mut store = Store::new();
    let result = view.confirm_delete(api, &mut store).await;
    finish(result, view.notice.take(), messages::ART_DELETE_FALLBACK)
}

pub async fn classification(api: &ApiClient, id: EntityId, yes: bool) -> Result<()> {
    let mut view = ClassificationListView::new();
    view.request_delete(id);

    if !yes && !ui::confirm(messages::CLASSIFICATION_DELETE_CONFIRM)? {
        view.cancel_delete();
        println!("Отменено");
        return Ok(());
    }

    let mut store = Store::new();
    let result = view.confirm_delete(api, &mut store).await;
    finish(
        result,
        view.notice.take(),
        messages::CLASSIFICATION_DELETE_FALLBACK,
    )
}

fn finish(
    result: Result<(), artshop_app::Error>,
    notice: Option<String>,
    fallback: &str,
) -> Result<()> {
    match result {
        Ok(()) => {
            if let Some(text) = notice {
                ui::notify(&text);
            }
            Ok(())
        }
        Err(_) => anyhow::bail!(notice.unwrap_or_else(|| fallback.to_string())),
    }
}
