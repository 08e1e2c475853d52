use crate::types::OutputFormat;
use anyhow::Result;
use artshop_app::{ArtListView, messages};
use artshop_client::ApiClient;
use artshop_types::EntityId;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

pub async fn handle(
    api: &ApiClient,
    format: OutputFormat,
    title: Option<String>,
    classification: Option<String>,
    classification_id: Option<EntityId>,
    artist: Option<String>,
) -> Result<()> {
    let mut view = ArtListView::new();

    if let Some(title) = title {
        view.search_title = title;
        view.search_by_title(api).await;
    } else if let Some(classification) = classification {
        view.search_classification = classification;
        view.search_by_classification(api).await;
    } else if let Some(id) = classification_id {
        view.search_by_classification_id(api, id).await;
    } else if let Some(artist) = artist {
        view.search_by_artist(api, &artist).await;
    } else {
        view.load(api).await;
    }

    if let Some(text) = view.notice.take() {
        anyhow::bail!(text);
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view.rows)?),
        OutputFormat::Plain => print_table(&view),
    }

    Ok(())
}

fn print_table(view: &ArtListView) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["№", "ID", "Название", "Год", "Классификация", "Артисты"]);

    for (index, art) in view.rows.iter().enumerate() {
        let classification = art
            .classification
            .as_ref()
            .map(|c| c.display_name())
            .unwrap_or_else(|| messages::NO_CLASSIFICATION.to_string());
        let artists = if art.artists.is_empty() {
            messages::NO_ARTISTS.to_string()
        } else {
            art.artist_names()
        };
        table.add_row(vec![
            (index + 1).to_string(),
            art.id.map(|id| id.to_string()).unwrap_or_default(),
            art.title.clone(),
            art.year.map(|year| year.to_string()).unwrap_or_default(),
            classification,
            artists,
        ]);
    }

    println!("{table}");
}
