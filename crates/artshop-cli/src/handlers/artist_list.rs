use crate::types::OutputFormat;
use anyhow::Result;
use artshop_app::{ArtistListView, messages};
use artshop_client::ApiClient;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

pub async fn handle(
    api: &ApiClient,
    format: OutputFormat,
    first_name: Option<String>,
    last_name: Option<String>,
    art_title: Option<String>,
) -> Result<()> {
    let mut view = ArtistListView::new();

    if let Some(art_title) = art_title {
        view.search_by_art_title(api, &art_title).await;
    } else if first_name.is_some() || last_name.is_some() {
        view.search_first_name = first_name.unwrap_or_default();
        view.search_last_name = last_name.unwrap_or_default();
        view.search(api).await;
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

fn print_table(view: &ArtistListView) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["№", "ID", "Имя", "Отчество", "Фамилия", "Произведения"]);

    for (index, artist) in view.rows.iter().enumerate() {
        let artworks = if artist.artwork_titles.is_empty() {
            messages::NO_ARTWORKS.to_string()
        } else {
            artist.artwork_titles.join(", ")
        };
        table.add_row(vec![
            (index + 1).to_string(),
            artist.id.map(|id| id.to_string()).unwrap_or_default(),
            artist.first_name.clone().unwrap_or_else(|| "-".to_string()),
            artist.middle_name.clone().unwrap_or_else(|| "-".to_string()),
            artist.last_name.clone().unwrap_or_else(|| "-".to_string()),
            artworks,
        ]);
    }

    println!("{table}");
}
