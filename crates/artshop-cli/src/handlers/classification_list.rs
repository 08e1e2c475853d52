use crate::types::OutputFormat;
use anyhow::Result;
use artshop_app::{ClassificationListView, messages};
use artshop_client::ApiClient;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

pub async fn handle(
    api: &ApiClient,
    format: OutputFormat,
    name: Option<String>,
    art_title: Option<String>,
) -> Result<()> {
    let mut view = ClassificationListView::new();

    if let Some(art_title) = art_title {
        view.search_by_art_title(api, &art_title).await;
    } else if let Some(name) = name {
        view.search_name = name;
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

fn print_table(view: &ClassificationListView) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["№", "ID", "Название", "Описание", "Произведения"]);

    for (index, classification) in view.rows.iter().enumerate() {
        let artworks = if classification.artwork_titles.is_empty() {
            messages::NO_ARTWORKS.to_string()
        } else {
            classification.artwork_titles.join(", ")
        };
        table.add_row(vec![
            (index + 1).to_string(),
            classification
                .id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            classification.name.clone(),
            classification.description.clone().unwrap_or_default(),
            artworks,
        ]);
    }

    println!("{table}");
}
