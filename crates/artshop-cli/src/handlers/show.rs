use crate::types::OutputFormat;
use anyhow::Result;
use artshop_app::messages;
use artshop_client::{Api, ApiClient};
use artshop_types::EntityId;

pub async fn artist(api: &ApiClient, format: OutputFormat, id: EntityId) -> Result<()> {
    let artist = api
        .artist(id)
        .await
        .map_err(|err| anyhow::anyhow!(err.user_message(messages::ARTIST_LOAD_FALLBACK)))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&artist)?),
        OutputFormat::Plain => {
            println!("ID:           {}", artist.id.unwrap_or(id));
            println!("Имя:          {}", artist.first_name.as_deref().unwrap_or("-"));
            println!("Отчество:     {}", artist.middle_name.as_deref().unwrap_or("-"));
            println!("Фамилия:      {}", artist.last_name.as_deref().unwrap_or("-"));
            let artworks = if artist.artwork_titles.is_empty() {
                messages::NO_ARTWORKS.to_string()
            } else {
                artist.artwork_titles.join(", ")
            };
            println!("Произведения: {}", artworks);
        }
    }

    Ok(())
}

pub async fn art(api: &ApiClient, format: OutputFormat, id: EntityId) -> Result<()> {
    let art = api
        .art(id)
        .await
        .map_err(|err| anyhow::anyhow!(err.user_message(messages::ART_LOAD_FALLBACK)))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&art)?),
        OutputFormat::Plain => {
            println!("ID:            {}", art.id.unwrap_or(id));
            println!("Название:      {}", art.title);
            println!(
                "Год:           {}",
                art.year.map(|year| year.to_string()).unwrap_or_else(|| "-".to_string())
            );
            println!(
                "Классификация: {}",
                art.classification
                    .as_ref()
                    .map(|c| c.display_name())
                    .unwrap_or_else(|| messages::NO_CLASSIFICATION.to_string())
            );
            let artists = if art.artists.is_empty() {
                messages::NO_ARTISTS.to_string()
            } else {
                art.artist_names()
            };
            println!("Артисты:       {}", artists);
        }
    }

    Ok(())
}

pub async fn classification(api: &ApiClient, format: OutputFormat, id: EntityId) -> Result<()> {
    let classification = api
        .classification(id)
        .await
        .map_err(|err| anyhow::anyhow!(err.user_message(messages::CLASSIFICATION_LOAD_FALLBACK)))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&classification)?),
        OutputFormat::Plain => {
            println!("ID:           {}", classification.id.unwrap_or(id));
            println!("Название:     {}", classification.name);
            println!(
                "Описание:     {}",
                classification.description.as_deref().unwrap_or("-")
            );
            let artworks = if classification.artwork_titles.is_empty() {
                messages::NO_ARTWORKS.to_string()
            } else {
                classification.artwork_titles.join(", ")
            };
            println!("Произведения: {}", artworks);
        }
    }

    Ok(())
}
