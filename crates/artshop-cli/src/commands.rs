use crate::args::{ArtCommand, ArtistCommand, Cli, ClassificationCommand, Commands};
use crate::config::{Config, resolve_api_url};
use crate::handlers;
use crate::types::OutputFormat;
use anyhow::Result;
use artshop_client::ApiClient;

pub async fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };

    match cli.command {
        Commands::Config { command } => handlers::config::handle(command, &config_path),

        Commands::Artist { command } => {
            let config = Config::load_from(&config_path)?;
            let api = ApiClient::new(resolve_api_url(cli.api_url.as_deref(), &config));
            run_artist(&api, cli.format, cli.yes, command).await
        }

        Commands::Art { command } => {
            let config = Config::load_from(&config_path)?;
            let api = ApiClient::new(resolve_api_url(cli.api_url.as_deref(), &config));
            run_art(&api, cli.format, cli.yes, command).await
        }

        Commands::Classification { command } => {
            let config = Config::load_from(&config_path)?;
            let api = ApiClient::new(resolve_api_url(cli.api_url.as_deref(), &config));
            run_classification(&api, cli.format, cli.yes, command).await
        }
    }
}

async fn run_artist(
    api: &ApiClient,
    format: OutputFormat,
    yes: bool,
    command: ArtistCommand,
) -> Result<()> {
    match command {
        ArtistCommand::List {
            first_name,
            last_name,
            art_title,
        } => handlers::artist_list::handle(api, format, first_name, last_name, art_title).await,
        ArtistCommand::Show { id } => handlers::show::artist(api, format, id).await,
        ArtistCommand::Add {
            first_name,
            middle_name,
            last_name,
        } => handlers::artist_save::add(api, first_name, middle_name, last_name).await,
        ArtistCommand::Edit {
            id,
            first_name,
            middle_name,
            last_name,
        } => handlers::artist_save::edit(api, id, first_name, middle_name, last_name).await,
        ArtistCommand::Patch {
            id,
            first_name,
            middle_name,
            last_name,
        } => handlers::artist_save::patch(api, id, first_name, middle_name, last_name).await,
        ArtistCommand::Delete { id } => handlers::delete::artist(api, id, yes).await,
        ArtistCommand::Import { file } => handlers::import::artists(api, &file).await,
    }
}

async fn run_art(
    api: &ApiClient,
    format: OutputFormat,
    yes: bool,
    command: ArtCommand,
) -> Result<()> {
    match command {
        ArtCommand::List {
            title,
            classification,
            classification_id,
            artist,
        } => {
            handlers::art_list::handle(api, format, title, classification, classification_id, artist)
                .await
        }
        ArtCommand::Show { id } => handlers::show::art(api, format, id).await,
        ArtCommand::Add {
            title,
            year,
            classification,
            artists,
        } => handlers::art_save::add(api, title, year, classification, artists).await,
        ArtCommand::Edit {
            id,
            title,
            year,
            classification,
            artists,
        } => handlers::art_save::edit(api, id, title, year, classification, artists).await,
        ArtCommand::Patch {
            id,
            title,
            year,
            classification,
            artists,
        } => handlers::art_save::patch(api, id, title, year, classification, artists).await,
        ArtCommand::Delete { id } => handlers::delete::art(api, id, yes).await,
        ArtCommand::Import { file } => handlers::import::arts(api, &file).await,
    }
}

async fn run_classification(
    api: &ApiClient,
    format: OutputFormat,
    yes: bool,
    command: ClassificationCommand,
) -> Result<()> {
    match command {
        ClassificationCommand::List { name, art_title } => {
            handlers::classification_list::handle(api, format, name, art_title).await
        }
        ClassificationCommand::Show { id } => handlers::show::classification(api, format, id).await,
        ClassificationCommand::Add { name, description } => {
            handlers::classification_save::add(api, name, description).await
        }
        ClassificationCommand::Edit {
            id,
            name,
            description,
        } => handlers::classification_save::edit(api, id, name, description).await,
        ClassificationCommand::Patch {
            id,
            name,
            description,
        } => handlers::classification_save::patch(api, id, name, description).await,
        ClassificationCommand::Delete { id } => handlers::delete::classification(api, id, yes).await,
        ClassificationCommand::Import { file } => handlers::import::classifications(api, &file).await,
    }
}
