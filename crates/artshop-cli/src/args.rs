use crate::types::OutputFormat;
use artshop_types::EntityId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "artshop")]
#[command(about = "Administer the Art Shop catalog (artists, artworks, classifications)", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base API URL; falls back to ARTSHOP_API_URL, then the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file location (default: ~/.artshop/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Skip confirmation prompts for destructive actions
    #[arg(long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Artist {
        #[command(subcommand)]
        command: ArtistCommand,
    },

    Art {
        #[command(subcommand)]
        command: ArtCommand,
    },

    Classification {
        #[command(subcommand)]
        command: ClassificationCommand,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ArtistCommand {
    /// List artists, optionally filtered by name or artwork title
    List {
        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        art_title: Option<String>,
    },

    Show {
        id: EntityId,
    },

    Add {
        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        middle_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,
    },

    /// Load the artist, apply the given fields, and save the whole record
    Edit {
        id: EntityId,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        middle_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,
    },

    /// Partial update: only the given fields are sent
    Patch {
        id: EntityId,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        middle_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,
    },

    Delete {
        id: EntityId,
    },

    /// Bulk-create artists from a JSON array file
    Import {
        file: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum ArtCommand {
    /// List artworks, optionally filtered by title, classification, or artist
    List {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        classification: Option<String>,

        #[arg(long)]
        classification_id: Option<EntityId>,

        #[arg(long)]
        artist: Option<String>,
    },

    Show {
        id: EntityId,
    },

    Add {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        year: Option<String>,

        #[arg(long)]
        classification: Option<EntityId>,

        /// Artist id; repeat for several artists
        #[arg(long = "artist")]
        artists: Vec<EntityId>,
    },

    /// Load the artwork, apply the given fields, and save the whole record
    Edit {
        id: EntityId,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        year: Option<String>,

        #[arg(long)]
        classification: Option<EntityId>,

        #[arg(long = "artist")]
        artists: Option<Vec<EntityId>>,
    },

    /// Partial update: only the given fields are sent
    Patch {
        id: EntityId,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        year: Option<String>,

        #[arg(long)]
        classification: Option<EntityId>,

        #[arg(long = "artist")]
        artists: Option<Vec<EntityId>>,
    },

    Delete {
        id: EntityId,
    },

    /// Bulk-create artworks from a JSON array file
    Import {
        file: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum ClassificationCommand {
    /// List classifications, optionally filtered by name or artwork title
    List {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        art_title: Option<String>,
    },

    Show {
        id: EntityId,
    },

    Add {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Load the classification, apply the given fields, and save the whole record
    Edit {
        id: EntityId,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Partial update: only the given fields are sent
    Patch {
        id: EntityId,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    Delete {
        id: EntityId,
    },

    /// Bulk-create classifications from a JSON array file
    Import {
        file: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration
    Show,

    /// Persist the base API URL
    SetUrl {
        url: String,
    },
}
